// src/output/mod.rs
//! Output document writers

mod filters;
mod xml;

pub use filters::write_filters;
pub use xml::write_actions;
