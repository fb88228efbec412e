// src/commands/mod.rs
//! Command handlers for the gpo2wem CLI

mod convert;

pub use convert::cmd_convert_gpo;
