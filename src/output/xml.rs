// src/output/xml.rs
//! WEM action document serialization
//!
//! One document per kind: a root `ArrayOfVUEM<Kind>` element with the
//! two fixed schema-instance declarations, one child per action, one
//! sub-element per field in declared order. The downstream importer
//! is position-sensitive, so field order comes straight from the
//! action's `fields()` and is never reordered here.

use std::fs;
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::actions::WemAction;
use crate::error::Result;

const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema";
const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Serialize one kind's actions and write the document to `path`
pub fn write_actions<A: WemAction>(path: &Path, actions: &[A]) -> Result<()> {
    fs::write(path, serialize(actions)?)?;
    Ok(())
}

fn serialize<A: WemAction>(actions: &[A]) -> Result<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let root_name = format!("ArrayOf{}", A::ITEM_ELEMENT);
    let mut root = BytesStart::new(root_name.as_str());
    root.push_attribute(("xmlns:xsd", XSD_NS));
    root.push_attribute(("xmlns:xsi", XSI_NS));
    writer.write_event(Event::Start(root))?;

    for action in actions {
        writer.write_event(Event::Start(BytesStart::new(A::ITEM_ELEMENT)))?;
        for (field, value) in action.fields() {
            if value.is_empty() {
                writer.write_event(Event::Empty(BytesStart::new(field)))?;
            } else {
                writer.write_event(Event::Start(BytesStart::new(field)))?;
                writer.write_event(Event::Text(BytesText::new(&value)))?;
                writer.write_event(Event::End(BytesEnd::new(field)))?;
            }
        }
        writer.write_event(Event::End(BytesEnd::new(A::ITEM_ELEMENT)))?;
    }

    writer.write_event(Event::End(BytesEnd::new(root_name.as_str())))?;
    Ok(writer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{ActionState, NetDrive};

    #[test]
    fn document_shape_and_field_order() {
        let drive = NetDrive::create(
            r"\\srv\share (Data)",
            "",
            "Data",
            ActionState::Enabled,
            r"\\srv\share",
            true,
            false,
            &[],
        )
        .unwrap();
        let bytes = serialize(&[drive]).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(text.contains("<ArrayOfVUEMNetDrive xmlns:xsd=\"http://www.w3.org/2001/XMLSchema\" xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">"));
        assert!(text.contains(r"<Name>\\srv\share (Data)</Name>"));
        assert!(text.contains("<State>1</State>"));
        // empty fields serialize as empty elements
        assert!(text.contains("<Description/>"));
        // declared field order is preserved
        let name_at = text.find("<Name>").unwrap();
        let state_at = text.find("<State>").unwrap();
        let target_at = text.find("<TargetPath>").unwrap();
        assert!(name_at < state_at && state_at < target_at);
        // the advanced-option blob lands escaped inside its field
        assert!(text.contains("&lt;VUEMActionAdvancedOption&gt;"));
        assert!(text.trim_end().ends_with("</ArrayOfVUEMNetDrive>"));
    }
}
