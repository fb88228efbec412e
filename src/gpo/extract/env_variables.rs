// src/gpo/extract/env_variables.rs
//! Environment variable preference extraction (EnvironmentVariables.xml)

use tracing::debug;

use crate::actions::{EnvVariable, VariableType, WemAction};
use crate::convert::ConvertOptions;
use crate::gpo::document::{
    attr, child, filters_node, item_disabled, parse, preference_action, raw_xml,
};

use super::{item_state, record_filters, resolve_description, FilterRecord};

/// Convert every non-delete environment variable in the document
pub fn extract(
    doc_text: &str,
    opts: &ConvertOptions,
    variables: &mut Vec<EnvVariable>,
    records: &mut Vec<FilterRecord>,
) {
    let Some(doc) = parse(doc_text) else {
        return;
    };
    for item in doc
        .root_element()
        .children()
        .filter(|c| c.is_element() && c.tag_name().name() == "EnvironmentVariable")
    {
        let Some(props) = child(item, "Properties") else {
            continue;
        };
        if preference_action(props) == "D" {
            debug!("skipping delete-flagged environment variable");
            continue;
        }
        let variable_name = attr(props, "name");
        if variable_name.is_empty() {
            continue;
        }
        let variable_type = if attr(props, "user") == "1" {
            VariableType::User
        } else {
            VariableType::System
        };
        let name = format!("{}{variable_name}", opts.prefix);
        let description = resolve_description("", variable_name, opts);

        if let Some(variable) = EnvVariable::create(
            &name,
            &description,
            item_state(item_disabled(item), opts),
            variable_name,
            attr(props, "value"),
            variable_type,
            variables,
        ) {
            if let Some(filters) = filters_node(item) {
                record_filters(
                    records,
                    opts,
                    variable.name(),
                    EnvVariable::KIND,
                    &[raw_xml(doc_text, filters).to_string()],
                );
            }
            variables.push(variable);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<EnvironmentVariables>
  <EnvironmentVariable name="APP_HOME">
    <Properties action="U" name="APP_HOME" value="C:\Apps" user="1"/>
  </EnvironmentVariable>
  <EnvironmentVariable name="SYS_WIDE">
    <Properties action="C" name="SYS_WIDE" value="on" user="0"/>
  </EnvironmentVariable>
  <EnvironmentVariable name="GONE">
    <Properties action="D" name="GONE" value="" user="1"/>
  </EnvironmentVariable>
</EnvironmentVariables>"#;

    #[test]
    fn scopes_map_to_variable_types() {
        let opts = ConvertOptions::default();
        let mut variables = Vec::new();
        let mut records = Vec::new();
        extract(DOC, &opts, &mut variables, &mut records);
        assert_eq!(variables.len(), 2);
        assert_eq!(variables[0].variable_type, VariableType::User);
        assert_eq!(variables[1].variable_type, VariableType::System);
    }

    #[test]
    fn delete_flagged_variable_is_skipped() {
        let opts = ConvertOptions::default();
        let mut variables = Vec::new();
        let mut records = Vec::new();
        extract(DOC, &opts, &mut variables, &mut records);
        assert!(variables.iter().all(|v| v.variable_name != "GONE"));
    }
}
