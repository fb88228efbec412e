// src/gpo/extract/datasources.rs
//! ODBC data source preference extraction (DataSources.xml)
//!
//! Only SQL Server DSNs convert; the target product has no concept of
//! other ODBC drivers. User and System DSN preferences are processed
//! identically and both become user DSN actions.

use tracing::debug;

use crate::actions::{healing_mode, UserDsn, WemAction};
use crate::convert::ConvertOptions;
use crate::gpo::document::{
    attr, child, filters_node, has_run_once_filter, item_disabled, parse, preference_action,
    raw_xml,
};

use super::{item_state, record_filters, resolve_description, FilterRecord};

const SQL_SERVER_DRIVER: &str = "SQL Server";

/// Convert every non-delete SQL Server DSN in the document
pub fn extract(
    doc_text: &str,
    opts: &ConvertOptions,
    dsns: &mut Vec<UserDsn>,
    records: &mut Vec<FilterRecord>,
) {
    let Some(doc) = parse(doc_text) else {
        return;
    };
    for item in doc
        .root_element()
        .children()
        .filter(|c| c.is_element() && c.tag_name().name() == "DataSource")
    {
        let Some(props) = child(item, "Properties") else {
            continue;
        };
        if preference_action(props) == "D" {
            debug!("skipping delete-flagged data source");
            continue;
        }
        if attr(props, "driver") != SQL_SERVER_DRIVER {
            debug!("skipping non-SQL Server data source");
            continue;
        }
        let dsn_name = attr(props, "dsn");
        if dsn_name.is_empty() {
            continue;
        }
        let (server, database) = connection_attributes(props);
        let name = format!("{}{dsn_name}", opts.prefix);
        let description = resolve_description(attr(props, "description"), dsn_name, opts);

        let filters = filters_node(item);
        let (self_healing, run_once) =
            healing_mode(has_run_once_filter(filters), opts.self_healing);

        if let Some(dsn) = UserDsn::create(
            &name,
            &description,
            item_state(item_disabled(item), opts),
            dsn_name,
            SQL_SERVER_DRIVER,
            &server,
            &database,
            self_healing,
            run_once,
            dsns,
        ) {
            if let Some(filters) = filters {
                record_filters(
                    records,
                    opts,
                    dsn.name(),
                    UserDsn::KIND,
                    &[raw_xml(doc_text, filters).to_string()],
                );
            }
            dsns.push(dsn);
        }
    }
}

/// SERVER and DATABASE connection attributes of a DSN properties node
fn connection_attributes(props: roxmltree::Node<'_, '_>) -> (String, String) {
    let mut server = String::new();
    let mut database = String::new();
    if let Some(attributes) = child(props, "Attributes") {
        for attribute in attributes
            .children()
            .filter(|c| c.is_element() && c.tag_name().name() == "Attribute")
        {
            match attr(attribute, "name") {
                "SERVER" => server = attr(attribute, "value").to_string(),
                "DATABASE" => database = attr(attribute, "value").to_string(),
                _ => {}
            }
        }
    }
    (server, database)
}
