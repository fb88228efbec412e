// src/gpo/extract/report.rs
//! Policy report extraction (gpreport.xml)
//!
//! The consolidated report carries three convertible sources that
//! never appear as preference documents: centrally deployed printer
//! connections, the "run these programs at user logon" policy, and
//! logon scripts. The report's section labels are localized, so each
//! source is located by its English label text; a report written by a
//! non-English GPMC simply yields nothing here.

use std::path::{Path, PathBuf};

use roxmltree::{Document, Node};
use tracing::debug;

use crate::actions::{ActionState, ExternalTask, Printer};
use crate::convert::ConvertOptions;
use crate::gpo::document::{parse, text_of};

use super::{item_state, resolve_description};

const SCRIPTS_LABEL: &str = "Scripts";
const ADMIN_TEMPLATES_LABEL: &str = "Administrative Templates";
const DEPLOYED_PRINTERS_LABEL: &str = "Deployed Printer Connections";
const RUN_AT_LOGON_POLICY: &str = "Run these programs at user logon";

/// Marker prepended to embedded logon scripts whose files the
/// operator must still relocate to a reachable share.
pub const NEEDS_FILE_LOCATION: &str = "[NEEDS FILE LOCATION] ";

/// Convert centrally deployed printer connections from the report
pub fn extract_deployed_printers(
    report_text: &str,
    opts: &ConvertOptions,
    printers: &mut Vec<Printer>,
) {
    let Some(doc) = parse(report_text) else {
        return;
    };
    for extension in labeled_extensions(&doc, DEPLOYED_PRINTERS_LABEL) {
        for connection in descendants_named(extension, "PrinterConnection") {
            let Some(path_node) = descendants_named(connection, "Path").next() else {
                continue;
            };
            let path = text_of(path_node);
            if path.is_empty() {
                continue;
            }
            let name = format!("{}{path}", opts.prefix);
            let description = resolve_description("", path, opts);
            // no run-once source exists for deployed printers
            if let Some(printer) = Printer::create(
                &name,
                &description,
                item_state(false, opts),
                path,
                true,
                false,
                printers,
            ) {
                printers.push(printer);
            }
        }
    }
}

/// Convert the run-at-logon program policy from the report
///
/// Both the user-scope and computer-scope policy lists convert; each
/// command line is split into executable and arguments on the first
/// whitespace boundary.
pub fn extract_run_at_logon(
    report_text: &str,
    opts: &ConvertOptions,
    tasks: &mut Vec<ExternalTask>,
) {
    let Some(doc) = parse(report_text) else {
        return;
    };
    for extension in labeled_extensions(&doc, ADMIN_TEMPLATES_LABEL) {
        for policy in descendants_named(extension, "Policy") {
            let name_matches = descendants_named(policy, "Name")
                .next()
                .map(|n| text_of(n) == RUN_AT_LOGON_POLICY)
                .unwrap_or(false);
            if !name_matches {
                continue;
            }
            let enabled = descendants_named(policy, "State")
                .next()
                .map(|n| text_of(n) == "Enabled")
                .unwrap_or(false);
            if !enabled {
                debug!("skipping disabled run-at-logon policy");
                continue;
            }
            for data in descendants_named(policy, "Data") {
                let line = text_of(data);
                if line.is_empty() {
                    continue;
                }
                let (command, args) = split_command(line);
                let name = format!("{}{command}", opts.prefix);
                let description = resolve_description("", line, opts);
                if let Some(task) = ExternalTask::create(
                    &name,
                    &description,
                    item_state(false, opts),
                    &command,
                    &args,
                    false,
                    false,
                    tasks,
                ) {
                    tasks.push(task);
                }
            }
        }
    }
}

/// Convert user logon scripts from the report
///
/// A script command without any directory component is embedded in
/// the backup itself: its action is force-disabled, its name carries
/// the relocation marker, and the backup's logon script folder is
/// scheduled for copy into the output.
pub fn extract_logon_scripts(
    report_text: &str,
    backup_script_dir: &Path,
    opts: &ConvertOptions,
    tasks: &mut Vec<ExternalTask>,
    script_sources: &mut Vec<PathBuf>,
) {
    let Some(doc) = parse(report_text) else {
        return;
    };
    for extension in labeled_extensions(&doc, SCRIPTS_LABEL) {
        for script in descendants_named(extension, "Script") {
            let logon = descendants_named(script, "Type")
                .next()
                .map(|n| text_of(n).eq_ignore_ascii_case("Logon"))
                .unwrap_or(false);
            if !logon {
                continue;
            }
            let Some(command_node) = descendants_named(script, "Command").next() else {
                continue;
            };
            let command = text_of(command_node);
            if command.is_empty() {
                continue;
            }
            let args = descendants_named(script, "Parameters")
                .next()
                .map(text_of)
                .unwrap_or("");

            let embedded = !command.contains('\\') && !command.contains('/');
            let name = if embedded {
                format!("{}{NEEDS_FILE_LOCATION}{command}", opts.prefix)
            } else {
                format!("{}{command}", opts.prefix)
            };
            let state = if embedded {
                ActionState::Disabled
            } else {
                item_state(false, opts)
            };
            let description = resolve_description("", command, opts);
            if let Some(task) = ExternalTask::create(
                &name,
                &description,
                state,
                command,
                args,
                false,
                embedded,
                tasks,
            ) {
                if embedded && !script_sources.contains(&backup_script_dir.to_path_buf()) {
                    script_sources.push(backup_script_dir.to_path_buf());
                }
                tasks.push(task);
            }
        }
    }
}

/// Extension sections whose sibling `Name` label matches `label`
///
/// The label comparison is the locale gate: section names in the
/// report are written in the language of the exporting console.
fn labeled_extensions<'a, 'i>(
    doc: &'a Document<'i>,
    label: &'a str,
) -> impl Iterator<Item = Node<'a, 'i>> + 'a {
    doc.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "ExtensionData")
        .filter(move |data| {
            data.children()
                .any(|c| c.is_element() && c.tag_name().name() == "Name" && text_of(c) == label)
        })
        .filter_map(|data| {
            data.children()
                .find(|c| c.is_element() && c.tag_name().name() == "Extension")
        })
}

fn descendants_named<'a, 'i>(
    node: Node<'a, 'i>,
    local_name: &'a str,
) -> impl Iterator<Item = Node<'a, 'i>> + 'a {
    node.descendants()
        .filter(move |d| d.is_element() && d.tag_name().name() == local_name)
}

/// Split a command line into executable and arguments
///
/// A leading double-quoted token is honored; otherwise the first
/// whitespace-delimited token is the command.
pub fn split_command(line: &str) -> (String, String) {
    let line = line.trim();
    if let Some(rest) = line.strip_prefix('"') {
        if let Some(end) = rest.find('"') {
            return (
                rest[..end].to_string(),
                rest[end + 1..].trim_start().to_string(),
            );
        }
    }
    match line.split_once(char::is_whitespace) {
        Some((command, args)) => (command.to_string(), args.trim_start().to_string()),
        None => (line.to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(user_sections: &str) -> String {
        format!(
            r#"<GPO xmlns="http://www.microsoft.com/GroupPolicy/Settings">
  <User>{user_sections}</User>
</GPO>"#
        )
    }

    const SCRIPTS_SECTION: &str = r#"
    <ExtensionData>
      <Extension>
        <Script><Command>logon.cmd</Command><Parameters>/q</Parameters><Type>Logon</Type></Script>
        <Script><Command>\\srv\netlogon\init.cmd</Command><Type>Logon</Type></Script>
        <Script><Command>bye.cmd</Command><Type>Logoff</Type></Script>
      </Extension>
      <Name>Scripts</Name>
    </ExtensionData>"#;

    #[test]
    fn embedded_scripts_are_marked_and_disabled() {
        let opts = ConvertOptions::default();
        let mut tasks = Vec::new();
        let mut sources = Vec::new();
        let text = report(SCRIPTS_SECTION);
        extract_logon_scripts(
            &text,
            Path::new("/backup/Scripts/Logon"),
            &opts,
            &mut tasks,
            &mut sources,
        );
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].name, "[NEEDS FILE LOCATION] logon.cmd");
        assert_eq!(tasks[0].state, ActionState::Disabled);
        assert_eq!(tasks[0].target_args, "/q");
        assert!(tasks[0].needs_file_location);
        assert_eq!(sources, vec![PathBuf::from("/backup/Scripts/Logon")]);
        // a UNC-pathed script needs no relocation
        assert_eq!(tasks[1].name, r"\\srv\netlogon\init.cmd");
        assert_eq!(tasks[1].state, ActionState::Enabled);
    }

    #[test]
    fn logoff_scripts_are_ignored() {
        let opts = ConvertOptions::default();
        let mut tasks = Vec::new();
        let mut sources = Vec::new();
        let text = report(SCRIPTS_SECTION);
        extract_logon_scripts(&text, Path::new("/b"), &opts, &mut tasks, &mut sources);
        assert!(tasks.iter().all(|t| t.target_path != "bye.cmd"));
    }

    #[test]
    fn non_english_section_labels_yield_nothing() {
        let opts = ConvertOptions::default();
        let mut tasks = Vec::new();
        let mut sources = Vec::new();
        let text = report(
            r#"
    <ExtensionData>
      <Extension>
        <Script><Command>logon.cmd</Command><Type>Logon</Type></Script>
      </Extension>
      <Name>Skripte</Name>
    </ExtensionData>"#,
        );
        extract_logon_scripts(&text, Path::new("/b"), &opts, &mut tasks, &mut sources);
        assert!(tasks.is_empty());
        assert!(sources.is_empty());
    }

    #[test]
    fn run_at_logon_policy_converts_when_enabled() {
        let opts = ConvertOptions::default();
        let mut tasks = Vec::new();
        let text = report(
            r#"
    <ExtensionData>
      <Extension>
        <Policy>
          <Name>Run these programs at user logon</Name>
          <State>Enabled</State>
          <ListBox><Value><Element><Data>C:\Tools\agent.exe --background</Data></Element></Value></ListBox>
        </Policy>
      </Extension>
      <Name>Administrative Templates</Name>
    </ExtensionData>"#,
        );
        extract_run_at_logon(&text, &opts, &mut tasks);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].target_path, r"C:\Tools\agent.exe");
        assert_eq!(tasks[0].target_args, "--background");
    }

    #[test]
    fn deployed_printers_convert_from_the_report() {
        let opts = ConvertOptions::default();
        let mut printers = Vec::new();
        let text = report(
            r#"
    <ExtensionData>
      <Extension>
        <PrinterConnection><Path>\\printsrv\hp-floor3</Path></PrinterConnection>
      </Extension>
      <Name>Deployed Printer Connections</Name>
    </ExtensionData>"#,
        );
        extract_deployed_printers(&text, &opts, &mut printers);
        assert_eq!(printers.len(), 1);
        assert_eq!(printers[0].target_path, r"\\printsrv\hp-floor3");
    }

    #[test]
    fn split_command_handles_quotes_and_bare_tokens() {
        assert_eq!(
            split_command(r#""C:\Program Files\App\run.exe" /x"#),
            (r"C:\Program Files\App\run.exe".to_string(), "/x".to_string())
        );
        assert_eq!(
            split_command(r"C:\Tools\agent.exe --background"),
            (r"C:\Tools\agent.exe".to_string(), "--background".to_string())
        );
        assert_eq!(split_command("logon.cmd"), ("logon.cmd".to_string(), String::new()));
    }
}
