//! JSON output formatter for machine processing

use crate::domain::{DependencyGroup, DependencyRecord};
use crate::output::OutputFormatter;
use crate::report::Report;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Omit local versions
    hide_local: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(hide_local: bool) -> Self {
        Self { hide_local }
    }
}

/// JSON representation of the full report
#[derive(Serialize)]
struct JsonOutput<'a> {
    regular: Vec<JsonRecord<'a>>,
    dev: Vec<JsonRecord<'a>>,
    peer: Vec<JsonRecord<'a>>,
}

/// JSON representation of a dependency record
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonRecord<'a> {
    module_name: &'a str,
    requested_version: &'a str,
    requested_prefix: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    local_version: Option<&'a str>,
    remote_version: &'a str,
}

impl JsonFormatter {
    /// Convert a group's records; disabled and missing groups are empty
    fn group_to_json<'a>(&self, report: &'a Report, group: DependencyGroup) -> Vec<JsonRecord<'a>> {
        report
            .group(group)
            .map(|g| g.records())
            .unwrap_or_default()
            .iter()
            .map(|record| self.record_to_json(record))
            .collect()
    }

    fn record_to_json<'a>(&self, record: &'a DependencyRecord) -> JsonRecord<'a> {
        JsonRecord {
            module_name: &record.module_name,
            requested_version: &record.requested_version,
            requested_prefix: &record.requested_prefix,
            local_version: if self.hide_local {
                None
            } else {
                Some(record.local_version.as_str())
            },
            remote_version: &record.remote_version,
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            regular: self.group_to_json(report, DependencyGroup::Regular),
            dev: self.group_to_json(report, DependencyGroup::Dev),
            peer: self.group_to_json(report, DependencyGroup::Peer),
        };

        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::GroupStatus;
    use serde_json::{json, Value};

    fn sample_record() -> DependencyRecord {
        let mut record = DependencyRecord::new("lodash", "^4.17.20");
        record.local_version = "4.17.20".to_string();
        record.remote_version = "4.17.21".to_string();
        record
    }

    fn create_test_report() -> Report {
        let mut report = Report::new();
        report.push(
            DependencyGroup::Regular,
            GroupStatus::Records(vec![sample_record()]),
        );
        report.push(DependencyGroup::Dev, GroupStatus::Missing);
        report.push(DependencyGroup::Peer, GroupStatus::Disabled);
        report
    }

    fn format(formatter: &JsonFormatter, report: &Report) -> Value {
        let mut output = Vec::new();
        formatter.format(report, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn test_json_schema() {
        let value = format(&JsonFormatter::new(false), &create_test_report());
        assert_eq!(
            value,
            json!({
                "regular": [{
                    "moduleName": "lodash",
                    "requestedVersion": "^4.17.20",
                    "requestedPrefix": "^",
                    "localVersion": "4.17.20",
                    "remoteVersion": "4.17.21"
                }],
                "dev": [],
                "peer": []
            })
        );
    }

    #[test]
    fn test_json_hide_local() {
        let value = format(&JsonFormatter::new(true), &create_test_report());
        let record = &value["regular"][0];
        assert!(record.get("localVersion").is_none());
        assert_eq!(record["remoteVersion"], "4.17.21");
    }

    #[test]
    fn test_json_two_space_indent() {
        let mut output = Vec::new();
        JsonFormatter::new(false)
            .format(&create_test_report(), &mut output)
            .unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("{\n  \"regular\": [\n    {\n      \"moduleName\""));
        assert!(text.ends_with("}\n"));
    }
}
