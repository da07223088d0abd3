//! Domain types shared by the collector and notifier.

mod school;
mod summary;

pub use school::{
    AcademicRecords, ContactInfo, EntranceExamInfo, OpenCampus, PrefectureArtifact, SchoolRecord,
};
pub use summary::CollectionSummary;

use serde::{Deserialize, Serialize};

/// Provenance of a collected prefecture artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSourceTag {
    /// Deterministic sample data synthesized locally (no API credential).
    #[serde(rename = "placeholder")]
    Placeholder,
    /// Live data returned by the DeepResearch API.
    #[serde(rename = "deepresearch_api")]
    DeepresearchApi,
}

/// Slack attachment color for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Good,
    Warning,
    Danger,
}

impl Severity {
    /// The color string Slack expects in an attachment.
    pub fn color(self) -> &'static str {
        match self {
            Severity::Good => "good",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_colors() {
        assert_eq!(Severity::Good.color(), "good");
        assert_eq!(Severity::Warning.color(), "warning");
        assert_eq!(Severity::Danger.color(), "danger");
    }

    #[test]
    fn test_data_source_tag_serializes_to_wire_names() {
        let json = serde_json::to_string(&DataSourceTag::Placeholder).unwrap();
        assert_eq!(json, "\"placeholder\"");
        let json = serde_json::to_string(&DataSourceTag::DeepresearchApi).unwrap();
        assert_eq!(json, "\"deepresearch_api\"");
    }
}
