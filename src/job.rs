use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// CI stage a job belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CiStage {
    Build,
    Test,
    Report,
}

/// One persisted unit of work.
///
/// `inputs`, `outputs` and `command` are required for compilation but kept
/// optional at the serde level: a registry document that lost one of them
/// still loads, and the compiler rejects the record with an error that shows
/// the full offending entry instead of failing during parsing.
///
/// Everything past `command` is metadata for the downstream executor; the
/// compiler carries it without interpreting it. Absent fields are omitted
/// from the persisted document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ci_stage: Option<CiStage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub timeout_ok: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ok_returns: Option<Vec<i32>>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_record_serializes_to_three_fields() {
        let record = JobRecord {
            inputs: Some(vec!["a.c".into()]),
            outputs: Some(vec!["a.o".into()]),
            command: Some("gcc -c a.c -o a.o".into()),
            description: None,
            pipeline: None,
            ci_stage: None,
            timeout: None,
            timeout_ok: false,
            ok_returns: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "inputs": ["a.c"],
                "outputs": ["a.o"],
                "command": "gcc -c a.c -o a.o",
            })
        );
    }

    #[test]
    fn record_with_missing_command_still_loads() {
        let record: JobRecord =
            serde_json::from_str(r#"{"inputs": ["a.c"], "outputs": ["a.o"]}"#).unwrap();
        assert_eq!(record.inputs.as_deref(), Some(&["a.c".to_string()][..]));
        assert!(record.command.is_none());
    }

    #[test]
    fn ci_stage_round_trips_as_lowercase() {
        let json = serde_json::to_string(&CiStage::Report).unwrap();
        assert_eq!(json, "\"report\"");
        let stage: CiStage = serde_json::from_str("\"build\"").unwrap();
        assert_eq!(stage, CiStage::Build);
    }
}
