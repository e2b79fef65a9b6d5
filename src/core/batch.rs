use crate::core::adder::RomanAdder;
use crate::core::Addition;
use crate::utils::error::{Result, RomanError};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// One `[augend, addend]` entry of a batch file, kept as raw JSON so that
/// non-string operands surface as invalid input rather than a parse failure.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    pub augend: Value,
    pub addend: Value,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BatchOutcome {
    Ok(Addition),
    Error { index: usize, message: String },
}

impl BatchOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, BatchOutcome::Ok(_))
    }
}

pub fn parse_batch(content: &str) -> Result<Vec<BatchEntry>> {
    let root: Value = serde_json::from_str(content)?;
    let items = root.as_array().ok_or_else(|| RomanError::ConfigValidationError {
        field: "batch".to_string(),
        message: "expected a JSON array of [augend, addend] pairs".to_string(),
    })?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item.as_array().map(Vec::as_slice) {
            Some([augend, addend]) => Ok(BatchEntry {
                augend: augend.clone(),
                addend: addend.clone(),
            }),
            _ => Err(RomanError::ConfigValidationError {
                field: format!("batch[{}]", index),
                message: format!("expected a two-element array, found {}", item),
            }),
        })
        .collect()
}

pub fn load_batch<P: AsRef<Path>>(path: P) -> Result<Vec<BatchEntry>> {
    let content = std::fs::read_to_string(&path)?;
    parse_batch(&content)
}

/// Add every entry; failures are reported per entry and never stop the batch.
pub fn run_batch(adder: &RomanAdder, entries: &[BatchEntry]) -> Vec<BatchOutcome> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            match adder.add_values(&entry.augend, &entry.addend) {
                Ok(sum) => BatchOutcome::Ok(Addition {
                    augend: entry.augend.as_str().unwrap_or_default().to_string(),
                    addend: entry.addend.as_str().unwrap_or_default().to_string(),
                    sum,
                }),
                Err(e) => {
                    tracing::warn!(index, error = %e, "batch entry rejected");
                    BatchOutcome::Error {
                        index,
                        message: e.to_string(),
                    }
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_batch_keeps_raw_values() {
        let entries = parse_batch(r#"[["I", "I"], [2, "I"]]"#).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].augend, Value::from(2));
    }

    #[test]
    fn test_parse_batch_rejects_malformed_shapes() {
        assert!(parse_batch(r#"{"a": "I"}"#).is_err());
        assert!(parse_batch(r#"[["I"]]"#).is_err());
        assert!(parse_batch(r#"[["I", "I", "I"]]"#).is_err());
        assert!(matches!(
            parse_batch("not json").unwrap_err(),
            RomanError::SerializationError(_)
        ));
    }

    #[test]
    fn test_run_batch_reports_each_entry() {
        let entries = parse_batch(r#"[["IX", "V"], [null, "I"], ["I", "Z"], ["X", "X"]]"#).unwrap();
        let outcomes = run_batch(&RomanAdder::default(), &entries);

        let statuses: Vec<bool> = outcomes.iter().map(BatchOutcome::is_ok).collect();
        assert_eq!(statuses, vec![true, false, false, true]);

        match &outcomes[0] {
            BatchOutcome::Ok(addition) => assert_eq!(addition.sum, "XIV"),
            other => panic!("unexpected outcome: {:?}", other),
        }
        match &outcomes[1] {
            BatchOutcome::Error { index, .. } => assert_eq!(*index, 1),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let outcomes = run_batch(
            &RomanAdder::default(),
            &parse_batch(r#"[["V", "V"], [1, 2]]"#).unwrap(),
        );
        let json = serde_json::to_value(&outcomes).unwrap();
        assert_eq!(json[0]["status"], "ok");
        assert_eq!(json[0]["sum"], "X");
        assert_eq!(json[1]["status"], "error");
        assert_eq!(json[1]["index"], 1);
    }
}
