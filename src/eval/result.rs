//! Result value returned by every retrieval metric.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Score of one `compute` call plus optional auxiliary data.
///
/// Immutable once built; the builder-style `with_metadata` consumes `self`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetrievalMetricResult {
    score: f64,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    metadata: BTreeMap<String, Value>,
}

impl RetrievalMetricResult {
    /// Result with a score and empty metadata.
    pub fn new(score: f64) -> Self {
        Self {
            score,
            metadata: BTreeMap::new(),
        }
    }

    /// Attach one metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn metadata(&self) -> &BTreeMap<String, Value> {
        &self.metadata
    }
}

impl fmt::Display for RetrievalMetricResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score: {}", self.score)?;
        if !self.metadata.is_empty() {
            let metadata = serde_json::to_string(&self.metadata).map_err(|_| fmt::Error)?;
            write!(f, " ({})", metadata)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_without_metadata() {
        let result = RetrievalMetricResult::new(0.5);
        assert_eq!(result.to_string(), "Score: 0.5");
        assert!(result.metadata().is_empty());
    }

    #[test]
    fn display_with_metadata() {
        let result = RetrievalMetricResult::new(1.0).with_metadata("hits", 2);
        assert_eq!(result.to_string(), "Score: 1 ({\"hits\":2})");
        assert_eq!(result.metadata().get("hits"), Some(&Value::from(2)));
    }

    #[test]
    fn serializes_without_empty_metadata() {
        let json = serde_json::to_string(&RetrievalMetricResult::new(0.25)).unwrap();
        assert_eq!(json, "{\"score\":0.25}");
    }
}
