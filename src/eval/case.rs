//! Eval case type: one query's already-materialized ground truth and ranking.

use crate::error::Result;
use crate::eval::{RetrievalMetric, RetrievalMetricResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Single evaluation case as read from a cases JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalCase {
    /// Optional query text, for reporting only.
    #[serde(default)]
    pub query: Option<String>,
    /// Ground-truth relevant ids. `null` or missing is rejected at scoring time.
    #[serde(default)]
    pub expected_ids: Option<Vec<String>>,
    /// Retrieved ids, best first. `null` or missing is rejected at scoring time.
    #[serde(default)]
    pub retrieved_ids: Option<Vec<String>>,
}

impl EvalCase {
    pub fn new(expected_ids: Vec<String>, retrieved_ids: Vec<String>) -> Self {
        Self {
            query: None,
            expected_ids: Some(expected_ids),
            retrieved_ids: Some(retrieved_ids),
        }
    }

    /// Score this case with one metric.
    pub fn score(&self, metric: &dyn RetrievalMetric) -> Result<RetrievalMetricResult> {
        metric.compute(self.expected_ids.as_deref(), self.retrieved_ids.as_deref())
    }

    /// Render one report line for this case.
    ///
    /// Valid cases yield `{case, query, results: {metric_name: result}}`. The first metric
    /// error yields `{case, query, error}` instead, and the flag is `false`.
    pub fn report(&self, index: usize, metrics: &[Box<dyn RetrievalMetric>]) -> (Value, bool) {
        let mut results = Map::new();
        for metric in metrics {
            match self.score(metric.as_ref()) {
                Ok(result) => {
                    results.insert(metric.metric_name().to_string(), json!(result));
                }
                Err(e) => {
                    let line = json!({
                        "case": index,
                        "query": self.query,
                        "error": e.to_string(),
                    });
                    return (line, false);
                }
            }
        }
        let line = json!({
            "case": index,
            "query": self.query,
            "results": Value::Object(results),
        });
        (line, true)
    }
}

/// Report every case in order. An invalid case does not stop the ones after it.
pub fn report_cases<'a>(
    cases: &'a [EvalCase],
    metrics: &'a [Box<dyn RetrievalMetric>],
) -> impl Iterator<Item = (Value, bool)> + 'a {
    cases
        .iter()
        .enumerate()
        .map(move |(index, case)| case.report(index, metrics))
}
