//! Shared metric contract and input validation.

use crate::error::{MetricsError, Result};
use crate::eval::RetrievalMetricResult;
use std::collections::HashSet;

/// A retrieval metric scoring one query's ranked results against its ground truth.
///
/// Implementations hold immutable configuration only, so a single instance can be shared
/// across threads.
pub trait RetrievalMetric: Send + Sync {
    /// Registry name of the metric (e.g. `hit_rate`).
    fn metric_name(&self) -> &'static str;

    /// Score `retrieved_ids` (ranked, best first) against `expected_ids`.
    ///
    /// Fails with [`MetricsError::InvalidInput`] when either side is absent or empty.
    fn compute(
        &self,
        expected_ids: Option<&[String]>,
        retrieved_ids: Option<&[String]>,
    ) -> Result<RetrievalMetricResult>;
}

/// Reject absent or empty id lists. Returns the unwrapped slices on success.
pub fn validate_inputs<'a>(
    expected_ids: Option<&'a [String]>,
    retrieved_ids: Option<&'a [String]>,
) -> Result<(&'a [String], &'a [String])> {
    let expected = expected_ids
        .ok_or_else(|| MetricsError::InvalidInput("expected_ids must be provided".to_string()))?;
    let retrieved = retrieved_ids
        .ok_or_else(|| MetricsError::InvalidInput("retrieved_ids must be provided".to_string()))?;
    if expected.is_empty() || retrieved.is_empty() {
        return Err(MetricsError::InvalidInput(
            "expected_ids and retrieved_ids must both be non-empty".to_string(),
        ));
    }
    Ok((expected, retrieved))
}

/// Ground-truth ids as a set.
pub(crate) fn expected_set(expected: &[String]) -> HashSet<&str> {
    expected.iter().map(String::as_str).collect()
}

/// 1-indexed ranks of relevant retrieved ids. A repeated id only counts at its first rank.
pub(crate) fn relevant_ranks(expected: &HashSet<&str>, retrieved: &[String]) -> Vec<usize> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(retrieved.len());
    let mut ranks = Vec::new();
    for (index, id) in retrieved.iter().enumerate() {
        if expected.contains(id.as_str()) && seen.insert(id.as_str()) {
            ranks.push(index + 1);
        }
    }
    ranks
}
