//! Name-based metric lookup.

use crate::config::MetricsConfig;
use crate::error::{MetricsError, Result};
use crate::eval::metrics::{AveragePrecision, HitRate, Mrr, Ndcg, Precision, Recall};
use crate::eval::RetrievalMetric;

/// Names accepted by [`resolve_metric`].
pub const METRIC_NAMES: &[&str] = &["hit_rate", "mrr", "ndcg", "precision", "recall", "ap"];

/// Build the metric registered under `name`, configured from `config`.
/// Matching is case-insensitive and ignores surrounding whitespace.
pub fn resolve_metric(name: &str, config: &MetricsConfig) -> Result<Box<dyn RetrievalMetric>> {
    let metric: Box<dyn RetrievalMetric> = match name.trim().to_lowercase().as_str() {
        "hit_rate" => Box::new(HitRate::new(config.hit_rate.granular)),
        "mrr" => Box::new(Mrr::new(config.mrr.granular)),
        "ndcg" => Box::new(Ndcg::new(config.ndcg.mode)),
        "precision" => Box::new(Precision),
        "recall" => Box::new(Recall),
        "ap" => Box::new(AveragePrecision),
        _ => return Err(MetricsError::UnknownMetric(name.to_string())),
    };
    log::debug!("Resolved metric {}", metric.metric_name());
    Ok(metric)
}

/// Resolve several names in order. Fails on the first unknown name.
pub fn resolve_metrics<S: AsRef<str>>(
    names: &[S],
    config: &MetricsConfig,
) -> Result<Vec<Box<dyn RetrievalMetric>>> {
    names
        .iter()
        .map(|name| resolve_metric(name.as_ref(), config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::NdcgMode;

    #[test]
    fn resolves_every_registered_name() {
        let config = MetricsConfig::default();
        for name in METRIC_NAMES {
            let metric = resolve_metric(name, &config).unwrap();
            assert_eq!(metric.metric_name(), *name);
        }
    }

    #[test]
    fn resolve_is_case_insensitive() {
        let metric = resolve_metric("  NDCG ", &MetricsConfig::default()).unwrap();
        assert_eq!(metric.metric_name(), "ndcg");
    }

    #[test]
    fn resolve_unknown_name_fails() {
        let err = resolve_metric("bleu", &MetricsConfig::default()).err().unwrap();
        assert_eq!(err, MetricsError::UnknownMetric("bleu".to_string()));
    }

    #[test]
    fn resolve_metrics_preserves_order() {
        let metrics = resolve_metrics(&["ndcg", "hit_rate"], &MetricsConfig::default()).unwrap();
        let names: Vec<&str> = metrics.iter().map(|m| m.metric_name()).collect();
        assert_eq!(names, vec!["ndcg", "hit_rate"]);
    }

    #[test]
    fn resolve_metrics_stops_on_unknown() {
        let result = resolve_metrics(&["mrr", "nope", "ndcg"], &MetricsConfig::default());
        assert!(matches!(result, Err(MetricsError::UnknownMetric(name)) if name == "nope"));
    }

    #[test]
    fn resolved_metrics_use_config() {
        let mut config = MetricsConfig::default();
        config.hit_rate.granular = true;
        config.ndcg.mode = NdcgMode::Exponential;
        let expected = vec!["a".to_string()];
        let retrieved = vec!["a".to_string(), "b".to_string()];

        let hit_rate = resolve_metric("hit_rate", &config).unwrap();
        let result = hit_rate
            .compute(Some(expected.as_slice()), Some(retrieved.as_slice()))
            .unwrap();
        assert!((result.score() - 0.5).abs() < 1e-9);

        let ndcg = resolve_metric("ndcg", &config).unwrap();
        let result = ndcg
            .compute(Some(expected.as_slice()), Some(retrieved.as_slice()))
            .unwrap();
        assert_eq!(result.metadata()["mode"], "exponential");
    }
}
