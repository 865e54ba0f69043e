pub mod config;
pub mod error;
pub mod eval;

pub use config::MetricsConfig;
pub use error::{MetricsError, Result};
pub use eval::{
    resolve_metric, resolve_metrics, AveragePrecision, EvalCase, HitRate, Mrr, Ndcg, NdcgMode,
    Precision, Recall, RetrievalMetric, RetrievalMetricResult,
};
