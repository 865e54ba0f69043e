//! Evaluation core: retrieval metrics (Hit Rate, MRR, NDCG, Precision, Recall, AP),
//! their shared result type, a name registry, and the eval case type.

pub mod base;
pub mod case;
pub mod metrics;
pub mod registry;
pub mod result;

pub use base::{validate_inputs, RetrievalMetric};
pub use case::{report_cases, EvalCase};
pub use metrics::{AveragePrecision, HitRate, Mrr, Ndcg, NdcgMode, Precision, Recall};
pub use registry::{resolve_metric, resolve_metrics, METRIC_NAMES};
pub use result::RetrievalMetricResult;
