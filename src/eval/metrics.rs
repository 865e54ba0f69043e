//! Retrieval metrics: Hit Rate, MRR, NDCG, plus Precision, Recall and Average Precision.
//!
//! Every metric validates its inputs with [`validate_inputs`] before scoring. Relevance is
//! binary: a retrieved id is relevant when it appears in `expected_ids`. Ranks are 1-indexed
//! and a repeated retrieved id only counts at its first rank.

use crate::error::Result;
use crate::eval::base::{expected_set, relevant_ranks, validate_inputs, RetrievalMetric};
use crate::eval::RetrievalMetricResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Hit Rate.
///
/// Binary mode scores 1.0 if any retrieved id is relevant. Granular mode scores the fraction
/// of retrieved ids that are relevant: `|hits| / |retrieved_ids|`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitRate {
    use_granular_hit_rate: bool,
}

impl HitRate {
    pub fn new(use_granular_hit_rate: bool) -> Self {
        Self {
            use_granular_hit_rate,
        }
    }
}

impl RetrievalMetric for HitRate {
    fn metric_name(&self) -> &'static str {
        "hit_rate"
    }

    fn compute(
        &self,
        expected_ids: Option<&[String]>,
        retrieved_ids: Option<&[String]>,
    ) -> Result<RetrievalMetricResult> {
        let (expected, retrieved) = validate_inputs(expected_ids, retrieved_ids)?;
        let hits = relevant_ranks(&expected_set(expected), retrieved).len();

        let score = if self.use_granular_hit_rate {
            hits as f64 / retrieved.len() as f64
        } else if hits > 0 {
            1.0
        } else {
            0.0
        };
        log::trace!("hit_rate: {} hits in {} retrieved, score {}", hits, retrieved.len(), score);
        Ok(RetrievalMetricResult::new(score).with_metadata("hits", hits))
    }
}

/// Mean Reciprocal Rank for a single query.
///
/// Binary mode scores `1 / rank` of the first relevant id. Granular mode sums `1 / rank` over
/// every relevant id and divides by the number of distinct expected ids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mrr {
    use_granular_mrr: bool,
}

impl Mrr {
    pub fn new(use_granular_mrr: bool) -> Self {
        Self { use_granular_mrr }
    }
}

impl RetrievalMetric for Mrr {
    fn metric_name(&self) -> &'static str {
        "mrr"
    }

    fn compute(
        &self,
        expected_ids: Option<&[String]>,
        retrieved_ids: Option<&[String]>,
    ) -> Result<RetrievalMetricResult> {
        let (expected, retrieved) = validate_inputs(expected_ids, retrieved_ids)?;
        let expected = expected_set(expected);
        let ranks = relevant_ranks(&expected, retrieved);
        let first_hit_rank = ranks.first().copied();

        let score = if self.use_granular_mrr {
            let reciprocal_sum: f64 = ranks.iter().map(|&rank| 1.0 / rank as f64).sum();
            reciprocal_sum / expected.len() as f64
        } else {
            first_hit_rank.map_or(0.0, |rank| 1.0 / rank as f64)
        };
        log::trace!("mrr: first hit {:?}, score {}", first_hit_rank, score);
        Ok(RetrievalMetricResult::new(score)
            .with_metadata("first_hit_rank", first_hit_rank.map_or(Value::Null, Value::from))
            .with_metadata("hits", ranks.len()))
    }
}

/// Gain scheme used by [`Ndcg`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NdcgMode {
    /// gain = rel
    #[default]
    Linear,
    /// gain = 2^rel - 1
    Exponential,
}

impl NdcgMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            NdcgMode::Linear => "linear",
            NdcgMode::Exponential => "exponential",
        }
    }

    /// Undiscounted gain for a relevance grade.
    pub fn gain(&self, relevance: f64) -> f64 {
        match self {
            NdcgMode::Linear => relevance,
            NdcgMode::Exponential => 2f64.powf(relevance) - 1.0,
        }
    }

    /// Gain at a 1-indexed rank: `gain(rel) / log2(rank + 1)`.
    pub fn discounted_gain(&self, relevance: f64, rank: usize) -> f64 {
        self.gain(relevance) / ((rank + 1) as f64).log2()
    }
}

/// Normalized Discounted Cumulative Gain.
///
/// # Formula
///
/// `DCG = Σ gain(rel_r) / log2(r + 1)` over every retrieved rank r.
///
/// `IDCG` is the DCG of an ideal ranking with `min(|expected|, |retrieved|)` relevant ids
/// at the top. Score is `DCG / IDCG`, or 0.0 when either is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ndcg {
    mode: NdcgMode,
}

impl Ndcg {
    pub fn new(mode: NdcgMode) -> Self {
        Self { mode }
    }
}

impl RetrievalMetric for Ndcg {
    fn metric_name(&self) -> &'static str {
        "ndcg"
    }

    fn compute(
        &self,
        expected_ids: Option<&[String]>,
        retrieved_ids: Option<&[String]>,
    ) -> Result<RetrievalMetricResult> {
        let (expected, retrieved) = validate_inputs(expected_ids, retrieved_ids)?;
        let expected = expected_set(expected);
        // Irrelevant ranks contribute gain(0) = 0 in both modes.
        let dcg: f64 = relevant_ranks(&expected, retrieved)
            .into_iter()
            .map(|rank| self.mode.discounted_gain(1.0, rank))
            .sum();

        let ideal_length = expected.len().min(retrieved.len());
        let idcg: f64 = (1..=ideal_length)
            .map(|rank| self.mode.discounted_gain(1.0, rank))
            .sum();

        let score = if dcg == 0.0 || idcg == 0.0 { 0.0 } else { dcg / idcg };
        log::trace!("ndcg ({}): dcg {} idcg {}, score {}", self.mode.as_str(), dcg, idcg, score);
        Ok(RetrievalMetricResult::new(score)
            .with_metadata("mode", self.mode.as_str())
            .with_metadata("dcg", dcg)
            .with_metadata("idcg", idcg))
    }
}

/// Precision: fraction of retrieved ids that are relevant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Precision;

impl RetrievalMetric for Precision {
    fn metric_name(&self) -> &'static str {
        "precision"
    }

    fn compute(
        &self,
        expected_ids: Option<&[String]>,
        retrieved_ids: Option<&[String]>,
    ) -> Result<RetrievalMetricResult> {
        let (expected, retrieved) = validate_inputs(expected_ids, retrieved_ids)?;
        let hits = relevant_ranks(&expected_set(expected), retrieved).len();
        let score = hits as f64 / retrieved.len() as f64;
        Ok(RetrievalMetricResult::new(score).with_metadata("hits", hits))
    }
}

/// Recall: fraction of distinct expected ids that were retrieved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Recall;

impl RetrievalMetric for Recall {
    fn metric_name(&self) -> &'static str {
        "recall"
    }

    fn compute(
        &self,
        expected_ids: Option<&[String]>,
        retrieved_ids: Option<&[String]>,
    ) -> Result<RetrievalMetricResult> {
        let (expected, retrieved) = validate_inputs(expected_ids, retrieved_ids)?;
        let expected = expected_set(expected);
        let hits = relevant_ranks(&expected, retrieved).len();
        let score = hits as f64 / expected.len() as f64;
        Ok(RetrievalMetricResult::new(score).with_metadata("hits", hits))
    }
}

/// Average Precision: mean of precision@k over the ranks k holding a relevant id,
/// normalized by the number of distinct expected ids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AveragePrecision;

impl RetrievalMetric for AveragePrecision {
    fn metric_name(&self) -> &'static str {
        "ap"
    }

    fn compute(
        &self,
        expected_ids: Option<&[String]>,
        retrieved_ids: Option<&[String]>,
    ) -> Result<RetrievalMetricResult> {
        let (expected, retrieved) = validate_inputs(expected_ids, retrieved_ids)?;
        let expected = expected_set(expected);
        let ranks = relevant_ranks(&expected, retrieved);
        // The i-th hit (1-indexed) at rank r has precision@r = i / r.
        let precision_sum: f64 = ranks
            .iter()
            .enumerate()
            .map(|(i, &rank)| (i + 1) as f64 / rank as f64)
            .sum();
        let score = precision_sum / expected.len() as f64;
        Ok(RetrievalMetricResult::new(score).with_metadata("hits", ranks.len()))
    }
}
