//! Full metric summary computed from confusion counts

use serde::Serialize;

use super::confusion::BinaryConfusion;
use super::formulas::{
    accuracy, approximate_auc, f_score, matthews_correlation, precision, recall, specificity,
};

/// Every supported metric for one evaluation run, plus the source counts.
///
/// The F-score is derived from this summary's own precision and recall, and
/// the approximate AUC from its own recall and specificity, so the bundled
/// values are always mutually consistent.
#[derive(Clone, Debug, Serialize)]
pub struct MetricsSummary {
    /// The confusion counts the metrics were computed from
    pub counts: BinaryConfusion,
    /// Recall (sensitivity)
    pub recall: f64,
    /// Specificity
    pub specificity: f64,
    /// Accuracy
    pub accuracy: f64,
    /// Precision
    pub precision: f64,
    /// F-score (harmonic mean of precision and recall)
    pub f_score: f64,
    /// Matthews correlation coefficient, in [-1, 1]
    pub matthews_correlation: f64,
    /// Balanced-accuracy approximation of AUC-ROC, not a true ROC integral
    pub approximate_auc: f64,
}

impl MetricsSummary {
    /// Compute all metrics from confusion counts.
    pub fn from_confusion(counts: &BinaryConfusion) -> Self {
        let (tp, fn_, fp, tn) = (counts.tp(), counts.fn_(), counts.fp(), counts.tn());

        let r = recall(tp, fn_);
        let s = specificity(tn, fp);
        let p = precision(tp, fp);

        Self {
            counts: *counts,
            recall: r,
            specificity: s,
            accuracy: accuracy(tp, fn_, fp, tn),
            precision: p,
            f_score: f_score(p, r),
            matthews_correlation: matthews_correlation(tp, fn_, fp, tn),
            approximate_auc: approximate_auc(r, s),
        }
    }

    /// Compute all metrics from predictions and ground truth.
    pub fn from_labels(y_pred: &[bool], y_true: &[bool]) -> Self {
        Self::from_confusion(&BinaryConfusion::from_labels(y_pred, y_true))
    }
}
