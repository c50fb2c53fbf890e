//! Leaf metric formulas over raw confusion counts.
//!
//! Every function is pure and total: a zero denominator yields `0.0` instead
//! of an error. Reporting an undefined metric as zero is the domain
//! convention here, so none of these return `Result`.

/// Recall (sensitivity): fraction of actual positives correctly identified.
///
/// Returns `tp / (tp + fn)`, or `0.0` when there are no actual positives.
pub fn recall(tp: u64, fn_: u64) -> f64 {
    let actual_positives = tp + fn_;
    if actual_positives == 0 {
        return 0.0;
    }
    tp as f64 / actual_positives as f64
}

/// Specificity: fraction of actual negatives correctly identified.
///
/// Returns `tn / (tn + fp)`, or `0.0` when there are no actual negatives.
pub fn specificity(tn: u64, fp: u64) -> f64 {
    let actual_negatives = tn + fp;
    if actual_negatives == 0 {
        return 0.0;
    }
    tn as f64 / actual_negatives as f64
}

/// Accuracy: fraction of all predictions that are correct.
///
/// Returns `(tp + tn) / (tp + fn + fp + tn)`, or `0.0` when the total is zero.
pub fn accuracy(tp: u64, fn_: u64, fp: u64, tn: u64) -> f64 {
    let total = tp + fn_ + fp + tn;
    if total == 0 {
        return 0.0;
    }
    (tp + tn) as f64 / total as f64
}

/// Precision: fraction of predicted positives that are correct.
///
/// Returns `tp / (tp + fp)`, or `0.0` when nothing was predicted positive.
pub fn precision(tp: u64, fp: u64) -> f64 {
    let predicted_positives = tp + fp;
    if predicted_positives == 0 {
        return 0.0;
    }
    tp as f64 / predicted_positives as f64
}

/// F-score: harmonic mean of already-computed precision and recall.
///
/// Takes metric values rather than raw counts; callers must compute both
/// from the same confusion counts. Returns `0.0` when `precision + recall`
/// is zero.
pub fn f_score(precision: f64, recall: f64) -> f64 {
    if precision + recall == 0.0 {
        return 0.0;
    }
    2.0 * precision * recall / (precision + recall)
}

/// Matthews correlation coefficient between predicted and actual labels.
///
/// `(tp*tn - fp*fn) / sqrt((tp+fp)(tp+fn)(tn+fp)(tn+fn))`, in [-1, 1].
/// Negative values mean the predictions are anti-correlated with the ground
/// truth; no clamping is applied. Returns `0.0` whenever any of the four
/// marginal sums is zero. Counts are widened to `f64` before multiplying so
/// the product cannot overflow integer arithmetic.
pub fn matthews_correlation(tp: u64, fn_: u64, fp: u64, tn: u64) -> f64 {
    let (tp, fn_, fp, tn) = (tp as f64, fn_ as f64, fp as f64, tn as f64);
    let product = (tp + fp) * (tp + fn_) * (tn + fp) * (tn + fn_);
    if product == 0.0 {
        return 0.0;
    }
    (tp * tn - fp * fn_) / product.sqrt()
}

/// Approximate AUC-ROC as the arithmetic mean of recall and specificity.
///
/// This is a heuristic stand-in (also known as balanced accuracy), NOT a
/// rigorous area under the ROC curve: a true AUC needs scored predictions
/// and integration over thresholds, which this crate deliberately does not
/// do. Takes already-computed recall and specificity.
pub fn approximate_auc(recall: f64, specificity: f64) -> f64 {
    (recall + specificity) / 2.0
}
