//! Confusion counts for binary classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four cells of a binary confusion matrix.
///
/// Counts are `u64`, so non-negativity is a type invariant rather than a
/// runtime check. The struct is an immutable value: build it once, feed it
/// to the metric functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryConfusion {
    /// Actual positives predicted positive
    #[serde(rename = "tp")]
    true_positives: u64,
    /// Actual positives predicted negative
    #[serde(rename = "fn")]
    false_negatives: u64,
    /// Actual negatives predicted positive
    #[serde(rename = "fp")]
    false_positives: u64,
    /// Actual negatives predicted negative
    #[serde(rename = "tn")]
    true_negatives: u64,
}

impl BinaryConfusion {
    /// Create confusion counts from the four cells.
    pub fn new(tp: u64, fn_: u64, fp: u64, tn: u64) -> Self {
        Self {
            true_positives: tp,
            false_negatives: fn_,
            false_positives: fp,
            true_negatives: tn,
        }
    }

    /// Aggregate predictions against ground truth.
    ///
    /// `true` is the positive class. Panics if the slices differ in length.
    pub fn from_labels(y_pred: &[bool], y_true: &[bool]) -> Self {
        assert_eq!(
            y_pred.len(),
            y_true.len(),
            "Predictions and targets must have same length"
        );

        let mut counts = Self::new(0, 0, 0, 0);
        for (&pred, &actual) in y_pred.iter().zip(y_true.iter()) {
            match (actual, pred) {
                (true, true) => counts.true_positives += 1,
                (true, false) => counts.false_negatives += 1,
                (false, true) => counts.false_positives += 1,
                (false, false) => counts.true_negatives += 1,
            }
        }
        counts
    }

    /// True positive count.
    pub fn tp(&self) -> u64 {
        self.true_positives
    }

    /// False negative count.
    pub fn fn_(&self) -> u64 {
        self.false_negatives
    }

    /// False positive count.
    pub fn fp(&self) -> u64 {
        self.false_positives
    }

    /// True negative count.
    pub fn tn(&self) -> u64 {
        self.true_negatives
    }

    /// Total number of samples.
    pub fn total(&self) -> u64 {
        self.true_positives + self.false_negatives + self.false_positives + self.true_negatives
    }
}

impl fmt::Display for BinaryConfusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion Matrix:")?;
        writeln!(f, "{:>10} {:>8} {:>8}", "", "Pred +", "Pred -")?;
        writeln!(
            f,
            "{:>10} {:>8} {:>8}",
            "Actual +", self.true_positives, self.false_negatives
        )?;
        writeln!(
            f,
            "{:>10} {:>8} {:>8}",
            "Actual -", self.false_positives, self.true_negatives
        )?;
        Ok(())
    }
}
