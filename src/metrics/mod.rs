//! Binary classification evaluation metrics
//!
//! Provides:
//! - Confusion count aggregation for binary classifiers
//! - Recall, specificity, accuracy, precision, F-score
//! - Matthews correlation coefficient
//! - A balanced-accuracy approximation of AUC-ROC
//! - Fixed-width text evaluation reports
//!
//! Every formula is a pure function with an explicit zero-denominator guard
//! returning `0.0`, so the engine has no error paths.

mod confusion;
mod formulas;
mod report;
mod summary;

#[cfg(test)]
mod reference_tests;

// Re-export all public types and functions
pub use confusion::BinaryConfusion;
pub use formulas::{
    accuracy, approximate_auc, f_score, matthews_correlation, precision, recall, specificity,
};
pub use report::evaluation_report;
pub use summary::MetricsSummary;
