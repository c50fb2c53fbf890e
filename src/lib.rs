//! Medir: binary classification evaluation metrics
//!
//! Computes the standard scalar metrics for one binary classifier evaluation
//! run (recall, specificity, accuracy, precision, F-score, Matthews
//! correlation, and a clearly-labeled approximation of AUC-ROC) from the
//! four cells of a 2x2 confusion matrix, and renders the results as terminal
//! charts.
//!
//! ## Architecture
//!
//! - `metrics`: confusion counts, the pure metric formulas, summaries, reports
//! - `chart`: terminal bar chart and confusion heatmap renderers
//! - `config`: CLI argument types and JSON spec loading
//! - `cli`: command dispatch for the `medir` binary
//!
//! ## Example
//!
//! ```
//! use medir::metrics::{BinaryConfusion, MetricsSummary};
//!
//! let counts = BinaryConfusion::new(80, 20, 10, 90);
//! let summary = MetricsSummary::from_confusion(&counts);
//!
//! assert!((summary.recall - 0.8).abs() < 1e-9);
//! assert!((summary.accuracy - 0.85).abs() < 1e-9);
//! ```

pub mod chart;
pub mod cli;
pub mod config;
pub mod metrics;

// Re-export main types
pub use chart::{ConfusionHeatmap, MetricBarChart};
pub use config::{EvalSpec, SpecError};
pub use metrics::{evaluation_report, BinaryConfusion, MetricsSummary};
