//! Terminal chart renderers for evaluation output
//!
//! - Metric comparison bar chart, scale fixed to [0, 1]
//! - Annotated confusion matrix heatmap
//!
//! Both consume already-computed metrics or raw counts and produce plain
//! strings; nothing here feeds back into the metrics engine.

mod heatmap;
mod metric_bars;

#[cfg(test)]
mod tests;

pub use heatmap::ConfusionHeatmap;
pub use metric_bars::MetricBarChart;
