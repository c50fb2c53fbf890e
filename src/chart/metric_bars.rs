//! Metric comparison bar chart for terminal display.

use crate::metrics::MetricsSummary;

/// Metric comparison bar chart for terminal display.
///
/// The bar scale is fixed to [0, 1] so charts from different evaluation runs
/// stay visually comparable. Values are never normalized to the largest bar.
#[derive(Debug, Clone)]
pub struct MetricBarChart {
    /// Metric names
    pub(crate) names: Vec<String>,
    /// Metric values, expected in [0, 1]
    pub(crate) values: Vec<f64>,
    /// Bar width for a value of 1.0
    pub(crate) bar_width: usize,
}

impl MetricBarChart {
    /// Create an empty chart with the given full-scale bar width.
    pub fn new(bar_width: usize) -> Self {
        Self { names: Vec::new(), values: Vec::new(), bar_width }
    }

    /// Chart of the five ratio metrics from a computed summary.
    ///
    /// MCC is omitted: its [-1, 1] range does not fit the fixed [0, 1] scale.
    pub fn from_summary(summary: &MetricsSummary, bar_width: usize) -> Self {
        let mut chart = Self::new(bar_width);
        chart.push("recall", summary.recall);
        chart.push("specificity", summary.specificity);
        chart.push("accuracy", summary.accuracy);
        chart.push("precision", summary.precision);
        chart.push("f-score", summary.f_score);
        chart
    }

    /// Add a labeled value.
    pub fn push(&mut self, name: &str, value: f64) {
        self.names.push(name.to_string());
        self.values.push(value);
    }

    /// Render to string.
    pub fn render(&self) -> String {
        if self.names.is_empty() {
            return String::from("No metric data");
        }

        let max_name_len = self.names.iter().map(String::len).max().unwrap_or(10);
        let inner_width = 2 + max_name_len + 2 + self.bar_width + 2 + 6 + 2;

        let mut output = String::new();
        let title = " Metric Comparison (scale 0..1) ";
        output.push_str(&format!("┌─{title}{}┐\n", "─".repeat(inner_width.saturating_sub(title.len() + 1))));

        for (name, value) in self.names.iter().zip(self.values.iter()) {
            let bar_len = (value.clamp(0.0, 1.0) * self.bar_width as f64).round() as usize;
            let bar: String = "█".repeat(bar_len);
            output.push_str(&format!(
                "│  {:name_width$}  {:bar_width$}  {:.4}  │\n",
                name,
                bar,
                value,
                name_width = max_name_len,
                bar_width = self.bar_width
            ));
        }

        output.push_str(&format!("└{}┘\n", "─".repeat(inner_width)));
        output
    }
}
