//! Confusion matrix heatmap for terminal display.

use crate::metrics::BinaryConfusion;

/// Shade ramp from lowest to highest cell count.
const HEATMAP_CHARS: [char; 4] = ['░', '▒', '▓', '█'];

/// Annotated 2x2 confusion matrix heatmap for terminal display.
///
/// Rows are actual classes, columns are predicted classes. Each cell shows
/// a shade block scaled across the four counts plus the count itself.
#[derive(Debug, Clone)]
pub struct ConfusionHeatmap {
    /// The counts to render
    pub(crate) counts: BinaryConfusion,
    /// Class labels, positive class first
    pub(crate) labels: [String; 2],
}

impl ConfusionHeatmap {
    /// Create a heatmap with the default generic class labels.
    pub fn new(counts: BinaryConfusion) -> Self {
        Self::with_labels(counts, "Class 0", "Class 1")
    }

    /// Create a heatmap with caller-supplied class labels.
    ///
    /// `positive` names the class counted by tp/fn, `negative` the class
    /// counted by tn/fp.
    pub fn with_labels(counts: BinaryConfusion, positive: &str, negative: &str) -> Self {
        Self { counts, labels: [positive.to_string(), negative.to_string()] }
    }

    /// Render to string.
    pub fn render(&self) -> String {
        // Row-major [actual][predicted]: positive class first
        let cells = [
            [self.counts.tp(), self.counts.fn_()],
            [self.counts.fp(), self.counts.tn()],
        ];

        let min = cells.iter().flatten().copied().min().unwrap_or(0);
        let max = cells.iter().flatten().copied().max().unwrap_or(0);
        let range = max - min;

        let label_width = self.labels.iter().map(String::len).max().unwrap_or(7).max(7);
        let cell_width = label_width.max(10);

        let mut output = String::new();
        output.push_str("Confusion Matrix (rows: Actual, columns: Predicted):\n");

        // Header
        output.push_str(&format!("{:>width$} ", "", width = label_width + 2));
        for label in &self.labels {
            output.push_str(&format!("{label:^cell_width$} "));
        }
        output.push('\n');

        // Rows
        for (i, row) in cells.iter().enumerate() {
            output.push_str(&format!("{:>width$} ", self.labels[i], width = label_width + 2));

            for &count in row {
                let normalized = if range > 0 {
                    (count - min) as f64 / range as f64
                } else {
                    0.5
                };
                let idx = (normalized * 3.0).round() as usize;
                let c = HEATMAP_CHARS[idx.min(3)];
                let cell = format!("{c}{c}{c}{c} {count}");
                output.push_str(&format!("{cell:^cell_width$} "));
            }
            output.push('\n');
        }

        output
    }
}
