//! Tests for terminal chart rendering

#[cfg(test)]
mod tests {
    use crate::chart::{ConfusionHeatmap, MetricBarChart};
    use crate::metrics::{BinaryConfusion, MetricsSummary};

    #[test]
    fn test_bar_chart_fixed_scale() {
        let mut chart = MetricBarChart::new(40);
        chart.push("full", 1.0);
        chart.push("half", 0.5);
        chart.push("empty", 0.0);

        let output = chart.render();
        let full: String = "█".repeat(40);
        let half: String = "█".repeat(20);

        // 1.0 fills the width, 0.5 exactly half of it
        assert!(output.contains(&full));
        assert!(output.contains(&half));
        assert!(output.contains("1.0000"));
        assert!(output.contains("0.5000"));
        assert!(output.contains("0.0000"));
    }

    #[test]
    fn test_bar_chart_not_max_normalized() {
        // With all values below 1.0, no bar may reach full width
        let mut chart = MetricBarChart::new(40);
        chart.push("a", 0.6);
        chart.push("b", 0.3);

        let output = chart.render();
        let full: String = "█".repeat(40);
        assert!(!output.contains(&full));
    }

    #[test]
    fn test_bar_chart_from_summary() {
        let counts = BinaryConfusion::new(80, 20, 10, 90);
        let summary = MetricsSummary::from_confusion(&counts);
        let output = MetricBarChart::from_summary(&summary, 40).render();

        assert!(output.contains("recall"));
        assert!(output.contains("specificity"));
        assert!(output.contains("accuracy"));
        assert!(output.contains("precision"));
        assert!(output.contains("f-score"));
        // MCC has a different range and stays out of the fixed-scale chart
        assert!(!output.contains("matthews"));
        assert!(output.contains("0.8000"));
        assert!(output.contains("0.9000"));
    }

    #[test]
    fn test_bar_chart_empty() {
        let chart = MetricBarChart::new(40);
        assert_eq!(chart.render(), "No metric data");
    }

    #[test]
    fn test_heatmap_contains_counts_and_axes() {
        let counts = BinaryConfusion::new(80, 20, 10, 90);
        let output = ConfusionHeatmap::new(counts).render();

        assert!(output.contains("Actual"));
        assert!(output.contains("Predicted"));
        assert!(output.contains("80"));
        assert!(output.contains("20"));
        assert!(output.contains("10"));
        assert!(output.contains("90"));
        assert!(output.contains("Class 0"));
        assert!(output.contains("Class 1"));
    }

    #[test]
    fn test_heatmap_shading_extremes() {
        let counts = BinaryConfusion::new(100, 0, 0, 100);
        let output = ConfusionHeatmap::new(counts).render();

        // Largest cells get the darkest shade, smallest the lightest
        assert!(output.contains("████ 100"));
        assert!(output.contains("░░░░ 0"));
    }

    #[test]
    fn test_heatmap_custom_labels() {
        let counts = BinaryConfusion::new(5, 1, 2, 8);
        let output = ConfusionHeatmap::with_labels(counts, "spam", "ham").render();

        assert!(output.contains("spam"));
        assert!(output.contains("ham"));
        assert!(!output.contains("Class 0"));
    }

    #[test]
    fn test_heatmap_uniform_counts() {
        // Flat range falls back to a mid shade instead of dividing by zero
        let counts = BinaryConfusion::new(5, 5, 5, 5);
        let output = ConfusionHeatmap::new(counts).render();

        assert!(output.contains('▒') || output.contains('▓'));
        assert!(!output.contains('█'));
    }
}
