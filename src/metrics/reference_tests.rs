//! Reference-value tests for binary classification metrics
//!
//! These tests verify that our metrics match sklearn reference values
//! to within 1e-6 precision.
//!
//! Reference values computed with sklearn 1.4.0:
//! ```python
//! from sklearn.metrics import (accuracy_score, precision_score, recall_score,
//!                              f1_score, matthews_corrcoef)
//! ```

#[cfg(test)]
mod tests {
    use crate::metrics::{BinaryConfusion, MetricsSummary};

    /// 80 true positives, 20 false negatives, 10 false positives,
    /// 90 true negatives.
    fn example_counts() -> BinaryConfusion {
        BinaryConfusion::new(80, 20, 10, 90)
    }

    #[test]
    fn test_reference_recall() {
        // sklearn: recall_score = 80 / 100 = 0.8
        let m = MetricsSummary::from_confusion(&example_counts());
        assert!(
            (m.recall - 0.8).abs() < 1e-6,
            "Recall {} does not match reference 0.8",
            m.recall
        );
    }

    #[test]
    fn test_reference_specificity() {
        // specificity = 90 / 100 = 0.9
        let m = MetricsSummary::from_confusion(&example_counts());
        assert!(
            (m.specificity - 0.9).abs() < 1e-6,
            "Specificity {} does not match reference 0.9",
            m.specificity
        );
    }

    #[test]
    fn test_reference_accuracy() {
        // sklearn: accuracy_score = 170 / 200 = 0.85
        let m = MetricsSummary::from_confusion(&example_counts());
        assert!(
            (m.accuracy - 0.85).abs() < 1e-6,
            "Accuracy {} does not match reference 0.85",
            m.accuracy
        );
    }

    #[test]
    fn test_reference_precision() {
        // sklearn: precision_score = 80 / 90 = 0.8888888888888888
        let m = MetricsSummary::from_confusion(&example_counts());
        assert!(
            (m.precision - 0.8888888888888888).abs() < 1e-6,
            "Precision {} does not match reference 0.8888888888888888",
            m.precision
        );
    }

    #[test]
    fn test_reference_f_score() {
        // sklearn: f1_score = 0.8421052631578947
        let m = MetricsSummary::from_confusion(&example_counts());
        assert!(
            (m.f_score - 0.8421052631578947).abs() < 1e-6,
            "F-score {} does not match reference 0.8421052631578947",
            m.f_score
        );
    }

    #[test]
    fn test_reference_matthews_correlation() {
        // sklearn: matthews_corrcoef = 0.7035302486670661
        let m = MetricsSummary::from_confusion(&example_counts());
        assert!(
            (m.matthews_correlation - 0.7035302486670661).abs() < 1e-6,
            "MCC {} does not match reference 0.7035302486670661",
            m.matthews_correlation
        );
    }

    #[test]
    fn test_reference_approximate_auc() {
        // (0.8 + 0.9) / 2 = 0.85
        let m = MetricsSummary::from_confusion(&example_counts());
        assert!(
            (m.approximate_auc - 0.85).abs() < 1e-6,
            "Approximate AUC {} does not match reference 0.85",
            m.approximate_auc
        );
    }

    #[test]
    fn test_all_zero_counts() {
        // Every metric reports 0.0 on an empty confusion matrix
        let m = MetricsSummary::from_confusion(&BinaryConfusion::new(0, 0, 0, 0));

        assert_eq!(m.recall, 0.0);
        assert_eq!(m.specificity, 0.0);
        assert_eq!(m.accuracy, 0.0);
        assert_eq!(m.precision, 0.0);
        assert_eq!(m.f_score, 0.0);
        assert_eq!(m.matthews_correlation, 0.0);
        assert_eq!(m.approximate_auc, 0.0);
    }

    #[test]
    fn test_perfect_separation() {
        // Every metric reports 1.0 for a perfect classifier
        let m = MetricsSummary::from_confusion(&BinaryConfusion::new(100, 0, 0, 100));

        assert!((m.recall - 1.0).abs() < 1e-6);
        assert!((m.specificity - 1.0).abs() < 1e-6);
        assert!((m.accuracy - 1.0).abs() < 1e-6);
        assert!((m.precision - 1.0).abs() < 1e-6);
        assert!((m.f_score - 1.0).abs() < 1e-6);
        assert!((m.matthews_correlation - 1.0).abs() < 1e-6);
        assert!((m.approximate_auc - 1.0).abs() < 1e-6);
    }
}
