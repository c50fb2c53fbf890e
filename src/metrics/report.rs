//! Text evaluation report

use super::confusion::BinaryConfusion;
use super::summary::MetricsSummary;

/// Generate a fixed-width evaluation report for one confusion matrix.
///
/// # Example
/// ```
/// use medir::metrics::{evaluation_report, BinaryConfusion};
///
/// let counts = BinaryConfusion::new(80, 20, 10, 90);
/// let report = evaluation_report(&counts);
/// assert!(report.contains("Recall"));
/// assert!(report.contains("0.8000"));
/// ```
pub fn evaluation_report(counts: &BinaryConfusion) -> String {
    let m = MetricsSummary::from_confusion(counts);

    let mut report = String::new();

    report.push_str(&format!(
        "Samples: {} (tp={}, fn={}, fp={}, tn={})\n",
        counts.total(),
        counts.tp(),
        counts.fn_(),
        counts.fp(),
        counts.tn()
    ));
    report.push_str(&"-".repeat(42));
    report.push('\n');

    let rows = [
        ("Recall (sensitivity)", m.recall),
        ("Specificity", m.specificity),
        ("Accuracy", m.accuracy),
        ("Precision", m.precision),
        ("F-score", m.f_score),
        ("Matthews correlation", m.matthews_correlation),
        ("Approximate AUC", m.approximate_auc),
    ];

    for (name, value) in rows {
        report.push_str(&format!("{name:<28} {value:>10.4}\n"));
    }

    report.push_str(&"-".repeat(42));
    report.push('\n');
    report.push_str("Approximate AUC is (recall + specificity) / 2, not a ROC integral.\n");

    report
}
