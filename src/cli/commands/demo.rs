//! Demo command implementation
//!
//! Evaluates a fixed example confusion matrix so the full output can be
//! inspected without preparing any input.

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::DemoArgs;
use crate::metrics::{BinaryConfusion, MetricsSummary};

use super::eval::render_charts;

/// The built-in example: 80 tp, 20 fn, 10 fp, 90 tn.
pub(crate) fn example_counts() -> BinaryConfusion {
    BinaryConfusion::new(80, 20, 10, 90)
}

pub fn run_demo(args: DemoArgs, level: LogLevel) -> Result<(), String> {
    let counts = example_counts();
    let summary = MetricsSummary::from_confusion(&counts);

    log(level, LogLevel::Normal, "Evaluating the built-in example confusion matrix");
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Counts: tp={} fn={} fp={} tn={} ({} samples)",
            counts.tp(),
            counts.fn_(),
            counts.fp(),
            counts.tn(),
            counts.total()
        ),
    );
    println!();
    print!("{counts}");
    println!();
    print!("{}", format_metrics(&summary));

    if !args.no_charts {
        println!();
        print!("{}", render_charts(&counts, &summary, None));
    }

    Ok(())
}

/// Each metric on its own line, formatted to four decimal places.
pub(crate) fn format_metrics(summary: &MetricsSummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("Recall (sensitivity):  {:.4}\n", summary.recall));
    output.push_str(&format!("Specificity:           {:.4}\n", summary.specificity));
    output.push_str(&format!("Accuracy:              {:.4}\n", summary.accuracy));
    output.push_str(&format!("Precision:             {:.4}\n", summary.precision));
    output.push_str(&format!("F-score:               {:.4}\n", summary.f_score));
    output.push_str(&format!("Matthews correlation:  {:.4}\n", summary.matthews_correlation));
    output.push_str(&format!("Approximate AUC:       {:.4}\n", summary.approximate_auc));
    output
}
