//! Eval command implementation

use crate::chart::{ConfusionHeatmap, MetricBarChart};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_spec, EvalArgs, EvalSpec, OutputFormat};
use crate::metrics::{evaluation_report, BinaryConfusion, MetricsSummary};

/// Bar width shared by both commands' charts
const CHART_BAR_WIDTH: usize = 40;

pub fn run_eval(args: EvalArgs, level: LogLevel) -> Result<(), String> {
    let spec = resolve_spec(&args)?;
    if let Some(path) = &args.spec {
        log(
            level,
            LogLevel::Verbose,
            &format!("Loaded spec from {}", path.display()),
        );
    }

    let counts = BinaryConfusion::new(spec.tp, spec.fn_, spec.fp, spec.tn);
    let summary = MetricsSummary::from_confusion(&counts);

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Evaluation Results:");
            log(level, LogLevel::Verbose, counts.to_string().trim_end());
            println!();
            print!("{}", evaluation_report(&counts));

            if !args.no_charts {
                println!();
                print!("{}", render_charts(&counts, &summary, spec.labels.as_deref()));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Merge the spec file and count flags into one spec. Flags win over the file.
pub(crate) fn resolve_spec(args: &EvalArgs) -> Result<EvalSpec, String> {
    let base = match &args.spec {
        Some(path) => Some(load_spec(path).map_err(|e| format!("Spec error: {e}"))?),
        None => None,
    };

    let pick = |flag: Option<u64>, from_file: Option<u64>, name: &str| {
        flag.or(from_file)
            .ok_or_else(|| format!("Missing count: pass --{name} or a spec file"))
    };

    let labels = match &args.labels {
        Some(labels) => Some(labels.clone()),
        None => base.as_ref().and_then(|s| s.labels.clone()),
    };

    Ok(EvalSpec {
        tp: pick(args.tp, base.as_ref().map(|s| s.tp), "tp")?,
        fn_: pick(args.fn_, base.as_ref().map(|s| s.fn_), "fn")?,
        fp: pick(args.fp, base.as_ref().map(|s| s.fp), "fp")?,
        tn: pick(args.tn, base.as_ref().map(|s| s.tn), "tn")?,
        labels,
    })
}

/// Render the bar chart and heatmap for one evaluation.
pub(crate) fn render_charts(
    counts: &BinaryConfusion,
    summary: &MetricsSummary,
    labels: Option<&[String]>,
) -> String {
    let bars = MetricBarChart::from_summary(summary, CHART_BAR_WIDTH);

    let heatmap = match labels {
        Some([positive, negative]) => ConfusionHeatmap::with_labels(*counts, positive, negative),
        _ => ConfusionHeatmap::new(*counts),
    };

    format!("{}\n{}", bars.render(), heatmap.render())
}
