//! Numstat Out: run reports to text, JSON and result files
//!
//! Text reports come from the handlebars templates in
//! `templates/reports.yaml`. Each result type picks its template and builds
//! the view the template reads, so number formatting lives here and not in
//! the templates.
//!
//! # Example
//!
//! ```
//! use numstat_core::{ExecutionContext, PipelineRunner};
//! use numstat_core::{Mode, ModePolicy, StatisticsResult, VarianceMode};
//! use numstat_out::{render, OutputFormat};
//!
//! let ctx = ExecutionContext::default();
//! let runner = PipelineRunner::new(&ctx, b"2\n2\n");
//! let report = runner.finish(Vec::new(), StatisticsResult {
//!     count: 2,
//!     mean: 2.0,
//!     median: 2.0,
//!     mode: Mode::Value(2.0),
//!     variance: 0.0,
//!     std_dev: 0.0,
//!     variance_mode: VarianceMode::Population,
//!     mode_policy: ModePolicy::RequireRepeat,
//! });
//!
//! let text = render(&report, OutputFormat::Text).unwrap();
//! assert!(text.contains("Mean: 2.0"));
//! ```

pub mod persist;
pub mod renderer;
pub mod templates;

pub use persist::write_report;
pub use renderer::{TemplateRenderer, VALUE_MARKER};
pub use templates::TemplatesFile;

use numstat_core::{
    ConversionRow, Mode, NumstatError, RunReport, StatisticsResult, WordCountResult,
};
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

/// Shown in place of a mode when no value repeats
pub const NO_MODE_MARKER: &str = "#N/D";

static DEFAULT_RENDERER: Lazy<Result<TemplateRenderer<'static>, NumstatError>> =
    Lazy::new(|| TemplatesFile::builtin().and_then(TemplateRenderer::new));

/// A result type that knows how it is presented.
pub trait Report: Serialize + Sized {
    /// Template name in `reports.yaml`
    const TEMPLATE: &'static str;
    /// Result file name without extension
    const FILE_STEM: &'static str;

    /// Data handed to the text template
    fn view(report: &RunReport<Self>) -> Value;
}

impl Report for StatisticsResult {
    const TEMPLATE: &'static str = "statistics";
    const FILE_STEM: &'static str = "StatisticsResults";

    fn view(report: &RunReport<Self>) -> Value {
        let stats = &report.result;
        json!({
            "count": stats.count,
            "mean": format_float(stats.mean),
            "median": format_float(stats.median),
            "mode": format_mode(&stats.mode),
            "variance": format_float(stats.variance),
            "std_dev": format_float(stats.std_dev),
            "elapsed_secs": report.elapsed_secs,
        })
    }
}

impl Report for Vec<ConversionRow> {
    const TEMPLATE: &'static str = "conversion";
    const FILE_STEM: &'static str = "ConversionResults";

    /// Converted rows and invalid tokens merged back into line order.
    fn view(report: &RunReport<Self>) -> Value {
        let mut rows: Vec<(usize, Value)> = report
            .result
            .iter()
            .map(|row| {
                (
                    row.line,
                    json!({
                        "number": row.result.value.to_string(),
                        "binary": row.result.binary,
                        "hex": row.result.hex,
                    }),
                )
            })
            .chain(report.invalid.iter().map(|token| {
                (
                    token.line,
                    json!({ "number": token.text, "binary": null, "hex": null }),
                )
            }))
            .collect();
        rows.sort_by_key(|(line, _)| *line);

        json!({
            "rows": rows.into_iter().map(|(_, row)| row).collect::<Vec<_>>(),
            "elapsed_secs": report.elapsed_secs,
        })
    }
}

impl Report for WordCountResult {
    const TEMPLATE: &'static str = "word_count";
    const FILE_STEM: &'static str = "WordCountResults";

    fn view(report: &RunReport<Self>) -> Value {
        json!({
            "rows": report.result.rows,
            "total": report.result.total,
            "elapsed_secs": report.elapsed_secs,
        })
    }
}

/// Shortest round-trip form, keeping `.0` on integral values
pub fn format_float(value: f64) -> String {
    format!("{:?}", value)
}

pub fn format_mode(mode: &Mode) -> String {
    match mode {
        Mode::Value(v) => format_float(*v),
        Mode::NoMode => NO_MODE_MARKER.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = NumstatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(NumstatError::Config(format!(
                "unknown output format '{}' (expected text or json)",
                other
            ))),
        }
    }
}

/// Render with the built-in templates
pub fn render_text<T: Report>(report: &RunReport<T>) -> Result<String, NumstatError> {
    let renderer = DEFAULT_RENDERER.as_ref().map_err(Clone::clone)?;
    renderer.render(T::TEMPLATE, &T::view(report))
}

/// The whole run record, pretty-printed
pub fn render_json<T: Serialize>(report: &RunReport<T>) -> Result<String, NumstatError> {
    let mut out = serde_json::to_string_pretty(report)
        .map_err(|e| NumstatError::Render(e.to_string()))?;
    out.push('\n');
    Ok(out)
}

pub fn render<T: Report>(report: &RunReport<T>, format: OutputFormat) -> Result<String, NumstatError> {
    match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Json => render_json(report),
    }
}

/// e.g. `StatisticsResults.txt`
pub fn result_file_name<T: Report>(format: OutputFormat) -> String {
    format!("{}.{}", T::FILE_STEM, format.extension())
}
