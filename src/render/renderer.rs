//! Validation report rendering.

use minijinja::Environment;
use serde::Serialize;

use super::filters::register_filters;
use super::output::OutputMode;
use crate::registry::{TierSummary, ValidationIssue, ValidationReport};
use crate::theme::{Theme, ThemeError};

const REPORT_TEMPLATE: &str = r#"{{ title | style("title") }}
{% for row in summary %}
  {{ row.label | pad(10) | style("label") }}{{ row.count | style("count") }}
{% endfor %}
{% if groups %}

{% for group in groups %}
{{ "x" | style("error") }} {{ group.item | style("title") }}
{% for message in group.messages %}
    {{ message | style("muted") }}
{% endfor %}
{% endfor %}

{{ footer | style("error") | nl }}
{%- else %}

{{ footer | style("ok") | nl }}
{%- endif %}"#;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid theme: {0}")]
    Theme(#[from] ThemeError),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Renders validation reports in a fixed output mode.
///
/// # Example
///
/// ```rust
/// use kitbash::registry::{TierSummary, ValidationReport};
/// use kitbash::render::{OutputMode, ReportRenderer};
/// use kitbash::theme::Theme;
///
/// let renderer = ReportRenderer::new(&Theme::report_light(), OutputMode::Text).unwrap();
/// let report = ValidationReport {
///     manifest: Some("acme".into()),
///     summary: TierSummary { total: 1, free: 1, ..Default::default() },
///     issues: vec![],
/// };
/// let out = renderer.render(&report).unwrap();
/// assert!(out.contains("all 1 item valid"));
/// ```
pub struct ReportRenderer {
    env: Environment<'static>,
    mode: OutputMode,
}

impl ReportRenderer {
    /// The theme is copied into the template filters. To follow the
    /// terminal's light/dark appearance, pass
    /// [`AdaptiveTheme::select`](crate::theme::AdaptiveTheme::select).
    ///
    /// # Errors
    ///
    /// Returns an error if the theme has dangling or cyclic aliases.
    pub fn new(theme: &Theme, mode: OutputMode) -> Result<Self, RenderError> {
        theme.validate()?;

        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        register_filters(&mut env, theme.clone(), mode);
        env.add_template("report", REPORT_TEMPLATE)?;
        Ok(Self { env, mode })
    }

    pub fn render(&self, report: &ValidationReport) -> Result<String, RenderError> {
        if self.mode.is_structured() {
            let mut out = serde_json::to_string_pretty(&JsonReport::from(report))?;
            out.push('\n');
            return Ok(out);
        }
        let view = ReportView::from(report);
        Ok(self.env.get_template("report")?.render(&view)?)
    }
}

/// Renders `report` with a one-off renderer.
pub fn render_report(
    report: &ValidationReport,
    theme: &Theme,
    mode: OutputMode,
) -> Result<String, RenderError> {
    ReportRenderer::new(theme, mode)?.render(report)
}

#[derive(Serialize)]
struct SummaryRow {
    label: &'static str,
    count: usize,
}

#[derive(Serialize)]
struct ItemGroup<'a> {
    item: &'a str,
    messages: Vec<String>,
}

#[derive(Serialize)]
struct ReportView<'a> {
    title: String,
    summary: Vec<SummaryRow>,
    groups: Vec<ItemGroup<'a>>,
    footer: String,
}

impl<'a> From<&'a ValidationReport> for ReportView<'a> {
    fn from(report: &'a ValidationReport) -> Self {
        // Issues for one item are contiguous except for duplicate-name
        // issues, which are appended after all items.
        let mut groups: Vec<ItemGroup<'a>> = Vec::new();
        for issue in &report.issues {
            let message = issue.message();
            match groups.iter_mut().find(|g| g.item == issue.item) {
                Some(group) => group.messages.push(message),
                None => groups.push(ItemGroup {
                    item: &issue.item,
                    messages: vec![message],
                }),
            }
        }

        let footer = if groups.is_empty() {
            format!("all {} valid", plural(report.summary.total, "item"))
        } else {
            format!(
                "{} in {}",
                plural(report.issues.len(), "issue"),
                plural(groups.len(), "item")
            )
        };

        ReportView {
            title: match &report.manifest {
                Some(name) => format!("registry {name}"),
                None => "registry".to_string(),
            },
            summary: summary_rows(&report.summary),
            groups,
            footer,
        }
    }
}

fn summary_rows(summary: &TierSummary) -> Vec<SummaryRow> {
    vec![
        SummaryRow {
            label: "items",
            count: summary.total,
        },
        SummaryRow {
            label: "free",
            count: summary.free,
        },
        SummaryRow {
            label: "premium",
            count: summary.premium,
        },
        SummaryRow {
            label: "untiered",
            count: summary.untiered,
        },
    ]
}

fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

#[derive(Serialize)]
struct JsonIssue<'a> {
    #[serde(flatten)]
    issue: &'a ValidationIssue,
    message: String,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    manifest: Option<&'a str>,
    ok: bool,
    summary: TierSummary,
    issues: Vec<JsonIssue<'a>>,
}

impl<'a> From<&'a ValidationReport> for JsonReport<'a> {
    fn from(report: &'a ValidationReport) -> Self {
        JsonReport {
            manifest: report.manifest.as_deref(),
            ok: report.is_ok(),
            summary: report.summary,
            issues: report
                .issues
                .iter()
                .map(|issue| JsonIssue {
                    issue,
                    message: issue.message(),
                })
                .collect(),
        }
    }
}
