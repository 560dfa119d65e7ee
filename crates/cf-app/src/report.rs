//! Plain-text fill reports.

use std::fmt::Write;

use cf_core::numeric::Real;
use cf_fill::FillEvaluation;

/// Figures shown to the user. Anything that could not be computed is `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FillReport {
    pub title: String,
    pub cable_count: Option<usize>,
    pub total_cable_area: Option<Real>,
    pub conduit_area: Option<Real>,
    pub fill_percentage: Option<Real>,
    pub max_allowable_fill: Option<Real>,
    pub compliant: Option<bool>,
    pub error: Option<String>,
}

impl FillReport {
    pub fn from_evaluation(title: impl Into<String>, evaluation: &FillEvaluation) -> Self {
        Self {
            title: title.into(),
            cable_count: Some(evaluation.cable_count),
            total_cable_area: Some(evaluation.total_cable_area),
            conduit_area: Some(evaluation.conduit_area),
            fill_percentage: Some(evaluation.fill_percentage),
            max_allowable_fill: Some(evaluation.max_allowable_fill),
            compliant: Some(evaluation.compliant),
            error: None,
        }
    }

    /// Report for an evaluation that failed; every figure reads N/A.
    pub fn failed(title: impl Into<String>, error: impl ToString) -> Self {
        Self {
            title: title.into(),
            error: Some(error.to_string()),
            ..Self::default()
        }
    }
}

/// Render a report as aligned text lines.
pub fn render_report(report: &FillReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", report.title);
    let _ = writeln!(
        out,
        "  Cables:             {}",
        report.cable_count.map_or_else(na, |n| n.to_string())
    );
    let _ = writeln!(
        out,
        "  Total cable area:   {}",
        figure(report.total_cable_area, "mm²", 2)
    );
    let _ = writeln!(
        out,
        "  Conduit area:       {}",
        figure(report.conduit_area, "mm²", 2)
    );
    let _ = writeln!(
        out,
        "  Fill:               {}",
        figure(report.fill_percentage, "%", 2)
    );
    let _ = writeln!(
        out,
        "  Max allowable fill: {}",
        figure(report.max_allowable_fill, "%", 1)
    );
    let status = match report.compliant {
        Some(true) => "COMPLIANT".to_string(),
        Some(false) => "NON-COMPLIANT".to_string(),
        None => na(),
    };
    let _ = writeln!(out, "  Status:             {}", status);
    if let Some(error) = &report.error {
        let _ = writeln!(out, "  Error:              {}", error);
    }
    out
}

fn na() -> String {
    "N/A".to_string()
}

fn figure(value: Option<Real>, unit: &str, decimals: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.*} {}", decimals, v, unit),
        _ => na(),
    }
}
