use unicode_segmentation::UnicodeSegmentation;

use super::app::{App, Focus};
use super::mode::AppMode;
use crate::engine::{MatchReport, Outcome};

/// Render state for UI components
///
/// Everything the views need, derived up front as plain strings so the
/// widget constructors stay dumb.
pub struct RenderState {
    pub mode: AppMode,
    pub first_name: String,
    pub second_name: String,
    pub focus: Focus,
    pub show_steps: bool,
    pub status: Option<String>,
    pub result: Option<ResultView>,
}

/// Display strings for one finished match.
pub struct ResultView {
    /// "Alice + Bob", title-cased.
    pub headline: String,
    /// "A - Affection" or "Strong bond".
    pub verdict: String,
    pub blurb: String,
    /// Cleaned letters, residues, and remaining count.
    pub breakdown: Vec<String>,
    /// Formatted elimination steps; empty when everything cancelled.
    pub steps: Vec<String>,
}

impl RenderState {
    pub fn from_app(app: &App) -> Self {
        Self {
            mode: app.mode,
            first_name: app.first_name.clone(),
            second_name: app.second_name.clone(),
            focus: app.focus,
            show_steps: app.show_steps,
            status: app.status.clone(),
            result: app
                .report
                .as_ref()
                .map(|report| ResultView::from_report(&app.first_name, &app.second_name, report)),
        }
    }
}

impl ResultView {
    pub fn from_report(first_name: &str, second_name: &str, report: &MatchReport) -> Self {
        let headline = format!("{} + {}", title_case(first_name), title_case(second_name));

        let verdict = match report.result.outcome {
            Outcome::AllCancelled => report.result.meaning().to_string(),
            Outcome::Survivor(symbol) => {
                format!("{} - {}", symbol.letter(), symbol.meaning())
            }
        };

        let mut breakdown = vec![
            format!(
                "letters:  {}  |  {}",
                non_empty(&report.first.to_string()),
                non_empty(&report.second.to_string()),
            ),
            format!(
                "residual: {}  |  {}",
                non_empty(&report.residual.first.to_string()),
                non_empty(&report.residual.second.to_string()),
            ),
            format!("count:    {}", report.count),
        ];
        if report.count == 0 {
            breakdown.push("nothing left to eliminate".to_string());
        }

        let steps = report
            .result
            .steps
            .as_deref()
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(i, step)| {
                format!(
                    "{}. remove index {} ({}) leaving {}",
                    i + 1,
                    step.removed_index,
                    step.removed.letter(),
                    step.remaining_letters(),
                )
            })
            .collect();

        Self {
            headline,
            verdict,
            blurb: report.result.outcome.blurb().to_string(),
            breakdown,
            steps,
        }
    }
}

fn non_empty(s: &str) -> &str {
    if s.is_empty() {
        "(none)"
    } else {
        s
    }
}

/// Title-case a name for display: first letter of each word uppercased, the
/// rest lowered. Word boundaries are Unicode word boundaries.
pub fn title_case(name: &str) -> String {
    name.trim()
        .unicode_words()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
