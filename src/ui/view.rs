use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::app::{AppMode, ResultView};
use crate::ui::theme::colors;

pub fn render_title() -> Paragraph<'static> {
    let lines = vec![
        Line::from(Span::styled(
            "F L A M E S",
            Style::default()
                .fg(colors::ember())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "friends  love  affection  marriage  enemy  siblings",
            Style::default().fg(colors::dimmed()),
        )),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(colors::background()))
}

pub fn render_name_field(label: &str, value: &str, focused: bool) -> Paragraph<'static> {
    let border = if focused {
        colors::ember()
    } else {
        colors::dimmed()
    };
    // Trailing underscore stands in for a cursor on the focused field
    let text = if focused {
        format!("{}_", value)
    } else {
        value.to_string()
    };

    Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(label.to_string())
                .border_style(Style::default().fg(border)),
        )
        .style(Style::default().fg(colors::text()).bg(colors::background()))
}

pub fn render_placeholder() -> Paragraph<'static> {
    let text = "Enter two names and press Enter to check the FLAMES result";
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors::dimmed()).bg(colors::background()))
}

pub fn render_result_card(result: &ResultView, show_steps: bool) -> Paragraph<'static> {
    let mut lines = vec![
        Line::from(Span::styled(
            result.headline.clone(),
            Style::default()
                .fg(colors::text())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            result.verdict.clone(),
            Style::default()
                .fg(colors::ember())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            result.blurb.clone(),
            Style::default().fg(colors::text()),
        )),
    ];

    if show_steps {
        lines.push(Line::from(""));
        for entry in result.breakdown.iter().chain(result.steps.iter()) {
            lines.push(Line::from(Span::styled(
                entry.clone(),
                Style::default().fg(colors::dimmed()),
            )));
        }
    }

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(colors::background()))
}

pub fn render_status(status: Option<&str>) -> Paragraph<'static> {
    let text = status.unwrap_or("").to_string();
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors::ember()).bg(colors::background()))
}

pub fn render_hints(mode: AppMode) -> Paragraph<'static> {
    let text = match mode {
        AppMode::Input => "Tab: switch field   Enter: check   Esc: quit",
        AppMode::Result => "s: steps   n: new match   q: quit",
        AppMode::Quit => "",
    };
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors::dimmed()).bg(colors::surface()))
}

/// Box-drawn result card for the non-interactive path.
pub fn plain_result_card(result: &ResultView, show_steps: bool) -> String {
    let mut lines = vec![
        result.headline.clone(),
        result.verdict.clone(),
        result.blurb.clone(),
    ];
    if show_steps {
        lines.push(String::new());
        lines.extend(result.breakdown.iter().cloned());
        lines.extend(result.steps.iter().cloned());
    }
    frame_lines(&lines)
}

fn frame_lines(lines: &[String]) -> String {
    let inner = lines
        .iter()
        .map(|line| UnicodeWidthStr::width(line.as_str()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("┌{}┐\n", "─".repeat(inner + 2)));
    for line in lines {
        let pad = inner - UnicodeWidthStr::width(line.as_str());
        out.push_str(&format!("│ {}{} │\n", line, " ".repeat(pad)));
    }
    out.push_str(&format!("└{}┘", "─".repeat(inner + 2)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ResultView;
    use crate::engine::play_match;

    fn sample_view() -> ResultView {
        let report = play_match("Alice", "Bob", true);
        ResultView::from_report("Alice", "Bob", &report)
    }

    #[test]
    fn test_render_title_creates_paragraph() {
        let paragraph = render_title();
        let _ = paragraph;
    }

    #[test]
    fn test_render_name_field_focused_and_not() {
        let _ = render_name_field("Name 1", "alice", true);
        let _ = render_name_field("Name 2", "", false);
    }

    #[test]
    fn test_render_result_card_with_and_without_steps() {
        let view = sample_view();
        let _ = render_result_card(&view, false);
        let _ = render_result_card(&view, true);
    }

    #[test]
    fn test_render_status_empty_and_set() {
        let _ = render_status(None);
        let _ = render_status(Some("please enter the first name (non-empty)"));
    }

    #[test]
    fn test_render_hints_per_mode() {
        let _ = render_hints(AppMode::Input);
        let _ = render_hints(AppMode::Result);
        let _ = render_hints(AppMode::Quit);
    }

    #[test]
    fn test_plain_result_card_contains_verdict() {
        let card = plain_result_card(&sample_view(), false);
        assert!(card.contains("Alice + Bob"));
        assert!(card.contains("A - Affection"));
        assert!(!card.contains("remove index"));
    }

    #[test]
    fn test_plain_result_card_with_steps() {
        let card = plain_result_card(&sample_view(), true);
        assert!(card.contains("count:    8"));
        assert!(card.contains("1. remove index 1 (L) leaving FAMES"));
    }

    #[test]
    fn test_frame_lines_pads_to_widest() {
        let framed = frame_lines(&["ab".to_string(), "a".to_string()]);
        let rows: Vec<&str> = framed.lines().collect();
        assert_eq!(rows[0], "┌────┐");
        assert_eq!(rows[1], "│ ab │");
        assert_eq!(rows[2], "│ a  │");
        assert_eq!(rows[3], "└────┘");
    }
}
