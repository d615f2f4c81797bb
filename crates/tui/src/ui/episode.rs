//! Episode detail view rendering

use crate::{state::AppState, theme::Theme};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Renders the episode detail view
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let Some(episode) = state.detail_episode() else {
        let empty = Paragraph::new("No episode selected. Press o on the home view.")
            .block(Block::default().borders(Borders::ALL))
            .style(theme.text_secondary_style())
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Title + metadata
            Constraint::Min(0),    // Description
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            episode.title.clone(),
            theme.accent_style().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(episode.members.clone(), theme.text_secondary_style()),
            Span::raw("  |  "),
            Span::styled(episode.published_at.clone(), theme.text_secondary_style()),
            Span::raw("  |  "),
            Span::styled(episode.duration_hms(), theme.text_secondary_style()),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_color())),
    )
    .alignment(Alignment::Center);

    frame.render_widget(header, chunks[0]);

    let description = Paragraph::new(strip_html(&episode.description))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_color()))
                .title("About (p: Play this episode | Esc: Back)"),
        )
        .style(theme.text_style())
        .wrap(Wrap { trim: true });

    frame.render_widget(description, chunks[1]);
}

/// Reduces the feed's HTML description to plain terminal text
fn strip_html(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut in_tag = false;

    for c in input.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => output.push(c),
            _ => {}
        }
    }

    output
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html_removes_tags() {
        assert_eq!(strip_html("<p>Hello <b>world</b></p>"), "Hello world");
    }

    #[test]
    fn test_strip_html_decodes_entities() {
        assert_eq!(strip_html("Q&amp;A &lt;live&gt;"), "Q&A <live>");
    }

    #[test]
    fn test_strip_html_collapses_whitespace() {
        assert_eq!(strip_html("<p>a</p>\n\n<p>b</p>"), "a b");
    }

    #[test]
    fn test_strip_html_plain_text_passthrough() {
        assert_eq!(strip_html("no markup here"), "no markup here");
    }
}
