//! Home view rendering: latest releases on top, the full listing below

use crate::{state::AppState, theme::Theme};
use podstream_core::Episode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Renders the home view
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let latest_height = state.latest_count() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(latest_height), Constraint::Min(0)])
        .split(area);

    render_latest(frame, chunks[0], state, theme);
    render_all(frame, chunks[1], state, theme);
}

fn episode_line(episode: &Episode) -> String {
    format!(
        "{} — {}  ({}, {})",
        episode.title,
        episode.members,
        episode.published_at,
        episode.duration_hms()
    )
}

fn render_latest(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let items: Vec<ListItem> = state
        .latest_episodes()
        .iter()
        .enumerate()
        .map(|(i, episode)| {
            let style = if i == state.selected_item {
                theme.highlight_style()
            } else {
                theme.accent_style()
            };
            ListItem::new(Line::from(Span::styled(episode_line(episode), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_color()))
            .title("Latest Releases"),
    );

    frame.render_widget(list, area);
}

fn render_all(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let offset = state.latest_count();
    let items: Vec<ListItem> = state
        .older_episodes()
        .iter()
        .enumerate()
        .map(|(i, episode)| {
            let style = if i + offset == state.selected_item {
                theme.highlight_style()
            } else {
                theme.text_style()
            };
            ListItem::new(Line::from(Span::styled(episode_line(episode), style)))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_color()))
                .title("All Episodes (↑/↓: Navigate | Enter: Play | o: Details)"),
        )
        .style(theme.text_style());

    frame.render_widget(list, area);
}
