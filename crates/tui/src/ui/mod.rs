//! UI rendering modules

pub mod episode;
pub mod help;
pub mod home;
pub mod player;

use crate::{
    state::{AppState, View},
    theme::Theme,
};
use podstream_core::Duration;
use podstream_player::PlayerState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Renders the main UI
///
/// The player bar is persistent: it renders under every view so the
/// transport never disappears while browsing.
pub fn render(
    frame: &mut Frame,
    state: &AppState,
    player: &PlayerState,
    progress: Duration,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Content
            Constraint::Length(7), // Player bar
            Constraint::Length(3), // Status bar
        ])
        .split(frame.area());

    render_tabs(frame, chunks[0], state, theme);
    render_content(frame, chunks[1], state, theme);
    player::render(frame, chunks[2], player, progress, theme);
    render_status_bar(frame, chunks[3], state, player, theme);
}

/// Renders the tab bar
fn render_tabs(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let titles = vec!["Home", "Episode", "Help"];
    let index = match state.view {
        View::Home => 0,
        View::Episode => 1,
        View::Help => 2,
    };

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_color()))
                .title("♪ PodStream"),
        )
        .select(index)
        .style(theme.text_style())
        .highlight_style(theme.highlight_style());

    frame.render_widget(tabs, area);
}

/// Renders the current view content
fn render_content(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    match state.view {
        View::Home => home::render(frame, area, state, theme),
        View::Episode => episode::render(frame, area, state, theme),
        View::Help => help::render(frame, area, theme),
    }
}

/// Renders the status bar
fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    player: &PlayerState,
    theme: &Theme,
) {
    let status_text = if let Some(ref msg) = state.status_message {
        msg.clone()
    } else {
        "q: Quit | h: Help | Enter: Play | o: Details".to_string()
    };

    let status = Paragraph::new(Line::from(vec![
        Span::styled(
            " ● ",
            Style::default().fg(if player.is_playing() {
                theme.playing
            } else {
                theme.paused
            }),
        ),
        Span::styled(status_text, theme.text_style()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_color())),
    );

    frame.render_widget(status, area);
}
