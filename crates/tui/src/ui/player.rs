//! Persistent player bar rendering

use crate::theme::Theme;
use podstream_core::Duration;
use podstream_player::PlayerState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Renders the player bar shown under every view
pub fn render(frame: &mut Frame, area: Rect, player: &PlayerState, progress: Duration, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_color()))
        .title("Player");

    let Some(episode) = player.current_episode() else {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Select an episode to listen",
                theme.text_secondary_style(),
            )),
        ])
        .block(block)
        .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title + members
            Constraint::Length(1), // Progress gauge
            Constraint::Length(2), // Transport line
        ])
        .split(inner);

    let now_playing = Paragraph::new(vec![
        Line::from(Span::styled(
            episode.title.clone(),
            theme.accent_style().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            episode.members.clone(),
            theme.text_secondary_style(),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(now_playing, chunks[0]);

    let gauge = Gauge::default()
        .gauge_style(theme.success_style())
        .ratio(progress_ratio(progress, episode.duration))
        .label(format!("{} / {}", progress.as_hms(), episode.duration_hms()));
    frame.render_widget(gauge, chunks[1]);

    let status = if player.is_playing() {
        Span::styled(
            "▶ Playing",
            Style::default().fg(theme.playing).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            "⏸ Paused",
            Style::default().fg(theme.paused).add_modifier(Modifier::BOLD),
        )
    };

    let transport = Paragraph::new(vec![
        Line::from(vec![
            status,
            Span::raw("   "),
            flag_span("Shuffle", player.is_shuffling(), theme),
            Span::raw("   "),
            flag_span("Loop", player.is_looping(), theme),
        ]),
        Line::from(Span::styled(
            "Space: Play/Pause | n/b: Next/Prev | s: Shuffle | l: Loop | ←/→: Seek",
            theme.text_secondary_style(),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(transport, chunks[2]);
}

fn flag_span<'a>(name: &'a str, on: bool, theme: &Theme) -> Span<'a> {
    if on {
        Span::styled(format!("{}: on", name), theme.highlight_style())
    } else {
        Span::styled(format!("{}: off", name), theme.text_secondary_style())
    }
}

fn progress_ratio(progress: Duration, total: Duration) -> f64 {
    if total.is_zero() {
        return 0.0;
    }
    (progress.as_seconds() as f64 / total.as_seconds() as f64).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_ratio_zero_total() {
        assert_eq!(progress_ratio(Duration::from_seconds(10), Duration::ZERO), 0.0);
    }

    #[test]
    fn test_progress_ratio_midway() {
        let ratio = progress_ratio(Duration::from_seconds(50), Duration::from_seconds(100));
        assert!((ratio - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_ratio_clamped() {
        let ratio = progress_ratio(Duration::from_seconds(200), Duration::from_seconds(100));
        assert_eq!(ratio, 1.0);
    }
}
