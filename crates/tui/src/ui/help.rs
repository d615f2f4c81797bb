//! Help view rendering

use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the help view
pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
    let rows = [
        ("↑/↓, k/j", "Navigate the episode listing"),
        ("Enter", "Play the listing from the selected episode"),
        ("o", "Open episode details"),
        ("p", "Play the detailed episode on its own"),
        ("Space", "Play / pause"),
        ("n / b", "Next / previous episode"),
        ("s", "Toggle shuffle"),
        ("l", "Toggle loop"),
        ("←/→", "Seek backward / forward"),
        ("t", "Switch theme"),
        ("h", "Toggle this help"),
        ("Esc", "Back to home"),
        ("q", "Quit"),
    ];

    let mut lines = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            theme.accent_style().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(rows.iter().map(|(keys, action)| {
        Line::from(vec![
            Span::styled(format!("{:>10}  ", keys), theme.highlight_style()),
            Span::styled(*action, theme.text_style()),
        ])
    }));

    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_color()))
                .title("Help"),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help, area);
}
