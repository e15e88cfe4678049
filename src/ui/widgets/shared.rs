use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::ui::theme::Theme;

pub(super) fn panel_block(title: String, theme: &Theme, focused: bool) -> Block<'static> {
    let (border, title_style) = if focused {
        (
            theme.focus_border,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (theme.border, Style::default().fg(theme.text))
    };
    Block::default()
        .borders(Borders::ALL)
        .title(Line::from(Span::styled(title, title_style)))
        .border_style(Style::default().fg(border))
}
