//! Toasts, the leave confirmation and help, drawn over the wizard

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::centered_rect;
use crate::app::AppState;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::{BindingScope, KeybindingContext};
use crate::theme::{Styles, Theme};
use crate::toast::ToastLevel;

const TOAST_WIDTH: u16 = 44;

/// Stack of toasts in the top-right corner, newest at the bottom
pub fn render_toasts(f: &mut Frame, parent: Rect, state: &AppState) {
    if state.toasts.is_empty() || parent.width < TOAST_WIDTH + 2 {
        return;
    }

    let lines: Vec<Line> = state
        .toasts
        .iter()
        .map(|toast| {
            let icon = match toast.level {
                ToastLevel::Success => "ok",
                ToastLevel::Info => "i ",
                ToastLevel::Error => "!!",
            };
            Line::from(vec![
                Span::styled(format!("{} ", icon), Theme::toast_style(toast.level)),
                Span::styled(toast.message.clone(), Styles::text()),
            ])
        })
        .collect();

    let height = (lines.len() as u16 + 2).min(parent.height);
    let area = Rect::new(
        parent.x + parent.width - TOAST_WIDTH - 1,
        parent.y + 1,
        TOAST_WIDTH,
        height,
    );
    let border = state
        .toasts
        .latest()
        .map(|t| Theme::toast_style(t.level))
        .unwrap_or_else(Styles::border_inactive);

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).border_style(border))
            .style(Styles::panel_bg())
            .wrap(Wrap { trim: true }),
        area,
    );
}

pub fn render_confirm_exit(f: &mut Frame, parent: Rect) {
    let area = centered_rect(50, 30, parent);
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Leave the wizard?", Styles::warning())),
        Line::from(""),
        Line::from("The listing draft will be discarded."),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Styles::focused()),
            Span::raw(" Discard and quit   "),
            Span::styled("[N]", Styles::focused()),
            Span::raw(" Stay"),
        ]),
    ];

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Styles::error())
                    .title(" Confirm "),
            )
            .style(Styles::panel_bg_danger())
            .alignment(Alignment::Center),
        area,
    );
}

pub fn render_help(f: &mut Frame, scope: BindingScope, keybinding_ctx: &KeybindingContext) {
    HelpOverlay::new(scope, keybinding_ctx).render(f, f.area());
}
