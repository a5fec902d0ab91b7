//! Title bar, progress gauge, wizard buttons and navigation bar

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::app::AppState;
use crate::components::keybindings::{BindingScope, KeybindingContext};
use crate::components::nav_bar::NavBar;
use crate::theme::Styles;
use crate::wizard::WizardStep;

pub fn render_title(f: &mut Frame, area: Rect, state: &AppState) {
    let step = state.wizard.step();
    let title = Line::from(vec![
        Span::styled("New listing", Styles::title()),
        Span::styled("  |  ", Styles::text_muted()),
        Span::styled(step.title(), Styles::text()),
    ]);
    let widget = Paragraph::new(title)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_active()),
        )
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}

pub fn render_progress(f: &mut Frame, area: Rect, step: WizardStep) {
    let gauge = Gauge::default()
        .gauge_style(Styles::progress())
        .percent(u16::from(step.progress_percent()))
        .label(step.to_string());
    f.render_widget(gauge, area);
}

/// `Back`, `Skip` and `Next` buttons; unavailable ones are dimmed
pub fn render_buttons(f: &mut Frame, area: Rect, state: &AppState) {
    let step = state.wizard.step();
    let button = |label: &'static str, enabled: bool| {
        let style = if enabled {
            Styles::button_active()
        } else {
            Styles::button_disabled()
        };
        Span::styled(format!(" {} ", label), style)
    };

    let mut spans = vec![button("Back", step.previous().is_some())];
    if step.skip_target().is_some() {
        spans.push(Span::raw("  "));
        spans.push(button("Skip", true));
    }
    spans.push(Span::raw("  "));
    spans.push(button(
        "Next",
        step.next().is_some() && state.wizard.can_proceed(),
    ));

    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Right),
        area,
    );
}

pub fn render_nav_bar(
    f: &mut Frame,
    area: Rect,
    scope: BindingScope,
    keybinding_ctx: &KeybindingContext,
) {
    NavBar::new(keybinding_ctx.get_nav_items(scope)).render(f, area);
}
