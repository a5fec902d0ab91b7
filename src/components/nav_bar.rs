//! Bottom navigation bar showing the active keybindings

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::keybindings::NavBarItem;
use crate::theme::{Colors, Styles};

pub struct NavBar {
    items: Vec<NavBarItem>,
}

impl NavBar {
    pub fn new(items: Vec<NavBarItem>) -> Self {
        Self { items }
    }

    /// Spans in the form `[Key] Label  [Key] Label`
    pub fn spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::with_capacity(self.items.len() * 3);
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                format!("[{}]", item.key_display),
                Styles::focused(),
            ));
            spans.push(Span::styled(
                format!(" {}", item.action_label),
                Styles::nav_hint(),
            ));
        }
        spans
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let bar = Paragraph::new(Line::from(self.spans()))
            .style(ratatui::style::Style::default().bg(Colors::BG_PRIMARY));
        f.render_widget(bar, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::keybindings::{BindingScope, KeybindingContext};

    #[test]
    fn test_spans_render_keys_in_brackets() {
        let ctx = KeybindingContext::new();
        let bar = NavBar::new(ctx.get_nav_items(BindingScope::Placeholder));
        let text: String = bar.spans().iter().map(|s| s.content.as_ref()).collect();
        assert!(text.starts_with("[Enter] Next"));
        assert!(text.contains("[Esc] Back"));
    }
}
