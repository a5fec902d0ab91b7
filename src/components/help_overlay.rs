//! Help overlay component
//!
//! Lists the bindings of the current scope in a centered window drawn over
//! the wizard.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::keybindings::{BindingScope, HelpSection, KeybindingContext};
use crate::theme::{Colors, Styles};
use crate::ui::centered_rect;

pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    pub fn new(scope: BindingScope, keybinding_ctx: &KeybindingContext) -> Self {
        let sections = keybinding_ctx.get_help_content(scope);
        Self {
            content: Self::build_content(&sections, scope),
        }
    }

    fn scope_name(scope: BindingScope) -> &'static str {
        match scope {
            BindingScope::LocationAddress => "Location: address",
            BindingScope::LocationMap => "Location: map",
            BindingScope::PropertyType => "Property type",
            BindingScope::Characteristics => "General characteristics",
            BindingScope::Interior => "Interior equipment",
            BindingScope::Placeholder => "Coming soon",
            BindingScope::ConfirmExit => "Leave wizard",
        }
    }

    fn build_content(sections: &[HelpSection], scope: BindingScope) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = vec![
            Line::from(Span::styled("  New listing help  ", Styles::title())),
            Line::from(""),
            Line::from(vec![
                Span::styled("Current: ", Styles::text_muted()),
                Span::styled(
                    Self::scope_name(scope),
                    ratatui::style::Style::default().fg(Colors::SECONDARY),
                ),
            ]),
            Line::from(""),
        ];

        for section in sections {
            lines.push(Line::from(Span::styled(
                format!("  {}  ", section.title),
                Styles::success(),
            )));
            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(format!("{:<10}", key), Styles::focused()),
                    Span::styled(description.clone(), Styles::text()),
                ]));
            }
            lines.push(Line::from(""));
        }
        lines
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.content
    }

    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let area = centered_rect(60, 70, parent);
        f.render_widget(Clear, area);
        let help = Paragraph::new(self.content.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Styles::border_active())
                    .title(" Help ")
                    .title_bottom(" F1 or Esc to close "),
            )
            .style(Styles::panel_bg())
            .wrap(Wrap { trim: false });
        f.render_widget(help, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_names_scope() {
        let overlay = HelpOverlay::new(BindingScope::Interior, &KeybindingContext::new());
        let text: Vec<String> = overlay
            .lines()
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert!(text.iter().any(|l| l.contains("Interior equipment")));
        assert!(text.iter().any(|l| l.contains("Skip")));
    }
}
