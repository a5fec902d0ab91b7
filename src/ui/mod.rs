//! User interface rendering module
//!
//! - `header` - title bar, step progress gauge, wizard buttons, nav bar
//! - `screens` - one screen per wizard step
//! - `overlays` - toasts, the leave confirmation and help

mod header;
mod overlays;
pub mod screens;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::app::{AppMode, AppState};
use crate::components::keybindings::{BindingScope, KeybindingContext};
use crate::wizard::WizardStep;

/// UI renderer for the application
#[derive(Default)]
pub struct UiRenderer;

impl UiRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the complete UI for the current state
    pub fn render(&self, f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(1), // Progress
                Constraint::Min(6),    // Step content
                Constraint::Length(1), // Buttons
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        header::render_title(f, chunks[0], state);
        header::render_progress(f, chunks[1], state.wizard.step());

        match state.wizard.step() {
            WizardStep::Location => screens::render_location(f, chunks[2], state),
            WizardStep::PropertyType => screens::render_property_type(f, chunks[2], state),
            WizardStep::GeneralCharacteristics => {
                screens::render_characteristics(f, chunks[2], state)
            }
            WizardStep::InteriorEquipment => screens::render_interior(f, chunks[2], state),
            WizardStep::Price | WizardStep::Photos => {
                screens::render_coming_soon(f, chunks[2], state.wizard.step())
            }
        }

        header::render_buttons(f, chunks[3], state);

        let scope = BindingScope::for_state(state);
        header::render_nav_bar(f, chunks[4], scope, keybinding_ctx);

        overlays::render_toasts(f, f.area(), state);
        if state.mode == AppMode::ConfirmExit {
            overlays::render_confirm_exit(f, f.area());
        }
        if state.help_visible {
            overlays::render_help(f, scope, keybinding_ctx);
        }
    }
}

/// A rectangle of `percent_x` by `percent_y` centered in `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn render_to_text(state: &AppState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let ctx = KeybindingContext::new();
        terminal
            .draw(|f| UiRenderer::new().render(f, state, &ctx))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(50, 50, outer);
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 25);
        assert_eq!(inner.y, 10);
    }

    #[test]
    fn test_first_screen_shows_step_label() {
        let text = render_to_text(&AppState::default());
        assert!(text.contains("Step 1.1"));
        assert!(text.contains("Address"));
    }

    #[test]
    fn test_placeholder_shows_coming_soon() {
        use crate::draft::LatLng;
        use crate::types::PropertyCategory;

        let mut state = AppState::default();
        let w = &mut state.wizard;
        w.location.move_marker(LatLng::new(33.5731, -7.5898));
        w.handle_next().unwrap();
        w.property_type.select(PropertyCategory::Land);
        w.handle_next().unwrap();
        w.characteristics
            .set_text(crate::draft::CharField::LandArea, "300");
        w.handle_next().unwrap();
        w.handle_skip().unwrap();

        let text = render_to_text(&state);
        assert!(text.contains("Coming soon"));
        assert!(text.contains("Step 2"));
    }
}
