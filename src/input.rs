//! Keyboard input handling
//!
//! Key events are resolved through the [`KeybindingContext`] for the
//! current [`BindingScope`] and applied to the [`AppState`]. Keys with no
//! binding are typed into the focused text field, if there is one.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info, warn};

use crate::app::{AppMode, AppState, LocationFocus};
use crate::components::keybindings::{BindingScope, KeyAction, KeybindingContext};
use crate::wizard::{WizardStep, WizardTransitionError};

/// What the event loop should do after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

/// Input handler for the wizard
#[derive(Default)]
pub struct InputHandler {
    keybindings: KeybindingContext,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keybindings(&self) -> &KeybindingContext {
        &self.keybindings
    }

    /// Apply one key event to the state
    pub fn handle_key(&self, state: &mut AppState, event: KeyEvent) -> KeyOutcome {
        if event.kind != KeyEventKind::Press {
            return KeyOutcome::Continue;
        }

        let scope = BindingScope::for_state(state);

        if state.help_visible {
            return self.handle_help_key(state, scope, &event);
        }

        match self.keybindings.resolve(scope, &event) {
            Some(action) => self.apply(state, action),
            None => {
                type_into_field(state, scope, &event);
                KeyOutcome::Continue
            }
        }
    }

    fn handle_help_key(
        &self,
        state: &mut AppState,
        scope: BindingScope,
        event: &KeyEvent,
    ) -> KeyOutcome {
        match self.keybindings.resolve(scope, event) {
            Some(KeyAction::Quit) if event.modifiers.contains(KeyModifiers::CONTROL) => {
                KeyOutcome::Quit
            }
            Some(KeyAction::Help) => {
                state.help_visible = false;
                KeyOutcome::Continue
            }
            _ => {
                if event.code == KeyCode::Esc {
                    state.help_visible = false;
                }
                KeyOutcome::Continue
            }
        }
    }

    fn apply(&self, state: &mut AppState, action: KeyAction) -> KeyOutcome {
        debug!(?action, step = %state.wizard.step(), "Key action");
        let step = state.wizard.step();

        match action {
            KeyAction::Quit => {
                if state.has_unsaved_input() {
                    state.mode = AppMode::ConfirmExit;
                } else {
                    return KeyOutcome::Quit;
                }
            }
            KeyAction::Confirm => {
                info!("Wizard left, draft discarded");
                return KeyOutcome::Quit;
            }
            KeyAction::Cancel => state.mode = AppMode::Wizard,
            KeyAction::Help => state.help_visible = true,
            KeyAction::SaveDraft => save_draft(state),

            KeyAction::Next => {
                if step == WizardStep::Location
                    && state.location_focus == LocationFocus::Address
                    && state.wizard.location.select_highlighted()
                {
                    return KeyOutcome::Continue;
                }
                match state.wizard.handle_next() {
                    Ok(_) => state.location_focus = LocationFocus::Address,
                    Err(e) => report_refused(state, e),
                }
            }
            KeyAction::Back => {
                if let Err(e) = state.wizard.handle_back() {
                    debug!("{}", e);
                }
            }
            KeyAction::Skip => match state.wizard.handle_skip() {
                Ok(_) => state.toasts.info("Interior equipment skipped"),
                Err(e) => report_refused(state, e),
            },

            KeyAction::NavigateUp | KeyAction::NavigateDown => {
                let up = action == KeyAction::NavigateUp;
                let wizard = &mut state.wizard;
                match step {
                    WizardStep::Location if up => wizard.location.highlight_previous(),
                    WizardStep::Location => wizard.location.highlight_next(),
                    WizardStep::PropertyType if up => wizard.property_type.highlight_previous(),
                    WizardStep::PropertyType => wizard.property_type.highlight_next(),
                    WizardStep::InteriorEquipment if up => wizard.interior.focus_previous(),
                    WizardStep::InteriorEquipment => wizard.interior.focus_next(),
                    _ => {}
                }
            }
            KeyAction::FocusNext => state.wizard.characteristics.focus_next(),
            KeyAction::FocusPrevious => state.wizard.characteristics.focus_previous(),
            KeyAction::SwitchPane => {
                state.location_focus = match state.location_focus {
                    LocationFocus::Address => LocationFocus::Map,
                    LocationFocus::Map => LocationFocus::Address,
                };
            }
            KeyAction::PinNorth => state.wizard.location.nudge_marker(1, 0),
            KeyAction::PinSouth => state.wizard.location.nudge_marker(-1, 0),
            KeyAction::PinWest => state.wizard.location.nudge_marker(0, -1),
            KeyAction::PinEast => state.wizard.location.nudge_marker(0, 1),
            KeyAction::Toggle => match step {
                WizardStep::PropertyType => state.wizard.property_type.select_highlighted(),
                WizardStep::GeneralCharacteristics => {
                    state.wizard.characteristics.activate_focused()
                }
                WizardStep::InteriorEquipment => state.wizard.interior.toggle_focused(),
                _ => {}
            },
        }
        KeyOutcome::Continue
    }
}

/// Unbound printable keys and Backspace edit the focused text field
fn type_into_field(state: &mut AppState, scope: BindingScope, event: &KeyEvent) {
    if event.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return;
    }
    match (scope, event.code) {
        (BindingScope::LocationAddress, KeyCode::Char(c)) => state.wizard.location.push_char(c),
        (BindingScope::LocationAddress, KeyCode::Backspace) => state.wizard.location.pop_char(),
        (BindingScope::Characteristics, KeyCode::Char(c)) => {
            state.wizard.characteristics.push_char(c)
        }
        (BindingScope::Characteristics, KeyCode::Backspace) => {
            state.wizard.characteristics.pop_char()
        }
        _ => {}
    }
}

fn report_refused(state: &mut AppState, err: WizardTransitionError) {
    debug!("Transition refused: {}", err);
    let message = match err {
        WizardTransitionError::StepIncomplete { .. } => {
            "Fill in the required fields to continue".to_string()
        }
        WizardTransitionError::AtLastStep { .. } => "Photos are coming soon".to_string(),
        other => other.to_string(),
    };
    state.toasts.info(message);
}

fn save_draft(state: &mut AppState) {
    let Some(path) = state.save_path.clone() else {
        state
            .toasts
            .info("Saving is off; start with --save-draft PATH");
        return;
    };
    match state.wizard.draft().save_to_file(&path) {
        Ok(()) => {
            info!(path = %path.display(), "Draft saved");
            state
                .toasts
                .success(format!("Draft saved to {}", path.display()));
        }
        Err(e) => {
            warn!("Failed to save draft: {:#}", e);
            state.toasts.error("Could not save draft");
        }
    }
}
