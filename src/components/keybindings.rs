//! Keybinding registry for the wizard
//!
//! Bindings depend on what has keyboard focus. The same registry resolves
//! key events into [`KeyAction`]s and feeds the nav bar and help overlay,
//! so what is shown is what is handled.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{AppMode, AppState, LocationFocus};
use crate::wizard::WizardStep;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    FocusNext,
    FocusPrevious,
    /// Tab on the location step: address field <-> map
    SwitchPane,
    PinNorth,
    PinSouth,
    PinWest,
    PinEast,
    Toggle,
    Next,
    Back,
    Skip,
    SaveDraft,
    Confirm,
    Cancel,
    Help,
    Quit,
}

/// Where keys are currently routed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingScope {
    /// Typing the address; printable keys are text
    LocationAddress,
    LocationMap,
    PropertyType,
    Characteristics,
    Interior,
    Placeholder,
    ConfirmExit,
}

impl BindingScope {
    pub fn for_state(state: &AppState) -> Self {
        if state.mode == AppMode::ConfirmExit {
            return Self::ConfirmExit;
        }
        match state.wizard.step() {
            WizardStep::Location => match state.location_focus {
                LocationFocus::Address => Self::LocationAddress,
                LocationFocus::Map => Self::LocationMap,
            },
            WizardStep::PropertyType => Self::PropertyType,
            WizardStep::GeneralCharacteristics => Self::Characteristics,
            WizardStep::InteriorEquipment => Self::Interior,
            WizardStep::Price | WizardStep::Photos => Self::Placeholder,
        }
    }

    /// Whether printable characters are consumed as text
    pub const fn captures_text(self) -> bool {
        matches!(self, Self::LocationAddress)
    }
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self::with_modifiers(key, KeyModifiers::NONE, action, display, description)
    }

    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether `event` triggers this binding. Shift is ignored for
    /// character keys since terminals report it inconsistently.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if self.key != event.code {
            return false;
        }
        let mods = match event.code {
            KeyCode::Char(_) | KeyCode::BackTab => event.modifiers.difference(KeyModifiers::SHIFT),
            _ => event.modifiers,
        };
        mods == self.modifiers
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    scope_bindings: HashMap<BindingScope, Vec<Keybinding>>,
    /// Available in every scope
    global_bindings: Vec<Keybinding>,
    /// Available in scopes that do not capture text
    shortcut_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    pub fn new() -> Self {
        let mut ctx = Self {
            scope_bindings: HashMap::new(),
            global_bindings: Vec::new(),
            shortcut_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    fn register_defaults(&mut self) {
        use KeyAction::*;

        self.global_bindings = vec![
            Keybinding::with_modifiers(
                KeyCode::Char('s'),
                KeyModifiers::CONTROL,
                SaveDraft,
                "Ctrl+S",
                "Save draft",
            ),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                Quit,
                "Ctrl+C",
                "Quit",
            ),
            Keybinding::new(KeyCode::F(1), Help, "F1", "Help"),
        ];
        self.shortcut_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), Quit, "Q", "Quit"),
        ];

        let next = Keybinding::new(KeyCode::Enter, Next, "Enter", "Next");
        let back = Keybinding::new(KeyCode::Esc, Back, "Esc", "Back");

        self.scope_bindings.insert(
            BindingScope::LocationAddress,
            vec![
                Keybinding::new(KeyCode::Up, NavigateUp, "Up", "Previous suggestion"),
                Keybinding::new(KeyCode::Down, NavigateDown, "Down", "Next suggestion"),
                Keybinding::new(KeyCode::Enter, Next, "Enter", "Pick suggestion / Next"),
                Keybinding::new(KeyCode::Tab, SwitchPane, "Tab", "Map"),
            ],
        );

        self.scope_bindings.insert(
            BindingScope::LocationMap,
            vec![
                Keybinding::new(KeyCode::Up, PinNorth, "Up", "Move pin north"),
                Keybinding::new(KeyCode::Down, PinSouth, "Down", "Move pin south"),
                Keybinding::new(KeyCode::Left, PinWest, "Left", "Move pin west"),
                Keybinding::new(KeyCode::Right, PinEast, "Right", "Move pin east"),
                next.clone(),
                Keybinding::new(KeyCode::Tab, SwitchPane, "Tab", "Address"),
            ],
        );

        self.scope_bindings.insert(
            BindingScope::PropertyType,
            vec![
                Keybinding::new(KeyCode::Up, NavigateUp, "Up", "Navigate up"),
                Keybinding::new(KeyCode::Down, NavigateDown, "Down", "Navigate down"),
                Keybinding::new(KeyCode::Char(' '), Toggle, "Space", "Choose"),
                next.clone(),
                back.clone(),
            ],
        );

        self.scope_bindings.insert(
            BindingScope::Characteristics,
            vec![
                Keybinding::new(KeyCode::Tab, FocusNext, "Tab", "Next field"),
                Keybinding::new(KeyCode::BackTab, FocusPrevious, "S-Tab", "Previous field"),
                Keybinding::new(KeyCode::Down, FocusNext, "Down", "Next field"),
                Keybinding::new(KeyCode::Up, FocusPrevious, "Up", "Previous field"),
                Keybinding::new(KeyCode::Char(' '), Toggle, "Space", "Toggle / cycle"),
                next.clone(),
                back.clone(),
            ],
        );

        self.scope_bindings.insert(
            BindingScope::Interior,
            vec![
                Keybinding::new(KeyCode::Up, NavigateUp, "Up", "Navigate up"),
                Keybinding::new(KeyCode::Down, NavigateDown, "Down", "Navigate down"),
                Keybinding::new(KeyCode::Char(' '), Toggle, "Space", "Toggle"),
                Keybinding::new(KeyCode::Char('s'), Skip, "S", "Skip"),
                next.clone(),
                back.clone(),
            ],
        );

        self.scope_bindings
            .insert(BindingScope::Placeholder, vec![next, back]);

        self.scope_bindings.insert(
            BindingScope::ConfirmExit,
            vec![
                Keybinding::new(KeyCode::Char('y'), Confirm, "Y", "Discard and quit"),
                Keybinding::new(KeyCode::Enter, Confirm, "Enter", "Discard and quit"),
                Keybinding::new(KeyCode::Char('n'), Cancel, "N", "Stay"),
                Keybinding::new(KeyCode::Esc, Cancel, "Esc", "Stay"),
            ],
        );
    }

    /// All bindings active in `scope`, scope-specific first
    pub fn get_bindings(&self, scope: BindingScope) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();
        if let Some(scope_bindings) = self.scope_bindings.get(&scope) {
            bindings.extend(scope_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());
        if !scope.captures_text() && scope != BindingScope::ConfirmExit {
            bindings.extend(self.shortcut_bindings.iter());
        }
        bindings
    }

    /// Map a key event to an action, if any binding matches
    pub fn resolve(&self, scope: BindingScope, event: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(scope)
            .into_iter()
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Nav bar items, in display order
    pub fn get_nav_items(&self, scope: BindingScope) -> Vec<NavBarItem> {
        use KeyAction::*;

        let priority_actions: &[KeyAction] = match scope {
            BindingScope::LocationAddress => &[NavigateUp, SwitchPane, Next, SaveDraft, Quit],
            BindingScope::LocationMap => &[PinNorth, SwitchPane, Next, Help, Quit],
            BindingScope::PropertyType => &[NavigateUp, Toggle, Next, Back, Help, Quit],
            BindingScope::Characteristics => &[FocusNext, Toggle, Next, Back, Help, Quit],
            BindingScope::Interior => &[NavigateUp, Toggle, Skip, Next, Back, Help],
            BindingScope::Placeholder => &[Next, Back, SaveDraft, Help, Quit],
            BindingScope::ConfirmExit => &[Confirm, Cancel],
        };

        let bindings = self.get_bindings(scope);
        let mut items = Vec::new();
        for action in priority_actions {
            let item = match action {
                NavigateUp => Some(NavBarItem::new("Up/Dn", "Navigate")),
                PinNorth => Some(NavBarItem::new("Arrows", "Move pin")),
                FocusNext => Some(NavBarItem::new("Tab/S-Tab", "Field")),
                _ => bindings
                    .iter()
                    .find(|b| b.action == *action)
                    .map(|b| NavBarItem::new(&b.display, &b.description)),
            };
            items.extend(item);
        }
        items
    }

    /// Full help content for the help overlay
    pub fn get_help_content(&self, scope: BindingScope) -> Vec<HelpSection> {
        use KeyAction::*;

        let groups: [(&str, fn(KeyAction) -> bool); 3] = [
            ("Navigation", |a| {
                matches!(
                    a,
                    NavigateUp
                        | NavigateDown
                        | FocusNext
                        | FocusPrevious
                        | SwitchPane
                        | PinNorth
                        | PinSouth
                        | PinWest
                        | PinEast
                )
            }),
            ("Actions", |a| {
                matches!(a, Toggle | Next | Skip | SaveDraft | Confirm | Cancel)
            }),
            ("General", |a| matches!(a, Back | Help | Quit)),
        ];

        let bindings = self.get_bindings(scope);
        groups
            .iter()
            .filter_map(|(title, belongs)| {
                let items: Vec<(String, String)> = bindings
                    .iter()
                    .filter(|b| belongs(b.action))
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect();
                (!items.is_empty()).then(|| HelpSection {
                    title: title.to_string(),
                    items,
                })
            })
            .collect()
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

impl NavBarItem {
    fn new(key_display: &str, action_label: &str) -> Self {
        Self {
            key_display: key_display.to_string(),
            action_label: action_label.to_string(),
        }
    }
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_q_is_text_in_address_field() {
        let ctx = KeybindingContext::new();
        let q = key(KeyCode::Char('q'));
        assert_eq!(ctx.resolve(BindingScope::LocationAddress, &q), None);
        assert_eq!(ctx.resolve(BindingScope::PropertyType, &q), Some(KeyAction::Quit));
    }

    #[test]
    fn test_ctrl_bindings_everywhere() {
        let ctx = KeybindingContext::new();
        for scope in [
            BindingScope::LocationAddress,
            BindingScope::Characteristics,
            BindingScope::Placeholder,
        ] {
            assert_eq!(ctx.resolve(scope, &ctrl('c')), Some(KeyAction::Quit));
            assert_eq!(ctx.resolve(scope, &ctrl('s')), Some(KeyAction::SaveDraft));
        }
    }

    #[test]
    fn test_skip_only_bound_on_interior() {
        let ctx = KeybindingContext::new();
        let s = key(KeyCode::Char('s'));
        assert_eq!(ctx.resolve(BindingScope::Interior, &s), Some(KeyAction::Skip));
        assert_eq!(ctx.resolve(BindingScope::PropertyType, &s), None);
        assert_eq!(ctx.resolve(BindingScope::Placeholder, &s), None);
    }

    #[test]
    fn test_backtab_with_shift() {
        let ctx = KeybindingContext::new();
        let ev = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(
            ctx.resolve(BindingScope::Characteristics, &ev),
            Some(KeyAction::FocusPrevious)
        );
    }

    #[test]
    fn test_nav_items_for_interior_mention_skip() {
        let ctx = KeybindingContext::new();
        let items = ctx.get_nav_items(BindingScope::Interior);
        assert!(items.iter().any(|i| i.action_label == "Skip"));
        assert_eq!(items[0].key_display, "Up/Dn");
    }

    #[test]
    fn test_help_content_sections() {
        let ctx = KeybindingContext::new();
        let sections = ctx.get_help_content(BindingScope::LocationMap);
        let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Navigation", "Actions", "General"]);
    }

    #[test]
    fn test_confirm_exit_has_no_shortcuts() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.resolve(BindingScope::ConfirmExit, &key(KeyCode::Char('q'))),
            None
        );
        assert_eq!(
            ctx.resolve(BindingScope::ConfirmExit, &key(KeyCode::Char('y'))),
            Some(KeyAction::Confirm)
        );
    }
}
