//! Application state definitions
//!
//! Everything the renderer reads and the input handler mutates lives in
//! [`AppState`]. The TUI is single-threaded, so the state is owned by the
//! event loop and passed by reference.

use std::path::PathBuf;

use crate::draft::ListingDraft;
use crate::toast::ToastQueue;
use crate::wizard::MultiStepListingForm;

/// Which part of the location step receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocationFocus {
    /// Address text with autocomplete
    #[default]
    Address,
    /// Arrow keys move the map pin
    Map,
}

/// Application operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Listing creation wizard
    Wizard,
    /// Asking whether to discard the draft and leave
    ConfirmExit,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub mode: AppMode,
    pub wizard: MultiStepListingForm,
    pub location_focus: LocationFocus,
    pub toasts: ToastQueue,
    pub help_visible: bool,
    /// Where Ctrl+S writes the draft, when enabled
    pub save_path: Option<PathBuf>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Wizard,
            wizard: MultiStepListingForm::new(),
            location_focus: LocationFocus::Address,
            toasts: ToastQueue::default(),
            help_visible: false,
            save_path: None,
        }
    }
}

impl AppState {
    pub fn new(toasts: ToastQueue, save_path: Option<PathBuf>) -> Self {
        Self {
            toasts,
            save_path,
            ..Default::default()
        }
    }

    /// Whether quitting now would throw away something the user entered
    pub fn has_unsaved_input(&self) -> bool {
        self.wizard.draft() != &ListingDraft::default()
            || !self.wizard.location.address.is_empty()
            || self.wizard.location.marker_position.is_some()
    }
}
