//! UI state management
//!
//! Handles UI state changes:
//! - Theme toggle and settings persistence feedback
//! - Error banner dismissal
//! - Keyboard shortcuts

use crate::app::{Message, State};
use iced::Task;
use iced::keyboard::{self, Key, Modifiers, key::Named};

/// Handles the light/dark toggle. The caller persists the config.
pub(crate) fn handle_theme_toggled(state: &mut State) {
    state.current_theme = state.current_theme.toggled();
    state.theme = state.current_theme.to_theme();
    tracing::debug!("Theme changed to {}", state.current_theme);
}

pub(crate) fn handle_config_saved(state: &mut State, result: Result<(), String>) {
    if let Err(e) = result {
        tracing::error!("Failed to save configuration: {}", e);
        state.toasts.warning("Settings could not be saved");
    }
}

pub(crate) fn handle_dismiss_error(state: &mut State) {
    state.last_error = None;
    state.store.clear_error();
}

/// Keyboard shortcuts:
/// - `Ctrl+N`: new post (when no dialog is open)
/// - `Esc`: close the topmost dialog, otherwise clear the search
/// - `Enter`: submit the form or confirm the pending delete
pub(crate) fn handle_event(state: &mut State, event: &iced::Event) -> Task<Message> {
    let iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event else {
        return Task::none();
    };

    match shortcut(state, key.as_ref(), *modifiers) {
        Some(message) => Task::done(message),
        None => Task::none(),
    }
}

/// Message bound to `key` in the current state. The delete dialog sits above
/// the post form, which sits above the list.
fn shortcut(state: &State, key: Key<&str>, modifiers: Modifiers) -> Option<Message> {
    match key {
        Key::Named(Named::Enter) => {
            if state.deleting_id.is_some() {
                Some(Message::ConfirmDelete)
            } else if state.post_form.is_some() {
                Some(Message::SubmitForm)
            } else {
                None
            }
        }
        Key::Named(Named::Escape) => {
            if state.deleting_id.is_some() {
                Some(Message::CancelDelete)
            } else if state.post_form.is_some() {
                Some(Message::CancelForm)
            } else if !state.search_input.is_empty() {
                Some(Message::ClearSearch)
            } else {
                None
            }
        }
        Key::Character("n") if modifiers.command() || modifiers.control() => {
            (!state.has_modal()).then_some(Message::NewPostClicked)
        }
        _ => None,
    }
}
