//! Search, author filter, sorting and pagination
//!
//! Search keystrokes are debounced: each one takes a ticket and only the
//! newest ticket reaches the store once the quiet window has passed.

use crate::app::{Message, State, UserFilter};
use crate::core::debounce::Ticket;
use crate::core::query::{FilterPatch, SortColumn};
use iced::Task;

pub(crate) fn handle_search_changed(state: &mut State, term: String) -> Task<Message> {
    state.search_input = term;
    let ticket = state.debouncer.schedule();
    Task::perform(state.debouncer.wait(ticket), Message::SearchDebounced)
}

/// Applies the search term if no newer keystroke arrived in the meantime
pub(crate) fn handle_search_debounced(state: &mut State, ticket: Ticket) {
    if !state.debouncer.is_current(ticket) {
        return;
    }
    if state.store.filters().search.as_deref().unwrap_or("") == state.search_input {
        return;
    }
    state
        .store
        .set_filters(FilterPatch::search(state.search_input.clone()));
}

/// Clears the search box immediately, bypassing the debounce window
pub(crate) fn handle_clear_search(state: &mut State) {
    state.debouncer.cancel();
    state.search_input.clear();
    if state.store.filters().search.is_some() {
        state.store.set_filters(FilterPatch::search(""));
    }
}

pub(crate) fn handle_user_filter_changed(state: &mut State, filter: UserFilter) {
    state.store.set_filters(FilterPatch::user_id(filter.user_id()));
}

pub(crate) fn handle_sort_clicked(state: &mut State, column: SortColumn) {
    state.store.toggle_sort(column);
}

pub(crate) fn handle_page_selected(state: &mut State, page: usize) {
    state.store.set_page(page);
}

pub(crate) fn handle_page_size_changed(state: &mut State, limit: usize) {
    state.store.set_limit(limit);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handlers::test_utils::create_loaded_state;
    use crate::core::query::SortDirection;

    #[test]
    fn test_search_waits_for_debounce() {
        let mut state = create_loaded_state(12);
        let _task = handle_search_changed(&mut state, "title 1".to_string());
        assert_eq!(state.search_input, "title 1");
        assert!(state.store.filters().search.is_none());
        assert_eq!(state.store.filtered_posts().len(), 12);
    }

    #[test]
    fn test_only_latest_keystroke_applies() {
        let mut state = create_loaded_state(12);
        // Ticket held by the first keystroke's pending task
        let stale = state.debouncer.schedule();
        let _ = handle_search_changed(&mut state, "title 1".to_string());

        handle_search_debounced(&mut state, stale);
        assert!(state.store.filters().search.is_none());
    }

    #[test]
    fn test_debounced_search_filters_and_resets_page() {
        let mut state = create_loaded_state(12);
        handle_page_selected(&mut state, 2);
        let _ = handle_search_changed(&mut state, "title 1".to_string());
        let ticket = state.debouncer.schedule();
        handle_search_debounced(&mut state, ticket);

        // "Post title 1", "Post title 10", "Post title 11", "Post title 12"
        assert_eq!(state.store.filtered_posts().len(), 4);
        assert_eq!(state.store.page(), 1);
    }

    #[test]
    fn test_clear_search_is_immediate() {
        let mut state = create_loaded_state(12);
        let _ = handle_search_changed(&mut state, "title 1".to_string());
        let ticket = state.debouncer.schedule();
        handle_search_debounced(&mut state, ticket);

        handle_clear_search(&mut state);
        assert!(state.search_input.is_empty());
        assert!(state.store.filters().search.is_none());
        assert_eq!(state.store.filtered_posts().len(), 12);
        assert!(!state.debouncer.is_current(ticket));
    }

    #[test]
    fn test_user_filter() {
        let mut state = create_loaded_state(12);
        handle_user_filter_changed(&mut state, UserFilter::User(2));
        assert!(state.store.filtered_posts().iter().all(|p| p.user_id == 2));
        assert_eq!(state.store.filtered_posts().len(), 4);

        handle_user_filter_changed(&mut state, UserFilter::All);
        assert_eq!(state.store.filtered_posts().len(), 12);
    }

    #[test]
    fn test_sort_click_toggles_direction() {
        let mut state = create_loaded_state(12);
        handle_sort_clicked(&mut state, SortColumn::Id);
        assert_eq!(state.store.sort().map(|s| s.direction), Some(SortDirection::Asc));
        handle_sort_clicked(&mut state, SortColumn::Id);
        assert_eq!(state.store.sort().map(|s| s.direction), Some(SortDirection::Desc));
        assert_eq!(state.store.visible_page()[0].id, 12);
    }

    #[test]
    fn test_page_size_change_returns_to_first_page() {
        let mut state = create_loaded_state(12);
        handle_page_selected(&mut state, 3);
        assert_eq!(state.store.page(), 3);
        handle_page_size_changed(&mut state, 10);
        assert_eq!(state.store.page(), 1);
        assert_eq!(state.store.visible_page().len(), 10);
    }

    #[test]
    fn test_page_is_clamped() {
        let mut state = create_loaded_state(12);
        handle_page_selected(&mut state, 99);
        assert_eq!(state.store.page(), 3);
    }
}
