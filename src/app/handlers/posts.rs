//! Post loading and CRUD
//!
//! Requests run as [`Task::perform`] futures on a clone of the API client.
//! Their results come back as messages and are reported to the store:
//! - Initial load of posts and users
//! - Create and update via the post form
//! - Delete after confirmation

use crate::app::forms::PostForm;
use crate::app::{Message, State, UserOption};
use crate::core::api::INITIAL_LOAD_LIMIT;
use crate::core::error::{Error, ErrorTranslation};
use crate::core::post::{Post, User};
use crate::journal::Operation;
use iced::Task;

/// Logs a failed request and converts it into a message-friendly form
fn translate_error(op: Operation, error: &Error) -> ErrorTranslation {
    tracing::error!("{:?} request failed: {}", op, error);
    error.translate()
}

/// Handles (re)loading the post list
pub(crate) fn handle_load_posts(state: &mut State) -> Task<Message> {
    state.store.begin(Operation::Load);
    state.last_error = None;
    let api = state.api.clone();
    Task::perform(
        async move {
            api.list_posts(Some(INITIAL_LOAD_LIMIT))
                .await
                .map_err(|e| translate_error(Operation::Load, &e))
        },
        Message::PostsLoaded,
    )
}

pub(crate) fn handle_posts_loaded(state: &mut State, result: Result<Vec<Post>, ErrorTranslation>) {
    match result {
        Ok(posts) => {
            tracing::info!("Loaded {} posts", posts.len());
            state.store.load_succeeded(posts);
        }
        Err(translation) => {
            state
                .store
                .failed(Operation::Load, translation.user_message.clone());
            state.toasts.error(Operation::Load.failure_message());
            state.last_error = Some(translation);
        }
    }
}

/// Fetches the user list for author names. Failure only costs the names.
pub(crate) fn handle_load_users(state: &State) -> Task<Message> {
    let api = state.api.clone();
    Task::perform(
        async move {
            api.list_users().await.map_err(|e| {
                tracing::warn!("Could not load users: {}", e);
                e.translate()
            })
        },
        Message::UsersLoaded,
    )
}

pub(crate) fn handle_users_loaded(state: &mut State, result: Result<Vec<User>, ErrorTranslation>) {
    if let Ok(users) = result {
        tracing::debug!("Loaded {} users", users.len());
        state.users = users;
    }
}

/// Handles opening the "New Post" form
pub(crate) fn handle_new_post_clicked(state: &mut State) {
    if state.has_modal() {
        return;
    }
    state.post_form = Some(PostForm::default());
}

/// Handles opening the "Edit Post" form
pub(crate) fn handle_edit_post_clicked(state: &mut State, id: i64) {
    if state.has_modal() {
        return;
    }
    match state.store.find(id) {
        Some(post) => state.post_form = Some(PostForm::from_post(post)),
        None => tracing::warn!("Edit requested for unknown post {}", id),
    }
}

pub(crate) fn handle_form_title_changed(state: &mut State, title: String) {
    if let Some(form) = &mut state.post_form {
        form.set_title(title);
    }
}

pub(crate) fn handle_form_body_changed(state: &mut State, body: String) {
    if let Some(form) = &mut state.post_form {
        form.set_body(body);
    }
}

pub(crate) fn handle_form_user_selected(state: &mut State, option: &UserOption) {
    if let Some(form) = &mut state.post_form {
        form.set_user_id(option.id);
    }
}

pub(crate) fn handle_cancel_form(state: &mut State) {
    state.post_form = None;
}

/// Handles saving a new or edited post
///
/// Touches every field first so all errors show. Nothing is sent while the
/// form is invalid or a previous submit is still in flight.
pub(crate) fn handle_submit_form(state: &mut State) -> Task<Message> {
    let Some(form) = &mut state.post_form else {
        return Task::none();
    };
    form.touch_all();
    if form.submitting {
        return Task::none();
    }
    let Some(payload) = form.to_new_post() else {
        return Task::none();
    };
    form.submitting = true;
    let editing = form.editing;
    let api = state.api.clone();

    if let Some(id) = editing {
        state.store.begin(Operation::Update);
        Task::perform(
            async move {
                api.update_post(id, &payload)
                    .await
                    .map_err(|e| translate_error(Operation::Update, &e))
            },
            move |result| Message::PostUpdated(id, result),
        )
    } else {
        state.store.begin(Operation::Create);
        Task::perform(
            async move {
                api.create_post(&payload)
                    .await
                    .map_err(|e| translate_error(Operation::Create, &e))
            },
            Message::PostCreated,
        )
    }
}

/// Re-enables the form after a failed submit so the user can retry
fn submit_failed(state: &mut State, op: Operation, translation: &ErrorTranslation) {
    state.store.failed(op, translation.user_message.clone());
    if let Some(form) = &mut state.post_form {
        form.submitting = false;
    }
    state.toasts.error(format!(
        "{}: {}",
        op.failure_message(),
        translation.user_message
    ));
}

pub(crate) fn handle_post_created(state: &mut State, result: Result<Post, ErrorTranslation>) {
    match result {
        Ok(post) => {
            let stored = state.store.create_succeeded(post);
            tracing::info!("Created post {}", stored.id);
            state.post_form = None;
            state.toasts.success("Post created successfully");
        }
        Err(translation) => submit_failed(state, Operation::Create, &translation),
    }
}

pub(crate) fn handle_post_updated(
    state: &mut State,
    id: i64,
    result: Result<Post, ErrorTranslation>,
) {
    match result {
        Ok(post) => {
            if state.store.update_succeeded(id, post) {
                tracing::info!("Updated post {}", id);
                state.toasts.success("Post updated successfully");
            } else {
                state.toasts.warning("Post no longer exists");
            }
            state.post_form = None;
        }
        Err(translation) => submit_failed(state, Operation::Update, &translation),
    }
}

/// Handles the row's delete button (shows confirmation)
pub(crate) fn handle_delete_post_requested(state: &mut State, id: i64) {
    state.deleting_id = Some(id);
}

pub(crate) fn handle_cancel_delete(state: &mut State) {
    state.deleting_id = None;
}

pub(crate) fn handle_confirm_delete(state: &mut State) -> Task<Message> {
    let Some(id) = state.deleting_id.take() else {
        return Task::none();
    };
    state.store.begin(Operation::Delete);
    let api = state.api.clone();
    Task::perform(
        async move {
            api.delete_post(id)
                .await
                .map_err(|e| translate_error(Operation::Delete, &e))
        },
        move |result| Message::PostDeleted(id, result),
    )
}

pub(crate) fn handle_post_deleted(state: &mut State, id: i64, result: Result<(), ErrorTranslation>) {
    match result {
        Ok(()) => {
            state.store.delete_succeeded(id);
            tracing::info!("Deleted post {}", id);
            state.toasts.success("Post deleted successfully");
        }
        Err(translation) => {
            state
                .store
                .failed(Operation::Delete, translation.user_message.clone());
            state.toasts.error(format!(
                "{}: {}",
                Operation::Delete.failure_message(),
                translation.user_message
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handlers::test_utils::{create_loaded_state, create_test_post, create_test_state};
    use crate::toast::ToastKind;

    fn not_found() -> ErrorTranslation {
        ErrorTranslation::new("Post not found")
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = create_test_state();
        assert!(state.store.is_loading());
        assert!(state.store.posts().is_empty());
    }

    #[test]
    fn test_posts_loaded_fills_store() {
        let state = create_loaded_state(12);
        assert!(!state.store.is_loading());
        assert_eq!(state.store.posts().len(), 12);
        assert_eq!(state.store.visible_page().len(), 5);
    }

    #[test]
    fn test_failed_load_sets_banner_and_toast() {
        let mut state = create_test_state();
        handle_posts_loaded(&mut state, Err(ErrorTranslation::new("Could not reach the API")));
        assert_eq!(state.store.error(), Some("Could not reach the API"));
        assert!(state.last_error.is_some());
        assert_eq!(state.toasts.visible().next().map(|t| t.kind), Some(ToastKind::Error));
    }

    #[test]
    fn test_retry_clears_banner() {
        let mut state = create_test_state();
        handle_posts_loaded(&mut state, Err(not_found()));
        let _task = handle_load_posts(&mut state);
        assert!(state.last_error.is_none());
        assert!(state.store.error().is_none());
    }

    #[test]
    fn test_edit_does_not_replace_open_form() {
        let mut state = create_loaded_state(3);
        handle_new_post_clicked(&mut state);
        handle_form_title_changed(&mut state, "Draft title".to_string());

        handle_edit_post_clicked(&mut state, 2);
        let form = state.post_form.as_ref().unwrap();
        assert!(!form.is_editing());
        assert_eq!(form.title, "Draft title");
    }

    #[test]
    fn test_edit_ignored_while_delete_pending() {
        let mut state = create_loaded_state(3);
        state.deleting_id = Some(1);
        handle_edit_post_clicked(&mut state, 2);
        assert!(state.post_form.is_none());
    }

    #[test]
    fn test_users_loaded_provide_names() {
        let mut state = create_test_state();
        let user: User =
            serde_json::from_str(r#"{"id":1,"name":"Leanne Graham","username":"Bret"}"#).unwrap();
        handle_users_loaded(&mut state, Ok(vec![user]));
        assert_eq!(state.user_label(1), "Leanne Graham");
        assert_eq!(state.user_label(2), "User 2");
    }

    #[test]
    fn test_invalid_submit_touches_fields_and_sends_nothing() {
        let mut state = create_loaded_state(3);
        handle_new_post_clicked(&mut state);
        let _task = handle_submit_form(&mut state);

        let form = state.post_form.as_ref().unwrap();
        assert!(!form.submitting);
        assert_eq!(form.visible_errors().title.as_deref(), Some("Title is required"));
        assert!(!state.store.is_loading());
    }

    #[test]
    fn test_valid_submit_marks_form_busy() {
        let mut state = create_loaded_state(3);
        handle_new_post_clicked(&mut state);
        handle_form_title_changed(&mut state, "A new post".to_string());
        handle_form_body_changed(&mut state, "Plenty of body text".to_string());
        handle_form_user_selected(&mut state, &UserOption { id: 2, name: None });

        let _task = handle_submit_form(&mut state);
        assert!(state.post_form.as_ref().unwrap().submitting);
        assert!(state.store.is_loading());
    }

    #[test]
    fn test_created_post_is_prepended_and_form_closes() {
        let mut state = create_loaded_state(3);
        handle_new_post_clicked(&mut state);
        handle_post_created(&mut state, Ok(Post::new(101, 1, "Fresh", "Fresh body text")));

        assert!(state.post_form.is_none());
        assert_eq!(state.store.posts()[0].id, 101);
        assert_eq!(
            state.toasts.visible().last().map(|t| t.message.as_str()),
            Some("Post created successfully")
        );
    }

    #[test]
    fn test_failed_create_keeps_form_open() {
        let mut state = create_loaded_state(3);
        handle_new_post_clicked(&mut state);
        if let Some(form) = &mut state.post_form {
            form.submitting = true;
        }
        handle_post_created(&mut state, Err(ErrorTranslation::new("Server error (500)")));

        let form = state.post_form.as_ref().unwrap();
        assert!(!form.submitting);
        assert_eq!(state.store.posts().len(), 3);
    }

    #[test]
    fn test_edit_prefills_form() {
        let mut state = create_loaded_state(3);
        handle_edit_post_clicked(&mut state, 2);
        let form = state.post_form.as_ref().unwrap();
        assert_eq!(form.editing, Some(2));
        assert_eq!(form.title, "Post title 2");
    }

    #[test]
    fn test_edit_unknown_post_is_ignored() {
        let mut state = create_loaded_state(3);
        handle_edit_post_clicked(&mut state, 99);
        assert!(state.post_form.is_none());
    }

    #[test]
    fn test_updated_post_replaces_original() {
        let mut state = create_loaded_state(3);
        handle_edit_post_clicked(&mut state, 2);
        let mut edited = create_test_post(2);
        edited.title = "Edited title".to_string();
        handle_post_updated(&mut state, 2, Ok(edited));

        assert!(state.post_form.is_none());
        assert_eq!(state.store.find(2).map(|p| p.title.as_str()), Some("Edited title"));
    }

    #[test]
    fn test_delete_flow() {
        let mut state = create_loaded_state(3);
        handle_delete_post_requested(&mut state, 3);
        assert_eq!(state.deleting_id, Some(3));

        let _task = handle_confirm_delete(&mut state);
        assert!(state.deleting_id.is_none());
        assert!(state.store.is_loading());

        handle_post_deleted(&mut state, 3, Ok(()));
        assert!(state.store.find(3).is_none());
        assert!(!state.store.is_loading());
    }

    #[test]
    fn test_failed_delete_keeps_post() {
        let mut state = create_loaded_state(3);
        handle_delete_post_requested(&mut state, 1);
        let _task = handle_confirm_delete(&mut state);
        handle_post_deleted(&mut state, 1, Err(not_found()));
        assert!(state.store.find(1).is_some());
        assert_eq!(state.store.error(), Some("Post not found"));
    }

    #[test]
    fn test_cancel_delete() {
        let mut state = create_loaded_state(3);
        handle_delete_post_requested(&mut state, 1);
        handle_cancel_delete(&mut state);
        assert!(state.deleting_id.is_none());
        assert_eq!(state.store.posts().len(), 3);
    }
}
