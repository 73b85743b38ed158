pub mod forms;
mod handlers;
pub mod ui_components;
pub mod view;

use crate::config::AppConfig;
use crate::core::api::ApiClient;
use crate::core::debounce::{Debouncer, Ticket};
use crate::core::error::ErrorTranslation;
use crate::core::post::{Post, User};
use crate::core::query::SortColumn;
use crate::core::store::PostStore;
use crate::theme::{AppTheme, ThemeChoice};
use crate::toast::ToastQueue;
use forms::PostForm;
use iced::{Element, Subscription, Task};
use std::time::Duration;

/// Number of users offered by the user pickers
pub const USER_COUNT: i64 = 10;

/// How often expired toasts are swept while any are showing
const TOAST_TICK: Duration = Duration::from_millis(250);

pub struct State {
    pub api: ApiClient,
    pub store: PostStore,
    /// Loaded once at startup; used to show author names
    pub users: Vec<User>,
    /// Raw search box text; reaches the store only after the debounce window
    pub search_input: String,
    pub debouncer: Debouncer,
    pub post_form: Option<PostForm>,
    pub deleting_id: Option<i64>,
    pub toasts: ToastQueue,
    /// Last failed load, shown in the error banner with a retry button
    pub last_error: Option<ErrorTranslation>,
    pub current_theme: ThemeChoice,
    pub theme: AppTheme,
    pub font_regular: iced::Font,
    pub font_mono: iced::Font,
    pub config: AppConfig,
}

/// Entry in the toolbar's author filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserFilter {
    #[default]
    All,
    User(i64),
}

impl UserFilter {
    pub fn options() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain((1..=USER_COUNT).map(Self::User))
            .collect()
    }

    pub fn from_user_id(user_id: Option<i64>) -> Self {
        user_id.map_or(Self::All, Self::User)
    }

    pub fn user_id(self) -> Option<i64> {
        match self {
            Self::All => None,
            Self::User(id) => Some(id),
        }
    }
}

impl std::fmt::Display for UserFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("All Users"),
            Self::User(id) => write!(f, "User {id}"),
        }
    }
}

/// Entry in the post form's author picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserOption {
    pub id: i64,
    pub name: Option<String>,
}

impl std::fmt::Display for UserOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "User {} · {}", self.id, name),
            None => write!(f, "User {}", self.id),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    // Loading
    LoadPosts,
    PostsLoaded(Result<Vec<Post>, ErrorTranslation>),
    UsersLoaded(Result<Vec<User>, ErrorTranslation>),
    DismissError,
    // Filters
    SearchChanged(String),
    SearchDebounced(Ticket),
    ClearSearch,
    UserFilterChanged(UserFilter),
    // Sorting and pagination
    SortClicked(SortColumn),
    PageSelected(usize),
    PageSizeChanged(usize),
    // Post form
    NewPostClicked,
    EditPostClicked(i64),
    FormTitleChanged(String),
    FormBodyChanged(String),
    FormUserSelected(UserOption),
    SubmitForm,
    CancelForm,
    PostCreated(Result<Post, ErrorTranslation>),
    PostUpdated(i64, Result<Post, ErrorTranslation>),
    // Delete
    DeletePostRequested(i64),
    CancelDelete,
    ConfirmDelete,
    PostDeleted(i64, Result<(), ErrorTranslation>),
    // Settings and notifications
    ThemeToggled,
    ConfigSaved(Result<(), String>),
    DismissToast(uuid::Uuid),
    PruneToasts,
    JournalPersisted,
    EventOccurred(iced::Event),
}

impl State {
    /// Builds the initial state and kicks off the post and user loads
    pub fn new(config: AppConfig, api: ApiClient) -> (Self, Task<Message>) {
        let current_theme = config.theme_choice;
        let debouncer = Debouncer::new(Duration::from_millis(config.search_debounce_ms));

        let mut state = Self {
            api,
            store: PostStore::with_limit(config.page_size),
            users: Vec::new(),
            search_input: String::new(),
            debouncer,
            post_form: None,
            deleting_id: None,
            toasts: ToastQueue::default(),
            last_error: None,
            current_theme,
            theme: current_theme.to_theme(),
            font_regular: iced::Font::DEFAULT,
            font_mono: iced::Font::MONOSPACE,
            config,
        };

        let load_posts = handlers::handle_load_posts(&mut state);
        let load_users = handlers::handle_load_users(&state);
        (state, Task::batch([load_posts, load_users]))
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Maps the palette onto iced's built-in theme for widgets without custom styles
    pub fn iced_theme(&self) -> iced::Theme {
        if self.theme.is_light() {
            iced::Theme::Light
        } else {
            iced::Theme::Dark
        }
    }

    /// Display name for the author column
    pub fn user_label(&self, user_id: i64) -> String {
        self.users
            .iter()
            .find(|u| u.id == user_id)
            .map_or_else(|| format!("User {user_id}"), |u| u.name.clone())
    }

    /// Choices for the form's author picker
    pub fn user_options(&self) -> Vec<UserOption> {
        (1..=USER_COUNT)
            .map(|id| UserOption {
                id,
                name: self
                    .users
                    .iter()
                    .find(|u| u.id == id)
                    .map(|u| u.name.clone()),
            })
            .collect()
    }

    /// True while a dialog covers the table
    pub fn has_modal(&self) -> bool {
        self.post_form.is_some() || self.deleting_id.is_some()
    }

    /// Persisted settings reflecting the current UI state
    fn current_config(&self) -> AppConfig {
        AppConfig {
            theme_choice: self.current_theme,
            page_size: self.store.limit(),
            ..self.config.clone()
        }
    }

    fn save_config(&mut self) -> Task<Message> {
        self.config = self.current_config();
        let config = self.config.clone();
        Task::perform(
            async move {
                crate::config::save_config(&config)
                    .await
                    .map_err(|e| e.to_string())
            },
            Message::ConfigSaved,
        )
    }

    /// Hands new journal entries to the on-disk event log when enabled
    fn persist_journal(&mut self) -> Task<Message> {
        let entries = self.store.take_unpersisted();
        if !self.config.enable_event_log || entries.is_empty() {
            return Task::none();
        }
        Task::perform(crate::journal::persist(true, entries), |()| {
            Message::JournalPersisted
        })
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = self.dispatch(message);
        let persist = self.persist_journal();
        Task::batch([task, persist])
    }

    fn dispatch(&mut self, message: Message) -> Task<Message> {
        match message {
            // Loading
            Message::LoadPosts => return handlers::handle_load_posts(self),
            Message::PostsLoaded(result) => handlers::handle_posts_loaded(self, result),
            Message::UsersLoaded(result) => handlers::handle_users_loaded(self, result),
            Message::DismissError => handlers::handle_dismiss_error(self),
            // Filters
            Message::SearchChanged(term) => return handlers::handle_search_changed(self, term),
            Message::SearchDebounced(ticket) => handlers::handle_search_debounced(self, ticket),
            Message::ClearSearch => handlers::handle_clear_search(self),
            Message::UserFilterChanged(filter) => handlers::handle_user_filter_changed(self, filter),
            // Sorting and pagination
            Message::SortClicked(column) => handlers::handle_sort_clicked(self, column),
            Message::PageSelected(page) => handlers::handle_page_selected(self, page),
            Message::PageSizeChanged(limit) => {
                handlers::handle_page_size_changed(self, limit);
                return self.save_config();
            }
            // Post form
            Message::NewPostClicked => handlers::handle_new_post_clicked(self),
            Message::EditPostClicked(id) => handlers::handle_edit_post_clicked(self, id),
            Message::FormTitleChanged(title) => handlers::handle_form_title_changed(self, title),
            Message::FormBodyChanged(body) => handlers::handle_form_body_changed(self, body),
            Message::FormUserSelected(option) => handlers::handle_form_user_selected(self, &option),
            Message::SubmitForm => return handlers::handle_submit_form(self),
            Message::CancelForm => handlers::handle_cancel_form(self),
            Message::PostCreated(result) => handlers::handle_post_created(self, result),
            Message::PostUpdated(id, result) => handlers::handle_post_updated(self, id, result),
            // Delete
            Message::DeletePostRequested(id) => handlers::handle_delete_post_requested(self, id),
            Message::CancelDelete => handlers::handle_cancel_delete(self),
            Message::ConfirmDelete => return handlers::handle_confirm_delete(self),
            Message::PostDeleted(id, result) => handlers::handle_post_deleted(self, id, result),
            // Settings and notifications
            Message::ThemeToggled => {
                handlers::handle_theme_toggled(self);
                return self.save_config();
            }
            Message::ConfigSaved(result) => handlers::handle_config_saved(self, result),
            Message::DismissToast(id) => self.toasts.dismiss(id),
            Message::PruneToasts => self.toasts.prune(chrono::Utc::now()),
            Message::JournalPersisted => {}
            Message::EventOccurred(event) => return handlers::handle_event(self, &event),
        }
        Task::none()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch(vec![
            iced::event::listen().map(Message::EventOccurred),
            if self.toasts.is_empty() {
                Subscription::none()
            } else {
                iced::time::every(TOAST_TICK).map(|_| Message::PruneToasts)
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_filter_options() {
        let options = UserFilter::options();
        assert_eq!(options.len(), 11);
        assert_eq!(options[0].to_string(), "All Users");
        assert_eq!(options[10].to_string(), "User 10");
    }

    #[test]
    fn test_user_filter_round_trip() {
        assert_eq!(UserFilter::from_user_id(None), UserFilter::All);
        assert_eq!(UserFilter::from_user_id(Some(4)).user_id(), Some(4));
    }

    #[test]
    fn test_user_option_label() {
        let named = UserOption {
            id: 1,
            name: Some("Leanne Graham".to_string()),
        };
        assert_eq!(named.to_string(), "User 1 · Leanne Graham");
        let bare = UserOption { id: 2, name: None };
        assert_eq!(bare.to_string(), "User 2");
    }
}
