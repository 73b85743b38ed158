//! Shared test utilities for handler modules

use crate::app::State;
use crate::config::AppConfig;
use crate::core::api::ApiClient;
use crate::core::post::Post;

/// A state pointed at an unroutable API. The startup tasks are dropped
/// unexecuted, so no request is ever sent.
pub fn create_test_state() -> State {
    let api = ApiClient::new("http://127.0.0.1:9").unwrap();
    State::new(AppConfig::default(), api).0
}

/// A state whose initial load already completed with `count` posts
/// spread over users 1-3
pub fn create_loaded_state(count: i64) -> State {
    let mut state = create_test_state();
    let posts = (1..=count).map(create_test_post).collect();
    crate::app::handlers::handle_posts_loaded(&mut state, Ok(posts));
    state
}

pub fn create_test_post(id: i64) -> Post {
    Post::new(
        id,
        (id - 1) % 3 + 1,
        format!("Post title {id}"),
        format!("Body text for post number {id}"),
    )
}
