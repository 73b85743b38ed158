//! REST client for the posts backend
//!
//! Talks to a JSONPlaceholder-compatible API:
//!
//! - `GET /posts?_limit=N`, `GET /posts/{id}`
//! - `POST /posts`, `PUT /posts/{id}`, `DELETE /posts/{id}`
//! - `GET /users`
//!
//! The client is cheap to clone: clones share the connection pool and the
//! user cache, so the GUI can hand a copy to every background task.

use crate::core::error::{Error, Result};
use crate::core::post::{NewPost, Post, User};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use tracing::{debug, warn};

/// Public fixture the app talks to unless configured otherwise
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Number of posts fetched on initial load
pub const INITIAL_LOAD_LIMIT: u32 = 100;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    users: Arc<RwLock<HashMap<i64, User>>>,
}

impl ApiClient {
    /// Creates a client rooted at `base_url` (trailing slashes are ignored)
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("postboard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            users: Arc::new(RwLock::new(HashMap::new())),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sends the request and turns non-success statuses into [`Error::Status`]
    async fn execute(
        &self,
        method: &'static str,
        url: String,
        request: RequestBuilder,
    ) -> Result<Response> {
        debug!("{method} {url}");
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "{method} {url} failed");
            return Err(Error::Status {
                method,
                url,
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        method: &'static str,
        url: String,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = self.execute(method, url, request).await?;
        Ok(response.json::<T>().await?)
    }

    /// Lists posts, optionally capped at `limit` entries
    pub async fn list_posts(&self, limit: Option<u32>) -> Result<Vec<Post>> {
        let url = self.url("posts");
        let mut request = self.client.get(&url);
        if let Some(limit) = limit {
            request = request.query(&[("_limit", limit)]);
        }
        let posts: Vec<Post> = self.fetch_json("GET", url, request).await?;
        debug!("Loaded {} posts", posts.len());
        Ok(posts)
    }

    pub async fn get_post(&self, id: i64) -> Result<Post> {
        let url = self.url(&format!("posts/{id}"));
        let request = self.client.get(&url);
        self.fetch_json("GET", url, request).await
    }

    /// Creates a post; the backend assigns the id
    pub async fn create_post(&self, post: &NewPost) -> Result<Post> {
        let url = self.url("posts");
        let request = self.client.post(&url).json(post);
        self.fetch_json("POST", url, request).await
    }

    /// Replaces the post stored under `id`
    pub async fn update_post(&self, id: i64, post: &NewPost) -> Result<Post> {
        let url = self.url(&format!("posts/{id}"));
        let body = post.clone().into_post(id);
        let request = self.client.put(&url).json(&body);
        self.fetch_json("PUT", url, request).await
    }

    pub async fn delete_post(&self, id: i64) -> Result<()> {
        let url = self.url(&format!("posts/{id}"));
        let request = self.client.delete(&url);
        self.execute("DELETE", url, request).await?;
        Ok(())
    }

    /// Lists users and refreshes the shared user cache
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let url = self.url("users");
        let request = self.client.get(&url);
        let users: Vec<User> = self.fetch_json("GET", url, request).await?;
        self.cache_users(&users);
        Ok(users)
    }

    /// Returns a user, served from the cache when possible
    pub async fn get_user(&self, id: i64) -> Result<User> {
        if let Some(user) = self.cached_user(id) {
            return Ok(user);
        }
        let url = self.url(&format!("users/{id}"));
        let request = self.client.get(&url);
        let user: User = self.fetch_json("GET", url, request).await?;
        self.cache_users(std::slice::from_ref(&user));
        Ok(user)
    }

    pub fn cache_users(&self, users: &[User]) {
        let mut cache = self.users.write().unwrap_or_else(PoisonError::into_inner);
        for user in users {
            cache.insert(user.id, user.clone());
        }
    }

    pub fn cached_user(&self, id: i64) -> Option<User> {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }
}
