//! Single source of truth for the post collection and its view state
//!
//! [`PostStore`] owns the loaded posts plus the active filters, sort and
//! pagination. Nothing outside the store writes those fields: every change
//! goes through a named operation, which also records a [`StoreEvent`] in
//! the journal.
//!
//! Network I/O lives elsewhere. Callers announce a request with
//! [`PostStore::begin`] and report its outcome with one of the `*_succeeded`
//! methods or [`PostStore::failed`]. A failure only records an error message;
//! the filter/sort/paginate pipeline keeps working on the last collection
//! that loaded successfully.

use crate::core::pagination::{DEFAULT_PAGE_SIZE, PageInfo};
use crate::core::post::Post;
use crate::core::query::{
    self, FilterParams, FilterPatch, Pagination, SortColumn, SortSpec, ViewQuery,
};
use crate::journal::{Journal, JournalEntry, Operation, StoreEvent};

#[derive(Debug, Clone)]
pub struct PostStore {
    posts: Vec<Post>,
    /// Filtered and sorted, recomputed whenever posts, filters or sort change
    display: Vec<Post>,
    filters: FilterParams,
    sort: Option<SortSpec>,
    page: usize,
    limit: usize,
    in_flight: usize,
    error: Option<String>,
    journal: Journal,
    unpersisted: Vec<JournalEntry>,
}

impl Default for PostStore {
    fn default() -> Self {
        Self::with_limit(DEFAULT_PAGE_SIZE)
    }
}

impl PostStore {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            posts: Vec::new(),
            display: Vec::new(),
            filters: FilterParams::default(),
            sort: None,
            page: 1,
            limit: limit.max(1),
            in_flight: 0,
            error: None,
            journal: Journal::default(),
            unpersisted: Vec::new(),
        }
    }

    // ── Accessors ──────────────────────────────────────────────────────────

    /// Full collection in load order
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn find(&self, id: i64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Posts passing the active filters, sorted by the active sort
    pub fn filtered_posts(&self) -> &[Post] {
        &self.display
    }

    /// The slice currently shown in the table
    pub fn visible_page(&self) -> &[Post] {
        query::paginate(&self.display, self.page, self.limit)
    }

    pub fn filters(&self) -> &FilterParams {
        &self.filters
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.limit, self.display.len())
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo::new(self.display.len(), self.page, self.limit)
    }

    /// The view parameters as a standalone query
    pub fn query(&self) -> ViewQuery {
        ViewQuery {
            filters: self.filters.clone(),
            sort: self.sort,
            page: self.page,
            limit: self.limit,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Hands over journal entries recorded since the last call
    pub fn take_unpersisted(&mut self) -> Vec<JournalEntry> {
        std::mem::take(&mut self.unpersisted)
    }

    // ── Request lifecycle ──────────────────────────────────────────────────

    /// Marks a request as in flight and clears the previous error
    pub fn begin(&mut self, op: Operation) {
        self.in_flight += 1;
        self.error = None;
        self.record(StoreEvent::Started { op });
    }

    fn finish(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Records a failed request. The collection is left untouched.
    pub fn failed(&mut self, op: Operation, message: impl Into<String>) {
        self.finish();
        let message = message.into();
        tracing::warn!("{:?} failed: {}", op, message);
        self.error = Some(message.clone());
        self.record(StoreEvent::Failed { op, message });
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Replaces the collection with a freshly loaded one
    pub fn load_succeeded(&mut self, posts: Vec<Post>) {
        self.finish();
        let count = posts.len();
        self.posts = posts;
        self.refresh();
        self.record(StoreEvent::Loaded { count });
    }

    /// Prepends a newly created post and returns it as stored.
    ///
    /// Some backends hand out the same id for every create. A colliding id is
    /// replaced with the next free one so identity stays unique locally.
    pub fn create_succeeded(&mut self, mut post: Post) -> Post {
        self.finish();
        if self.find(post.id).is_some() {
            let next_id = self.posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
            tracing::warn!(
                "Backend returned duplicate id {}, storing as {}",
                post.id,
                next_id
            );
            post.id = next_id;
        }
        self.posts.insert(0, post.clone());
        self.refresh();
        self.record(StoreEvent::Created { id: post.id });
        post
    }

    /// Replaces the post stored under `id`. Returns false if it is gone.
    pub fn update_succeeded(&mut self, id: i64, mut post: Post) -> bool {
        self.finish();
        post.id = id;
        let Some(slot) = self.posts.iter_mut().find(|p| p.id == id) else {
            tracing::warn!("Update for unknown post {}", id);
            return false;
        };
        *slot = post;
        self.refresh();
        self.record(StoreEvent::Updated { id });
        true
    }

    /// Removes the post stored under `id`. Returns false if it was not present.
    pub fn delete_succeeded(&mut self, id: i64) -> bool {
        self.finish();
        let before = self.posts.len();
        self.posts.retain(|p| p.id != id);
        if self.posts.len() == before {
            return false;
        }
        self.refresh();
        self.record(StoreEvent::Deleted { id });
        true
    }

    // ── View parameters ────────────────────────────────────────────────────

    /// Merges `patch` into the filters and returns to the first page
    pub fn set_filters(&mut self, patch: FilterPatch) {
        self.filters.apply(patch);
        self.page = 1;
        self.refresh();
        self.record(StoreEvent::FiltersChanged {
            filters: self.filters.clone(),
        });
    }

    /// Moves to `page`, clamped into the available range
    pub fn set_page(&mut self, page: usize) {
        let clamped = page.clamp(1, self.pagination().total_pages.max(1));
        if clamped == self.page {
            return;
        }
        self.page = clamped;
        self.record(StoreEvent::PageChanged { page: clamped });
    }

    /// Changes the page size and returns to the first page. Zero is ignored.
    pub fn set_limit(&mut self, limit: usize) {
        if limit == 0 {
            return;
        }
        self.limit = limit;
        self.page = 1;
        self.record(StoreEvent::LimitChanged { limit });
    }

    /// Column-header click: toggles direction on the active column
    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.set_sort(Some(SortSpec::clicked(self.sort, column)));
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        if sort == self.sort {
            return;
        }
        self.sort = sort;
        self.refresh();
        self.record(StoreEvent::SortChanged { sort });
    }

    // ── Internals ──────────────────────────────────────────────────────────

    /// Recomputes the derived collection and keeps `page` in range
    fn refresh(&mut self) {
        self.display = query::matching(&self.posts, &self.filters)
            .cloned()
            .collect();
        if let Some(spec) = self.sort {
            query::sort_in_place(&mut self.display, spec);
        }
        let last_page = self.pagination().total_pages.max(1);
        if self.page > last_page {
            self.page = last_page;
        }
    }

    fn record(&mut self, event: StoreEvent) {
        let entry = self.journal.record(event).clone();
        self.unpersisted.push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(count: i64) -> PostStore {
        let mut store = PostStore::default();
        store.begin(Operation::Load);
        store.load_succeeded(
            (1..=count)
                .map(|i| Post::new(i, (i % 2) + 1, format!("Title {i}"), format!("Body {i}")))
                .collect(),
        );
        store
    }

    #[test]
    fn test_load_tracks_loading_flag() {
        let mut store = PostStore::default();
        store.begin(Operation::Load);
        assert!(store.is_loading());
        store.load_succeeded(vec![Post::new(1, 1, "a", "b")]);
        assert!(!store.is_loading());
        assert_eq!(store.pagination(), Pagination::new(1, 5, 1));
    }

    #[test]
    fn test_failure_keeps_last_collection() {
        let mut store = store_with(7);
        store.begin(Operation::Load);
        store.failed(Operation::Load, "Could not reach the API");
        assert_eq!(store.error(), Some("Could not reach the API"));
        assert_eq!(store.posts().len(), 7);
        assert_eq!(store.visible_page().len(), 5);
        assert!(!store.is_loading());
    }

    #[test]
    fn test_begin_clears_previous_error() {
        let mut store = store_with(1);
        store.failed(Operation::Delete, "boom");
        store.begin(Operation::Load);
        assert!(store.error().is_none());
    }

    #[test]
    fn test_seven_posts_paginate_into_two_pages() {
        let mut store = store_with(7);
        assert_eq!(store.visible_page().len(), 5);
        assert_eq!(store.pagination().total_pages, 2);
        store.set_page(2);
        assert_eq!(store.visible_page().len(), 2);
    }

    #[test]
    fn test_set_page_clamps_to_range() {
        let mut store = store_with(7);
        store.set_page(9);
        assert_eq!(store.page(), 2);
        store.set_page(0);
        assert_eq!(store.page(), 1);
    }

    #[test]
    fn test_filters_reset_page() {
        let mut store = store_with(20);
        store.set_page(3);
        store.set_filters(FilterPatch::user_id(Some(2)));
        assert_eq!(store.page(), 1);
        assert!(store.filtered_posts().iter().all(|p| p.user_id == 2));
        assert_eq!(store.pagination().total, 10);
    }

    #[test]
    fn test_limit_resets_page() {
        let mut store = store_with(20);
        store.set_page(4);
        store.set_limit(10);
        assert_eq!(store.page(), 1);
        assert_eq!(store.pagination().total_pages, 2);
        store.set_limit(0);
        assert_eq!(store.limit(), 10);
    }

    #[test]
    fn test_create_prepends_post() {
        let mut store = store_with(3);
        store.begin(Operation::Create);
        let stored = store.create_succeeded(Post::new(101, 1, "Fresh", "New body"));
        assert_eq!(stored.id, 101);
        assert_eq!(store.posts()[0].id, 101);
        assert_eq!(store.visible_page()[0].title, "Fresh");
    }

    #[test]
    fn test_create_with_duplicate_id_gets_next_free_id() {
        let mut store = store_with(3);
        store.create_succeeded(Post::new(101, 1, "First", "body text"));
        let second = store.create_succeeded(Post::new(101, 1, "Second", "body text"));
        assert_eq!(second.id, 102);
        assert_eq!(store.posts().iter().filter(|p| p.id == 101).count(), 1);
    }

    #[test]
    fn test_update_replaces_by_id() {
        let mut store = store_with(3);
        assert!(store.update_succeeded(2, Post::new(999, 9, "Edited", "Edited body")));
        let post = store.find(2).unwrap();
        assert_eq!(post.title, "Edited");
        assert_eq!(post.user_id, 9);
        assert!(!store.update_succeeded(42, Post::new(42, 1, "x", "y")));
    }

    #[test]
    fn test_delete_last_item_on_last_page_clamps_page() {
        let mut store = store_with(6);
        store.set_page(2);
        assert_eq!(store.visible_page().len(), 1);
        let last_id = store.visible_page()[0].id;
        assert!(store.delete_succeeded(last_id));
        assert_eq!(store.page(), 1);
        assert_eq!(store.visible_page().len(), 5);
        assert!(!store.delete_succeeded(last_id));
    }

    #[test]
    fn test_sort_applies_to_visible_page() {
        let mut store = store_with(7);
        store.toggle_sort(SortColumn::Id);
        store.toggle_sort(SortColumn::Id);
        assert_eq!(store.sort(), Some(SortSpec::desc(SortColumn::Id)));
        assert_eq!(store.visible_page()[0].id, 7);
    }

    #[test]
    fn test_search_filter_recomputes_on_mutation() {
        let mut store = store_with(3);
        store.set_filters(FilterPatch::search("needle"));
        assert!(store.filtered_posts().is_empty());
        store.update_succeeded(1, Post::new(1, 1, "Has NEEDLE", "text"));
        assert_eq!(store.filtered_posts().len(), 1);
    }

    #[test]
    fn test_operations_are_journaled() {
        let mut store = store_with(2);
        store.set_filters(FilterPatch::search("x"));
        let events: Vec<_> = store.journal().iter().map(|e| e.event.clone()).collect();
        assert_eq!(
            events,
            vec![
                StoreEvent::Started {
                    op: Operation::Load
                },
                StoreEvent::Loaded { count: 2 },
                StoreEvent::FiltersChanged {
                    filters: FilterParams::new(Some("x"), None)
                },
            ]
        );
        assert_eq!(store.take_unpersisted().len(), 3);
        assert!(store.take_unpersisted().is_empty());
    }
}
