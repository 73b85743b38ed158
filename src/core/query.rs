//! Filter, sort and paginate over an in-memory post collection
//!
//! Everything in this module is a pure function of its inputs. The store and
//! the CLI both feed the full collection plus the active view parameters
//! through [`run`] and render whatever page comes out.
//!
//! The three stages are also exposed individually:
//!
//! - [`filter`]: case-insensitive substring search over title/body plus an
//!   exact author match, preserving input order
//! - [`sort`]: by one of four fixed columns, stable on ties
//! - [`paginate`]: a 1-indexed page slice, clamped to the available length

use crate::core::post::Post;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{Display, EnumIter};

/// Active view filter. Empty search and user id 0 both mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParams {
    pub search: Option<String>,
    pub user_id: Option<i64>,
}

/// Partial update for [`FilterParams`]. Outer `None` leaves a field untouched,
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub search: Option<Option<String>>,
    pub user_id: Option<Option<i64>>,
}

impl FilterPatch {
    pub fn search(term: impl Into<String>) -> Self {
        let term = term.into();
        Self {
            search: Some((!term.is_empty()).then_some(term)),
            user_id: None,
        }
    }

    pub fn user_id(user_id: Option<i64>) -> Self {
        Self {
            search: None,
            user_id: Some(user_id.filter(|id| *id != 0)),
        }
    }
}

impl FilterParams {
    pub fn new(search: Option<&str>, user_id: Option<i64>) -> Self {
        Self {
            search: search.map(str::to_string),
            user_id,
        }
    }

    /// Search term if it constrains anything
    pub fn active_search(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    /// User id if it constrains anything
    pub fn active_user_id(&self) -> Option<i64> {
        self.user_id.filter(|id| *id != 0)
    }

    pub fn is_empty(&self) -> bool {
        self.active_search().is_none() && self.active_user_id().is_none()
    }

    /// Merges `patch` into the current filters
    pub fn apply(&mut self, patch: FilterPatch) {
        if let Some(search) = patch.search {
            self.search = search;
        }
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
    }
}

/// Sortable table columns, in header order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum SortColumn {
    #[strum(to_string = "ID")]
    Id,
    #[strum(to_string = "User")]
    UserId,
    Title,
    Body,
}

impl SortColumn {
    /// Field order used by positional column indices
    pub const ALL: [Self; 4] = [Self::Id, Self::UserId, Self::Title, Self::Body];

    /// Resolves a header position to a column; anything outside 0..=3 is `None`
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Self::Id => 0,
            Self::UserId => 1,
            Self::Title => 2,
            Self::Body => 3,
        }
    }

    /// Compares two posts on this column in ascending order
    pub fn compare(self, a: &Post, b: &Post) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::UserId => a.user_id.cmp(&b.user_id),
            Self::Title => compare_ignore_case(&a.title, &b.title),
            Self::Body => compare_ignore_case(&a.body, &b.body),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[strum(to_string = "asc")]
    Asc,
    #[strum(to_string = "desc")]
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Active sort: a column plus a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(column: SortColumn) -> Self {
        Self {
            column,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(column: SortColumn) -> Self {
        Self {
            column,
            direction: SortDirection::Desc,
        }
    }

    /// Header click: same column flips direction, a new column starts ascending
    pub fn clicked(current: Option<Self>, column: SortColumn) -> Self {
        match current {
            Some(spec) if spec.column == column => Self {
                column,
                direction: spec.direction.toggled(),
            },
            _ => Self::asc(column),
        }
    }
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Iterates the posts that satisfy `filters`, in input order
pub fn matching<'a>(
    posts: &'a [Post],
    filters: &FilterParams,
) -> impl Iterator<Item = &'a Post> + use<'a> {
    let needle = filters.active_search().map(str::to_lowercase);
    let user_id = filters.active_user_id();

    posts.iter().filter(move |post| {
        let matches_search = needle
            .as_deref()
            .is_none_or(|needle| post.matches_search(needle));
        let matches_user = user_id.is_none_or(|id| post.user_id == id);
        matches_search && matches_user
    })
}

/// Keeps the posts whose title or body contains `search` (ignoring case) and
/// whose author is `user_id`. Empty search and user id 0 match everything.
///
/// Relative order of the retained posts is preserved.
pub fn filter(posts: &[Post], search: Option<&str>, user_id: Option<i64>) -> Vec<Post> {
    let filters = FilterParams::new(search, user_id);
    matching(posts, &filters).cloned().collect()
}

/// Returns a sorted copy of `posts`.
///
/// `column` is a header position over `[id, userId, title, body]`; any other
/// index, or `None`, returns the input order unchanged. Text columns compare
/// case-insensitively. Ties keep their original relative order.
pub fn sort(posts: &[Post], column: Option<usize>, direction: SortDirection) -> Vec<Post> {
    let mut sorted = posts.to_vec();
    if let Some(column) = column.and_then(SortColumn::from_index) {
        sort_in_place(&mut sorted, SortSpec { column, direction });
    }
    sorted
}

/// Stable in-place sort by `spec`
pub fn sort_in_place(posts: &mut [Post], spec: SortSpec) {
    posts.sort_by(|a, b| spec.direction.apply(spec.column.compare(a, b)));
}

/// Returns the 1-indexed `page` of `posts` with `limit` items per page.
///
/// Slicing past the end yields a shorter or empty page, never a panic. Page 0
/// is treated as page 1.
pub fn paginate<T>(posts: &[T], page: usize, limit: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(limit).min(posts.len());
    let end = start.saturating_add(limit).min(posts.len());
    &posts[start..end]
}

/// `ceil(total / limit)`, 0 for an empty collection or a zero limit
pub fn total_pages(total: usize, limit: usize) -> usize {
    if limit == 0 { 0 } else { total.div_ceil(limit) }
}

/// Pagination metadata for a filtered collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl Pagination {
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        Self {
            page,
            limit,
            total,
            total_pages: total_pages(total, limit),
        }
    }
}

/// Complete set of view parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewQuery {
    pub filters: FilterParams,
    pub sort: Option<SortSpec>,
    pub page: usize,
    pub limit: usize,
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self {
            filters: FilterParams::default(),
            sort: None,
            page: 1,
            limit: crate::core::pagination::DEFAULT_PAGE_SIZE,
        }
    }
}

/// One materialized page plus its metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub pagination: Pagination,
}

/// Runs filter, sort and paginate in that order
pub fn run(posts: &[Post], query: &ViewQuery) -> PostPage {
    let mut filtered: Vec<Post> = matching(posts, &query.filters).cloned().collect();
    if let Some(spec) = query.sort {
        sort_in_place(&mut filtered, spec);
    }
    let pagination = Pagination::new(query.page, query.limit, filtered.len());
    PostPage {
        posts: paginate(&filtered, query.page, query.limit).to_vec(),
        pagination,
    }
}
