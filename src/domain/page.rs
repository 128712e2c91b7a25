//! Fixed-size paging over the watchlist.

use crate::domain::movie::Movie;
use serde::Serialize;
use utoipa::ToSchema;

pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoviePage {
    pub movies: Vec<Movie>,
    /// The page actually returned, after clamping.
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Returns page `requested` (1-based) of `movies`, clamping out-of-range
/// requests to the first or last page. An empty watchlist still has one page.
pub fn paginate(movies: Vec<Movie>, requested: i64) -> MoviePage {
    let total = movies.len();
    let total_pages = total.div_ceil(PAGE_SIZE).max(1);
    let page = usize::try_from(requested.max(1))
        .unwrap_or(usize::MAX)
        .min(total_pages);

    let movies = movies
        .into_iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect();

    MoviePage {
        movies,
        page,
        page_size: PAGE_SIZE,
        total,
        total_pages,
    }
}
