//! Games catalog integration (genres and the games within a genre).
//!
//! The upstream API paginates with a `count`/`next`/`previous`/`results`
//! envelope and counts pages from 1 in the query string; the repository
//! exposes 0-based pages and derives `has_more_pages` from the presence of a
//! `next` link rather than from page arithmetic.

use serde::Deserialize;

use relay_core::{ApiRequest, AppError, PagedResult};

use crate::client::RestClient;

/// Game genre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Game within a genre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct GenreModel {
    id: u64,
    name: String,
}

impl From<GenreModel> for Genre {
    fn from(model: GenreModel) -> Self {
        Self {
            id: model.id.to_string(),
            name: model.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct GameModel {
    id: u64,
    name: String,
}

impl From<GameModel> for Game {
    fn from(model: GameModel) -> Self {
        Self {
            id: model.id.to_string(),
            name: model.name,
        }
    }
}

/// `count`/`next`/`previous`/`results` page envelope.
#[derive(Debug, Clone, Deserialize)]
struct PageEnvelope<T> {
    count: u64,
    next: Option<String>,
    results: Vec<T>,
}

impl<T> PageEnvelope<T> {
    /// Total page count derived from the item count: `ceil(count / page_size)`.
    fn total_pages(&self, page_size: usize) -> usize {
        let count = usize::try_from(self.count).unwrap_or(usize::MAX);
        count.div_ceil(page_size.max(1))
    }

    /// The API reports next-link existence instead of a reliable page count.
    fn has_more_pages(&self) -> bool {
        self.next.is_some()
    }
}

/// Repository-style accessor over the games API.
#[derive(Debug, Clone)]
pub struct GamesRepository {
    client: RestClient,
}

impl GamesRepository {
    /// Create a repository over the given client.
    #[must_use]
    pub const fn new(client: RestClient) -> Self {
        Self { client }
    }

    /// Fetch one page of genres, sorted by name server-side.
    ///
    /// `page` is 0-based; the upstream counts pages from 1.
    pub async fn fetch_genres(
        &self,
        page: usize,
        page_size: usize,
    ) -> std::result::Result<PagedResult<Genre>, AppError> {
        let request = ApiRequest::get("/genres")
            .query("page", (page + 1).to_string())
            .query("page_size", page_size.to_string())
            .query("ordering", "name")
            .build();

        let envelope: PageEnvelope<GenreModel> = self.client.send(request).await?;

        let total_pages = envelope.total_pages(page_size);
        let has_more = envelope.has_more_pages();
        let items = envelope.results.into_iter().map(Genre::from).collect();

        Ok(PagedResult::with_has_more(items, page, total_pages, has_more))
    }

    /// Fetch one page of games within a genre, sorted by name client-side.
    pub async fn fetch_games(
        &self,
        genre_id: &str,
        page: usize,
        page_size: usize,
    ) -> std::result::Result<PagedResult<Game>, AppError> {
        let request = ApiRequest::get("/games")
            .query("genres", genre_id)
            .query("page", (page + 1).to_string())
            .query("page_size", page_size.to_string())
            .build();

        let envelope: PageEnvelope<GameModel> = self.client.send(request).await?;

        let total_pages = envelope.total_pages(page_size);
        let has_more = envelope.has_more_pages();
        let mut items: Vec<Game> = envelope.results.into_iter().map(Game::from).collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(PagedResult::with_has_more(items, page, total_pages, has_more))
    }
}
