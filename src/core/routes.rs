//! Slug enumeration for static pre-rendering

use futures::pin_mut;
use futures::stream::{self, Stream, TryStreamExt};
use std::time::Duration;
use tracing::debug;

use crate::db::{DbEngine, SlugTable};
use crate::errors::{CatalogError, CatalogResult};
use crate::models::EntityKind;

/// Default number of slugs fetched per store round-trip
pub const DEFAULT_SLUG_PAGE_SIZE: u32 = 500;

struct Cursor {
    after: Option<String>,
    exhausted: bool,
}

/// Route enumeration library
pub struct RouteLib;

impl RouteLib {
    /// Every slug of `kind` in ascending order, fetched lazily page by page
    ///
    /// Each page is read when the stream reaches it, so the listing reflects
    /// the store at enumeration time.
    pub fn slug_stream(
        engine: &DbEngine,
        kind: EntityKind,
        page_size: u32,
    ) -> impl Stream<Item = CatalogResult<String>> + '_ {
        let page_size = page_size.max(1);
        let start = Cursor {
            after: None,
            exhausted: false,
        };

        stream::try_unfold(start, move |cursor| async move {
            if cursor.exhausted {
                return Ok::<_, CatalogError>(None);
            }

            let after = cursor.after.as_deref();
            let page = SlugTable::page(engine, kind, after, page_size).await?;
            debug!("Fetched {} {} slugs", page.len(), kind);

            if page.is_empty() {
                return Ok(None);
            }

            let next = Cursor {
                after: page.last().cloned(),
                exhausted: page.len() < page_size as usize,
            };
            Ok(Some((page, next)))
        })
        .map_ok(|page| stream::iter(page.into_iter().map(Ok::<_, CatalogError>)))
        .try_flatten()
    }

    /// Collect every slug of `kind`
    pub async fn all_slugs(
        engine: &DbEngine,
        kind: EntityKind,
        page_size: u32,
    ) -> CatalogResult<Vec<String>> {
        let slugs = Self::slug_stream(engine, kind, page_size);
        slugs.try_collect().await
    }

    /// Collect every slug of a kind given by name; unknown names are invalid input
    pub async fn all_slugs_named(
        engine: &DbEngine,
        kind: &str,
        page_size: u32,
    ) -> CatalogResult<Vec<String>> {
        let kind: EntityKind = kind.parse()?;
        Self::all_slugs(engine, kind, page_size).await
    }

    /// Hand every slug of `kind` to `visit`, returning how many were seen
    ///
    /// Each page read gets `page_timeout`; a stalled read fails as
    /// store-unavailable instead of hanging the listing.
    pub async fn for_each_slug<F>(
        engine: &DbEngine,
        kind: EntityKind,
        page_size: u32,
        page_timeout: Duration,
        mut visit: F,
    ) -> CatalogResult<usize>
    where
        F: FnMut(String),
    {
        let slugs = Self::slug_stream(engine, kind, page_size);
        pin_mut!(slugs);

        let mut count = 0;
        loop {
            let next = tokio::time::timeout(page_timeout, slugs.try_next());
            match next.await?? {
                Some(slug) => visit(slug),
                None => break,
            }
            count += 1;
        }

        Ok(count)
    }
}
