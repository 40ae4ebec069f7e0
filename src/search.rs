//! Search service
//!
//! Orchestrates one search: validate the keyword, fetch the catalog,
//! run the matcher, attach local times, and commit the response to the
//! display slot. Overlapping searches are coordinated by a monotonic
//! request token: only the response carrying the latest issued token
//! updates the display, stale responses are discarded.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use crate::Result;
use crate::error::TravelRecError;
use crate::loader::CatalogSource;
use crate::localtime;
use crate::matcher;
use crate::models::{Destination, SearchType};

/// One rendered result: the destination plus its current local time,
/// when the destination's country is in the timezone table.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ResultCard {
    #[serde(flatten)]
    pub destination: Destination,
    #[serde(rename = "localTime", skip_serializing_if = "Option::is_none")]
    pub local_time: Option<String>,
}

/// The response for one search invocation
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SearchResponse {
    /// Which matching branch produced the results
    #[serde(rename = "searchType")]
    pub search_type: SearchType,
    /// Matched destinations in insertion order
    pub results: Vec<ResultCard>,
    /// Request token issued for this search
    pub token: u64,
}

/// Outcome of a search: the response, and whether it won the display
/// slot or was discarded as stale.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub response: SearchResponse,
    pub displayed: bool,
}

/// Search service owning the catalog source and the display slot
pub struct SearchService {
    source: Box<dyn CatalogSource>,
    issued: AtomicU64,
    display: RwLock<Option<SearchResponse>>,
}

impl SearchService {
    #[must_use]
    pub fn new(source: Box<dyn CatalogSource>) -> Self {
        Self {
            source,
            issued: AtomicU64::new(0),
            display: RwLock::new(None),
        }
    }

    /// Run one search for a raw user keyword.
    ///
    /// The keyword is trimmed and lower-cased here; an empty keyword is
    /// rejected before the catalog is ever fetched.
    #[instrument(skip(self), fields(keyword = %raw_keyword))]
    pub async fn search(&self, raw_keyword: &str) -> Result<SearchOutcome> {
        let keyword = normalize_keyword(raw_keyword)?;
        let token = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(token, "Searching catalog from {}", self.source.describe());

        let catalog = self.source.fetch().await?;
        let outcome = matcher::match_keyword(&catalog, &keyword);

        let results: Vec<ResultCard> = outcome
            .results
            .into_iter()
            .map(|destination| ResultCard {
                local_time: localtime::local_time_for(&destination.name),
                destination,
            })
            .collect();

        info!(
            token,
            search_type = ?outcome.search_type,
            count = results.len(),
            "Search completed"
        );

        let response = SearchResponse {
            search_type: outcome.search_type,
            results,
            token,
        };
        let displayed = self.commit(response.clone()).await;
        if !displayed {
            debug!(token, "Discarding stale search response");
        }

        Ok(SearchOutcome {
            response,
            displayed,
        })
    }

    /// Store the response only if its token is still the latest issued
    async fn commit(&self, response: SearchResponse) -> bool {
        let mut display = self.display.write().await;
        if response.token == self.issued.load(Ordering::SeqCst) {
            *display = Some(response);
            true
        } else {
            false
        }
    }

    /// The currently displayed response, if any search has completed
    pub async fn current(&self) -> Option<SearchResponse> {
        self.display.read().await.clone()
    }
}

/// Trim and lower-case a raw keyword, rejecting empty input
pub fn normalize_keyword(raw: &str) -> Result<String> {
    let keyword = raw.trim().to_lowercase();
    if keyword.is_empty() {
        return Err(TravelRecError::validation("Please enter a search keyword"));
    }
    Ok(keyword)
}
