//! Voyage page state: cached queries and mutation bookkeeping.
//!
//! DESIGN
//! ======
//! Each list is a `Query` that records its data, last error, whether a fetch
//! is in flight, and whether it has been invalidated. A successful fetch bumps
//! `version`, so the table can tell a refetched list from the previous one.
//! Mutation settlement returns the `Notice` to raise instead of raising it,
//! keeping signal updates and notifications separate.

#[cfg(test)]
#[path = "voyages_test.rs"]
mod voyages_test;

use std::collections::BTreeSet;

use crate::net::api::ApiError;
use crate::net::types::{UnitType, Voyage};
use crate::state::toasts::Notice;

pub const CREATED_MESSAGE: &str = "Voyage created successfully!";
pub const DELETED_MESSAGE: &str = "Voyage deleted successfully!";

/// Client-side cache entry for one API list.
#[derive(Clone, Debug)]
pub struct Query<T> {
    pub data: Option<T>,
    pub error: Option<String>,
    pub fetching: bool,
    pub stale: bool,
    pub version: u64,
}

impl<T> Default for Query<T> {
    fn default() -> Self {
        Self { data: None, error: None, fetching: false, stale: true, version: 0 }
    }
}

impl<T> Query<T> {
    /// A fetch should start: the entry is stale and nothing is in flight.
    pub fn needs_fetch(&self) -> bool {
        self.stale && !self.fetching
    }

    pub fn begin_fetch(&mut self) {
        self.fetching = true;
        self.stale = false;
    }

    pub fn resolve(&mut self, data: T) {
        self.data = Some(data);
        self.error = None;
        self.fetching = false;
        self.version += 1;
    }

    pub fn fail(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
        self.fetching = false;
    }

    /// Mark stale so the next read triggers a fresh fetch.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// First load has not finished yet.
    pub fn is_loading(&self) -> bool {
        self.data.is_none() && self.error.is_none()
    }
}

/// What the page should render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageStatus {
    Loading,
    Failed(String),
    Ready,
}

/// State owned by the voyage page.
#[derive(Clone, Debug, Default)]
pub struct VoyagesState {
    pub voyages: Query<Vec<Voyage>>,
    pub unit_types: Query<Vec<UnitType>>,
    pub create_pending: bool,
    pub pending_deletes: BTreeSet<String>,
}

impl VoyagesState {
    /// Loading while either first fetch is outstanding; failed once either
    /// query has errored.
    pub fn page_status(&self) -> PageStatus {
        if let Some(err) = self.voyages.error.as_ref().or(self.unit_types.error.as_ref()) {
            return PageStatus::Failed(err.clone());
        }
        if self.voyages.is_loading() || self.unit_types.is_loading() {
            return PageStatus::Loading;
        }
        PageStatus::Ready
    }

    pub fn voyages(&self) -> &[Voyage] {
        self.voyages.data.as_deref().unwrap_or_default()
    }

    pub fn unit_types(&self) -> &[UnitType] {
        self.unit_types.data.as_deref().unwrap_or_default()
    }

    pub fn is_delete_pending(&self, voyage_id: &str) -> bool {
        self.pending_deletes.contains(voyage_id)
    }

    /// Returns `false` when a create is already in flight.
    pub fn begin_create(&mut self) -> bool {
        !std::mem::replace(&mut self.create_pending, true)
    }

    /// Record a finished create. Success invalidates the voyage list.
    pub fn settle_create(&mut self, result: &Result<(), ApiError>) -> Notice {
        self.create_pending = false;
        match result {
            Ok(()) => {
                self.voyages.invalidate();
                Notice::success(CREATED_MESSAGE)
            }
            Err(err) => Notice::error(err.to_string()),
        }
    }

    /// Returns `false` when a delete for this voyage is already in flight.
    pub fn begin_delete(&mut self, voyage_id: &str) -> bool {
        self.pending_deletes.insert(voyage_id.to_owned())
    }

    /// Record a finished delete. The voyage list is invalidated on either
    /// outcome so the table reflects what the API now holds.
    pub fn settle_delete(&mut self, voyage_id: &str, result: &Result<(), ApiError>) -> Notice {
        self.pending_deletes.remove(voyage_id);
        self.voyages.invalidate();
        match result {
            Ok(()) => Notice::success(DELETED_MESSAGE),
            Err(err) => Notice::error(err.to_string()),
        }
    }
}
