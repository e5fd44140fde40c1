//! Application state for the driver salary API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use crate::aggregation::AggregationOptions;
use crate::store::DynSalaryStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// injected data-store handle and the aggregation toggles. The store is
/// opened at process start and dropped at shutdown.
#[derive(Clone)]
pub struct AppState {
    store: DynSalaryStore,
    options: AggregationOptions,
}

impl AppState {
    /// Creates a new application state with the given store and options.
    pub fn new(store: DynSalaryStore, options: AggregationOptions) -> Self {
        Self { store, options }
    }

    /// Returns a reference to the data store.
    pub fn store(&self) -> &dyn crate::store::SalaryStore {
        self.store.as_ref()
    }

    /// Returns the aggregation toggles.
    pub fn options(&self) -> &AggregationOptions {
        &self.options
    }
}
