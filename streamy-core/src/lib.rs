//! # Streamy Core
//!
//! Feed assembly for the Streamy home screen.
//!
//! - [`client`]: the [`CatalogClient`](client::CatalogClient) seam and its
//!   reqwest implementation.
//! - [`feed`]: [`FeedPlan`](feed::FeedPlan) describes the batch of lookups
//!   and the section layout; [`FeedComposer`](feed::FeedComposer) runs the
//!   batch concurrently and folds the results.
//!
//! ## Feature Flags
//!
//! - `test-utils`: exposes [`testing::FakeCatalogClient`] to other crates'
//!   test suites.

#![allow(missing_docs)]

pub mod client;
pub mod error;
pub mod feed;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use client::{CatalogClient, HttpCatalogClient, LookupKind};
pub use error::{CatalogError, FeedError};
pub use feed::{Feed, FeedComposer, FeedPlan, PlanError};
