//! Session persistence for the tripcost travel budget estimator.
//!
//! - [`Session`] - Preferences, recent searches and saved trips in memory
//! - [`SessionStore`] - Loads and saves the session as JSON
//! - [`SessionSnapshot`] - The persisted document

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod session;
mod snapshot;
mod store;

pub use session::{MAX_RECENT_SEARCHES, Session};
pub use snapshot::{RecentSearch, SavedTrip, SessionSnapshot, TripId};
pub use store::{Result, SessionError, SessionStore};
