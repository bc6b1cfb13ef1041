//! Profile store interface
//!
//! The per-user baseline and latest verdict live in an external document
//! store; this module defines the narrow seam the scoring pipeline needs
//! (read one baseline, write one login record) plus a HashMap-backed
//! implementation for tests, demos, and the CLI.
//!
//! The store is the sole writer of the persisted baseline; the scorer
//! only ever reads it.

use crate::error::SenseError;
use crate::types::{FeatureVector, UserProfile};
use std::collections::HashMap;

/// Narrow read/write interface over the external user-profile store.
pub trait ProfileStore {
    /// Fetch the stored baseline for a user, `None` when the user has no
    /// profile yet. A missing baseline is not an error: the caller
    /// substitutes [`FeatureVector::DEFAULT_BASELINE`].
    fn baseline(&self, user_id: &str) -> Result<Option<FeatureVector>, SenseError>;

    /// Persist the outcome of a successful login, overwriting the user's
    /// stored baseline and security score.
    fn record_login(&mut self, user_id: &str, profile: UserProfile) -> Result<(), SenseError>;
}

/// In-memory profile store keyed by user id.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: HashMap<String, UserProfile>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full profile lookup, for hosts that display last login and score.
    pub fn profile(&self, user_id: &str) -> Option<&UserProfile> {
        self.profiles.get(user_id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn baseline(&self, user_id: &str) -> Result<Option<FeatureVector>, SenseError> {
        Ok(self.profiles.get(user_id).map(|p| p.behavioral_baseline))
    }

    fn record_login(&mut self, user_id: &str, profile: UserProfile) -> Result<(), SenseError> {
        self.profiles.insert(user_id.to_string(), profile);
        Ok(())
    }
}
