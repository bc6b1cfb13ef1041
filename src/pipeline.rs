//! Login evaluation pipeline
//!
//! Orchestrates one authentication attempt end to end: derive the
//! attempt's feature vector, fetch the user's baseline (falling back to
//! the fixed default), score, and persist the updated profile. The
//! collector and scorer stay free of any storage concerns; everything
//! stateful flows through the [`ProfileStore`] seam.

use crate::adapter::{parse_capture, replay_capture};
use crate::error::SenseError;
use crate::profile::ProfileStore;
use crate::scorer::RiskScorer;
use crate::types::{FeatureVector, RiskVerdict, UserProfile};
use chrono::Utc;

/// Score a recorded capture session against a baseline (stateless,
/// one-shot). Pass `None` for users with no stored baseline.
pub fn score_capture(
    session_json: &str,
    baseline: Option<FeatureVector>,
) -> Result<RiskVerdict, SenseError> {
    // Stage 1: Parse the recorded session
    let session = parse_capture(session_json)?;

    // Stage 2: Replay events into a fresh collector
    let collector = replay_capture(&session);

    // Stage 3: Derive the feature vector and score against the baseline
    let features = collector.feature_vector();
    let baseline = baseline.unwrap_or(FeatureVector::DEFAULT_BASELINE);
    Ok(RiskScorer::score(&features, &baseline))
}

/// Stateful evaluator that owns a profile store.
///
/// Use this in a login flow: each successful attempt's vector becomes
/// the user's next baseline, and the verdict is persisted alongside it.
pub struct LoginEvaluator<S: ProfileStore> {
    store: S,
}

impl<S: ProfileStore> LoginEvaluator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Evaluate a successful login attempt.
    ///
    /// Fetches the user's baseline (default-substituted when absent),
    /// scores the attempt, persists `{lastLogin, behavioralBaseline,
    /// securityScore}` back to the store, and returns the verdict.
    pub fn evaluate(
        &mut self,
        user_id: &str,
        features: FeatureVector,
    ) -> Result<RiskVerdict, SenseError> {
        let baseline = self
            .store
            .baseline(user_id)?
            .unwrap_or(FeatureVector::DEFAULT_BASELINE);

        let verdict = RiskScorer::score(&features, &baseline);

        self.store.record_login(
            user_id,
            UserProfile {
                last_login: Utc::now(),
                behavioral_baseline: features,
                security_score: verdict.clone(),
            },
        )?;

        Ok(verdict)
    }

    /// Evaluate a recorded capture session for its embedded user.
    pub fn evaluate_capture(&mut self, session_json: &str) -> Result<RiskVerdict, SenseError> {
        let session = parse_capture(session_json)?;
        let features = replay_capture(&session).feature_vector();
        self.evaluate(&session.user_id, features)
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the evaluator and hand the store back.
    pub fn into_store(self) -> S {
        self.store
    }
}
