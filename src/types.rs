//! Core types for behavioral capture and risk scoring
//!
//! Field names on persisted types use camelCase so documents written by
//! this crate stay interchangeable with profiles produced by the original
//! web client (`avgTypingSpeed`, `behavioralBaseline`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Four-value summary of one authentication attempt's input behavior.
///
/// Also used as the per-user baseline: after every successful login the
/// profile store overwrites the stored baseline with the attempt's vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureVector {
    /// Mean inter-keystroke interval across general input fields (ms).
    /// 0 when no intervals were collected.
    pub avg_typing_speed: f64,
    /// Mean interval between password-field keystrokes (ms).
    /// 0 when fewer than two password key events were seen.
    pub avg_password_typing_speed: f64,
    /// Cumulative Euclidean pointer distance over the attempt (px).
    pub total_mouse_distance: f64,
    /// Number of pointer *move* samples. The original client named this
    /// "click count" but populated it from move events; the scoring
    /// thresholds were tuned against that behavior, so the semantic is
    /// preserved here pending product clarification.
    pub mouse_click_count: u32,
}

impl FeatureVector {
    /// Fixed baseline assigned on first profile creation, before any
    /// real attempt has been observed.
    pub const DEFAULT_BASELINE: FeatureVector = FeatureVector {
        avg_typing_speed: 150.0,
        avg_password_typing_speed: 100.0,
        total_mouse_distance: 5000.0,
        mouse_click_count: 20,
    };

    /// All-zero vector, what an empty attempt derives to.
    pub fn zero() -> Self {
        Self {
            avg_typing_speed: 0.0,
            avg_password_typing_speed: 0.0,
            total_mouse_distance: 0.0,
            mouse_click_count: 0,
        }
    }
}

/// Round to two decimal places for storage and comparison.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Discrete risk classification for one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        };
        f.write_str(s)
    }
}

/// Outcome of scoring one attempt against a baseline.
///
/// `details` holds the triggered anomaly explanations in fixed check
/// order; when nothing triggered it holds the single no-anomaly sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskVerdict {
    pub level: RiskLevel,
    pub details: Vec<String>,
}

impl RiskVerdict {
    /// Joined one-line rendering for hosts that want the original
    /// client's single `details` string.
    pub fn summary(&self) -> String {
        self.details.join(" ")
    }
}

/// Persisted per-user security profile document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub last_login: DateTime<Utc>,
    pub behavioral_baseline: FeatureVector,
    pub security_score: RiskVerdict,
}
