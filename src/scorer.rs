//! Risk scoring
//!
//! Classifies a freshly derived [`FeatureVector`] against a stored
//! baseline using fixed ratio thresholds. Scoring is a total function:
//! callers substitute [`FeatureVector::DEFAULT_BASELINE`] when a user has
//! no stored baseline yet, so `score` never deals with a missing one.

use crate::types::{FeatureVector, RiskLevel, RiskVerdict};

/// A metric this far below baseline (strictly) reads as "too fast".
const FAST_RATIO: f64 = 0.7;
/// A metric this far above baseline (strictly) reads as "too slow".
const SLOW_RATIO: f64 = 1.5;
/// Mouse travel beyond this multiple of baseline is excessive.
const MOUSE_DISTANCE_RATIO: f64 = 2.0;
/// Fewer interactions than this fraction of baseline suggests automation.
const MIN_INTERACTION_RATIO: f64 = 0.5;

/// Risk factor count at or above which an attempt classifies as High.
const HIGH_RISK_FACTORS: u32 = 3;

const NO_ANOMALIES: &str = "No significant behavioral anomalies detected.";

/// Threshold-based anomaly scorer.
pub struct RiskScorer;

impl RiskScorer {
    /// Score one attempt's feature vector against the user's baseline.
    ///
    /// Each check contributes at most one risk factor and, on
    /// triggering, one explanation string; `details` keeps the fixed
    /// check order. The typing checks only evaluate when the current
    /// metric is non-zero — an attempt with no keystrokes says nothing
    /// about typing rhythm. The mouse checks always evaluate.
    pub fn score(current: &FeatureVector, baseline: &FeatureVector) -> RiskVerdict {
        let mut risk_factors: u32 = 0;
        let mut details: Vec<String> = Vec::new();

        if current.avg_typing_speed > 0.0 {
            if current.avg_typing_speed < baseline.avg_typing_speed * FAST_RATIO {
                risk_factors += 1;
                details.push("Typing speed significantly faster than usual.".to_string());
            } else if current.avg_typing_speed > baseline.avg_typing_speed * SLOW_RATIO {
                risk_factors += 1;
                details.push("Typing speed significantly slower than usual.".to_string());
            }
        }

        if current.avg_password_typing_speed > 0.0 {
            if current.avg_password_typing_speed
                < baseline.avg_password_typing_speed * FAST_RATIO
            {
                risk_factors += 1;
                details.push("Password typing speed faster than baseline.".to_string());
            } else if current.avg_password_typing_speed
                > baseline.avg_password_typing_speed * SLOW_RATIO
            {
                risk_factors += 1;
                details.push("Password typing speed slower than baseline.".to_string());
            }
        }

        if current.total_mouse_distance > baseline.total_mouse_distance * MOUSE_DISTANCE_RATIO {
            risk_factors += 1;
            details.push("Excessive mouse movement detected.".to_string());
        }

        if (current.mouse_click_count as f64)
            < baseline.mouse_click_count as f64 * MIN_INTERACTION_RATIO
        {
            risk_factors += 1;
            details.push("Too few mouse interactions (potential automation).".to_string());
        }

        let level = if risk_factors >= HIGH_RISK_FACTORS {
            RiskLevel::High
        } else if risk_factors >= 1 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        };

        if details.is_empty() {
            details.push(NO_ANOMALIES.to_string());
        }

        RiskVerdict { level, details }
    }
}
