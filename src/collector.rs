//! Behavioral signal collection
//!
//! Accumulates keystroke timing and pointer-movement samples for one
//! authentication attempt and reduces them to a [`FeatureVector`].
//!
//! One collector instance serves one in-flight attempt; hosts supporting
//! concurrent attempts (multiple tabs) must give each its own instance.
//! All operations are synchronous and in-memory, safe to call inline from
//! input-event handlers.

use crate::types::{round2, FeatureVector};
use chrono::Utc;

/// Per-attempt accumulator for behavioral input samples.
///
/// Malformed samples are dropped rather than raised: a non-finite pointer
/// coordinate or a timestamp that runs backwards must never abort an
/// in-progress collection.
#[derive(Debug, Clone, Default)]
pub struct SignalCollector {
    /// Inter-keystroke deltas from general (non-password) fields, ms.
    key_intervals: Vec<u64>,
    /// Timestamp of the previous general key event, ms since epoch.
    last_key_press_ms: Option<i64>,
    /// Absolute timestamps of password-field key events, ms since epoch.
    password_key_timestamps: Vec<i64>,
    /// Previous pointer position. `None` until the first accepted move;
    /// (0, 0) is a legitimate prior position, so presence is tracked
    /// separately from the coordinates.
    last_position: Option<(f64, f64)>,
    /// Number of accepted pointer move samples.
    move_count: u32,
    /// Running Euclidean distance across accepted moves, px.
    cumulative_distance: f64,
}

impl SignalCollector {
    /// Create an empty collector for a new attempt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down in a general input field at the given timestamp
    /// (ms since epoch).
    ///
    /// Appends the delta against the previous general key event; the
    /// first key event of an attempt records no interval. A timestamp
    /// earlier than its predecessor records no interval either — the
    /// sample re-anchors the previous-key timestamp so the following
    /// interval is not inflated by clock skew.
    pub fn record_key_press_at(&mut self, timestamp_ms: i64) {
        if let Some(last) = self.last_key_press_ms {
            if timestamp_ms >= last {
                self.key_intervals.push((timestamp_ms - last) as u64);
            }
        }
        self.last_key_press_ms = Some(timestamp_ms);
    }

    /// Record a general key-down stamped with the current wall clock.
    pub fn record_key_press(&mut self) {
        self.record_key_press_at(Utc::now().timestamp_millis());
    }

    /// Record a key-down while the password field has focus.
    ///
    /// Only the timestamp is stored; differencing happens at derivation.
    /// A timestamp earlier than the last recorded one is dropped.
    pub fn record_password_key_press_at(&mut self, timestamp_ms: i64) {
        if let Some(&last) = self.password_key_timestamps.last() {
            if timestamp_ms < last {
                return;
            }
        }
        self.password_key_timestamps.push(timestamp_ms);
    }

    /// Record a password key-down stamped with the current wall clock.
    pub fn record_password_key_press(&mut self) {
        self.record_password_key_press_at(Utc::now().timestamp_millis());
    }

    /// Record a pointer movement sample.
    ///
    /// Non-finite coordinates drop the whole sample: no distance, no
    /// count increment, no position update. Otherwise the move always
    /// counts; distance accrues only once a previous position exists, so
    /// the first move contributes 0 distance.
    pub fn record_pointer_move(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        if let Some((last_x, last_y)) = self.last_position {
            self.cumulative_distance += ((x - last_x).powi(2) + (y - last_y).powi(2)).sqrt();
        }
        self.move_count += 1;
        self.last_position = Some((x, y));
    }

    /// Clear all accumulated state.
    ///
    /// Must run before a new attempt starts and after a failed attempt,
    /// so stale samples never leak into the next attempt.
    pub fn reset(&mut self) {
        self.key_intervals.clear();
        self.last_key_press_ms = None;
        self.password_key_timestamps.clear();
        self.last_position = None;
        self.move_count = 0;
        self.cumulative_distance = 0.0;
    }

    /// Derive the attempt's feature vector from the current state.
    ///
    /// Pure with respect to the collector: does not mutate, and calling
    /// it twice without intervening events yields identical results.
    pub fn feature_vector(&self) -> FeatureVector {
        FeatureVector {
            avg_typing_speed: round2(mean_u64(&self.key_intervals)),
            avg_password_typing_speed: round2(mean_consecutive_diffs(
                &self.password_key_timestamps,
            )),
            total_mouse_distance: round2(self.cumulative_distance),
            mouse_click_count: self.move_count,
        }
    }

    /// Number of inter-keystroke intervals collected so far.
    pub fn key_interval_count(&self) -> usize {
        self.key_intervals.len()
    }

    /// Number of accepted pointer move samples so far.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }
}

fn mean_u64(values: &[u64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<u64>() as f64 / values.len() as f64
}

/// Mean of consecutive differences; 0 with fewer than two samples.
fn mean_consecutive_diffs(timestamps: &[i64]) -> f64 {
    if timestamps.len() < 2 {
        return 0.0;
    }
    let total: i64 = timestamps.windows(2).map(|pair| pair[1] - pair[0]).sum();
    total as f64 / (timestamps.len() - 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_collector_derives_zero_vector() {
        let collector = SignalCollector::new();
        assert_eq!(collector.feature_vector(), FeatureVector::zero());
    }

    #[test]
    fn first_key_press_records_no_interval() {
        let mut collector = SignalCollector::new();
        collector.record_key_press_at(1_000);
        assert_eq!(collector.key_interval_count(), 0);
        assert_eq!(collector.feature_vector().avg_typing_speed, 0.0);
    }

    #[test]
    fn key_intervals_are_consecutive_differences() {
        let mut collector = SignalCollector::new();
        // Timestamps 0, 100, 250, 400 -> intervals 100, 150, 150
        for ts in [0, 100, 250, 400] {
            collector.record_key_press_at(ts);
        }
        assert_eq!(collector.key_interval_count(), 3);
        let expected = (100.0 + 150.0 + 150.0) / 3.0;
        assert_eq!(collector.feature_vector().avg_typing_speed, round2(expected));
    }

    #[test]
    fn backwards_key_timestamp_drops_interval_and_reanchors() {
        let mut collector = SignalCollector::new();
        collector.record_key_press_at(1_000);
        collector.record_key_press_at(500); // clock went backwards
        assert_eq!(collector.key_interval_count(), 0);

        // Next sample diffs against the re-anchored 500, not 1000.
        collector.record_key_press_at(700);
        assert_eq!(collector.key_interval_count(), 1);
        assert_eq!(collector.feature_vector().avg_typing_speed, 200.0);
    }

    #[test]
    fn password_speed_needs_two_samples() {
        let mut collector = SignalCollector::new();
        collector.record_password_key_press_at(1_000);
        assert_eq!(collector.feature_vector().avg_password_typing_speed, 0.0);

        collector.record_password_key_press_at(1_120);
        collector.record_password_key_press_at(1_200);
        // Diffs 120 and 80, mean 100.
        assert_eq!(collector.feature_vector().avg_password_typing_speed, 100.0);
    }

    #[test]
    fn backwards_password_timestamp_is_dropped() {
        let mut collector = SignalCollector::new();
        collector.record_password_key_press_at(2_000);
        collector.record_password_key_press_at(1_500);
        collector.record_password_key_press_at(2_100);
        assert_eq!(collector.feature_vector().avg_password_typing_speed, 100.0);
    }

    #[test]
    fn first_pointer_move_contributes_zero_distance() {
        let mut collector = SignalCollector::new();
        collector.record_pointer_move(100.0, 200.0);
        let vector = collector.feature_vector();
        assert_eq!(vector.total_mouse_distance, 0.0);
        assert_eq!(vector.mouse_click_count, 1);
    }

    #[test]
    fn pointer_distance_sums_euclidean_deltas() {
        let mut collector = SignalCollector::new();
        collector.record_pointer_move(0.0, 0.0);
        collector.record_pointer_move(3.0, 4.0); // +5
        collector.record_pointer_move(3.0, 10.0); // +6
        let vector = collector.feature_vector();
        assert_eq!(vector.total_mouse_distance, 11.0);
        assert_eq!(vector.mouse_click_count, 3);
    }

    #[test]
    fn origin_is_a_legitimate_prior_position() {
        let mut collector = SignalCollector::new();
        collector.record_pointer_move(0.0, 0.0);
        collector.record_pointer_move(0.0, 5.0);
        // A previous position of (0, 0) still yields distance.
        assert_eq!(collector.feature_vector().total_mouse_distance, 5.0);
    }

    #[test]
    fn non_finite_coordinates_drop_the_sample() {
        let mut collector = SignalCollector::new();
        collector.record_pointer_move(10.0, 10.0);
        collector.record_pointer_move(f64::NAN, 20.0);
        collector.record_pointer_move(f64::INFINITY, f64::INFINITY);
        collector.record_pointer_move(13.0, 14.0);

        let vector = collector.feature_vector();
        // Only the two finite samples counted; distance 3-4-5 triangle.
        assert_eq!(vector.mouse_click_count, 2);
        assert_eq!(vector.total_mouse_distance, 5.0);
    }

    #[test]
    fn move_count_tracks_calls_regardless_of_distance() {
        let mut collector = SignalCollector::new();
        for _ in 0..4 {
            collector.record_pointer_move(50.0, 50.0);
        }
        let vector = collector.feature_vector();
        assert_eq!(vector.mouse_click_count, 4);
        assert_eq!(vector.total_mouse_distance, 0.0);
    }

    #[test]
    fn derivation_is_idempotent() {
        let mut collector = SignalCollector::new();
        for ts in [0, 90, 200, 330] {
            collector.record_key_press_at(ts);
        }
        collector.record_password_key_press_at(1_000);
        collector.record_password_key_press_at(1_150);
        collector.record_pointer_move(0.0, 0.0);
        collector.record_pointer_move(30.0, 40.0);

        let first = collector.feature_vector();
        let second = collector.feature_vector();
        assert_eq!(first, second);
    }

    #[test]
    fn reset_clears_everything() {
        let mut collector = SignalCollector::new();
        for ts in [0, 100, 200] {
            collector.record_key_press_at(ts);
        }
        collector.record_password_key_press_at(500);
        collector.record_password_key_press_at(600);
        collector.record_pointer_move(1.0, 1.0);
        collector.record_pointer_move(4.0, 5.0);

        collector.reset();
        assert_eq!(collector.feature_vector(), FeatureVector::zero());

        // The first post-reset key press must not diff against the old
        // attempt's last timestamp.
        collector.record_key_press_at(10_000);
        assert_eq!(collector.key_interval_count(), 0);
    }

    #[test]
    fn derived_values_are_rounded_to_two_decimals() {
        let mut collector = SignalCollector::new();
        // Intervals 100, 101, 100 -> mean 100.333...
        for ts in [0, 100, 201, 301] {
            collector.record_key_press_at(ts);
        }
        collector.record_pointer_move(0.0, 0.0);
        collector.record_pointer_move(1.0, 1.0); // sqrt(2) = 1.41421...

        let vector = collector.feature_vector();
        assert_eq!(vector.avg_typing_speed, 100.33);
        assert_eq!(vector.total_mouse_distance, 1.41);
    }
}
