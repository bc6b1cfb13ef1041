//! AuthSense - Behavioral biometrics capture and login risk scoring
//!
//! AuthSense turns raw login-form input events into a risk verdict
//! through a deterministic pipeline: event capture → feature derivation
//! → baseline comparison → verdict.
//!
//! ## Modules
//!
//! - **Collector**: accumulate keystroke timing and pointer movement for
//!   one authentication attempt
//! - **Scorer**: classify a feature vector against a per-user baseline
//! - **Pipeline**: orchestrate capture replay, default-baseline
//!   substitution, scoring, and profile persistence

pub mod adapter;
pub mod collector;
pub mod error;
pub mod pipeline;
pub mod profile;
pub mod scorer;
pub mod types;

pub use adapter::{parse_capture, replay_capture, CaptureEvent, CaptureSession};
pub use collector::SignalCollector;
pub use error::SenseError;
pub use pipeline::{score_capture, LoginEvaluator};
pub use profile::{InMemoryProfileStore, ProfileStore};
pub use scorer::RiskScorer;
pub use types::{FeatureVector, RiskLevel, RiskVerdict, UserProfile};

/// AuthSense version embedded in CLI output
pub const AUTHSENSE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for emitted verdict payloads
pub const PRODUCER_NAME: &str = "authsense";
