pub mod batch;
#[cfg(feature = "cli")]
pub mod cli;
pub mod confidence;
pub mod detector;
pub mod error;
pub mod ngram;
pub mod rules_engine;
pub mod scorer;
pub mod script_filter;
pub mod segmenter;
pub mod trainer;
pub mod utils;

pub use crate::detector::{LanguageDetector, LanguageDetectorBuilder};
pub use crate::error::{ConfigError, TrainingError};
pub use lingid_model::{ConfidenceValue, DetectionResult, IsoCode639_1, IsoCode639_3, Language, Script};
