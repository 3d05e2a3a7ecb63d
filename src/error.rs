//! Typed error boundaries for the detector builder and the training writer
//! (spec §7). Internal plumbing (file I/O, CLI argument context) keeps using
//! `anyhow`, exactly as heliport's `cli` and `trainer` modules do; these two
//! types are the only errors a library caller is expected to match on.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from `LanguageDetectorBuilder` (spec §6). Messages are part of
/// the contract: callers match on them in tests.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("LanguageDetector needs at least 1 language to choose from")]
    NoLanguages,

    #[error("Minimum relative distance must lie in between 0.0 and 0.99")]
    InvalidMinimumRelativeDistance,
}

/// Errors from `create_and_write_language_model_files` and
/// `MostCommonNgramsWriter` (spec §4.J/§6); exact wording matched against
/// `examples/original_source/tests/python/test_writer.py`.
#[derive(Debug, Error)]
pub enum TrainingError {
    #[error("Input file path '{}' is not absolute", .0.display())]
    InputPathNotAbsolute(PathBuf),

    #[error("Input file '{}' does not exist", .0.display())]
    InputFileDoesNotExist(PathBuf),

    #[error("Input file path '{}' does not represent a regular file", .0.display())]
    InputPathNotAFile(PathBuf),

    #[error("Output directory path '{}' is not absolute", .0.display())]
    OutputPathNotAbsolute(PathBuf),

    #[error("Output directory path '{}' does not exist", .0.display())]
    OutputDirDoesNotExist(PathBuf),

    #[error("Output directory path '{}' does not represent a directory", .0.display())]
    OutputPathNotADirectory(PathBuf),

    #[error("Set of languages must not be empty")]
    NoLanguages,

    #[error("Amount of most common ngrams must be greater than zero")]
    NonPositiveMostCommonCount,

    #[error("could not read input file '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
