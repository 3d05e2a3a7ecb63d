//! Model-files writer (spec component J, training-side).
//!
//! Grounded on heliport's `trainer.rs::count_ngrams`/`count_all_ngrams` for
//! the counting shape (one `Counter<String>` per order, built by shingling
//! whitespace-delimited, non-alphabetic-stripped tokens) and on
//! `lingid_model::model`'s fraction reduction/inversion and Brotli-JSON
//! encoding for the on-disk format, which diverges from heliport's
//! frequency-count text files (spec §4.J mandates the compact fractional
//! representation instead).

use std::collections::BTreeMap;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use counter::Counter;
use regex::Regex;

use lingid_model::model::{brotli_compress, encode_model_file, reduce_fraction};
use lingid_model::{Language, OrderNgram};

use crate::error::TrainingError;
use crate::ngram::ngrams_of;

fn validate_input_file(path: &Path) -> Result<(), TrainingError> {
    if !path.is_absolute() {
        return Err(TrainingError::InputPathNotAbsolute(path.to_path_buf()));
    }
    if !path.exists() {
        return Err(TrainingError::InputFileDoesNotExist(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(TrainingError::InputPathNotAFile(path.to_path_buf()));
    }
    Ok(())
}

fn validate_output_dir(path: &Path) -> Result<(), TrainingError> {
    if !path.is_absolute() {
        return Err(TrainingError::OutputPathNotAbsolute(path.to_path_buf()));
    }
    if !path.exists() {
        return Err(TrainingError::OutputDirDoesNotExist(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(TrainingError::OutputPathNotADirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Count order-`n` n-grams in `text`, after lowercasing and keeping only
/// characters matched by `char_class` plus whitespace (spec §4.J).
fn count_ngrams(text: &str, order: usize, char_class: &Regex) -> Counter<String> {
    let lowercased = text.to_lowercase();
    let mut filtered = String::with_capacity(lowercased.len());
    for c in lowercased.chars() {
        if c.is_whitespace() || char_class.is_match(&c.to_string()) {
            filtered.push(c);
        } else {
            filtered.push(' ');
        }
    }

    let mut counts = Counter::new();
    for gram in ngrams_of(&filtered, order) {
        if let Some(entry) = counts.get_mut(&gram) {
            *entry += 1;
        } else {
            counts.insert(gram, 1);
        }
    }
    counts
}

/// `create_and_write_language_model_files` (spec §4.J). Always produces
/// exactly five files, one per order.
pub fn create_and_write_language_model_files(
    input_file_path: &Path,
    output_directory_path: &Path,
    language: Language,
    char_class: &str,
) -> Result<(), TrainingError> {
    validate_input_file(input_file_path)?;
    validate_output_dir(output_directory_path)?;

    let char_class_re = Regex::new(char_class).unwrap_or_else(|_| Regex::new(r"\p{L}").unwrap());
    let text = fs::read_to_string(input_file_path).map_err(|source| TrainingError::Io {
        path: input_file_path.to_path_buf(),
        source,
    })?;

    let iso = language.iso_code_639_1().to_string().to_lowercase();

    for order in 1..=5usize {
        let ngram_order = OrderNgram::from_n(order).expect("order in 1..=5");
        let counts = count_ngrams(&text, order, &char_class_re);
        let total: usize = counts.values().sum();

        let mut fractions: BTreeMap<(u64, u64), Vec<String>> = BTreeMap::new();
        if total > 0 {
            for (gram, count) in counts.iter() {
                let (num, den) = reduce_fraction(*count as u64, total as u64);
                fractions.entry((num, den)).or_default().push(gram.clone());
            }
        }

        let file = encode_model_file(&iso, fractions);
        let json = serde_json::to_vec(&file).expect("model file serialization cannot fail");
        let compressed = brotli_compress(&json);
        fs::write(output_directory_path.join(ngram_order.file_name()), compressed).map_err(
            |source| TrainingError::Io {
                path: output_directory_path.to_path_buf(),
                source,
            },
        )?;
    }

    Ok(())
}

/// Per-language, per-order most-common-ngram counts gathered during corpus
/// preparation, ready to be written by [`write_most_common_ngrams`].
pub struct MostCommonNgramsInput {
    pub language: Language,
    pub counts_by_order: BTreeMap<usize, Counter<String>>,
}

/// `MostCommonNgramsWriter` (spec §4.J): per (language, order), pick the
/// top-`amount` n-grams by frequency and serialize them ASCII-sorted under
/// a per-language subdirectory named after the lowercase ISO 639-1 code.
pub fn write_most_common_ngrams(
    inputs: &[MostCommonNgramsInput],
    output_directory_path: &Path,
    amount: usize,
) -> Result<(), TrainingError> {
    if inputs.is_empty() {
        return Err(TrainingError::NoLanguages);
    }
    if amount == 0 {
        return Err(TrainingError::NonPositiveMostCommonCount);
    }
    validate_output_dir(output_directory_path)?;

    for input in inputs {
        let lang_dir = output_directory_path.join(input.language.iso_code_639_1().to_string().to_lowercase());
        fs::create_dir_all(&lang_dir).map_err(|source| TrainingError::Io {
            path: lang_dir.clone(),
            source,
        })?;

        for (&order, counts) in &input.counts_by_order {
            let Some(ngram_order) = OrderNgram::from_n(order) else {
                continue;
            };
            let mut top: Vec<String> = counts
                .k_most_common_ordered(amount)
                .into_iter()
                .map(|(gram, _)| gram)
                .collect();
            top.sort();

            let file = lingid_model::rules::MostCommonNgramsFile {
                language: input.language.iso_code_639_1().to_string().to_lowercase(),
                ngrams: top,
            };
            let json = serde_json::to_vec(&file).expect("most-common file serialization cannot fail");
            let compressed = brotli_compress(&json);
            let path = lang_dir.join(format!("most_common_{}.json.br", ngram_order.file_stem()));
            fs::write(&path, compressed).map_err(|source| TrainingError::Io { path, source })?;
        }
    }

    Ok(())
}

/// Read a training corpus line by line, counting order-n n-grams the way
/// [`count_ngrams`] does for a single in-memory string. Grounded on
/// heliport's `count_ngrams`, which streams the file rather than holding it
/// all in memory at once.
pub fn count_ngrams_in_file(
    input_file_path: &Path,
    order: usize,
    char_class: &Regex,
) -> std::io::Result<Counter<String>> {
    let reader = BufReader::new(fs::File::open(input_file_path)?);
    let mut counts = Counter::new();
    for line in reader.lines() {
        let line = line?;
        counts += count_ngrams(&line, order, char_class);
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_relative_input_path() {
        let err = create_and_write_language_model_files(
            Path::new("some/relative/path/file.txt"),
            Path::new("/some/output/directory"),
            Language::English,
            "\\p{L}",
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Input file path 'some/relative/path/file.txt' is not absolute"
        );
    }

    #[test]
    fn rejects_nonexistent_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist.txt");
        let err = create_and_write_language_model_files(
            &missing,
            dir.path(),
            Language::English,
            "\\p{L}",
        )
        .unwrap_err();
        assert!(err.to_string().ends_with("does not exist"));
    }

    #[test]
    fn rejects_directory_as_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = create_and_write_language_model_files(
            dir.path(),
            dir.path(),
            Language::English,
            "\\p{L}",
        )
        .unwrap_err();
        assert!(err.to_string().ends_with("does not represent a regular file"));
    }

    #[test]
    fn writes_five_files_for_a_valid_corpus() {
        let input_dir = tempfile::tempdir().unwrap();
        let output_dir = tempfile::tempdir().unwrap();
        let input_path = input_dir.path().join("corpus.txt");
        fs::write(&input_path, "hello world hello there").unwrap();

        create_and_write_language_model_files(&input_path, output_dir.path(), Language::English, "\\p{L}")
            .unwrap();

        for name in [
            "unigrams.json.br",
            "bigrams.json.br",
            "trigrams.json.br",
            "quadrigrams.json.br",
            "fivegrams.json.br",
        ] {
            assert!(output_dir.path().join(name).exists(), "{name} missing");
        }
    }

    #[test]
    fn most_common_writer_rejects_empty_language_set() {
        let output_dir = tempfile::tempdir().unwrap();
        let err = write_most_common_ngrams(&[], output_dir.path(), 10).unwrap_err();
        assert_eq!(err.to_string(), "Set of languages must not be empty");
    }

    #[test]
    fn most_common_writer_rejects_zero_amount() {
        let output_dir = tempfile::tempdir().unwrap();
        let mut counts_by_order = BTreeMap::new();
        counts_by_order.insert(1usize, Counter::<String>::new());
        let inputs = [MostCommonNgramsInput {
            language: Language::English,
            counts_by_order,
        }];
        let err = write_most_common_ngrams(&inputs, output_dir.path(), 0).unwrap_err();
        assert_eq!(err.to_string(), "Amount of most common ngrams must be greater than zero");
    }
}
