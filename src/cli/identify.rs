//! `lingid identify` subcommand. Grounded on heliport's
//! `cli/identify.rs::IdentifyCmd`: read lines from a file or stdin, identify
//! each, write results to a file or stdout, optionally batched across a
//! rayon thread pool.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use itertools::Itertools;
use log::{debug, info};

use strum::IntoEnumIterator;

use lingid_model::Language;

use crate::detector::{LanguageDetector, LanguageDetectorBuilder};
use crate::utils::Abort;

#[derive(Args, Clone, Debug)]
pub struct IdentifyCmd {
    #[arg(
        short = 'j',
        long,
        default_value_t = 0,
        help = "Number of parallel threads to use. 0 means single-threaded"
    )]
    threads: usize,
    #[arg(
        short,
        long,
        default_value_t = 100000,
        help = "Number of lines to buffer per parallel batch"
    )]
    batch_size: usize,
    #[arg(short = 's', long, help = "Print the winning language's confidence alongside its code")]
    print_scores: bool,

    #[arg(help = "Input file, default: stdin")]
    input_file: Option<PathBuf>,
    #[arg(help = "Output file, default: stdout")]
    output_file: Option<PathBuf>,

    #[arg(short, long, default_value = "./LanguageModels", help = "Model directory")]
    model_dir: PathBuf,
    #[arg(
        long,
        short = 'l',
        value_delimiter = ',',
        help = "Restrict detection to a comma-separated list of ISO 639-1 codes"
    )]
    relevant_langs: Option<Vec<String>>,
    #[arg(long, help = "Preload every configured language's model before the first text")]
    preload: bool,
}

fn open_reader(p: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(p).with_context(|| format!("Error opening input file {} for reading", p.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

fn open_writer(p: &Path) -> Result<Box<dyn Write>> {
    let file = File::create(p).with_context(|| format!("Error opening output file {} for writing", p.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}

fn parse_languages(codes: &[String]) -> Result<Vec<Language>> {
    let mut languages = Vec::new();
    for code in codes {
        let iso = lingid_model::IsoCode639_1::from_str(code)
            .with_context(|| format!("Language code '{code}' does not exist"))?;
        let lang = Language::iter()
            .find(|l: &Language| l.iso_code_639_1() == iso)
            .with_context(|| format!("Language code '{code}' does not exist"))?;
        languages.push(lang);
    }
    Ok(languages)
}

impl IdentifyCmd {
    pub fn cli(self) -> Result<()> {
        info!("Starting");
        let now = Instant::now();
        debug!("{:?}", self);

        let languages = if let Some(codes) = &self.relevant_langs {
            parse_languages(codes).or_abort(1)
        } else {
            Language::iter().collect::<Vec<Language>>()
        };

        info!("Loading model from '{}'", self.model_dir.display());
        let mut builder = LanguageDetectorBuilder::from_languages(languages).or_abort(1);
        builder = builder.with_model_dir(self.model_dir.clone());
        if self.preload {
            builder = builder.with_preloaded_language_models();
        }
        let detector = builder.build();

        let reader: Box<dyn BufRead> = match &self.input_file {
            Some(p) => open_reader(p).or_abort(1),
            None => Box::new(io::stdin().lock()),
        };
        let mut writer = match &self.output_file {
            Some(p) => open_writer(p).or_abort(1),
            None => Box::new(io::stdout()) as Box<dyn Write>,
        };

        if self.threads == 0 {
            info!("Running single-threaded");
            self.run_single(&detector, reader, &mut writer).or_abort(1);
        } else {
            info!("Running with {} threads", self.threads);
            self.run_parallel(&detector, reader, &mut writer).or_abort(1);
        }

        info!("Finished");
        info!("Elapsed time: {:.2?}", now.elapsed());
        Ok(())
    }

    fn run_single<R: BufRead, W: Write>(&self, detector: &LanguageDetector, reader: R, writer: &mut W) -> Result<()> {
        for line in reader.lines() {
            let line = line?;
            self.print_result(detector, &line, writer)?;
        }
        Ok(())
    }

    fn run_parallel<R: BufRead, W: Write>(&self, detector: &LanguageDetector, reader: R, writer: &mut W) -> Result<()> {
        rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build_global()
            .or_abort(1);

        for batch_result in &reader.lines().chunks(self.batch_size) {
            let batch: Vec<String> = batch_result.map(|l| l.or_abort(1)).collect();
            let results = detector.detect_languages_in_parallel_of(&batch);
            for (text, lang) in batch.iter().zip(results) {
                self.print_line(text, lang, detector, writer)?;
            }
        }
        Ok(())
    }

    fn print_result<W: Write>(&self, detector: &LanguageDetector, text: &str, writer: &mut W) -> Result<()> {
        let lang = detector.detect_language_of(text);
        self.print_line(text, lang, detector, writer)
    }

    fn print_line<W: Write>(
        &self,
        text: &str,
        lang: Option<Language>,
        detector: &LanguageDetector,
        writer: &mut W,
    ) -> Result<()> {
        let label = lang.map(|l| l.to_string()).unwrap_or_else(|| "unknown".to_string());
        if self.print_scores {
            let confidence = lang.map(|l| detector.compute_language_confidence(text, l)).unwrap_or(0.0);
            writeln!(writer, "{label}\t{confidence:.4}")?;
        } else {
            writeln!(writer, "{label}")?;
        }
        Ok(())
    }
}
