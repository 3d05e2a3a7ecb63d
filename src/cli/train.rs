//! `lingid train` subcommand. Grounded on heliport's
//! `cli/create_models.rs::CreateModelCmd`: one input file per language,
//! processed in parallel, writing into a shared output directory — only the
//! on-disk format differs (Brotli-compressed JSON fraction maps rather than
//! heliport's plain-text frequency files).

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use log::info;
use rayon::prelude::*;

use lingid_model::Language;

use crate::trainer::create_and_write_language_model_files;
use crate::utils::Abort;

#[derive(Args, Clone)]
pub struct TrainCmd {
    #[arg(help = "Output directory to write the model files into")]
    output_dir: PathBuf,
    #[arg(help = "One training-corpus text file per language")]
    input_files: Vec<PathBuf>,
    #[arg(long, value_parser = parse_language, help = "Languages, in the same order as input_files")]
    languages: Vec<Language>,
    #[arg(long, default_value = "\\p{L}", help = "Unicode property regex selecting which characters to keep")]
    char_class: String,
}

fn parse_language(s: &str) -> Result<Language, String> {
    use std::str::FromStr;
    Language::from_str(s).map_err(|_| format!("unknown language '{s}'"))
}

impl TrainCmd {
    pub fn cli(self) -> Result<()> {
        info!("Starting");
        let now = Instant::now();

        if self.input_files.len() != self.languages.len() {
            anyhow::bail!(
                "Expected one --languages entry per input file ({} files, {} languages)",
                self.input_files.len(),
                self.languages.len()
            );
        }

        self.input_files
            .par_iter()
            .zip(self.languages.par_iter())
            .panic_fuse()
            .for_each(|(input_file, &language)| {
                create_and_write_language_model_files(input_file, &self.output_dir, language, &self.char_class)
                    .with_context(|| format!("Error training '{}'", input_file.display()))
                    .or_abort(1);
            });

        info!("Finished");
        info!("Elapsed time: {:.2?}", now.elapsed());
        Ok(())
    }
}
