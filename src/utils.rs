//! Small shared helpers. Grounded on heliport's `utils.rs`: the `Abort`
//! trait for CLI error handling survives unchanged; `is_cjk_block` and the
//! non-alphabetic-stripping regex move to `lingid_model::script` and
//! `ngram`/`trainer` respectively, since they are now used by more than
//! just the identifier.

use std::process::exit;

use log::error;

/// Extract the contained `Ok` value or abort the process, logging the
/// error's full context chain first. Used by CLI command handlers only;
/// library code never calls this.
pub trait Abort<T> {
    fn or_abort(self, exit_code: i32) -> T;
}

impl<T, E: std::fmt::Display> Abort<T> for Result<T, E> {
    fn or_abort(self, exit_code: i32) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                error!("{e:#}");
                exit(exit_code);
            }
        }
    }
}
