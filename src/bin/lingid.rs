use std::process::exit;

fn main() {
    if let Err(e) = lingid::cli::cli_run(std::env::args_os()) {
        eprintln!("{e:#}");
        exit(1);
    }
}
