fn main() {
    if let Err(err) = memphis_snippets::cli::run_cli() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
