#![forbid(unsafe_code)]

fn main() {
    let integration = nf_migrate::util::OutputIntegration::detect();
    if let Err(error) = nf_migrate::run_from_env() {
        if integration.should_emit_json() {
            let command = std::env::args().nth(1).unwrap_or_else(|| "nf_migrate".to_string());
            eprintln!(
                "{}",
                nf_migrate::util::error_envelope(&command, &error, &integration)
            );
        } else {
            eprintln!("{error}");
        }
        std::process::exit(error.exit_code());
    }
}
