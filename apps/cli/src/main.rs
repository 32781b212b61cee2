use std::process::ExitCode;

fn main() -> ExitCode {
    match notecards_cli::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
