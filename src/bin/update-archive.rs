use std::process::ExitCode;

fn main() -> ExitCode {
    photo_archive_index::cli::update::run()
}
