fn main() {
    if let Err(err) = photo_archive_index::cli::run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
