fn main() {
    if let Err(e) = versemap_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
