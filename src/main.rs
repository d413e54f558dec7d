fn main() {
    if let Err(e) = rng_bias::cli::run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
