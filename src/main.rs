fn main() {
    #[cfg(feature = "cli")]
    svbyte::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("svbyte: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
