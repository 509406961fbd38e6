use log::LevelFilter;

/// Installs the stderr logger used by the binaries.
/// `quiet` turns logging off and wins over `verbose`, which raises the level to debug.
/// Otherwise `RUST_LOG` applies, defaulting to `info`.
pub fn init(verbose: bool, quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    builder.target(env_logger::Target::Stderr);

    if quiet {
        builder.filter_level(LevelFilter::Off);
    } else if verbose {
        builder.filter_level(LevelFilter::Debug);
    }

    if builder.try_init().is_err() {
        log::debug!("Logger already installed");
    }
}
