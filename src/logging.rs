use std::io::Write;

use env_logger::Env;
use log::LevelFilter;

/// Logs go to stderr so rendered source on stdout stays clean. `RUST_LOG` wins
/// over the verbosity flag.
pub fn init(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(default_level.as_str()))
        .format(|buf, record| writeln!(buf, "{} {}", record.level(), record.args()))
        .init();
}
