use std::process;

use pindeck::config;

fn main() {
    let config = config::load_config_or_default();

    if let Err(e) = pindeck::run(&config) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
