//! Main entrypoint of the Rinha interpreter binary.

use std::{env, process};

use rinha::Config;

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();

    let config = Config::new(&args).unwrap_or_else(|err| {
        eprintln!("Argument Parsing Error: {}", err);
        process::exit(1);
    });

    match rinha::run(&config) {
        Ok(_) => {}
        Err(err) => {
            tracing::error!(%err, "evaluation failed");
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}
