use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use transformator::{Config, Transformer};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();

    let text = match config.input_text() {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Błąd: {}", e);
            process::exit(1);
        }
    };

    let transformer = Transformer::new(&config);
    let result = transformer.transform(&text);

    if let Err(e) = config.write_output(&result) {
        eprintln!("Błąd: {}", e);
        process::exit(1);
    }
}
