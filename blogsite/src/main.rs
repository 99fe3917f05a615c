mod commands;
mod config;
mod error;

use clap::Parser;
use config::Args;

fn main() {
    let args = Args::parse();

    pretty_env_logger::init();
    log::info!("Reading site configuration...");

    match commands::run(&args) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            log::error!("{:?}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
