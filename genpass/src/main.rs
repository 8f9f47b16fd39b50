use clap::Parser;
use env_logger::Builder;
use genpass::{run, Args};
use log::LevelFilter;
use std::process::exit;

fn main() {
    let args = Args::parse();
    let level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    Builder::new().filter_level(level).init();

    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        exit(1);
    }
}
