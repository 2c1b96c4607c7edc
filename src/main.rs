use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use stockfile::cli::{Args, Session};
use stockfile::Inventory;

// Logs go to stderr so they never interleave with the menu on stdout.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.log_filter());

    let inventory = Inventory::open(&args.store_config());
    let mut session = Session::new(inventory, io::stdin().lock(), io::stdout().lock());

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("stockfile: {}", e);
            ExitCode::FAILURE
        }
    }
}
