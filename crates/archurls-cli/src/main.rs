use archurls_core::logging;
use clap::Parser;

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging as early as possible.
    logging::init_logging(cli.verbose);

    if let Err(err) = cli.run().await {
        eprintln!("archurls error: {:#}", err);
        std::process::exit(1);
    }
}
