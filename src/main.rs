use clap::Parser;
use tracing_subscriber::EnvFilter;

use gsprobe::cli::Cli;
use gsprobe::config::ProbeConfig;
use gsprobe::probe::Prober;
use gsprobe::report::Report;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    let report = run(&cli).await;
    match &report {
        Report::Ok(_) => println!("{}", report.line()),
        Report::Error { .. } => eprintln!("{}", report.line()),
    }
    std::process::exit(report.exit_code());
}

async fn run(cli: &Cli) -> Report {
    let config = match ProbeConfig::from_cli(cli) {
        Ok(config) => config,
        Err(err) => return Report::from(err),
    };

    tracing::info!(
        address = %config.address,
        port = config.port,
        family = ?config.family,
        "probing game server"
    );

    let result = Prober::new()
        .query(&config.address, config.port, config.family.signature())
        .await;
    Report::from_probe(result)
}

/// Diagnostics are opt-in and go to stderr so the one-line output
/// contract holds at default verbosity. RUST_LOG overrides the flags.
fn init_tracing(cli: &Cli) {
    let default_filter = if cli.debug {
        "gsprobe=debug"
    } else if cli.verbose {
        "gsprobe=info"
    } else {
        "gsprobe=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
