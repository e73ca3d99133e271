use anyhow::{Context as _, Result};
use clap::Parser as _;
use slicesim::{Cli, Command, ServiceConfig, SimContext, SimulateArgs, report};
use slicesim_core::{Scenario, Synthesizer, Timestamp, Topology};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log)
        .with_context(|| format!("Invalid log filter `{}`", cli.log))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(cli.service).await,
        Command::Simulate(args) => simulate(args),
    }
}

async fn serve(config: ServiceConfig) -> Result<()> {
    tracing::info!(
        seed = config.seed,
        history_limit = config.history_limit.map(|limit| limit.get()),
        "starting slicesim {}",
        env!("CARGO_PKG_VERSION")
    );

    let context = Arc::new(SimContext::new(&config));
    slicesim::serve(&config, context).await
}

fn simulate(args: SimulateArgs) -> Result<()> {
    let content = std::fs::read_to_string(&args.topology)
        .with_context(|| format!("Failed to read {}", args.topology.display()))?;
    let topology: Topology = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse topology {}", args.topology.display()))?;

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::debug!(seed, "simulating");

    let scenario = Scenario::new(args.protocol, args.users, args.iot);
    let result = Synthesizer::with_seed(seed)
        .run(&scenario, &topology, Timestamp::now())
        .context("Simulation failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", report::render(&result));
    }

    Ok(())
}
