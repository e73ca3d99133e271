//! Command line and environment configuration.

use clap::{Args, Parser, Subcommand};
use slicesim_core::Protocol;
use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    num::NonZeroUsize,
    path::PathBuf,
};

/// Default port the HTTP API listens on.
pub const DEFAULT_PORT: u16 = 5_000;

#[derive(Debug, Parser)]
#[command(version, about = "5G/6G network slicing metrics simulator")]
pub struct Cli {
    /// tracing filter directives (e.g. `info`, `slicesim=debug`)
    #[arg(long, global = true, env = "SLICESIM_LOG", default_value = "info")]
    pub log: String,

    #[command(flatten)]
    pub service: ServiceConfig,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the HTTP API (default)
    Serve,
    /// Run a single simulation offline and print the result
    Simulate(SimulateArgs),
}

/// Settings of the long running service.
#[derive(Debug, Clone, Args)]
pub struct ServiceConfig {
    /// address to bind the HTTP API to
    #[arg(long, env = "SLICESIM_BIND", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub bind: IpAddr,

    /// port to bind the HTTP API to
    #[arg(long, env = "SLICESIM_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// seed of the first simulation; following simulations use the next
    /// values. Random when not set.
    #[arg(long, env = "SLICESIM_SEED")]
    pub seed: Option<u64>,

    /// keep at most this many results in the history (unbounded by default)
    #[arg(long, env = "SLICESIM_HISTORY_LIMIT")]
    pub history_limit: Option<NonZeroUsize>,
}

#[derive(Debug, Clone, Args)]
pub struct SimulateArgs {
    /// JSON file holding the topology (`{"nodes": [...], "links": [...]}`)
    #[arg(long)]
    pub topology: PathBuf,

    #[arg(long, default_value = "5G")]
    pub protocol: Protocol,

    /// number of users
    #[arg(long, default_value_t = 0)]
    pub users: u64,

    /// number of IoT devices
    #[arg(long, default_value_t = 0)]
    pub iot: u64,

    /// seed of the random generator. Random when not set.
    #[arg(long)]
    pub seed: Option<u64>,

    /// print the raw JSON result instead of a report
    #[arg(long)]
    pub json: bool,
}

impl ServiceConfig {
    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            seed: None,
            history_limit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory as _;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["slicesim"]).unwrap();

        assert!(cli.command.is_none());
        assert_eq!(cli.service.address(), ServiceConfig::default().address());
        assert_eq!(cli.service.address().port(), 5_000);
        assert_eq!(cli.service.seed, None);
    }

    #[test]
    fn serve_flags() {
        let cli = Cli::try_parse_from([
            "slicesim",
            "--bind",
            "0.0.0.0",
            "--port",
            "8080",
            "--seed",
            "42",
            "--history-limit",
            "10",
            "serve",
        ])
        .unwrap();

        assert!(matches!(cli.command, Some(Command::Serve)));
        assert_eq!(cli.service.address().to_string(), "0.0.0.0:8080");
        assert_eq!(cli.service.seed, Some(42));
        assert_eq!(cli.service.history_limit, NonZeroUsize::new(10));
    }

    #[test]
    fn simulate_flags() {
        let cli = Cli::try_parse_from([
            "slicesim",
            "simulate",
            "--topology",
            "net.json",
            "--protocol",
            "6G",
            "--users",
            "100",
            "--iot",
            "50",
        ])
        .unwrap();

        let Some(Command::Simulate(args)) = cli.command else {
            panic!("expecting the simulate command");
        };
        assert_eq!(args.protocol, Protocol::SixG);
        assert_eq!((args.users, args.iot), (100, 50));
        assert!(!args.json);
    }

    #[test]
    fn rejects_unknown_protocol() {
        assert!(
            Cli::try_parse_from(["slicesim", "simulate", "--topology", "t.json", "--protocol", "4G"])
                .is_err()
        );
    }

    #[test]
    fn history_limit_must_be_positive() {
        assert!(Cli::try_parse_from(["slicesim", "--history-limit", "0"]).is_err());
    }
}
