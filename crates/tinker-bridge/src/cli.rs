use clap::Parser;

/// Tinker bridge: a WebSocket chat surface backed by Claude.
#[derive(Parser, Debug)]
#[command(name = "tinker-bridge", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Address to bind, overriding `bridge.bind`.
    #[arg(long)]
    pub bind: Option<String>,

    /// Port to listen on, overriding `bridge.port`.
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Log filter directive override (e.g. "tinker=debug").
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
