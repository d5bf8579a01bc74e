use clap::Parser;
use std::{net::IpAddr, path::PathBuf};

/// Command-line flags as given. Nothing here is defaulted or cross-checked;
/// that happens in `settings::resolve`.
#[derive(Parser, Debug, Default)]
#[command(
    name = "nsupdate-ddns",
    version,
    about = "Update a dynamic DNS A record through nsupdate"
)]
pub struct RawOptions {
    /// Ip address for the domain.
    #[arg(short, long, value_name = "IP_ADDRESS", value_parser = parse_ip)]
    pub ip: Option<String>,

    /// The domain nameserver.
    #[arg(short, long, value_name = "DNS_SERVER")]
    pub server: Option<String>,

    /// The domain name to update.
    #[arg(short, long, value_name = "DOMAIN_NAME")]
    pub domain: Option<String>,

    /// The zone name to update.
    #[arg(short, long, value_name = "ZONE")]
    pub zone: Option<String>,

    /// The path to the private key file.
    #[arg(short = 'k', long = "key", value_name = "PRIVATE_KEY_FILEPATH")]
    pub key: Option<PathBuf>,

    /// YAML config file. When given, only --ip is taken from the command line.
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// The path to the nsupdate utility. Defaults to /usr/bin/nsupdate
    #[arg(short, long, value_name = "NSUPDATE_BIN_PATH")]
    pub nsupdate: Option<PathBuf>,

    /// Record TTL in seconds. Defaults to 60
    #[arg(short, long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub ttl: Option<u64>,

    /// Pass -d to nsupdate.
    #[arg(long = "nsupdate_debug")]
    pub nsupdate_debug: bool,

    /// Pass -p <PORT> to nsupdate.
    #[arg(long = "nsupdate_port", value_name = "PORT", value_parser = clap::value_parser!(u64).range(1..))]
    pub nsupdate_port: Option<u64>,

    /// Pass -t <SECONDS> to nsupdate.
    #[arg(long = "nsupdate_timeout", value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub nsupdate_timeout: Option<u64>,
}

fn parse_ip(value: &str) -> Result<String, String> {
    value
        .parse::<IpAddr>()
        .map(|_| value.to_string())
        .map_err(|_| "The ip address is not valid!".to_string())
}
