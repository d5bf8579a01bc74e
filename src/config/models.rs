use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::path::PathBuf;

pub const DEFAULT_NSUPDATE_PATH: &str = "/usr/bin/nsupdate";
pub const DEFAULT_TTL: u64 = 60;

fn default_nsupdate_path() -> PathBuf {
    PathBuf::from(DEFAULT_NSUPDATE_PATH)
}

fn default_ttl() -> Value {
    Value::from(DEFAULT_TTL)
}

/// Values read from a YAML config file. Numeric keys are kept as written;
/// `settings::resolve` converts them so bad values surface as
/// `InvalidInteger` rather than as parse errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigOptions {
    #[serde(default = "default_nsupdate_path")]
    pub nsupdate: PathBuf,

    #[serde(default = "default_ttl")]
    pub ttl: Value,

    #[serde(default)]
    pub ip: Option<String>,

    #[serde(default)]
    pub server: Option<String>,

    #[serde(default)]
    pub domain: Option<String>,

    #[serde(default)]
    pub zone: Option<String>,

    #[serde(default)]
    pub private_key_path: Option<PathBuf>,

    #[serde(default)]
    pub nsupdate_debug: bool,

    #[serde(default)]
    pub nsupdate_port: Option<Value>,

    #[serde(default)]
    pub nsupdate_timeout: Option<Value>,
}

impl Default for ConfigOptions {
    fn default() -> Self {
        Self {
            nsupdate: default_nsupdate_path(),
            ttl: default_ttl(),
            ip: None,
            server: None,
            domain: None,
            zone: None,
            private_key_path: None,
            nsupdate_debug: false,
            nsupdate_port: None,
            nsupdate_timeout: None,
        }
    }
}
