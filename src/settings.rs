use crate::{
    cli::RawOptions,
    config::{ConfigOptions, DEFAULT_NSUPDATE_PATH, DEFAULT_TTL},
    error::{FileKind, RequiredField, UpdateError},
};
use log::{debug, warn};
use serde_yaml::Value;
use std::{
    net::IpAddr,
    path::{Path, PathBuf},
};

/// Fully validated update parameters. Only `resolve` builds one.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub ip: IpAddr,
    pub server: String,
    pub domain: String,
    pub zone: String,
    pub private_key_path: PathBuf,
    pub ttl: u64,
    pub nsupdate_path: PathBuf,
    pub debug: bool,
    pub port: Option<u64>,
    pub timeout: Option<u64>,
}

/// Unvalidated merge of flags and config, before any checks run. Numeric
/// conversions are done up front but only reported in validation order.
struct Candidate {
    ip: Option<String>,
    server: Option<String>,
    domain: Option<String>,
    zone: Option<String>,
    private_key_path: PathBuf,
    ttl: Result<u64, UpdateError>,
    nsupdate_path: PathBuf,
    debug: bool,
    port: Result<Option<u64>, UpdateError>,
    timeout: Result<Option<u64>, UpdateError>,
}

impl Candidate {
    fn from_flags(raw: &RawOptions) -> Self {
        Self {
            ip: raw.ip.clone(),
            server: raw.server.clone(),
            domain: raw.domain.clone(),
            zone: raw.zone.clone(),
            private_key_path: raw.key.clone().unwrap_or_default(),
            ttl: Ok(raw.ttl.unwrap_or(DEFAULT_TTL)),
            nsupdate_path: raw
                .nsupdate
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_NSUPDATE_PATH)),
            debug: raw.nsupdate_debug,
            port: Ok(raw.nsupdate_port),
            timeout: Ok(raw.nsupdate_timeout),
        }
    }

    // The config is the base; only the ip flag may override it.
    fn from_config(raw: &RawOptions, config: ConfigOptions) -> Self {
        warn_ignored_flags(raw);

        Self {
            ip: raw.ip.clone().or(config.ip),
            server: config.server,
            domain: config.domain,
            zone: config.zone,
            private_key_path: config.private_key_path.unwrap_or_default(),
            ttl: positive("ttl", &config.ttl),
            nsupdate_path: config.nsupdate,
            debug: config.nsupdate_debug,
            port: optional_positive("nsupdate_port", config.nsupdate_port.as_ref()),
            timeout: optional_positive("nsupdate_timeout", config.nsupdate_timeout.as_ref()),
        }
    }
}

fn warn_ignored_flags(raw: &RawOptions) {
    let ignored = [
        ("--server", raw.server.is_some()),
        ("--domain", raw.domain.is_some()),
        ("--zone", raw.zone.is_some()),
        ("--key", raw.key.is_some()),
        ("--nsupdate", raw.nsupdate.is_some()),
        ("--ttl", raw.ttl.is_some()),
        ("--nsupdate_debug", raw.nsupdate_debug),
        ("--nsupdate_port", raw.nsupdate_port.is_some()),
        ("--nsupdate_timeout", raw.nsupdate_timeout.is_some()),
    ];

    for (flag, given) in ignored {
        if given {
            warn!("{} is ignored because a config file was supplied", flag);
        }
    }
}

/// Merges flags with an optional config and validates the result.
///
/// Checks run in a fixed order and the first failure is returned:
/// ip, server, domain, zone, ttl, private key file, nsupdate file.
pub fn resolve(raw: &RawOptions, config: Option<ConfigOptions>) -> Result<Settings, UpdateError> {
    let candidate = match config {
        Some(config) => Candidate::from_config(raw, config),
        None => Candidate::from_flags(raw),
    };

    let ip = validate_ip(candidate.ip.as_deref())?;
    let server = require(candidate.server, RequiredField::Server)?;
    let domain = require(candidate.domain, RequiredField::Domain)?;
    let zone = require(candidate.zone, RequiredField::Zone)?;
    let ttl = candidate.ttl?;
    require_file(&candidate.private_key_path, FileKind::PrivateKey)?;
    require_file(&candidate.nsupdate_path, FileKind::UpdateTool)?;
    let port = candidate.port?;
    let timeout = candidate.timeout?;

    Ok(Settings {
        ip,
        server,
        domain,
        zone,
        private_key_path: candidate.private_key_path,
        ttl,
        nsupdate_path: candidate.nsupdate_path,
        debug: candidate.debug,
        port,
        timeout,
    })
}

fn validate_ip(ip: Option<&str>) -> Result<IpAddr, UpdateError> {
    let ip = ip.unwrap_or_default();
    ip.parse()
        .map_err(|_| UpdateError::InvalidAddress(ip.to_string()))
}

fn require(value: Option<String>, field: RequiredField) -> Result<String, UpdateError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(UpdateError::MissingRequiredField(field)),
    }
}

/// A config number after conversion. Zero counts as non-positive.
enum Integer {
    Positive(u64),
    NonPositive(i64),
}

fn to_integer(field: &'static str, value: &Value) -> Result<Integer, UpdateError> {
    let converted = match value {
        Value::Number(n) => n
            .as_u64()
            .map(Integer::from)
            .or_else(|| n.as_i64().map(Integer::from)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .map(Integer::from)
                .or_else(|| s.parse::<i64>().ok().map(Integer::from))
        }
        _ => None,
    };

    converted.ok_or_else(|| UpdateError::InvalidInteger {
        field,
        value: describe(value),
    })
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        if value > 0 {
            Integer::Positive(value)
        } else {
            Integer::NonPositive(0)
        }
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        match u64::try_from(value) {
            Ok(value) => Integer::from(value),
            Err(_) => Integer::NonPositive(value),
        }
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("{:?}", other)),
    }
}

fn positive(field: &'static str, value: &Value) -> Result<u64, UpdateError> {
    match to_integer(field, value)? {
        Integer::Positive(value) => Ok(value),
        Integer::NonPositive(value) => Err(UpdateError::InvalidInteger {
            field,
            value: value.to_string(),
        }),
    }
}

fn optional_positive(
    field: &'static str,
    value: Option<&Value>,
) -> Result<Option<u64>, UpdateError> {
    let Some(value) = value else {
        return Ok(None);
    };

    match to_integer(field, value)? {
        Integer::Positive(value) => Ok(Some(value)),
        Integer::NonPositive(value) => {
            debug!("Ignoring {} = {}, only positive values are passed on", field, value);
            Ok(None)
        }
    }
}

fn require_file(path: &Path, kind: FileKind) -> Result<(), UpdateError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(UpdateError::FileNotFound {
            kind,
            path: path.to_path_buf(),
        })
    }
}
