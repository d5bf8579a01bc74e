mod cli;
mod config;
mod ddns;
mod error;
mod nsupdate;
mod settings;

#[cfg(test)]
mod tests;

use clap::Parser;
use cli::RawOptions;
use ddns::DynDnsUpdate;
use error::UpdateError;
use nsupdate::{Nsupdate, StdConsole, ToolExit};
use std::process::ExitCode;

/// Exit codes for failures of our own. Otherwise nsupdate's status is
/// passed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FailureCode {
    /// Invalid or missing settings, nothing was spawned
    Settings = 1,
    /// nsupdate could not be started or talked to
    Dispatch = 3,
}

impl From<FailureCode> for ExitCode {
    fn from(code: FailureCode) -> Self {
        ExitCode::from(code as u8)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let raw = RawOptions::parse();

    match run(&raw).await {
        Ok(exit) => exit_code(exit),
        Err(err) => {
            eprintln!("{}", err);
            failure_code(&err).into()
        }
    }
}

async fn run(raw: &RawOptions) -> Result<ToolExit, UpdateError> {
    let config = raw.config.as_deref().map(config::load_config).transpose()?;
    let settings = settings::resolve(raw, config)?;

    let update = DynDnsUpdate::new(settings, Nsupdate);
    update.run(&mut StdConsole).await
}

fn failure_code(err: &UpdateError) -> FailureCode {
    if err.is_settings_error() {
        FailureCode::Settings
    } else {
        FailureCode::Dispatch
    }
}

fn exit_code(exit: ToolExit) -> ExitCode {
    match exit.code.map(u8::try_from) {
        Some(Ok(code)) => ExitCode::from(code),
        _ => ExitCode::FAILURE,
    }
}
