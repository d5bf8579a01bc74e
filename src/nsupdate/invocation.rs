use crate::settings::Settings;
use std::{ffi::OsString, path::PathBuf};

/// The program to spawn and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl Invocation {
    /// Program followed by its arguments, for logging.
    pub fn argv(&self) -> Vec<OsString> {
        std::iter::once(self.program.clone().into_os_string())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

/// `<nsupdate> -k <key> [-d] [-p <port>] [-t <timeout>]`
pub fn build_invocation(settings: &Settings) -> Invocation {
    let mut args: Vec<OsString> = vec![
        "-k".into(),
        settings.private_key_path.clone().into_os_string(),
    ];

    if settings.debug {
        args.push("-d".into());
    }

    if let Some(port) = settings.port.filter(|port| *port > 0) {
        args.push("-p".into());
        args.push(port.to_string().into());
    }

    if let Some(timeout) = settings.timeout.filter(|timeout| *timeout > 0) {
        args.push("-t".into());
        args.push(timeout.to_string().into());
    }

    Invocation {
        program: settings.nsupdate_path.clone(),
        args,
    }
}
