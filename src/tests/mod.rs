mod config;

use crate::{
    nsupdate::{client::OutputLine, Console},
    settings::Settings,
};
use std::{fs, io, path::PathBuf};
use tempfile::TempDir;

/// A temp dir holding a private key file and a stand-in nsupdate binary.
struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Kexample.private"), "secret").unwrap();
        fs::write(dir.path().join("nsupdate"), "").unwrap();
        Self { dir }
    }

    fn key_path(&self) -> PathBuf {
        self.dir.path().join("Kexample.private")
    }

    fn nsupdate_path(&self) -> PathBuf {
        self.dir.path().join("nsupdate")
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }
}

fn example_settings() -> Settings {
    Settings {
        ip: "203.0.113.5".parse().unwrap(),
        server: "ns1.example.com".to_string(),
        domain: "host".to_string(),
        zone: "example.com".to_string(),
        private_key_path: PathBuf::from("/etc/bind/Kupdate.private"),
        ttl: 60,
        nsupdate_path: PathBuf::from("/usr/bin/nsupdate"),
        debug: false,
        port: None,
        timeout: None,
    }
}

impl Console for Vec<OutputLine> {
    fn emit(&mut self, line: &OutputLine) -> io::Result<()> {
        self.push(line.clone());
        Ok(())
    }
}
