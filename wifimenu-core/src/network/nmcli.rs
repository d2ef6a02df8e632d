/*!
 * NetworkManager Backend
 * Drives nmcli in terse mode and parses its line output
 */

use super::{NetworkBackend, VisibleNetwork};
use crate::command::{self, CommandOutput};
use crate::error::CommandError;

pub struct Nmcli {
    program: String,
}

impl Nmcli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    async fn run(&self, args: &[&str]) -> Result<CommandOutput, CommandError> {
        command::run(&self.program, args, None).await?.into_result()
    }
}

impl Default for Nmcli {
    fn default() -> Self {
        Self::new("nmcli")
    }
}

impl NetworkBackend for Nmcli {
    async fn saved_connections(&self) -> Result<Vec<String>, CommandError> {
        let out = self.run(&["-t", "-f", "NAME", "connection", "show"]).await?;
        Ok(parse_names(&out.stdout))
    }

    async fn active_connections(&self) -> Result<Vec<String>, CommandError> {
        let out = self
            .run(&["-t", "-f", "NAME", "connection", "show", "--active"])
            .await?;
        Ok(parse_names(&out.stdout))
    }

    async fn rescan(&self) -> Result<(), CommandError> {
        self.run(&["device", "wifi", "rescan"]).await.map(drop)
    }

    async fn visible_networks(&self) -> Result<Vec<VisibleNetwork>, CommandError> {
        let out = self
            .run(&["-t", "-f", "SSID,SIGNAL,SECURITY,IN-USE", "device", "wifi", "list"])
            .await?;
        Ok(parse_network_list(&out.stdout))
    }

    async fn connect_saved(&self, name: &str) -> Result<(), CommandError> {
        tracing::info!("Bringing up saved connection: {}", name);
        self.run(&["connection", "up", name]).await.map(drop)
    }

    async fn connect_new(&self, ssid: &str) -> Result<(), CommandError> {
        tracing::info!("Connecting to WiFi network: {}", ssid);
        self.run(&["device", "wifi", "connect", ssid]).await.map(drop)
    }

    async fn connect_with_secret(&self, ssid: &str, secret: &str) -> Result<(), CommandError> {
        tracing::info!("Connecting to WiFi network with password: {}", ssid);
        self.run(&["device", "wifi", "connect", ssid, "password", secret])
            .await
            .map(drop)
    }

    async fn disconnect(&self, name: &str) -> Result<(), CommandError> {
        tracing::info!("Bringing down connection: {}", name);
        self.run(&["connection", "down", name]).await.map(drop)
    }
}

/// Splits one terse line on unescaped `:`. nmcli escapes `:` and `\` with a backslash.
fn split_terse(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => current.push(chars.next().unwrap_or('\\')),
            ':' => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

fn parse_names(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| split_terse(line).join(":"))
        .collect()
}

fn parse_network_list(stdout: &str) -> Vec<VisibleNetwork> {
    let mut networks = Vec::new();

    for line in stdout.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let fields = split_terse(line);
        if fields.len() < 4 {
            tracing::debug!("skipping short nmcli line: {}", line);
            continue;
        }

        networks.push(VisibleNetwork {
            ssid: fields[0].trim().to_string(),
            signal: fields[1].trim().to_string(),
            security: fields[2].trim().to_string(),
            active_marker: fields[3].trim().to_string(),
        });
    }

    networks
}
