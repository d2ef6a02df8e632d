pub mod nmcli;
pub mod wifi;

use std::collections::HashSet;

use crate::error::CommandError;

pub use nmcli::Nmcli;
pub use wifi::{build_records, parse_signal, NetworkRecord, SignalTier};

/// One raw line of the visible-network listing, fields trimmed but not interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleNetwork {
    pub ssid: String,
    pub signal: String,
    pub security: String,
    pub active_marker: String,
}

/// Names of saved connection profiles at the time they were fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownNetworks(HashSet<String>);

impl KnownNetworks {
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for KnownNetworks {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// The network manager the menu drives. Every action reports failure through
/// `CommandError`; nothing here retries.
#[allow(async_fn_in_trait)]
pub trait NetworkBackend {
    async fn saved_connections(&self) -> Result<Vec<String>, CommandError>;
    async fn active_connections(&self) -> Result<Vec<String>, CommandError>;
    async fn rescan(&self) -> Result<(), CommandError>;
    async fn visible_networks(&self) -> Result<Vec<VisibleNetwork>, CommandError>;
    async fn connect_saved(&self, name: &str) -> Result<(), CommandError>;
    async fn connect_new(&self, ssid: &str) -> Result<(), CommandError>;
    async fn connect_with_secret(&self, ssid: &str, secret: &str) -> Result<(), CommandError>;
    async fn disconnect(&self, name: &str) -> Result<(), CommandError>;
}
