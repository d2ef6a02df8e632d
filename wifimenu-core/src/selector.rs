/*!
 * Network Selector
 * Scan, render, pick, dispatch
 */

use crate::config::{GlyphConfig, MenuConfig};
use crate::network::{build_records, KnownNetworks, NetworkBackend, NetworkRecord};
use crate::notify::Notifier;
use crate::picker::Picker;

/// Result of a connect or disconnect attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub succeeded: bool,
    pub detail: String,
}

impl Outcome {
    fn success(detail: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            detail: detail.into(),
        }
    }

    fn failure(detail: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            detail: detail.into(),
        }
    }
}

/// What a menu line stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Disconnect,
    Rescan,
    Network(String),
    None,
}

#[derive(Debug, Clone)]
struct MenuEntry {
    label: String,
    choice: Choice,
}

/// The lines handed to the picker, each bound to its action when built.
#[derive(Debug, Clone)]
pub struct Menu {
    entries: Vec<MenuEntry>,
}

impl Menu {
    pub fn build(records: &[NetworkRecord], labels: &MenuConfig) -> Self {
        let mut entries = Vec::with_capacity(records.len() + 4);
        let separator = || MenuEntry {
            label: labels.separator.clone(),
            choice: Choice::None,
        };

        if records.iter().any(|r| r.is_active) {
            entries.push(MenuEntry {
                label: labels.disconnect_label.clone(),
                choice: Choice::Disconnect,
            });
            entries.push(separator());
        }

        entries.push(MenuEntry {
            label: labels.rescan_label.clone(),
            choice: Choice::Rescan,
        });
        entries.push(separator());

        entries.extend(records.iter().map(|r| MenuEntry {
            label: r.display_label.clone(),
            choice: Choice::Network(r.ssid.clone()),
        }));

        Self { entries }
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.label.clone()).collect()
    }

    /// Maps the picker's answer back to an action. Unknown lines are `Choice::None`.
    pub fn resolve(&self, selection: Option<&str>) -> Choice {
        let Some(selection) = selection.filter(|s| !s.is_empty()) else {
            return Choice::None;
        };

        self.entries
            .iter()
            .find(|e| e.label == selection)
            .map(|e| e.choice.clone())
            .unwrap_or(Choice::None)
    }
}

pub struct NetworkSelector<B, P, N> {
    backend: B,
    picker: P,
    notifier: N,
    menu: MenuConfig,
    glyphs: GlyphConfig,
}

impl<B, P, N> NetworkSelector<B, P, N>
where
    B: NetworkBackend,
    P: Picker,
    N: Notifier,
{
    pub fn new(backend: B, picker: P, notifier: N, menu: MenuConfig, glyphs: GlyphConfig) -> Self {
        Self {
            backend,
            picker,
            notifier,
            menu,
            glyphs,
        }
    }

    async fn notify(&self, message: &str) {
        self.notifier
            .notify(&self.menu.notification_title, message)
            .await;
    }

    /// Saved profile names. Empty when the backend cannot be queried.
    pub async fn list_known_networks(&self) -> KnownNetworks {
        match self.backend.saved_connections().await {
            Ok(names) => names.into_iter().collect(),
            Err(e) => {
                tracing::warn!("Could not list saved connections: {}", e);
                KnownNetworks::default()
            }
        }
    }

    /// One discovery pass. Empty when the listing fails.
    pub async fn scan(&self, known: &KnownNetworks) -> Vec<NetworkRecord> {
        if let Err(e) = self.backend.rescan().await {
            tracing::debug!("Rescan request failed, using cached results: {}", e);
        }

        match self.backend.visible_networks().await {
            Ok(raw) => {
                let records = build_records(raw, known, &self.glyphs);
                tracing::debug!("Scan found {} networks", records.len());
                records
            }
            Err(e) => {
                tracing::error!("Error scanning networks: {}", e);
                Vec::new()
            }
        }
    }

    /// Saved profile first when there is one, then a plain connect, then the
    /// password prompt. The password prompt's result is only notified.
    pub async fn connect(&self, ssid: &str, known: &KnownNetworks) -> Outcome {
        if known.contains(ssid) {
            match self.backend.connect_saved(ssid).await {
                Ok(()) => return self.connected(ssid).await,
                Err(e) => tracing::warn!("Saved connection {} did not come up: {}", ssid, e),
            }
        }

        match self.backend.connect_new(ssid).await {
            Ok(()) => self.connected(ssid).await,
            Err(e) => {
                tracing::info!("Connecting to {} failed, asking for a password: {}", ssid, e);
                self.prompt_and_connect(ssid).await;
                Outcome::failure(e.to_string())
            }
        }
    }

    async fn connected(&self, ssid: &str) -> Outcome {
        let message = format!("Connected to {}", ssid);
        self.notify(&message).await;
        Outcome::success(message)
    }

    pub async fn prompt_and_connect(&self, ssid: &str) {
        let prompt = format!("Password for {}", ssid);
        let secret = match self.picker.read_secret(&prompt).await {
            Ok(Some(secret)) if !secret.is_empty() => secret,
            Ok(_) => {
                tracing::debug!("Password prompt for {} cancelled", ssid);
                return;
            }
            Err(e) => {
                tracing::warn!("Password prompt failed: {}", e);
                return;
            }
        };

        match self.backend.connect_with_secret(ssid, &secret).await {
            Ok(()) => self.notify(&format!("Connected to {}", ssid)).await,
            Err(e) => {
                tracing::warn!("Password connect to {} failed: {}", ssid, e);
                self.notify(&format!("Failed to connect to {}", ssid)).await;
            }
        }
    }

    /// Brings down every active connection that is also a saved profile.
    /// Stops at the first connection that refuses to go down.
    pub async fn disconnect(&self, known: &KnownNetworks) -> Outcome {
        let active = match self.backend.active_connections().await {
            Ok(active) => active,
            Err(e) => return self.disconnect_failed(e.to_string()).await,
        };

        let wifi: Vec<String> = active.into_iter().filter(|name| known.contains(name)).collect();
        if wifi.is_empty() {
            self.notify("No active WiFi connection found").await;
            return Outcome::failure("no active WiFi connection");
        }

        for name in &wifi {
            if let Err(e) = self.backend.disconnect(name).await {
                return self.disconnect_failed(e.to_string()).await;
            }
        }

        self.notify("Disconnected from WiFi").await;
        Outcome::success(format!("Disconnected {}", wifi.join(", ")))
    }

    async fn disconnect_failed(&self, detail: String) -> Outcome {
        tracing::error!("Error disconnecting: {}", detail);
        self.notify(&format!("Error disconnecting: {}", detail)).await;
        Outcome::failure(detail)
    }

    /// Shows the menu until the user picks something other than rescan.
    pub async fn present(&self) {
        loop {
            let known = self.list_known_networks().await;
            let records = self.scan(&known).await;

            if records.is_empty() {
                self.notify("No WiFi networks found").await;
                return;
            }

            let menu = Menu::build(&records, &self.menu);
            let selection = match self.picker.choose(&menu.labels(), &self.menu.prompt).await {
                Ok(selection) => selection,
                Err(e) => {
                    self.notify(&format!("Error showing menu: {}", e)).await;
                    return;
                }
            };

            match menu.resolve(selection.as_deref()) {
                Choice::Rescan => continue,
                Choice::Disconnect => {
                    self.disconnect(&known).await;
                }
                Choice::Network(ssid) => {
                    self.connect(&ssid, &known).await;
                }
                Choice::None => {}
            }
            return;
        }
    }
}
