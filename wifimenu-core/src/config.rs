use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub menu: MenuConfig,
    pub glyphs: GlyphConfig,
    pub commands: CommandConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MenuConfig {
    pub prompt: String,
    pub disconnect_label: String,
    pub rescan_label: String,
    pub separator: String,
    pub notification_title: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GlyphConfig {
    pub active: String,
    pub known: String,
    pub secured: String,
    pub open: String,
    pub signal_excellent: String,
    pub signal_good: String,
    pub signal_fair: String,
    pub signal_weak: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CommandConfig {
    pub nmcli: String,
    pub rofi: String,
    pub notify_send: String,
    pub menu_theme: String,
    pub password_theme: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            prompt: "WiFi Networks".to_string(),
            disconnect_label: "🔌 Disconnect".to_string(),
            rescan_label: "🔄 Rescan Networks".to_string(),
            separator: "---".to_string(),
            notification_title: "WiFi Manager".to_string(),
        }
    }
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            active: "✅".to_string(),
            known: "💾".to_string(),
            secured: "🔒".to_string(),
            open: "🔓".to_string(),
            signal_excellent: "📶".to_string(),
            signal_good: "📶".to_string(),
            signal_fair: "📱".to_string(),
            signal_weak: "📡".to_string(),
        }
    }
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            nmcli: "nmcli".to_string(),
            rofi: "rofi".to_string(),
            notify_send: "notify-send".to_string(),
            menu_theme: "listview { lines: 10; } element alternate { background-color: transparent; }"
                .to_string(),
            password_theme: "inputbar { children: [ \"prompt\", \"entry\" ]; } element alternate { background-color: transparent; }"
                .to_string(),
        }
    }
}

impl Config {
    /// `$WIFIMENU_CONFIG`, then `$XDG_CONFIG_HOME/wifimenu/config.toml`,
    /// then `$HOME/.config/wifimenu/config.toml`.
    pub fn default_path() -> PathBuf {
        if let Some(path) = env::var_os("WIFIMENU_CONFIG") {
            return PathBuf::from(path);
        }

        let base = env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
            .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("wifimenu").join("config.toml")
    }

    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content)
                .with_context(|| format!("invalid config file {}", path.display())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                // Write out the defaults so there is something to edit
                let config = Self::default();
                if let Some(parent) = path.parent() {
                    let _ = fs::create_dir_all(parent);
                }
                let _ = fs::write(path, toml::to_string_pretty(&config)?);
                tracing::debug!("wrote default config to {}", path.display());
                Ok(config)
            }
            Err(e) => Err(e).with_context(|| format!("cannot read config file {}", path.display())),
        }
    }
}
