/*!
 * wifimenu
 * Pick a WiFi network from rofi and connect through NetworkManager
 */

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wifimenu_core::command::find_program;
use wifimenu_core::{Config, NetworkSelector, Nmcli, NotifySend, Rofi};

#[derive(Parser)]
#[command(name = "wifimenu")]
#[command(about = "Rofi menu for WiFi networks managed by NetworkManager")]
#[command(version)]
struct Cli {
    /// Disconnect the active WiFi connection without showing the menu
    #[arg(long)]
    disconnect: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("wifimenu=info,wifimenu_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = Config::load(&Config::default_path())?;

    let mut required = vec![config.commands.nmcli.as_str()];
    if !cli.disconnect {
        required.push(config.commands.rofi.as_str());
    }
    ensure_installed(&required)?;

    let selector = NetworkSelector::new(
        Nmcli::new(config.commands.nmcli.clone()),
        Rofi::new(
            config.commands.rofi.clone(),
            config.commands.menu_theme.clone(),
            config.commands.password_theme.clone(),
        ),
        NotifySend::new(config.commands.notify_send.clone()),
        config.menu,
        config.glyphs,
    );

    if cli.disconnect {
        let known = selector.list_known_networks().await;
        let outcome = selector.disconnect(&known).await;
        tracing::debug!("disconnect: {:?}", outcome);
    } else {
        selector.present().await;
    }

    Ok(())
}

fn ensure_installed(programs: &[&str]) -> Result<()> {
    for program in programs {
        if find_program(program).is_none() {
            bail!("required program `{}` was not found on PATH", program);
        }
    }
    Ok(())
}
