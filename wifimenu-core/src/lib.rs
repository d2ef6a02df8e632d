/*!
 * wifimenu core
 * WiFi discovery and selection over NetworkManager, rofi and notify-send
 */

pub mod command;
pub mod config;
pub mod error;
pub mod network;
pub mod notify;
pub mod picker;
pub mod selector;

pub use config::Config;
pub use error::CommandError;
pub use network::{KnownNetworks, NetworkBackend, NetworkRecord, Nmcli};
pub use notify::{NotifySend, Notifier};
pub use picker::{Picker, Rofi};
pub use selector::{Choice, Menu, NetworkSelector, Outcome};
