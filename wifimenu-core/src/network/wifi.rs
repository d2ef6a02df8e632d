/*!
 * WiFi Network Records
 * Dedup, annotation and ordering of one scan
 */

use std::cmp::Reverse;
use std::collections::HashSet;

use super::{KnownNetworks, VisibleNetwork};
use crate::config::GlyphConfig;

const ACTIVE_MARKER: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalTier {
    Excellent,
    Good,
    Fair,
    Weak,
}

impl SignalTier {
    pub fn from_strength(strength: u8) -> Self {
        match strength {
            75.. => SignalTier::Excellent,
            50..=74 => SignalTier::Good,
            25..=49 => SignalTier::Fair,
            _ => SignalTier::Weak,
        }
    }

    fn glyph(self, glyphs: &GlyphConfig) -> &str {
        match self {
            SignalTier::Excellent => &glyphs.signal_excellent,
            SignalTier::Good => &glyphs.signal_good,
            SignalTier::Fair => &glyphs.signal_fair,
            SignalTier::Weak => &glyphs.signal_weak,
        }
    }
}

/// Signal percentage, 0 when the field is not a number.
pub fn parse_signal(raw: &str) -> u8 {
    raw.trim()
        .parse::<u32>()
        .map(|s| s.min(100) as u8)
        .unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRecord {
    pub ssid: String,
    pub signal_strength: u8,
    pub has_security: bool,
    pub is_active: bool,
    pub is_known: bool,
    pub display_label: String,
}

struct Candidate {
    ssid: String,
    signal_strength: u8,
    has_security: bool,
    is_active: bool,
    is_known: bool,
}

impl Candidate {
    fn into_record(self, glyphs: &GlyphConfig) -> NetworkRecord {
        let status = if self.is_active { glyphs.active.as_str() } else { "" };
        let known = if self.is_known { glyphs.known.as_str() } else { "" };
        let security = if self.has_security {
            &glyphs.secured
        } else {
            &glyphs.open
        };
        let signal = SignalTier::from_strength(self.signal_strength).glyph(glyphs);

        let display_label = format!(
            "{status}{known}{security}{signal} {} ({}%)",
            self.ssid, self.signal_strength
        );

        NetworkRecord {
            ssid: self.ssid,
            signal_strength: self.signal_strength,
            has_security: self.has_security,
            is_active: self.is_active,
            is_known: self.is_known,
            display_label,
        }
    }
}

/// Turns raw listing lines into the ordered records shown in the menu.
///
/// Hidden networks (empty ssid) are dropped and the first line for an ssid wins.
/// Active networks come first, then stronger signal; equal keys keep listing order.
pub fn build_records(
    raw: Vec<VisibleNetwork>,
    known: &KnownNetworks,
    glyphs: &GlyphConfig,
) -> Vec<NetworkRecord> {
    let mut seen = HashSet::new();
    let mut candidates: Vec<Candidate> = raw
        .into_iter()
        .filter(|net| !net.ssid.is_empty())
        .filter(|net| seen.insert(net.ssid.clone()))
        .map(|net| Candidate {
            signal_strength: parse_signal(&net.signal),
            has_security: !net.security.is_empty(),
            is_active: net.active_marker == ACTIVE_MARKER,
            is_known: known.contains(&net.ssid),
            ssid: net.ssid,
        })
        .collect();

    // sort_by_key is stable
    candidates.sort_by_key(|c| (!c.is_active, Reverse(c.signal_strength)));

    candidates
        .into_iter()
        .map(|c| c.into_record(glyphs))
        .collect()
}
