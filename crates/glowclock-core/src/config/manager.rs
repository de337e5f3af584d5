use std::sync::{Arc, RwLock};

use glowclock_proto::config::{Config, ConfigUpdate};
use thiserror::Error;

/// Represents the effect a configuration update has on the running clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfigImpact {
    /// The GMT offset changed, the tick source must be re-registered.
    pub offset_changed:     bool,
    /// Color, background or font changed.
    pub appearance_changed: bool,
    /// The display size changed.
    pub size_changed:       bool,
}

impl ConfigImpact {
    /// Returns `true` when nothing observable changed.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Applied configuration along with its computed impact.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigApplied {
    /// The configuration that was applied.
    pub config: Arc<Config>,
    /// The impact of applying the configuration.
    pub impact: ConfigImpact,
}

/// Errors produced by [`ConfigManager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigManagerError {
    /// The internal configuration state lock was poisoned.
    #[error("config state lock poisoned")]
    Poisoned,
}

/// Tracks the configuration currently in effect.
#[derive(Debug)]
pub struct ConfigManager {
    state: RwLock<Config>,
}

impl ConfigManager {
    /// Creates a new manager seeded with the initial configuration.
    pub fn new(initial: Config) -> Self {
        Self {
            state: RwLock::new(initial),
        }
    }

    fn with_state<F, T>(&self, f: F) -> Result<T, ConfigManagerError>
    where
        F: FnOnce(&Config) -> T,
    {
        self.state
            .read()
            .map_err(|_| ConfigManagerError::Poisoned)
            .map(|guard| f(&guard))
    }

    /// Returns the last applied configuration.
    pub fn last_valid(&self) -> Result<Config, ConfigManagerError> {
        self.with_state(Clone::clone)
    }

    /// Replaces the configuration, computing the impact relative to the
    /// previous state.
    pub fn apply(&self, updated: Config) -> Result<ConfigApplied, ConfigManagerError> {
        let mut guard = self
            .state
            .write()
            .map_err(|_| ConfigManagerError::Poisoned)?;

        let impact = compute_impact(&guard, &updated);
        *guard = updated.clone();

        Ok(ConfigApplied {
            config: Arc::new(updated),
            impact,
        })
    }

    /// Applies a single clock setting edit on top of the current state.
    pub fn update_clock(&self, update: ConfigUpdate) -> Result<ConfigApplied, ConfigManagerError> {
        let mut next = self.last_valid()?;
        next.clock = next.clock.with(update);

        self.apply(next)
    }
}

fn compute_impact(previous: &Config, next: &Config) -> ConfigImpact {
    let before = &previous.clock;
    let after = &next.clock;

    ConfigImpact {
        offset_changed:     before.gmt_offset != after.gmt_offset,
        appearance_changed: before.color != after.color
            || before.background != after.background
            || before.font_family != after.font_family,
        size_changed:       before.size != after.size,
    }
}

#[cfg(test)]
mod tests {
    use glowclock_proto::config::{BackgroundTheme, ClockSize, GmtOffset};
    use hex_color::HexColor;

    use super::*;

    fn manager() -> ConfigManager {
        let mut config = Config::default();
        config.clock.gmt_offset = GmtOffset::UTC;
        ConfigManager::new(config)
    }

    #[test]
    fn identical_config_has_no_impact() {
        let manager = manager();
        let current = manager.last_valid().expect("state");

        let applied = manager.apply(current).expect("apply");

        assert!(applied.impact.is_empty());
    }

    #[test]
    fn offset_edit_is_reported() {
        let manager = manager();

        let applied = manager
            .update_clock(ConfigUpdate::Offset(GmtOffset::clamped(3)))
            .expect("apply");

        assert!(applied.impact.offset_changed);
        assert!(!applied.impact.appearance_changed);
        assert_eq!(applied.config.clock.gmt_offset.hours(), 3);
        assert_eq!(manager.last_valid().expect("state").clock.gmt_offset.hours(), 3);
    }

    #[test]
    fn appearance_edits_are_reported() {
        let manager = manager();

        for update in [
            ConfigUpdate::Color(HexColor::rgb(255, 0, 0)),
            ConfigUpdate::Background(BackgroundTheme::Nebula),
            ConfigUpdate::FontFamily("Share Tech Mono".to_owned()),
        ] {
            let applied = manager.update_clock(update).expect("apply");

            assert!(applied.impact.appearance_changed);
            assert!(!applied.impact.offset_changed);
            assert!(!applied.impact.size_changed);
        }
    }

    #[test]
    fn size_edit_is_reported() {
        let manager = manager();

        let applied = manager
            .update_clock(ConfigUpdate::Size(ClockSize::Fullscreen))
            .expect("apply");

        assert!(applied.impact.size_changed);
        assert!(!applied.impact.appearance_changed);
    }
}
