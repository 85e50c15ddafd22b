//! Shoplist: a shopping list plugin for Zellij.
//!
//! Keeps an in-memory list of shopping items, each with a name and a
//! quantity. Items are added through a small dialog, edited inline in their
//! row, and deleted from the list.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← View state
//! │  - Event handling                                   │  ← Intent mapping
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌───────────────────────┐   ┌───────────────────────┐
//! │ UI Layer (ui/)        │   │ Domain (domain/)      │
//! │ - Rendering           │   │ - ListState           │
//! │ - Theming             │   │ - ShoppingItem        │
//! │ - Components          │   │ - Errors              │
//! └───────────────────────┘   └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: View state and the event handler
//! - [`domain`]: List model with its four transitions
//! - [`infrastructure`]: Sandbox paths
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/shoplist.wasm" {
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # The List Model
//!
//! [`ListState`] is an immutable snapshot. Every transition returns a new
//! snapshot and leaves the receiver alone:
//!
//! ```rust
//! use shoplist::ListState;
//!
//! let before = ListState::new().add("Milk", "2")?;
//! let id = before.items()[0].id;
//!
//! let editing = before.begin_edit(id);
//! let saved = editing.commit_edit(id, "Oat milk", "abc");
//! let emptied = saved.delete(id);
//!
//! assert_eq!(before.items()[0].name, "Milk");
//! assert_eq!(saved.items()[0].quantity, 1);
//! assert!(emptied.is_empty());
//! # Ok::<(), shoplist::ShopListError>(())
//! ```
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any ANSI-capable terminal emulator

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Field, InputMode};
pub use domain::{ItemId, ListState, Result, ShopListError, ShoppingItem};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/shoplist.wasm" {
///     theme "catppuccin-latte"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `material-purple`.
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values are treated as unset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use shoplist::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "material-purple".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("material-purple"));
    /// assert_eq!(config.trace_level, None);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        Self {
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
        }
    }

    /// Resolves the configured theme.
    ///
    /// `theme_file` wins over `theme_name`. A file that fails to load or an
    /// unknown name is logged and replaced by the default theme.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Initializes the plugin state with an empty list and the configured theme.
///
/// # Example
///
/// ```rust
/// use shoplist::{Config, initialize};
///
/// let state = initialize(&Config::default());
/// assert!(state.list.is_empty());
/// assert_eq!(state.list.next_id(), shoplist::ItemId(1));
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing shoplist plugin");

    let theme = config.resolve_theme();
    tracing::debug!(theme = %theme.name, "theme resolved");

    AppState::new(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn from_zellij_reads_known_keys() {
        let config = Config::from_zellij(&map(&[
            ("theme", "catppuccin-latte"),
            ("theme_file", "/tmp/theme.toml"),
            ("trace_level", "shoplist=debug"),
            ("unrelated", "ignored"),
        ]));

        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme_file.as_deref(), Some("/tmp/theme.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("shoplist=debug"));
    }

    #[test]
    fn blank_values_are_unset() {
        let config = Config::from_zellij(&map(&[("theme", "  "), ("trace_level", "")]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_theme().name, Theme::default().name);
    }

    #[test]
    fn missing_theme_file_falls_back_to_default() {
        let config = Config {
            theme_name: Some("material-purple".to_string()),
            theme_file: Some("/definitely/not/here.toml".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_theme().name, Theme::default().name);
    }

    #[test]
    fn initialize_starts_empty() {
        let state = initialize(&Config {
            theme_name: Some("catppuccin-latte".to_string()),
            ..Default::default()
        });

        assert!(state.list.is_empty());
        assert_eq!(state.list.next_id(), ItemId(1));
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.theme.name, "catppuccin-latte");
    }
}
