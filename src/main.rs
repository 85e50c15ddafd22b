//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the shoplist library and the Zellij plugin
//! system: key presses become [`shoplist::Event`]s, actions become host calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key` events
//! 3. **Update**: Map keys, delegate to `handle_event`, run actions
//! 4. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! In the list:
//! - `j`/`Down`/`Ctrl+n`: Move down
//! - `k`/`Up`/`Ctrl+p`: Move up
//! - `a`: Open the add dialog
//! - `e`/`Enter`: Edit the selected item
//! - `d`/`x`/`Delete`: Delete the selected item
//! - `q`: Close plugin
//!
//! In the add dialog and the inline editor:
//! - Characters and `Backspace`: Edit the focused field
//! - `Tab`: Switch between name and quantity
//! - `Enter`: Add the item, or save the edit
//! - `Esc`: Cancel the dialog, or leave the editor

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use {plugin::State, zellij_tile::prelude::*};

#[cfg(target_family = "wasm")]
register_plugin!(State);

#[cfg(target_family = "wasm")]
mod plugin {
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    use shoplist::{handle_event, Action, Config, Event};

    /// Plugin state wrapper around the library's `AppState`.
    pub struct State {
        app: shoplist::AppState,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: shoplist::initialize(&Config::default()),
            }
        }
    }

    impl ZellijPlugin for State {
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            shoplist::observability::init_tracing(&config);

            let span = tracing::debug_span!("plugin_load");
            let _guard = span.entered();

            tracing::debug!(config = ?config, "parsed configuration");
            self.app = shoplist::initialize(&config);

            subscribe(&[EventType::Key]);
            tracing::debug!("plugin load complete");
        }

        /// Returns `true` if the UI should re-render.
        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let zellij_tile::prelude::Event::Key(key) = event else {
                return false;
            };

            let span = tracing::debug_span!("plugin_update_event", bare_key = ?key.bare_key);
            let _guard = span.entered();

            let Some(our_event) = self.map_key_event(&key) else {
                return false;
            };

            match handle_event(&mut self.app, &our_event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(
                        action_count = actions.len(),
                        should_render = should_render,
                        "event handled successfully"
                    );
                    for action in &actions {
                        Self::execute_action(action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::warn!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            shoplist::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        /// Maps keyboard events to application events for the current mode.
        fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
            if self.app.input_mode.is_text_entry() {
                return Self::map_text_entry_key(key);
            }

            if key.has_modifiers(&[KeyModifier::Ctrl]) {
                return match key.bare_key {
                    BareKey::Char('n') => Some(Event::KeyDown),
                    BareKey::Char('p') => Some(Event::KeyUp),
                    _ => None,
                };
            }

            Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Char('a') => Event::OpenAddDialog,
                BareKey::Char('e') => Event::EditSelected,
                BareKey::Enter => Event::Submit,
                BareKey::Delete | BareKey::Char('d' | 'x') => Event::DeleteSelected,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            })
        }

        fn map_text_entry_key(key: &KeyWithModifier) -> Option<Event> {
            if key.has_modifiers(&[KeyModifier::Ctrl]) {
                return None;
            }

            Some(match key.bare_key {
                BareKey::Enter => Event::Submit,
                BareKey::Tab => Event::NextField,
                BareKey::Esc => Event::Escape,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            })
        }

        #[tracing::instrument(level = "debug")]
        fn execute_action(action: &Action) {
            match action {
                Action::CloseFocus => {
                    tracing::debug!("closing plugin focus");
                    hide_self();
                }
            }
        }
    }
}

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!("shoplist is a Zellij plugin; build it for wasm32-wasip1 and load it from Zellij");
}
