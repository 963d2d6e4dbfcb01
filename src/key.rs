//! Key binding types used by the scroll frame's keyboard navigation.
//!
//! A [`Binding`] associates one or more key codes with an action and a pair
//! of help strings, and is matched against incoming [`bubbletea_rs::KeyMsg`]
//! values in a component's `update()`. The [`KeyMap`] trait exposes a
//! component's bindings to help views.

use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

/// Help text for a single binding: the key label and a short description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Display label for the key(s), e.g. `"↑/k"`.
    pub key: String,
    /// Short action description, e.g. `"scroll up"`.
    pub desc: String,
}

/// One action bound to one or more key codes.
///
/// # Examples
///
/// ```rust
/// use bubbletea_scrollframe::key::Binding;
/// use bubbletea_rs::KeyMsg;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let up = Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]).with_help("↑/k", "scroll up");
/// let msg = KeyMsg { key: KeyCode::Char('k'), modifiers: KeyModifiers::NONE };
/// assert!(up.matches(&msg));
/// ```
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyCode>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding for the given key codes.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text shown for this binding.
    pub fn with_help(mut self, key: &str, desc: &str) -> Self {
        self.help = Help {
            key: key.to_string(),
            desc: desc.to_string(),
        };
        self
    }

    /// Returns the help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Returns the bound key codes.
    pub fn keys(&self) -> &[KeyCode] {
        &self.keys
    }

    /// Returns whether the binding is currently active.
    pub fn enabled(&self) -> bool {
        !self.disabled
    }

    /// Enables or disables the binding. Disabled bindings never match.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Reports whether the key message matches this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        !self.disabled && self.keys.contains(&msg.key)
    }
}

/// Exposes a component's key bindings for help rendering.
pub trait KeyMap {
    /// The essential bindings, for compact help lines.
    fn short_help(&self) -> Vec<&Binding>;
    /// All bindings, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
