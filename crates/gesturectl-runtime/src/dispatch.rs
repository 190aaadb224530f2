//! Key dispatch.
//!
//! The control loop hands every emitted action to a [`KeyDispatcher`].
//! [`LogDispatcher`] only records and logs presses; `KeyboardDispatcher`
//! (feature `keyboard`) sends real arrow-key clicks to the focused window.

use std::collections::BTreeMap;

use gesturectl_common::error::Result;
use gesturectl_common::types::Action;

/// Presses the key for an action. Fire-and-forget.
pub trait KeyDispatcher {
    /// Presses and releases the key mapped to `action`. Neutral is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GesturectlError::Dispatch`](gesturectl_common::error::GesturectlError::Dispatch)
    /// if the key press could not be delivered.
    fn press(&mut self, action: Action) -> Result<()>;
}

impl<T: KeyDispatcher + ?Sized> KeyDispatcher for Box<T> {
    fn press(&mut self, action: Action) -> Result<()> {
        (**self).press(action)
    }
}

/// Dry-run dispatcher: logs each press and keeps the history.
#[derive(Debug, Clone, Default)]
pub struct LogDispatcher {
    presses: Vec<Action>,
}

impl LogDispatcher {
    /// Creates an empty dispatcher.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            presses: Vec::new(),
        }
    }

    /// Every action pressed so far, in order.
    #[must_use]
    pub fn presses(&self) -> &[Action] {
        &self.presses
    }

    /// Press counts per action.
    #[must_use]
    pub fn counts(&self) -> BTreeMap<Action, u64> {
        let mut counts = BTreeMap::new();
        for action in &self.presses {
            *counts.entry(*action).or_insert(0) += 1;
        }
        counts
    }
}

impl KeyDispatcher for LogDispatcher {
    fn press(&mut self, action: Action) -> Result<()> {
        let Some(key) = action.key_name() else {
            return Ok(());
        };
        tracing::info!(key, "Action: pressed '{key}'");
        self.presses.push(action);
        Ok(())
    }
}

#[cfg(feature = "keyboard")]
pub use keyboard::KeyboardDispatcher;

#[cfg(feature = "keyboard")]
mod keyboard {
    use enigo::{Direction, Enigo, Key, Keyboard, Settings};
    use gesturectl_common::error::{GesturectlError, Result};
    use gesturectl_common::types::Action;

    use super::KeyDispatcher;

    /// Sends arrow-key clicks through the OS input system.
    pub struct KeyboardDispatcher {
        enigo: Enigo,
    }

    impl std::fmt::Debug for KeyboardDispatcher {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("KeyboardDispatcher").finish_non_exhaustive()
        }
    }

    impl KeyboardDispatcher {
        /// Connects to the OS input system.
        ///
        /// # Errors
        ///
        /// Returns an error if no input connection can be opened
        /// (for example without a desktop session).
        pub fn new() -> Result<Self> {
            let enigo = Enigo::new(&Settings::default()).map_err(|e| GesturectlError::Config {
                message: format!("cannot open keyboard for synthetic input: {e}"),
            })?;
            tracing::info!("keyboard dispatcher ready");
            Ok(Self { enigo })
        }
    }

    impl KeyDispatcher for KeyboardDispatcher {
        fn press(&mut self, action: Action) -> Result<()> {
            let key = match action {
                Action::Neutral => return Ok(()),
                Action::Up => Key::UpArrow,
                Action::Down => Key::DownArrow,
                Action::Left => Key::LeftArrow,
                Action::Right => Key::RightArrow,
            };
            self.enigo
                .key(key, Direction::Click)
                .map_err(|e| GesturectlError::Dispatch {
                    action,
                    message: e.to_string(),
                })?;
            tracing::info!(key = %action, "Action: pressed '{action}'");
            Ok(())
        }
    }
}
