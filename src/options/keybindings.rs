use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(transparent)]
/// Configurable keyboard bindings mapping actions to key codes.
///
/// Serializes as a flat `action = "Key"` table. Deserializing overlays the
/// given entries on the defaults, so a preset only lists what it remaps.
/// A remapped key is taken away from the default action that held it.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `MoveForward` → `"KeyW"`).
    pub bindings: BTreeMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: FxHashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = BTreeMap::from([
            (KeyAction::MoveForward, "KeyW".into()),
            (KeyAction::MoveBack, "KeyS".into()),
            (KeyAction::StrafeLeft, "KeyA".into()),
            (KeyAction::StrafeRight, "KeyD".into()),
            (KeyAction::PanLeft, "KeyQ".into()),
            (KeyAction::PanRight, "KeyE".into()),
            (KeyAction::PlaceBlock, "KeyG".into()),
            (KeyAction::RemoveBlock, "KeyH".into()),
            (KeyAction::ResetCamera, "KeyR".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: FxHashMap::default(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl<'de> Deserialize<'de> for KeybindingOptions {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let overrides = BTreeMap::<KeyAction, String>::deserialize(deserializer)?;
        let mut opts = Self::default();
        for (action, key) in overrides {
            opts.assign(action, key);
        }
        opts.rebuild_reverse_map();
        Ok(opts)
    }
}

impl KeybindingOptions {
    /// Rebind `action` to `key`. Any other action bound to `key` is left
    /// unbound.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        self.assign(action, key.into());
        self.rebuild_reverse_map();
    }

    fn assign(&mut self, action: KeyAction, key: String) {
        self.bindings.retain(|a, k| *a == action || *k != key);
        let _ = self.bindings.insert(action, key);
    }

    /// Rebuild the reverse lookup map (key string → action).
    ///
    /// When two actions share a key (possible only by editing `bindings`
    /// directly), the later action in declaration order wins.
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}
