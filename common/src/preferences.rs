use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StoreError;
use crate::storage::Storage;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Saved theme; anything missing or unrecognised reads as light. Both the
/// JSON form (`"dark"`) and the bare word are accepted.
pub fn load_theme<S: Storage>(storage: &S) -> Theme {
    match storage.get_item(THEME_KEY) {
        Ok(Some(raw)) if raw.trim().trim_matches('"') == "dark" => Theme::Dark,
        Ok(_) => Theme::Light,
        Err(e) => {
            debug!(error = %e, "failed to read theme, using light");
            Theme::Light
        }
    }
}

pub fn save_theme<S: Storage>(storage: &mut S, theme: Theme) -> Result<(), StoreError> {
    storage.set_item(THEME_KEY, &serde_json::to_string(&theme)?)
}

/// Flips the saved theme and returns the new one.
pub fn toggle_theme<S: Storage>(storage: &mut S) -> Result<Theme, StoreError> {
    let theme = load_theme(storage).toggled();
    save_theme(storage, theme)?;
    Ok(theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_default_theme_is_light() {
        assert_eq!(load_theme(&MemoryStorage::new()), Theme::Light);
    }

    #[test]
    fn test_unknown_theme_reads_as_light() {
        let mut storage = MemoryStorage::new();
        storage.set_item(THEME_KEY, "sepia").unwrap();
        assert_eq!(load_theme(&storage), Theme::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let mut storage = MemoryStorage::new();
        assert_eq!(toggle_theme(&mut storage).unwrap(), Theme::Dark);
        assert_eq!(storage.get_item(THEME_KEY).unwrap().as_deref(), Some("\"dark\""));
        assert_eq!(toggle_theme(&mut storage).unwrap(), Theme::Light);
        assert_eq!(load_theme(&storage), Theme::Light);
    }
}
