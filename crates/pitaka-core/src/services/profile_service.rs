//! Profile slots stored as bare strings: the onboarding name and the theme.

use std::fmt;

use crate::{
    store::{keys, OfflineStore},
    CoreError,
};

/// Reads and writes the two plain-string slots. Unlike the list slots these
/// carry no JSON framing; the stored bytes are the string itself.
pub struct ProfileService;

impl ProfileService {
    /// Returns the saved display name, if onboarding has happened.
    pub fn user_name(store: &OfflineStore) -> Option<String> {
        store
            .get_raw(keys::USER_NAME)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
    }

    pub fn set_user_name(store: &OfflineStore, name: &str) -> Result<(), CoreError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation("user name must not be empty".into()));
        }
        store.set_raw(keys::USER_NAME, trimmed);
        Ok(())
    }

    /// The onboarding gate: true once a non-empty name has been saved.
    pub fn is_onboarded(store: &OfflineStore) -> bool {
        Self::user_name(store).is_some()
    }

    pub fn theme(store: &OfflineStore) -> Theme {
        store
            .get_raw(keys::THEME)
            .map(|value| Theme::from_str(&value))
            .unwrap_or_default()
    }

    pub fn set_theme(store: &OfflineStore, theme: Theme) {
        store.set_raw(keys::THEME, &theme.to_string());
    }
}

/// Color-scheme preference, stored as a bare lowercase string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    /// Unknown stored values fall back to following the system scheme.
    pub fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::System,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        };
        f.write_str(label)
    }
}
