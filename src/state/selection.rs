//! Identity Selection
//!
//! The selection view's state machine: one currently selected identity,
//! drawn from the fixed preset list or a single transient custom upload.

use crate::state::session::{Account, AccountKind};

/// File extensions accepted for a custom identity upload.
const ALLOWED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// The fixed set of mock identities offered on the selection view.
pub fn preset_accounts() -> Vec<Account> {
    vec![
        Account {
            id: "374ed1e4-481b-4074-a26e-6137657c6e35".to_string(),
            full_name: "person-1".to_string(),
            picture: "374ed1e4-481b-4074-a26e-6137657c6e35/1.jpeg".to_string(),
            kind: AccountKind::Preset,
        },
        Account {
            id: "43332f46-89a4-435c-880e-4d72bb51149a".to_string(),
            full_name: "person-2".to_string(),
            picture: "43332f46-89a4-435c-880e-4d72bb51149a/2.jpg".to_string(),
            kind: AccountKind::Preset,
        },
        Account {
            id: "88421e2c-ca7a-4332-815f-6e12824e2d05".to_string(),
            full_name: "khadar".to_string(),
            picture: "/88421e2c-ca7a-4332-815f-6e12824e2d05/4.png".to_string(),
            kind: AccountKind::Preset,
        },
        Account {
            id: "0c2f5599-9296-4f94-97d5-e773043188ae".to_string(),
            full_name: "mohammad".to_string(),
            picture: "/0c2f5599-9296-4f94-97d5-e773043188ae/5.jpg".to_string(),
            kind: AccountKind::Preset,
        },
    ]
}

/// Validate an upload file name against the extension allow-list.
///
/// Only the last dot-separated segment counts, matching the login flow's
/// expectations on the other side of the session contract.
pub fn validate_upload(file_name: &str) -> Result<(), String> {
    let suffix = file_name.rsplit('.').next().unwrap_or_default();
    if ALLOWED_EXTENSIONS.contains(&suffix) {
        Ok(())
    } else {
        Err("Only png, jpg or jpeg files are supported.".to_string())
    }
}

/// Selection state: at most one identity selected at a time, at most one
/// custom upload held alongside the presets.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionState {
    selected: Account,
    custom: Option<Account>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionState {
    /// Start with the first preset selected.
    pub fn new() -> Self {
        let first = preset_accounts()
            .into_iter()
            .next()
            .expect("preset list is non-empty");
        Self {
            selected: first,
            custom: None,
        }
    }

    pub fn selected(&self) -> &Account {
        &self.selected
    }

    pub fn custom(&self) -> Option<&Account> {
        self.custom.as_ref()
    }

    /// Make `account` the current selection.
    pub fn select(&mut self, account: Account) {
        self.selected = account;
    }

    /// Install a decoded upload as the custom identity and select it,
    /// replacing any previous custom identity.
    pub fn set_custom(&mut self, file_name: &str, data_uri: String) {
        let account = Account {
            id: "custom".to_string(),
            full_name: file_name.to_string(),
            picture: data_uri,
            kind: AccountKind::Custom,
        };
        self.custom = Some(account.clone());
        self.selected = account;
    }

    /// Drop the custom identity. If it was selected, selection reverts to
    /// the first preset.
    pub fn clear_custom(&mut self) {
        self.custom = None;
        if self.selected.kind == AccountKind::Custom {
            self.selected = preset_accounts()
                .into_iter()
                .next()
                .expect("preset list is non-empty");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_first_preset() {
        let state = SelectionState::new();
        assert_eq!(state.selected(), &preset_accounts()[0]);
        assert!(state.custom().is_none());
    }

    #[test]
    fn test_validate_upload_allow_list() {
        assert!(validate_upload("me.png").is_ok());
        assert!(validate_upload("me.jpg").is_ok());
        assert!(validate_upload("holiday.photo.jpeg").is_ok());

        let err = validate_upload("report.pdf").unwrap_err();
        assert!(!err.is_empty());
        assert!(validate_upload("no-extension").is_err());
        // the allow-list is exact, as the matcher on the login side is
        assert!(validate_upload("ME.PNG").is_err());
    }

    #[test]
    fn test_upload_selects_custom() {
        let mut state = SelectionState::new();
        state.set_custom("me.png", "data:image/png;base64,AAAA".to_string());

        assert_eq!(state.selected().kind, AccountKind::Custom);
        assert!(!state.selected().picture.is_empty());
        assert_eq!(state.custom(), Some(state.selected()));
    }

    #[test]
    fn test_second_upload_replaces_first() {
        let mut state = SelectionState::new();
        state.set_custom("one.png", "data:image/png;base64,AAAA".to_string());
        state.set_custom("two.jpg", "data:image/jpeg;base64,BBBB".to_string());

        assert_eq!(state.custom().map(|a| a.full_name.as_str()), Some("two.jpg"));
        assert_eq!(state.selected().full_name, "two.jpg");
    }

    #[test]
    fn test_clear_custom_reverts_to_first_preset() {
        let mut state = SelectionState::new();
        state.set_custom("me.png", "data:image/png;base64,AAAA".to_string());
        state.clear_custom();

        assert!(state.custom().is_none());
        assert_eq!(state.selected(), &preset_accounts()[0]);
    }

    #[test]
    fn test_clear_custom_keeps_preset_selection() {
        let mut state = SelectionState::new();
        let third = preset_accounts()[2].clone();

        state.set_custom("me.png", "data:image/png;base64,AAAA".to_string());
        state.select(third.clone());
        state.clear_custom();

        assert_eq!(state.selected(), &third);
    }
}
