//! Session Flag
//!
//! Local-storage contract shared with the login flow: the presence of the
//! `faceAuth` key is what the UI treats as an authenticated session.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// Local-storage key holding the session payload.
pub const SESSION_KEY: &str = "faceAuth";

/// A selectable identity: display name, avatar image and identifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub picture: String,
    /// Absent on the wire for presets, `"CUSTOM"` for uploads.
    #[serde(rename = "type", default, skip_serializing_if = "AccountKind::is_preset")]
    pub kind: AccountKind,
}

/// Whether an account comes from the fixed preset list or a user upload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountKind {
    #[default]
    Preset,
    #[serde(rename = "CUSTOM")]
    Custom,
}

impl AccountKind {
    pub fn is_preset(&self) -> bool {
        matches!(self, AccountKind::Preset)
    }
}

impl Account {
    /// Resolve the avatar source for an `img` tag. Custom identities carry
    /// their image inline as a data URI; preset avatars are served from the
    /// bundled `temp-accounts` directory.
    pub fn picture_url(&self) -> String {
        match self.kind {
            AccountKind::Custom => self.picture.clone(),
            AccountKind::Preset => {
                format!("/temp-accounts/{}", self.picture.trim_start_matches('/'))
            }
        }
    }
}

/// Payload stored under [`SESSION_KEY`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub account: Account,
}

/// Parse a raw session payload. Malformed payloads are treated the same as
/// a missing session rather than left to blow up the dashboard.
pub fn parse_session(raw: &str) -> Option<Account> {
    serde_json::from_str::<Session>(raw).ok().map(|s| s.account)
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Synchronously read the session flag. A present but unparseable payload
/// is removed so the next read starts clean.
pub fn read_session() -> Option<Account> {
    let storage = local_storage()?;
    let raw = storage.get_item(SESSION_KEY).ok().flatten()?;

    match parse_session(&raw) {
        Some(account) => Some(account),
        None => {
            web_sys::console::warn_1(
                &format!("discarding malformed {} payload", SESSION_KEY).into(),
            );
            let _ = storage.remove_item(SESSION_KEY);
            None
        }
    }
}

/// Write the session flag for `account`.
pub fn write_session(account: &Account) {
    if let Some(storage) = local_storage() {
        let session = Session {
            account: account.clone(),
        };
        if let Ok(json) = serde_json::to_string(&session) {
            let _ = storage.set_item(SESSION_KEY, &json);
        }
    }
}

/// Remove the session flag (logout).
pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

// ============ Navigation state ============
//
// The selection view hands `{ account }` to the login flow as transient
// route state. History state is a JsValue, so the account goes through
// JSON on both sides.

/// Encode an account for `NavigateOptions::state`.
pub fn account_to_nav_state(account: &Account) -> Option<JsValue> {
    let json = serde_json::to_string(account).ok()?;
    js_sys::JSON::parse(&json).ok()
}

/// Decode an account from route state, if one was passed.
pub fn account_from_nav_state(state: &JsValue) -> Option<Account> {
    let json: String = js_sys::JSON::stringify(state).ok()?.into();
    serde_json::from_str(&json).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset() -> Account {
        Account {
            id: "374ed1e4-481b-4074-a26e-6137657c6e35".to_string(),
            full_name: "person-1".to_string(),
            picture: "374ed1e4-481b-4074-a26e-6137657c6e35/1.jpeg".to_string(),
            kind: AccountKind::Preset,
        }
    }

    #[test]
    fn test_parse_session_roundtrip() {
        let json = serde_json::to_string(&Session { account: preset() }).unwrap();
        let parsed = parse_session(&json).unwrap();
        assert_eq!(parsed, preset());
    }

    #[test]
    fn test_parse_session_malformed() {
        assert!(parse_session("not json at all").is_none());
        assert!(parse_session("{\"user\": 42}").is_none());
        assert!(parse_session("").is_none());
    }

    #[test]
    fn test_preset_omits_type_on_wire() {
        let json = serde_json::to_string(&preset()).unwrap();
        assert!(!json.contains("\"type\""));
        assert!(json.contains("\"fullName\":\"person-1\""));
    }

    #[test]
    fn test_custom_marks_type_on_wire() {
        let account = Account {
            id: "custom".to_string(),
            full_name: "me.png".to_string(),
            picture: "data:image/png;base64,AAAA".to_string(),
            kind: AccountKind::Custom,
        };
        let json = serde_json::to_string(&account).unwrap();
        assert!(json.contains("\"type\":\"CUSTOM\""));

        let back: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind, AccountKind::Custom);
    }

    #[test]
    fn test_missing_type_means_preset() {
        let json = r#"{"id":"x","fullName":"person-2","picture":"p.jpg"}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.kind, AccountKind::Preset);
    }

    #[test]
    fn test_picture_url() {
        assert_eq!(
            preset().picture_url(),
            "/temp-accounts/374ed1e4-481b-4074-a26e-6137657c6e35/1.jpeg"
        );

        // Leading slashes in the preset data normalize to a single one
        let mut slashed = preset();
        slashed.picture = "/88421e2c-ca7a-4332-815f-6e12824e2d05/4.png".to_string();
        assert_eq!(
            slashed.picture_url(),
            "/temp-accounts/88421e2c-ca7a-4332-815f-6e12824e2d05/4.png"
        );

        let custom = Account {
            id: "custom".to_string(),
            full_name: "me.png".to_string(),
            picture: "data:image/png;base64,AAAA".to_string(),
            kind: AccountKind::Custom,
        };
        assert_eq!(custom.picture_url(), "data:image/png;base64,AAAA");
    }
}
