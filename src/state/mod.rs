//! State Management
//!
//! Session flag contract and the identity selection state machine.

pub mod selection;
pub mod session;

pub use selection::{preset_accounts, validate_upload, SelectionState};
pub use session::{Account, AccountKind};
