//! Observer-driven events.
//!
//! - `collision` – per-side collision notification with a frozen snapshot of
//!   the other participant
pub mod collision;
