//! Domain model types (pure).
//!
//! Entry derivation and pagination are pure functions over plain data.

pub mod entries;
pub mod error;
pub mod key_action;
pub mod pagination;

// Re-export for convenience
pub use entries::derive_entries;
pub use error::InputError;
pub use key_action::KeyAction;
pub use pagination::{page_numbers, paginate, total_pages, PageNumber, PageView, PAGE_SIZE};
