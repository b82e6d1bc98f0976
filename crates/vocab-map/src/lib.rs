pub mod aliases;
pub mod resolver;

pub use aliases::{FIELD_ALIASES, aliases_for};
pub use resolver::{normalize_label, resolve_field, resolve_text};
