//! Identity module - Who is being assessed.
//!
//! - `fields` - The required identity sheet, grouped by category
//! - `record` - The `Identity` value itself
//! - `namespace` - Derivation of the storage namespace from the commune name

mod fields;
mod namespace;
mod record;

pub use fields::{
    is_required_field, IdentityCategory, COMMUNE_NAME_FIELD, OFFICIAL_EMAIL_FIELD,
    REQUIRED_FIELDS,
};
pub use namespace::{namespace_for, Namespace, DEFAULT_NAMESPACE};
pub use record::Identity;
