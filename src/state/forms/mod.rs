//! Form domain layer
//!
//! Field value objects and the customer form they make up.

mod field;
mod form_state;

pub use field::{FieldKind, FormField};
pub use form_state::{CustomerForm, FieldId};
