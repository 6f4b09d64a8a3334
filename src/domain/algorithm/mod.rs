//! Algorithm domain - deployment resource definitions

mod entity;
mod validation;

pub use entity::{Algorithm, InferenceParameters};
pub use validation::{json_type_name, ValidationError};
