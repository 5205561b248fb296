mod policy;
mod value;

pub use policy::{Predicate, TriggerFlags, ValidationPolicy};
pub use value::FieldValue;
