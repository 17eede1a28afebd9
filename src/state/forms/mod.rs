//! Form domain layer
//!
//! Type-safe handling of the signup form: the draft and its inputs, the
//! validation schema, the controller that ties them together, and the sink
//! that receives accepted signups.

mod controller;
mod draft;
mod errors;
mod field;
mod schema;
mod submit;

pub use controller::{FocusTarget, Form, FormController};
pub use draft::{DraftField, TechEntry, TechId};
pub use errors::FieldPath;
pub use field::FormField;
pub use schema::{AcceptedSignup, SignupSchema};
pub use submit::{LogSubmitSink, SubmitOutcome, SubmitSink};

#[cfg(test)]
pub use errors::ValidationError;
#[cfg(test)]
pub use schema::AcceptedTech;
#[cfg(test)]
pub use submit::MockSubmitSink;
