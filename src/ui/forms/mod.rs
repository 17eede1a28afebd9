//! Form rendering module
//!
//! - `field_renderer`: single input with its inline error
//! - `signup_form`: the signup screen and its tech list

mod field_renderer;
mod signup_form;

pub use signup_form::draw as draw_signup;
