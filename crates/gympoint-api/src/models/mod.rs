//! Request and response models for the gympoint API.

mod requests;
mod responses;

pub use requests::*;
pub use responses::*;
