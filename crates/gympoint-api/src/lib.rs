//! HTTP surface for the gympoint backend.
//!
//! Every endpoint is a thin handler: validate the request, call one
//! service, wrap the result in the JSON envelope. The services own the
//! SQL; the handlers own status codes and the envelope; middleware owns
//! the authenticated principal.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod principal;
pub mod response;
pub mod router;
pub mod services;
pub mod validation;

pub use error::ApiError;
pub use openapi::ApiDoc;
pub use principal::{AuthKeys, AuthPrincipal};
pub use response::Envelope;
pub use router::{api_router, ApiState};
