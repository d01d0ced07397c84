//! HTTP middleware and extractors

mod request_id;
mod validation;

pub use request_id::{REQUEST_ID_HEADER, request_id};
pub use validation::ValidatedJson;
