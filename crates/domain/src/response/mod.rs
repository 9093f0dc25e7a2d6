//! HTTP response domain types

mod handle;
mod status;

pub use handle::{HandleError, HandleState, ResponseHandle};
pub use status::StatusCode;
