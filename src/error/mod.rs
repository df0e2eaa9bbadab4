mod almanac;

pub use almanac::{AlmanacError, ApiErrorBody, ApiErrorObject};
