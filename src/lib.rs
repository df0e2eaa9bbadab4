pub mod browser;
pub mod config;
pub mod error;
pub mod server;
pub mod utils;

pub use almanac_core::{OrganizerState, OrganizerStore};
pub use error::AlmanacError;
pub use server::{AlmanacState, almanac_router};
