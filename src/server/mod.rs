pub mod router;
pub mod routes;

pub use router::{AlmanacState, almanac_router};
