//! Rating capability composition

mod registry;

pub use registry::RateableRegistry;
