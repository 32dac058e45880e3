//! Route-file adapters.
//!
//! Both adapters hold exclusive access to the route file for the whole
//! check-then-append. Nothing else is coordinated between concurrent runs.

mod local;
mod memory;

pub use local::LocalRouteFile;
pub use memory::MemoryRouteFile;
