//! Artifact generator adapters.

mod artisan;
mod memory;

pub use artisan::ArtisanGenerator;
pub use memory::MemoryGenerator;
