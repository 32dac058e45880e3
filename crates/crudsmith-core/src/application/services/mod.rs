//! Application services - orchestrate use cases.
//!
//! `CrudService` drives a generation run; `LayerSelector` and
//! `IdempotentFileWriter` are the building blocks it composes.

pub mod crud_service;
pub mod file_writer;
pub mod layer_selector;

pub use crud_service::CrudService;
pub use file_writer::{IdempotentFileWriter, WriteOutcome, append_suffix, contains_line};
pub use layer_selector::LayerSelector;
