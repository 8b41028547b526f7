//! Dataset preparation: schema, validation, flattening, shuffling.
//!
//! ## Key Types
//!
//! - `RawDataset` / `RawCategory` / `RawCard`: the untrusted input
//!   schema (JSON wire format)
//! - `DatasetLoader`: strict/relaxed validation plus the
//!   flatten-and-shuffle pipeline
//! - `LoadedDataset`: the immutable `(categories, cards)` product
//! - `DatasetError`: fatal load-time validation failures

pub mod error;
pub mod loader;
pub mod raw;

pub use error::DatasetError;
pub use loader::{DatasetLoader, LoadedDataset};
pub use raw::{RawCard, RawCategory, RawDataset};
