//! Core business logic abstractions

pub mod catalog;
pub mod currency;
pub mod log;
pub mod model;
pub mod numeric;
pub mod price;

// Re-export main types for cleaner imports
pub use currency::RateSource;
pub use model::{Category, PriceBoard, PriceItem, PriceSnapshot};
pub use price::{FetchError, PriceSource};
