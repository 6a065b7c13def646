//! Core business logic abstractions

pub mod config;
pub mod conversion;
pub mod log;
pub mod rates;

// Re-export main types for cleaner imports
pub use config::AppConfig;
pub use conversion::{ConversionRequest, LookupMode, convert};
pub use rates::{RateProvider, RateResponse};
