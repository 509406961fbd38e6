// src/lib.rs

pub mod api;
pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod protocol;

pub use crate::api::IslService;
pub use crate::config::Config;
pub use crate::core::engine::{CatalogStatus, MappingEngine};
pub use crate::core::types::{AssetId, ConversionResult};
