pub mod dataset;
pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

mod rng;

pub use dataset::{Dataset, Seed};
pub use error::{Result, StorageError};
