pub mod error;
pub mod models;
pub mod service;

pub use error::DataError;
pub use service::{DataService, Resource};
