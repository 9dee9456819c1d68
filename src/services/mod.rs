pub use errors::{ServiceError, ServiceResult};

pub mod bores;
pub mod errors;
