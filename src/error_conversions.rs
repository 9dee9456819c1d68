//! Error conversion glue.
//!
//! The domain layer must not depend on service/repository error types, so
//! the conversions between them live here.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
mod server {
    use crate::forms::bores::BoreFormError;
    use crate::services::ServiceError;

    impl From<BoreFormError> for ServiceError {
        fn from(val: BoreFormError) -> Self {
            ServiceError::InvalidInput(val.to_string())
        }
    }
}
