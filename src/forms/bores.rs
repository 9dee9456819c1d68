use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::bore::NewBore;
use crate::domain::types::{BoreCategory, BoreText, TypeConstraintError};

/// JSON body accepted when creating or replacing a bore.
///
/// Both fields are optional at the wire level so that a missing field is
/// reported as a validation failure instead of a deserialization error.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct BoreForm {
    #[validate(required, length(min = 1))]
    pub text: Option<String>,
    #[validate(required, length(min = 1))]
    pub category: Option<String>,
}

/// Validated content of a [`BoreForm`].
#[derive(Debug, Clone, PartialEq)]
pub struct BoreFormPayload {
    pub text: BoreText,
    pub category: BoreCategory,
}

impl BoreFormPayload {
    pub fn into_new_bore(self) -> NewBore {
        let now = Utc::now().naive_utc();
        NewBore {
            text: self.text,
            category: self.category,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Error)]
pub enum BoreFormError {
    #[error("Bore form validation failed: {0}")]
    Validation(String),
    #[error("Bore form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for BoreFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for BoreFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<BoreForm> for BoreFormPayload {
    type Error = BoreFormError;

    fn try_from(value: BoreForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            text: BoreText::new(value.text.unwrap_or_default())?,
            category: BoreCategory::new(value.category.unwrap_or_default())?,
        })
    }
}
