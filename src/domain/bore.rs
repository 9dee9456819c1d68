use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{BoreCategory, BoreId, BoreText};

/// A stored boredom suggestion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bore {
    pub id: BoreId,
    pub text: BoreText,
    pub category: BoreCategory,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`Bore`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewBore {
    pub text: BoreText,
    pub category: BoreCategory,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
