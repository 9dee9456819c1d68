use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::bore::Bore;

/// Wire representation of a bore.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoreDto {
    pub id: i32,
    pub text: String,
    pub category: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Bore> for BoreDto {
    fn from(value: Bore) -> Self {
        Self {
            id: value.id.get(),
            text: value.text.into_inner(),
            category: value.category.into_inner(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
