use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::bore::{Bore as DomainBore, NewBore as DomainNewBore};
use crate::domain::types::{BoreCategory, BoreText, TypeConstraintError};

/// Diesel model representing the `bores` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::bores)]
pub struct Bore {
    pub id: i32,
    pub text: String,
    pub category: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Bore`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::bores)]
pub struct NewBore {
    pub text: String,
    pub category: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Bore> for DomainBore {
    type Error = TypeConstraintError;

    fn try_from(bore: Bore) -> Result<Self, Self::Error> {
        Ok(Self {
            id: bore.id.try_into()?,
            text: BoreText::new(bore.text)?,
            category: BoreCategory::new(bore.category)?,
            created_at: bore.created_at,
            updated_at: bore.updated_at,
        })
    }
}

impl From<DomainNewBore> for NewBore {
    fn from(bore: DomainNewBore) -> Self {
        Self {
            text: bore.text.into_inner(),
            category: bore.category.into_inner(),
            created_at: bore.created_at,
            updated_at: bore.updated_at,
        }
    }
}
