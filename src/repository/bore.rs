use chrono::Utc;
use diesel::prelude::*;

use crate::domain::bore::{Bore, NewBore};
use crate::domain::types::{BoreCategory, BoreId, BoreText};
use crate::models::bore::{Bore as DbBore, NewBore as DbNewBore};
use crate::repository::errors::RepositoryResult;
use crate::repository::{BoreReader, BoreWriter, DieselRepository};

impl BoreReader for DieselRepository {
    fn list_bores(&self) -> RepositoryResult<Vec<Bore>> {
        use crate::schema::bores;

        let mut conn = self.conn()?;

        let items = bores::table
            .order(bores::id.asc())
            .load::<DbBore>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Bore>, _>>()?;

        Ok(items)
    }
}

impl BoreWriter for DieselRepository {
    fn create_bore(&self, bore: &NewBore) -> RepositoryResult<Bore> {
        use crate::schema::bores;

        let mut conn = self.conn()?;
        let db_bore: DbNewBore = bore.clone().into();

        let created = diesel::insert_into(bores::table)
            .values(db_bore)
            .get_result::<DbBore>(&mut conn)?;

        let created: Bore = created.try_into()?;
        Ok(created)
    }

    fn update_bore(
        &self,
        id: BoreId,
        text: &BoreText,
        category: &BoreCategory,
    ) -> RepositoryResult<Option<Bore>> {
        use crate::schema::bores;

        let mut conn = self.conn()?;

        let updated = diesel::update(bores::table.filter(bores::id.eq(id.get())))
            .set((
                bores::text.eq(text.as_str()),
                bores::category.eq(category.as_str()),
                bores::updated_at.eq(Utc::now().naive_utc()),
            ))
            .get_result::<DbBore>(&mut conn)
            .optional()?;

        let updated = updated.map(TryInto::try_into).transpose()?;
        Ok(updated)
    }

    fn delete_bore(&self, id: BoreId) -> RepositoryResult<Option<Bore>> {
        use crate::schema::bores;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(bores::table.filter(bores::id.eq(id.get())))
            .get_result::<DbBore>(&mut conn)
            .optional()?;

        let deleted = deleted.map(TryInto::try_into).transpose()?;
        Ok(deleted)
    }
}
