//! Catalog operations over stored bores.
//!
//! Every function here is a single stateless transaction against the
//! repository. Routes stay thin wrappers that only map [`ServiceError`]
//! variants onto HTTP responses.

use rand::Rng;

use crate::domain::types::BoreId;
use crate::dto::bores::BoreDto;
use crate::forms::bores::{BoreForm, BoreFormPayload};
use crate::repository::{BoreReader, BoreWriter};

use super::{ServiceError, ServiceResult};

/// Validate `form` and persist it as a new bore.
pub fn create_bore<R>(form: BoreForm, repo: &R) -> ServiceResult<BoreDto>
where
    R: BoreWriter,
{
    let payload = BoreFormPayload::try_from(form).map_err(|e| {
        log::debug!("Rejected bore form: {e}");
        ServiceError::from(e)
    })?;

    match repo.create_bore(&payload.into_new_bore()) {
        Ok(bore) => Ok(bore.into()),
        Err(e) => {
            log::error!("Failed to create bore: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Pick one stored bore uniformly at random.
pub fn show_random_bore<R>(repo: &R) -> ServiceResult<BoreDto>
where
    R: BoreReader,
{
    show_random_bore_with(repo, &mut rand::rng())
}

/// Same as [`show_random_bore`] with a caller supplied random source.
///
/// The whole collection is loaded and the index is drawn against that same
/// snapshot, so the result is always a member of the set that was read.
pub fn show_random_bore_with<R, G>(repo: &R, rng: &mut G) -> ServiceResult<BoreDto>
where
    R: BoreReader,
    G: Rng,
{
    let mut bores = match repo.list_bores() {
        Ok(bores) => bores,
        Err(e) => {
            log::error!("Failed to list bores: {e}");
            return Err(ServiceError::Internal);
        }
    };

    if bores.is_empty() {
        return Err(ServiceError::NotFound);
    }

    let index = rng.random_range(0..bores.len());
    Ok(bores.swap_remove(index).into())
}

/// Return every stored bore.
pub fn list_bores<R>(repo: &R) -> ServiceResult<Vec<BoreDto>>
where
    R: BoreReader,
{
    match repo.list_bores() {
        Ok(bores) if bores.is_empty() => Err(ServiceError::NotFound),
        Ok(bores) => Ok(bores.into_iter().map(BoreDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list bores: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Replace text and category of the bore identified by `bore_id`.
pub fn update_bore<R>(bore_id: i32, form: BoreForm, repo: &R) -> ServiceResult<BoreDto>
where
    R: BoreWriter,
{
    let payload = BoreFormPayload::try_from(form).map_err(|e| {
        log::debug!("Rejected bore form: {e}");
        ServiceError::from(e)
    })?;

    let bore_id = BoreId::new(bore_id).map_err(|_| ServiceError::NotFound)?;

    match repo.update_bore(bore_id, &payload.text, &payload.category) {
        Ok(Some(bore)) => Ok(bore.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to update bore {bore_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Delete the bore identified by `bore_id`, returning what it contained.
pub fn delete_bore<R>(bore_id: i32, repo: &R) -> ServiceResult<BoreDto>
where
    R: BoreWriter,
{
    let bore_id = BoreId::new(bore_id).map_err(|_| ServiceError::NotFound)?;

    match repo.delete_bore(bore_id) {
        Ok(Some(bore)) => Ok(bore.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to delete bore {bore_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bore::Bore;
    use crate::domain::types::{BoreCategory, BoreText};
    use crate::repository::test::TestRepository;
    use chrono::DateTime;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_bore(id: i32, text: &str, category: &str) -> Bore {
        Bore {
            id: BoreId::new(id).unwrap(),
            text: BoreText::new(text).unwrap(),
            category: BoreCategory::new(category).unwrap(),
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            updated_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    fn sample_repo() -> TestRepository {
        TestRepository::new(vec![
            sample_bore(1, "Count ceiling tiles", "indoor"),
            sample_bore(2, "Walk around the block", "outdoor"),
            sample_bore(3, "Learn to juggle", "skill"),
        ])
    }

    fn form(text: Option<&str>, category: Option<&str>) -> BoreForm {
        BoreForm {
            text: text.map(str::to_string),
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn create_then_list_contains_new_bore() {
        let repo = TestRepository::default();

        let created = create_bore(form(Some("Fold a paper crane"), Some("craft")), &repo).unwrap();
        assert_eq!(created.text, "Fold a paper crane");
        assert_eq!(created.category, "craft");

        let listed = list_bores(&repo).unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[test]
    fn create_with_missing_field_leaves_store_untouched() {
        let repo = sample_repo();

        for invalid in [
            form(None, Some("indoor")),
            form(Some("Nap"), None),
            form(Some(""), Some("indoor")),
            BoreForm::default(),
        ] {
            let err = create_bore(invalid, &repo).unwrap_err();
            assert!(matches!(err, ServiceError::InvalidInput(_)));
        }
        assert_eq!(repo.bores().len(), 3);
    }

    #[test]
    fn random_bore_on_empty_store_is_not_found() {
        let repo = TestRepository::default();
        assert_eq!(show_random_bore(&repo), Err(ServiceError::NotFound));
    }

    #[test]
    fn random_bore_is_member_of_store() {
        let repo = sample_repo();
        let ids: Vec<i32> = repo.bores().iter().map(|b| b.id.get()).collect();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let picked = show_random_bore_with(&repo, &mut rng).unwrap();
            assert!(ids.contains(&picked.id));
        }
    }

    #[test]
    fn random_bore_reaches_every_record() {
        let repo = sample_repo();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 3];

        for _ in 0..300 {
            let picked = show_random_bore_with(&repo, &mut rng).unwrap();
            seen[(picked.id - 1) as usize] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn random_bore_with_single_record_returns_it() {
        let repo = TestRepository::new(vec![sample_bore(9, "Count ceiling tiles", "indoor")]);
        let picked = show_random_bore(&repo).unwrap();
        assert_eq!(picked, BoreDto::from(sample_bore(9, "Count ceiling tiles", "indoor")));
    }

    #[test]
    fn list_on_empty_store_is_not_found() {
        let repo = TestRepository::default();
        assert_eq!(list_bores(&repo), Err(ServiceError::NotFound));
    }

    #[test]
    fn update_replaces_text_and_category_only() {
        let repo = sample_repo();

        let updated = update_bore(2, form(Some("Run a lap"), Some("sport")), &repo).unwrap();
        assert_eq!(updated.id, 2);
        assert_eq!(updated.text, "Run a lap");
        assert_eq!(updated.category, "sport");

        let bores = repo.bores();
        assert_eq!(bores[0], sample_bore(1, "Count ceiling tiles", "indoor"));
        assert_eq!(bores[2], sample_bore(3, "Learn to juggle", "skill"));
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let repo = sample_repo();
        let before = repo.bores();

        assert_eq!(
            update_bore(99, form(Some("Run a lap"), Some("sport")), &repo),
            Err(ServiceError::NotFound)
        );
        assert_eq!(
            update_bore(0, form(Some("Run a lap"), Some("sport")), &repo),
            Err(ServiceError::NotFound)
        );
        assert_eq!(repo.bores(), before);
    }

    #[test]
    fn update_with_missing_field_is_invalid() {
        let repo = sample_repo();
        let before = repo.bores();

        let err = update_bore(1, form(Some("Run a lap"), None), &repo).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
        assert_eq!(repo.bores(), before);
    }

    #[test]
    fn delete_returns_prior_content_and_removes_record() {
        let repo = sample_repo();

        let deleted = delete_bore(1, &repo).unwrap();
        assert_eq!(deleted, BoreDto::from(sample_bore(1, "Count ceiling tiles", "indoor")));

        let listed = list_bores(&repo).unwrap();
        assert!(listed.iter().all(|b| b.id != 1));
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let repo = sample_repo();
        assert_eq!(delete_bore(42, &repo), Err(ServiceError::NotFound));
        assert_eq!(delete_bore(-1, &repo), Err(ServiceError::NotFound));
        assert_eq!(repo.bores().len(), 3);
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let repo = sample_repo();
        delete_bore(3, &repo).unwrap();

        let created = create_bore(form(Some("Bake bread"), Some("kitchen")), &repo).unwrap();
        assert_eq!(created.id, 4);
    }

    #[test]
    fn store_failures_are_internal() {
        let repo = TestRepository::failing();

        assert_eq!(
            create_bore(form(Some("Nap"), Some("rest")), &repo),
            Err(ServiceError::Internal)
        );
        assert_eq!(show_random_bore(&repo), Err(ServiceError::Internal));
        assert_eq!(list_bores(&repo), Err(ServiceError::Internal));
        assert_eq!(
            update_bore(1, form(Some("Nap"), Some("rest")), &repo),
            Err(ServiceError::Internal)
        );
        assert_eq!(delete_bore(1, &repo), Err(ServiceError::Internal));
    }
}
