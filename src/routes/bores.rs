use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde::Serialize;

use crate::dto::bores::BoreDto;
use crate::forms::bores::BoreForm;
use crate::repository::DieselRepository;
use crate::routes::{BORE_NOT_FOUND_MESSAGE, REQUIRED_FIELDS_MESSAGE, internal_error, message};
use crate::services::bores::{
    create_bore as create_bore_service, delete_bore as delete_bore_service,
    list_bores as list_bores_service, show_random_bore as show_random_bore_service,
    update_bore as update_bore_service,
};
use crate::services::{ServiceError, ServiceResult};

const NO_BORES_MESSAGE: &str = "No Bore items found";

#[derive(Serialize)]
struct CreatedBore {
    message: &'static str,
    #[serde(rename = "newBore")]
    new_bore: BoreDto,
}

#[derive(Serialize)]
struct UpdatedBore {
    message: &'static str,
    #[serde(rename = "updatedBore")]
    updated_bore: BoreDto,
}

#[derive(Serialize)]
struct DeletedBore {
    message: &'static str,
    #[serde(rename = "deletedBore")]
    deleted_bore: BoreDto,
}

/// Run a blocking service call on the actix thread pool.
async fn run_blocking<T, F>(repo: &web::Data<DieselRepository>, f: F) -> ServiceResult<T>
where
    T: Send + 'static,
    F: FnOnce(&DieselRepository) -> ServiceResult<T> + Send + 'static,
{
    let repo = repo.get_ref().clone();
    match web::block(move || f(&repo)).await {
        Ok(result) => result,
        Err(e) => {
            log::error!("Blocking task failed: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[post("/thing")]
pub async fn create_thing(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<BoreForm>,
) -> impl Responder {
    match run_blocking(&repo, move |repo| create_bore_service(form, repo)).await {
        Ok(bore) => HttpResponse::Created().json(CreatedBore {
            message: "Bore item created",
            new_bore: bore,
        }),
        Err(ServiceError::InvalidInput(_)) => {
            HttpResponse::BadRequest().json(message(REQUIRED_FIELDS_MESSAGE))
        }
        Err(_) => internal_error(),
    }
}

#[get("/thing")]
pub async fn random_thing(repo: web::Data<DieselRepository>) -> impl Responder {
    match run_blocking(&repo, |repo| show_random_bore_service(repo)).await {
        Ok(bore) => HttpResponse::Ok().json(bore),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().json(message(NO_BORES_MESSAGE)),
        Err(_) => internal_error(),
    }
}

#[get("/things")]
pub async fn list_things(repo: web::Data<DieselRepository>) -> impl Responder {
    match run_blocking(&repo, |repo| list_bores_service(repo)).await {
        Ok(bores) => HttpResponse::Ok().json(bores),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().json(message(NO_BORES_MESSAGE)),
        Err(_) => internal_error(),
    }
}

#[put("/thing/{bore_id}")]
pub async fn update_thing(
    bore_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<BoreForm>,
) -> impl Responder {
    let bore_id = bore_id.into_inner();

    match run_blocking(&repo, move |repo| update_bore_service(bore_id, form, repo)).await {
        Ok(bore) => HttpResponse::Ok().json(UpdatedBore {
            message: "Bore item updated",
            updated_bore: bore,
        }),
        Err(ServiceError::InvalidInput(_)) => {
            HttpResponse::BadRequest().json(message(REQUIRED_FIELDS_MESSAGE))
        }
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(message(BORE_NOT_FOUND_MESSAGE))
        }
        Err(ServiceError::Internal) => internal_error(),
    }
}

#[delete("/thing/{bore_id}")]
pub async fn delete_thing(
    bore_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let bore_id = bore_id.into_inner();

    match run_blocking(&repo, move |repo| delete_bore_service(bore_id, repo)).await {
        Ok(bore) => HttpResponse::Ok().json(DeletedBore {
            message: "Bore item deleted",
            deleted_bore: bore,
        }),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(message(BORE_NOT_FOUND_MESSAGE))
        }
        Err(_) => internal_error(),
    }
}
