use actix_multipart::form::MultipartForm;
use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::meal::MealUpload, errors::AppError, AppState};

#[instrument(skip(state, form))]
pub async fn create_meal(
    state: web::Data<AppState>,
    form: MultipartForm<MealUpload>,
) -> Result<impl Responder, AppError> {
    let draft = form.into_inner().into_draft().await?;

    let meal = state.meal_service.create_meal(draft).await?;

    Ok(HttpResponse::Created().json(meal))
}

#[instrument(skip(state))]
pub async fn get_all_meals(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let meals = state.meal_service.list_meals().await?;

    Ok(HttpResponse::Ok().json(meals))
}

#[instrument(skip(meal_slug, state))]
pub async fn get_meal(
    meal_slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    match state.meal_service.get_meal(&meal_slug).await? {
        Some(meal) => Ok(HttpResponse::Ok().json(meal)),
        None => Err(AppError::NotFound("Meal not found".into())),
    }
}

#[instrument(skip(meal_slug, state))]
pub async fn delete_meal(
    meal_slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let deleted = state.meal_service.delete_meal(&meal_slug).await?;

    if deleted {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(AppError::NotFound("Meal not found".into()))
    }
}
