use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::{debug, instrument};
use utoipa::ToSchema;

use crate::error::{ApiError, ApiErrorResponse, ValidationErrorsResponse};
use crate::models::RestaurantChangeset;
use crate::store::{self, RestaurantInclude};
use crate::validation::{self, RestaurantPayload};
use crate::views::{RestaurantTemplate, RestaurantsTemplate};

use super::{connect, AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(list_restaurants).post(create_restaurant))
        .route(
            "/restaurants/{id}",
            get(get_restaurant)
                .put(replace_restaurant)
                .patch(patch_restaurant)
                .delete(delete_restaurant),
        )
}

/// Body accepted by the partial-update endpoint. Absent fields keep their
/// stored value; present fields are written exactly as sent, with none of
/// the create/replace checks applied.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PatchRestaurantRequest {
    pub name: Option<String>,
    pub image: Option<String>,
}

#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (
            status = 200,
            description = "HTML list of every restaurant with its menus",
            body = String,
            content_type = "text/html"
        ),
        (status = 500, description = "Database or template failure", body = ApiErrorResponse),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn list_restaurants(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let conn = &mut connect(&state)?;
    let restaurants = store::list_restaurants(conn, RestaurantInclude::Menus)?;

    let page = RestaurantsTemplate { restaurants }.render()?;
    Ok(Html(page))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    responses(
        (
            status = 200,
            description = "HTML detail page; an unknown id renders an empty page, never a 404",
            body = String,
            content_type = "text/html"
        ),
        (status = 400, description = "Non-numeric id"),
        (status = 500, description = "Database or template failure", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Restaurant id")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, ApiError> {
    let conn = &mut connect(&state)?;
    let restaurant = store::find_restaurant(conn, id, RestaurantInclude::MenusWithItems)?;
    debug!(?restaurant, "restaurant detail fetched");

    let page = RestaurantTemplate { restaurant }.render()?;
    Ok(Html(page))
}

#[utoipa::path(
    post,
    path = "/restaurants",
    request_body = RestaurantPayload,
    responses(
        (status = 201, description = "Restaurant created"),
        (
            status = 400,
            description = "Validation failed; body lists every violated rule",
            body = ValidationErrorsResponse
        ),
        (status = 500, description = "Database failure", body = ApiErrorResponse),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn create_restaurant(
    State(state): State<AppState>,
    Json(payload): Json<RestaurantPayload>,
) -> Result<StatusCode, ApiError> {
    let record = validation::validate_restaurant(&payload).map_err(ApiError::Validation)?;

    let conn = &mut connect(&state)?;
    store::create_restaurant(conn, &record)?;
    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    put,
    path = "/restaurants/{id}",
    request_body = RestaurantPayload,
    responses(
        (status = 200, description = "Restaurant replaced"),
        (
            status = 400,
            description = "Validation failed; body lists every violated rule",
            body = ValidationErrorsResponse
        ),
        (status = 500, description = "Unknown id or database failure", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Restaurant id")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn replace_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<RestaurantPayload>,
) -> Result<StatusCode, ApiError> {
    let record = validation::validate_restaurant(&payload).map_err(ApiError::Validation)?;

    let conn = &mut connect(&state)?;
    let changes = RestaurantChangeset {
        name: Some(record.name),
        image: Some(record.image),
    };
    store::update_restaurant(conn, id, &changes)?.ok_or(ApiError::AbsentRecord)?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    patch,
    path = "/restaurants/{id}",
    request_body = PatchRestaurantRequest,
    responses(
        (status = 200, description = "Present fields written as sent, no validation"),
        (status = 500, description = "Unknown id or database failure", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Restaurant id")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn patch_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<PatchRestaurantRequest>,
) -> Result<StatusCode, ApiError> {
    let conn = &mut connect(&state)?;
    let changes = RestaurantChangeset {
        name: payload.name,
        image: payload.image,
    };
    store::update_restaurant(conn, id, &changes)?.ok_or(ApiError::AbsentRecord)?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    responses(
        (status = 200, description = "Restaurant gone; deleting an unknown id also succeeds"),
        (status = 500, description = "Database failure", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Restaurant id")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let conn = &mut connect(&state)?;
    store::delete_restaurant(conn, id)?;
    Ok(StatusCode::OK)
}
