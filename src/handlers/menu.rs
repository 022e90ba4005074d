use askama::Template;
use axum::{
    extract::{Path, State},
    response::Html,
    routing::get,
    Router,
};
use tracing::{debug, instrument};

use crate::error::{ApiError, ApiErrorResponse};
use crate::store::{self, MenuInclude};
use crate::views::MenuTemplate;

use super::{connect, AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/menus/{id}", get(get_menu))
}

#[utoipa::path(
    get,
    path = "/menus/{id}",
    responses(
        (
            status = 200,
            description = "HTML menu page; an unknown id renders an empty page, never a 404",
            body = String,
            content_type = "text/html"
        ),
        (status = 400, description = "Non-numeric id"),
        (status = 500, description = "Database or template failure", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Menu id")
    ),
    tag = "menus"
)]
#[instrument(skip(state))]
pub async fn get_menu(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, ApiError> {
    let conn = &mut connect(&state)?;
    let menu = store::find_menu(conn, id, MenuInclude::Items)?;
    debug!(?menu, "menu detail fetched");

    let page = MenuTemplate { menu }.render()?;
    Ok(Html(page))
}
