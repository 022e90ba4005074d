use askama::Template;
use axum::{extract::State, response::Html, routing::get, Router};
use tracing::instrument;

use crate::error::{ApiError, ApiErrorResponse};
use crate::store;
use crate::views::MenuItemsTemplate;

use super::{connect, AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/items", get(list_menu_items))
}

#[utoipa::path(
    get,
    path = "/items",
    responses(
        (
            status = 200,
            description = "HTML list of every menu item across all menus",
            body = String,
            content_type = "text/html"
        ),
        (status = 500, description = "Database or template failure", body = ApiErrorResponse),
    ),
    tag = "items"
)]
#[instrument(skip(state))]
pub async fn list_menu_items(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let conn = &mut connect(&state)?;
    let items = store::list_menu_items(conn)?;

    let page = MenuItemsTemplate { items }.render()?;
    Ok(Html(page))
}
