pub mod menu;
pub mod menu_item;
pub mod restaurant;

// Re-export routers for easier importing
pub use menu::router as menu_router;
pub use menu_item::router as menu_item_router;
pub use restaurant::router as restaurant_router;

use axum::Router;
use diesel::SqliteConnection;
use utoipa::OpenApi;

use crate::error::ApiError;
use crate::establish_connection;

#[derive(Clone)]
pub struct AppState {
    pub database_url: String,
}

// Shared utility functions
fn connect(state: &AppState) -> Result<SqliteConnection, ApiError> {
    Ok(establish_connection(&state.database_url)?)
}

/// Assembles every resource router onto the shared state. Swagger UI and
/// static assets are layered on top of this by the binary.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(restaurant_router())
        .merge(menu_router())
        .merge(menu_item_router())
        .with_state(state)
}

#[derive(OpenApi)]
#[openapi(
    paths(
        restaurant::list_restaurants,
        restaurant::get_restaurant,
        restaurant::create_restaurant,
        restaurant::replace_restaurant,
        restaurant::patch_restaurant,
        restaurant::delete_restaurant,
        menu::get_menu,
        menu_item::list_menu_items,
    ),
    components(
        schemas(
            crate::validation::RestaurantPayload,
            crate::validation::FieldError,
            restaurant::PatchRestaurantRequest,
            crate::error::ValidationErrorsResponse,
            crate::error::ApiErrorResponse
        )
    ),
    tags(
        (name = "restaurants", description = "Restaurant management endpoints"),
        (name = "menus", description = "Menu browsing endpoints"),
        (name = "items", description = "Menu item browsing endpoints")
    ),
    info(
        title = "Menuboard",
        description = "Restaurants, menus, and menu items over HTML and JSON",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
