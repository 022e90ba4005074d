use axum::Router;
use dotenvy::dotenv;
use tower_http::services::ServeDir;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use menuboard::handlers::{app, ApiDoc, AppState};
use menuboard::{db, establish_connection, DEFAULT_DATABASE_URL, DEFAULT_PORT};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
    let port: u16 = match std::env::var("PORT") {
        Ok(raw) => raw.parse()?,
        Err(_) => DEFAULT_PORT,
    };

    {
        let mut conn = establish_connection(&database_url)?;
        db::init(&mut conn)?;
    }

    let state = AppState { database_url };

    let router = Router::new()
        .merge(app(state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(ServeDir::new("public"));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Menuboard listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
