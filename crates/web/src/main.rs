use anyhow::Context;
use axum::Router;
use storage::Dataset;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod state;

use config::Config;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::locations::handlers::list_locations,
        features::races::handlers::list_races,
        features::races::handlers::get_race_results,
        features::athletes::handlers::list_athletes,
        features::athletes::handlers::get_athlete,
        features::athletes::handlers::get_athlete_historical,
        features::search::handlers::search,
    ),
    components(
        schemas(
            storage::models::Season,
            storage::models::Discipline,
            storage::models::Location,
            storage::models::Course,
            storage::models::Coordinates,
            storage::models::Race,
            storage::models::RaceStatus,
            storage::models::RaceResult,
            storage::models::Standing,
            storage::models::DisciplineRank,
            storage::models::DisciplineStats,
            storage::dto::athlete::Competitor,
            storage::dto::athlete::AthleteDetail,
            storage::dto::athlete::CurrentSeasonStats,
            storage::dto::stats::HistoricalData,
            storage::dto::stats::HistoricalStats,
            storage::dto::stats::StatsBasis,
            storage::dto::stats::DisciplinePerformance,
            storage::dto::search::SearchHit,
            storage::dto::search::SearchKind,
        )
    ),
    tags(
        (name = "locations", description = "World Cup venue endpoints"),
        (name = "races", description = "Race calendar and result endpoints"),
        (name = "athletes", description = "Standings, athlete detail and historical statistics"),
        (name = "search", description = "Cross-entity search"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .init();

    tracing::info!("Starting World Cup data API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let data = match &config.dataset_path {
        Some(path) => {
            tracing::info!(path, "Loading dataset override");
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read dataset at {path}"))?;
            Dataset::from_json(&json).context("Failed to parse dataset override")?
        }
        None => Dataset::bundled().context("Failed to parse bundled dataset")?,
    };
    tracing::info!("Dataset loaded");

    let state = AppState::new(data);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api/locations", features::locations::routes::routes())
        .nest("/api/races", features::races::routes::routes())
        .nest("/api/athletes", features::athletes::routes::routes())
        .nest("/api/search", features::search::routes::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
