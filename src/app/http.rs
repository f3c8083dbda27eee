use crate::domain::{Animal, AnimalRepository, AnimalUpdate, Visit};
use crate::utils::error::{FleetError, Result};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        FromRequest, FromRequestParts, Path, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub type SharedRepository = Arc<dyn AnimalRepository>;

pub struct ApiError(FleetError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            FleetError::AnimalNotFound { .. } => StatusCode::NOT_FOUND,
            FleetError::DuplicateAnimal { .. } | FleetError::DuplicateVisit { .. } => {
                StatusCode::CONFLICT
            }
            FleetError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        }

        (
            status,
            Json(json!({
                "error": self.0.to_string()
            })),
        )
            .into_response()
    }
}

impl From<FleetError> for ApiError {
    fn from(err: FleetError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(FleetError::InvalidInput {
            field: "body".to_string(),
            reason: rejection.body_text(),
        })
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self(FleetError::InvalidInput {
            field: "path".to_string(),
            reason: rejection.body_text(),
        })
    }
}

/// `Json` extractor whose rejections are reported as `{"error": ...}` with 400.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
struct ApiJson<T>(T);

/// `Path` extractor whose rejections are reported as `{"error": ...}` with 400.
#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(ApiError))]
struct ApiPath<T>(T);

pub fn create_router(repo: SharedRepository) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/animals", get(list_animals).post(create_animal))
        .route(
            "/animals/:id",
            get(get_animal).put(update_animal).delete(delete_animal),
        )
        .route("/animals/:id/visits", get(list_visits))
        .route("/visits", post(create_visit))
        .with_state(repo)
        .layer(TraceLayer::new_for_http())
}

/// Serves `repo` on `listener` until `shutdown` resolves; in-flight requests are drained.
pub async fn serve<F>(listener: TcpListener, repo: SharedRepository, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_router(repo);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

pub async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

async fn health_check() -> &'static str {
    "OK"
}

async fn list_animals(State(repo): State<SharedRepository>) -> Json<Vec<Animal>> {
    Json(repo.list_animals().await)
}

async fn get_animal(
    State(repo): State<SharedRepository>,
    ApiPath(id): ApiPath<i32>,
) -> std::result::Result<Json<Animal>, ApiError> {
    repo.get_animal(id)
        .await
        .map(Json)
        .ok_or(ApiError(FleetError::AnimalNotFound { id }))
}

async fn create_animal(
    State(repo): State<SharedRepository>,
    ApiJson(animal): ApiJson<Animal>,
) -> std::result::Result<impl IntoResponse, ApiError> {
    let animal = repo.insert_animal(animal).await?;
    tracing::info!("Created animal {}", animal.id);
    let location = format!("/animals/{}", animal.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(animal)))
}

async fn update_animal(
    State(repo): State<SharedRepository>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(update): ApiJson<AnimalUpdate>,
) -> std::result::Result<StatusCode, ApiError> {
    repo.update_animal(id, update)
        .await
        .ok_or(ApiError(FleetError::AnimalNotFound { id }))?;
    tracing::info!("Updated animal {}", id);
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_animal(
    State(repo): State<SharedRepository>,
    ApiPath(id): ApiPath<i32>,
) -> std::result::Result<Json<Animal>, ApiError> {
    let animal = repo
        .remove_animal(id)
        .await
        .ok_or(ApiError(FleetError::AnimalNotFound { id }))?;
    tracing::info!("Deleted animal {}", id);
    Ok(Json(animal))
}

async fn list_visits(
    State(repo): State<SharedRepository>,
    ApiPath(animal_id): ApiPath<i32>,
) -> Json<Vec<Visit>> {
    Json(repo.visits_for(animal_id).await)
}

async fn create_visit(
    State(repo): State<SharedRepository>,
    ApiJson(visit): ApiJson<Visit>,
) -> std::result::Result<impl IntoResponse, ApiError> {
    let visit = repo.insert_visit(visit).await?;
    tracing::info!("Created visit {} for animal {}", visit.id, visit.animal_id);
    let location = format!("/visits/{}", visit.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(visit)))
}
