//! JSON REST handlers for homes.
//!
//! Each handler decodes its input, validates the path id, calls
//! [`HomeService`](homebase_app::services::home_service::HomeService) and
//! encodes the result as an envelope. Failures at any step short-circuit
//! into the failure envelope via [`ApiError`].

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use homebase_app::ports::HomeRepository;
use homebase_domain::home::NewHome;
use homebase_domain::id::HomeId;

use crate::dto::{HomeEnvelope, HomeRequest, HomesEnvelope};
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the single-home endpoints.
pub enum HomeResponse {
    Ok(Json<HomeEnvelope>),
}

impl IntoResponse for HomeResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<HomesEnvelope>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

type HomeError = ApiError<HomeEnvelope>;

/// `GET /homes`
pub async fn list<R>(
    State(state): State<AppState<R>>,
) -> Result<ListResponse, ApiError<HomesEnvelope>>
where
    R: HomeRepository + Send + Sync + 'static,
{
    let homes = state.home_service.list_homes().await?;
    Ok(ListResponse::Ok(Json(HomesEnvelope::ok(homes))))
}

/// `GET /homes/{id}`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<HomeResponse, HomeError>
where
    R: HomeRepository + Send + Sync + 'static,
{
    let Path(id) = id?;
    let home_id = HomeId::parse(&id)?;
    let home = state.home_service.get_home(home_id).await?;
    Ok(HomeResponse::Ok(Json(HomeEnvelope::ok(home))))
}

/// `POST /homes`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    body: Result<Json<HomeRequest>, JsonRejection>,
) -> Result<HomeResponse, HomeError>
where
    R: HomeRepository + Send + Sync + 'static,
{
    let Json(req) = body?;
    let created = state.home_service.create_home(req.into()).await?;
    Ok(HomeResponse::Ok(Json(HomeEnvelope::ok(created))))
}

/// `PUT /homes/{id}`
pub async fn update<R>(
    State(state): State<AppState<R>>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Json<HomeRequest>, JsonRejection>,
) -> Result<HomeResponse, HomeError>
where
    R: HomeRepository + Send + Sync + 'static,
{
    let Json(req) = body?;
    let Path(id) = id?;
    let home_id = HomeId::parse(&id)?;
    let home = NewHome::from(req).with_id(home_id);
    let updated = state.home_service.update_home(home).await?;
    Ok(HomeResponse::Ok(Json(HomeEnvelope::ok(updated))))
}

/// `DELETE /homes/{id}`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<HomeResponse, HomeError>
where
    R: HomeRepository + Send + Sync + 'static,
{
    let Path(id) = id?;
    let home_id = HomeId::parse(&id)?;
    state.home_service.delete_home(home_id).await?;
    Ok(HomeResponse::Ok(Json(HomeEnvelope::empty())))
}
