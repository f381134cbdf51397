use axum::{
    Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    middleware,
    response::{IntoResponse, Json},
    routing::get,
};
use application::{Provisioning, UpdateTag};
use domain::{ItemInput, ListParams, PopulatedTag, Tag, TagId, TagUid};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{auth::require_auth, error::ApiError, state::AppState};

type ApiResult<T> = Result<T, ApiError>;

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let tags = Router::new()
        .route("/tags", get(list_tags))
        .route("/tags/uid/{uid}", get(get_or_create_by_uid))
        .route("/tags/{id}", get(get_tag).put(update_tag).delete(delete_tag))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/health", get(health))
        .merge(tags)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn list_tags(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> ApiResult<Json<Vec<Tag>>> {
    let Query(params) = params?;
    let query = params.translate()?;

    let tags = state.tags.list(&query).await?;
    Ok(Json(tags))
}

async fn get_tag(
    State(state): State<Arc<AppState>>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Tag>> {
    let id = parse_id(id?)?;

    let tag = state.tags.get(&id).await?;
    Ok(Json(tag))
}

async fn get_or_create_by_uid(
    State(state): State<Arc<AppState>>,
    uid: Result<Path<String>, PathRejection>,
) -> ApiResult<(StatusCode, Json<Tag>)> {
    let Path(raw) = uid?;
    let uid = TagUid::new(raw)?;

    let (tag, provisioning) = state.tags.get_or_create(&uid).await?;
    let status = match provisioning {
        Provisioning::Created => StatusCode::CREATED,
        Provisioning::Existing => StatusCode::OK,
    };

    Ok((status, Json(tag)))
}

/// Body of `PUT /tags/{id}`. `item` may be an id string, an object carrying
/// `id` or `_id`, or null/absent to clear the reference.
#[derive(Debug, Deserialize)]
pub struct UpdateTagRequest {
    #[serde(rename = "type")]
    pub tag_type: String,
    #[serde(default)]
    pub item: Option<ItemInput>,
}

async fn update_tag(
    State(state): State<Arc<AppState>>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Json<UpdateTagRequest>, JsonRejection>,
) -> ApiResult<Json<PopulatedTag>> {
    let id = parse_id(id?)?;
    let Json(body) = body?;
    let update = UpdateTag::from_raw(&body.tag_type, body.item)?;

    let tag = state.tags.update(&id, update).await?;
    Ok(Json(tag))
}

async fn delete_tag(
    State(state): State<Arc<AppState>>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = parse_id(id?)?;

    state.tags.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn parse_id(Path(raw): Path<String>) -> ApiResult<TagId> {
    Ok(TagId::parse(&raw)?)
}
