use crate::errors::AppError;
use crate::models::{DiaryEntry, EntryPayload, MAX_CONTENT_CHARS};
use crate::state::AppState;
use crate::ui;
use axum::{
    extract::{Path, State},
    http::{header, Method, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::{Local, NaiveDate};

pub async fn index() -> Html<&'static str> {
    Html(ui::INDEX_HTML)
}

pub async fn list_entries(
    State(state): State<AppState>,
) -> Result<Json<Vec<DiaryEntry>>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(store.list()?))
}

/// Writes today's entry. Content is validated first; an existing entry for
/// the current date is updated in place (200), otherwise a new one is
/// created (201).
pub async fn create_entry(
    State(state): State<AppState>,
    payload: Option<Json<EntryPayload>>,
) -> Result<Response, AppError> {
    let content = validate_content(submitted_content(payload))
        .map_err(|_| AppError::bad_request("Content is required and max 140 chars"))?;

    let date = today();
    let store = state.store.lock().await;
    let response = match store.find_by_date(date)? {
        Some(existing) => {
            let updated = store.update_content(existing.id, &content)?;
            (StatusCode::OK, Json(updated)).into_response()
        }
        None => {
            let created = store.create(date, &content)?;
            (StatusCode::CREATED, Json(created)).into_response()
        }
    };
    Ok(response)
}

/// Removes today's entry if one exists; 204 either way.
pub async fn delete_today(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let store = state.store.lock().await;
    store.delete_by_date(today())?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn collection_method_not_allowed(method: Method) -> Response {
    method_not_allowed(method, "GET,POST,PUT,DELETE")
}

pub async fn fetch_entry(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<DiaryEntry>, AppError> {
    let id = parse_id(&raw_id)?;
    let store = state.store.lock().await;
    let entry = store
        .find_by_id(id)?
        .ok_or_else(|| AppError::not_found("Diary not found"))?;
    Ok(Json(entry))
}

/// Updates by id without an existence pre-check; a missing row surfaces as
/// the store's failure, not a 404.
pub async fn update_entry(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Option<Json<EntryPayload>>,
) -> Result<Json<DiaryEntry>, AppError> {
    let id = parse_id(&raw_id)?;
    let content = validate_content(submitted_content(payload)).map_err(|err| match err {
        ContentError::Missing => AppError::bad_request("Content is required"),
        ContentError::TooLong => AppError::bad_request("Content is required and max 140 chars"),
    })?;

    let store = state.store.lock().await;
    let updated = store.update_content(id, &content)?;
    Ok(Json(updated))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&raw_id)?;
    let store = state.store.lock().await;
    store.delete_by_id(id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn item_method_not_allowed(method: Method) -> Response {
    method_not_allowed(method, "PUT,DELETE")
}

#[derive(Debug, PartialEq)]
enum ContentError {
    Missing,
    TooLong,
}

fn submitted_content(payload: Option<Json<EntryPayload>>) -> Option<String> {
    payload.and_then(|Json(body)| body.content)
}

fn validate_content(content: Option<String>) -> Result<String, ContentError> {
    let content = content
        .filter(|value| !value.is_empty())
        .ok_or(ContentError::Missing)?;
    if content.chars().count() > MAX_CONTENT_CHARS {
        return Err(ContentError::TooLong);
    }
    Ok(content)
}

fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse().map_err(|_| AppError::bad_request("Invalid id"))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn method_not_allowed(method: Method, allow: &'static str) -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, allow)],
        format!("Method {method} Not Allowed"),
    )
        .into_response()
}
