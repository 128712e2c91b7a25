use crate::app::error::WatchlistError;
use crate::domain::movie::{Movie, MovieInput};
use crate::domain::page::MoviePage;
use crate::transport::http::handlers::common::parse_page_param;
use crate::transport::http::types::{
    AppState, DeleteResponse, ErrorResponse, MoviePayload, PageQuery,
};
use axum::body::Bytes;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    get,
    path = "/movies",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of the watchlist, newest first", body = MoviePage)
    )
)]
pub async fn list_movies_handler(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Json<MoviePage> {
    let page = match query {
        Ok(Query(q)) => parse_page_param(q.page.as_deref()),
        Err(_) => 1,
    };
    Json(state.service.list_page(page).await)
}

#[utoipa::path(
    post,
    path = "/movies",
    request_body = MoviePayload,
    responses(
        (status = 201, description = "Movie created", body = Movie),
        (status = 422, description = "A field failed validation", body = ErrorResponse),
        (status = 500, description = "The data file could not be written", body = ErrorResponse)
    )
)]
pub async fn create_movie_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Movie>), WatchlistError> {
    let input = MovieInput::from_body(&body);
    let movie = state.service.create(&input).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

#[utoipa::path(
    put,
    path = "/movies/{id}",
    params(
        ("id" = String, Path, description = "Movie id")
    ),
    request_body = MoviePayload,
    responses(
        (status = 200, description = "Movie replaced", body = Movie),
        (status = 404, description = "No movie with this id", body = ErrorResponse),
        (status = 422, description = "A field failed validation", body = ErrorResponse),
        (status = 500, description = "The data file could not be written", body = ErrorResponse)
    )
)]
pub async fn update_movie_handler(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Json<Movie>, WatchlistError> {
    let id = movie_id(id)?;
    let input = MovieInput::from_body(&body);
    let movie = state.service.update(&id, &input).await?;
    Ok(Json(movie))
}

#[utoipa::path(
    delete,
    path = "/movies/{id}",
    params(
        ("id" = String, Path, description = "Movie id")
    ),
    responses(
        (status = 200, description = "Movie removed", body = DeleteResponse),
        (status = 404, description = "No movie with this id", body = ErrorResponse),
        (status = 500, description = "The data file could not be written", body = ErrorResponse)
    )
)]
pub async fn delete_movie_handler(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<DeleteResponse>, WatchlistError> {
    let id = movie_id(id)?;
    state.service.delete(&id).await?;
    Ok(Json(DeleteResponse { ok: true }))
}

/// An id segment that does not decode to UTF-8 cannot name a stored movie.
fn movie_id(id: Result<Path<String>, PathRejection>) -> Result<String, WatchlistError> {
    id.map(|Path(id)| id)
        .map_err(|_| WatchlistError::MovieNotFound)
}
