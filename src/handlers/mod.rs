use std::sync::Arc;

use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::Router;

use crate::routes::Route;
use crate::state::QuizState;
use crate::token::{cleared_cookie, read_session_cookie, session_cookie};
use crate::types::QuizSession;
use crate::views;

mod answer;
mod pages;

pub use answer::*;
pub use pages::*;

pub fn build_router(state: Arc<QuizState>) -> Router {
    Router::new()
        .route(Route::Welcome.path(), get(welcome))
        .route(Route::Start.path(), post(start_quiz))
        .route(Route::Quiz.path(), get(show_question).post(submit_answer))
        .route(Route::Results.path(), get(show_results))
        .route(Route::Restart.path(), post(restart_quiz))
        .fallback(not_found)
        .with_state(state)
}

/// The caller's session, or `None` when the cookie is missing, expired or
/// fails verification.
pub(crate) fn current_session(state: &QuizState, headers: &HeaderMap) -> Option<QuizSession> {
    let token = read_session_cookie(headers)?;
    match state.codec.decode(token) {
        Ok(mut session) => {
            session.clamp_total(state.questions.len());
            Some(session)
        }
        Err(e) => {
            log::warn!("Rejected session cookie: {}", e);
            None
        }
    }
}

/// Redirects to `route` while storing `session` in the cookie.
pub(crate) fn redirect_with_session(state: &QuizState, session: &QuizSession, route: Route) -> Response {
    match state.codec.encode(session) {
        Ok(token) => (
            [(SET_COOKIE, session_cookie(&token, state.codec.ttl_secs()))],
            Redirect::to(route.path()),
        )
            .into_response(),
        Err(e) => {
            log::error!("Failed to sign session: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub(crate) fn redirect_clearing_session(route: Route) -> Response {
    ([(SET_COOKIE, cleared_cookie())], Redirect::to(route.path())).into_response()
}

pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(views::not_found().into_string()))
}
