use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use crate::handlers::current_session;
use crate::routes::Route;
use crate::state::QuizState;
use crate::types::QuizPhase;
use crate::views;

#[derive(Debug, Deserialize)]
pub struct QuestionQuery {
    /// Set when the previous submission had no option selected.
    #[serde(default)]
    pub missing: Option<String>,
}

pub async fn welcome(State(state): State<Arc<QuizState>>, headers: HeaderMap) -> Html<String> {
    let resume = current_session(&state, &headers).filter(|s| s.phase() == QuizPhase::InProgress);
    Html(views::welcome(state.attempt_size(), resume.as_ref()).into_string())
}

pub async fn show_question(
    State(state): State<Arc<QuizState>>,
    Query(query): Query<QuestionQuery>,
    headers: HeaderMap,
) -> Response {
    let Some(session) = current_session(&state, &headers) else {
        return Redirect::to(Route::Welcome.path()).into_response();
    };
    let presented = session.current_question(&state.questions, &mut rand::thread_rng());
    match presented {
        Some(question) => {
            let notice = query.missing.is_some().then_some(views::MISSING_ANSWER_NOTICE);
            Html(views::question(&question, notice).into_string()).into_response()
        }
        None => Redirect::to(Route::Results.path()).into_response(),
    }
}

pub async fn show_results(State(state): State<Arc<QuizState>>, headers: HeaderMap) -> Response {
    match current_session(&state, &headers) {
        None => Redirect::to(Route::Welcome.path()).into_response(),
        Some(session) if !session.is_complete() => {
            Redirect::to(Route::Quiz.path()).into_response()
        }
        Some(session) => Html(views::results(&session).into_string()).into_response(),
    }
}
