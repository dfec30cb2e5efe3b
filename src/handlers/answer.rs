use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use crate::handlers::{current_session, redirect_clearing_session, redirect_with_session};
use crate::routes::Route;
use crate::state::QuizState;

#[derive(Debug, Deserialize)]
pub struct AnswerForm {
    #[serde(default)]
    pub answer: Option<String>,
}

pub async fn start_quiz(State(state): State<Arc<QuizState>>) -> Response {
    let session = state.start_session();
    log::info!("Starting a new attempt with {} questions", session.total);
    redirect_with_session(&state, &session, Route::Quiz)
}

pub async fn submit_answer(
    State(state): State<Arc<QuizState>>,
    headers: HeaderMap,
    Form(form): Form<AnswerForm>,
) -> Response {
    let Some(mut session) = current_session(&state, &headers) else {
        return Redirect::to(Route::Welcome.path()).into_response();
    };
    if session.is_complete() {
        return Redirect::to(Route::Results.path()).into_response();
    }
    let Some(answer) = form.answer.filter(|a| !a.is_empty()) else {
        // Nothing selected; show the same question again with a notice.
        return Redirect::to(&format!("{}?missing=1", Route::Quiz.path())).into_response();
    };

    let index = session.index;
    let submission = session.submit(&state.questions, &answer);
    log::info!(
        "Answer to question {} was {}",
        index + 1,
        if submission.correct { "correct" } else { "incorrect" }
    );

    let next = if submission.complete {
        log::info!("Attempt finished with {}/{}", session.score, session.total);
        Route::Results
    } else {
        Route::Quiz
    };
    redirect_with_session(&state, &session, next)
}

pub async fn restart_quiz() -> Response {
    log::info!("Restarting quiz");
    redirect_clearing_session(Route::Welcome)
}
