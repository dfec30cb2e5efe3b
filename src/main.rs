use std::error::Error;
use std::sync::Arc;

use quiz_web::{
    build_router, load_questions, write_sample_questions, Config, QuizState, Route, SessionCodec,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    pretty_env_logger::init();
    log::info!("Starting quiz server...");

    let config = Config::from_env()?;

    if config.debug {
        write_sample_questions(&config.questions_file)?;
    }

    // Refuse to serve anything if the question file is missing or invalid
    let questions = match load_questions(&config.questions_file) {
        Ok(questions) => questions,
        Err(e) => {
            log::error!(
                "Failed to load questions from {}: {}",
                config.questions_file.display(),
                e
            );
            return Err(e.into());
        }
    };
    log::info!("Loaded {} questions", questions.len());

    let state = Arc::new(QuizState::new(
        questions,
        SessionCodec::new(config.secret_key.clone(), config.session_ttl_secs),
        config.max_questions,
    ));
    log::info!("Each attempt asks {} questions", state.attempt_size());

    let router = build_router(state);
    let listener = TcpListener::bind(config.bind_addr()).await?;
    log::info!("Listening on http://{}", listener.local_addr()?);
    for route in Route::ALL {
        log::debug!("{:<9} {}", route.path(), route.description());
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Quiz server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for ctrl-c: {}", e);
    }
}
