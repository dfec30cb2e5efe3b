use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::routes::Route;
use crate::types::{Performance, PresentedQuestion, QuizSession};

const STYLE: &str = r#"
body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; }
.progress { background: #eee; height: .5rem; border-radius: .25rem; }
.progress-bar { background: #3b82f6; height: 100%; border-radius: .25rem; }
.option { display: block; margin: .5rem 0; }
.excellent { color: #15803d; } .good { color: #2563eb; }
.notice { background: #fef3c7; padding: .5rem; border-radius: .25rem; }
.average { color: #ca8a04; } .needs-improvement { color: #dc2626; }
"#;

pub const MISSING_ANSWER_NOTICE: &str = "Please select an answer before proceeding.";

fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                main { (content) }
            }
        }
    }
}

/// `resume` is set when the visitor already has an attempt in progress.
pub fn welcome(total_questions: usize, resume: Option<&QuizSession>) -> Markup {
    page(
        "Quiz",
        html! {
            h1 { "Welcome to the Quiz" }
            p { "Answer " (total_questions) " multiple-choice questions and see how you score." }
            @if let Some(session) = resume {
                p {
                    "You are on question " (session.index + 1) " of " (session.total) ". "
                    a href=(Route::Quiz.path()) { "Continue" }
                }
            }
            form method="post" action=(Route::Start.path()) {
                button type="submit" { "Start Quiz" }
            }
        },
    )
}

pub fn question(question: &PresentedQuestion, notice: Option<&str>) -> Markup {
    page(
        "Quiz",
        html! {
            @if let Some(notice) = notice {
                p class="notice" role="alert" { (notice) }
            }
            p class="counter" { "Question " (question.number) " of " (question.total) }
            div class="progress" {
                div class="progress-bar" style={ "width: " (question.progress_percentage()) "%" } {}
            }
            h2 { (question.text) }
            form method="post" action=(Route::Quiz.path()) {
                @for (i, option) in question.options.iter().enumerate() {
                    label class="option" {
                        input type="radio" name="answer" value=(option) required[i == 0];
                        " " (option)
                    }
                }
                button type="submit" { "Submit" }
            }
        },
    )
}

pub fn results(session: &QuizSession) -> Markup {
    let percentage = session.percentage();
    let performance = Performance::from_percentage(percentage);
    page(
        "Quiz Results",
        html! {
            h1 { "Quiz Complete" }
            p class="score" { "You scored " (session.score) " out of " (session.total) }
            p class="percentage" { (percentage) "%" }
            p class=(performance.css_class()) { (performance.message()) }
            form method="post" action=(Route::Restart.path()) {
                button type="submit" { "Restart Quiz" }
            }
        },
    )
}

pub fn not_found() -> Markup {
    page(
        "Page not found",
        html! {
            h1 { "404" }
            p { "Page not found" }
            a href=(Route::Welcome.path()) { "Back to the quiz" }
        },
    )
}
