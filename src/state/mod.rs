use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rand::Rng;

use crate::error::LoadError;
use crate::token::SessionCodec;
use crate::types::{QuestionRecord, QuizSession};

/// Shared, read-only state handed to every request.
pub struct QuizState {
    pub questions: Vec<QuestionRecord>,
    pub codec: SessionCodec,
    pub max_questions: usize,
}

impl QuizState {
    pub fn new(questions: Vec<QuestionRecord>, codec: SessionCodec, max_questions: usize) -> Self {
        Self {
            questions,
            codec,
            max_questions,
        }
    }

    /// Number of questions one attempt walks through.
    pub fn attempt_size(&self) -> usize {
        if self.max_questions == 0 {
            self.questions.len()
        } else {
            self.questions.len().min(self.max_questions)
        }
    }

    pub fn start_session(&self) -> QuizSession {
        QuizSession::start_shuffled(self.attempt_size(), rand::thread_rng().gen())
    }
}

pub fn load_questions(path: impl AsRef<Path>) -> Result<Vec<QuestionRecord>, LoadError> {
    let json = fs::read_to_string(path)?;
    parse_questions(&json)
}

pub fn parse_questions(json: &str) -> Result<Vec<QuestionRecord>, LoadError> {
    let questions: Vec<QuestionRecord> = serde_json::from_str(json)?;
    if questions.is_empty() {
        return Err(LoadError::Empty);
    }
    for (index, question) in questions.iter().enumerate() {
        validate_question(question).map_err(|reason| LoadError::Invalid { index, reason })?;
    }
    Ok(questions)
}

fn validate_question(question: &QuestionRecord) -> Result<(), String> {
    if question.text.trim().is_empty() {
        return Err("question text is empty".to_string());
    }
    if question.options.iter().any(|option| option.trim().is_empty()) {
        return Err("options must not be blank".to_string());
    }
    let mut seen = HashSet::new();
    for option in &question.options {
        if !seen.insert(option.as_str()) {
            return Err(format!("duplicate option {:?}", option));
        }
    }
    if !question.options.contains(&question.correct_answer) {
        return Err(format!(
            "correct answer {:?} is not one of the options",
            question.correct_answer
        ));
    }
    Ok(())
}

/// Writes the built-in sample set to `path` unless a file is already there.
/// Returns whether a file was written.
pub fn write_sample_questions(path: impl AsRef<Path>) -> Result<bool, LoadError> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(false);
    }
    let json = serde_json::to_string_pretty(&sample_questions())?;
    let temp_path = path.with_extension("tmp.json");
    fs::write(&temp_path, json)?;
    fs::rename(&temp_path, path)?;
    log::info!("Created sample questions file: {}", path.display());
    Ok(true)
}

pub fn sample_questions() -> Vec<QuestionRecord> {
    let sample = |text: &str, options: [&str; 4], correct: &str| QuestionRecord {
        text: text.to_string(),
        options: options.map(String::from),
        correct_answer: correct.to_string(),
    };
    vec![
        sample(
            "What is the capital of France?",
            ["Berlin", "Madrid", "Paris", "Rome"],
            "Paris",
        ),
        sample(
            "Which planet is known as the Red Planet?",
            ["Earth", "Mars", "Jupiter", "Venus"],
            "Mars",
        ),
        sample("What is 7 + 8?", ["12", "14", "15", "16"], "15"),
        sample(
            "Who wrote 'To Kill a Mockingbird'?",
            ["Harper Lee", "Mark Twain", "J.K. Rowling", "Stephen King"],
            "Harper Lee",
        ),
        sample(
            "What is the largest ocean on Earth?",
            ["Atlantic Ocean", "Indian Ocean", "Arctic Ocean", "Pacific Ocean"],
            "Pacific Ocean",
        ),
        sample(
            "What is the chemical symbol for gold?",
            ["Go", "Gd", "Au", "Ag"],
            "Au",
        ),
        sample(
            "In which year did World War II end?",
            ["1944", "1945", "1946", "1947"],
            "1945",
        ),
        sample("What is the smallest prime number?", ["0", "1", "2", "3"], "2"),
    ]
}
