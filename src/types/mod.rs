use serde::{Deserialize, Serialize};

mod session;
pub use session::*;

/// One multiple-choice question as it appears in the questions file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    #[serde(rename = "question")]
    pub text: String,
    pub options: [String; 4],
    pub correct_answer: String,
}

impl QuestionRecord {
    pub fn get_options(&self) -> Vec<String> {
        self.options.to_vec()
    }

    pub fn is_correct(&self, selected: &str) -> bool {
        selected == self.correct_answer
    }
}

/// Where an attempt stands. `NotStarted` covers missing, expired and
/// tampered sessions alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    NotStarted,
    InProgress,
    Complete,
}

/// A question ready to render: options already shuffled for this view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedQuestion {
    pub text: String,
    pub options: Vec<String>,
    pub number: usize,
    pub total: usize,
}

impl PresentedQuestion {
    pub fn progress_percentage(&self) -> u32 {
        percentage(self.number.saturating_sub(1), self.total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub correct: bool,
    pub complete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Performance {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
}

impl Performance {
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            Performance::Excellent
        } else if percentage >= 60 {
            Performance::Good
        } else if percentage >= 40 {
            Performance::Average
        } else {
            Performance::NeedsImprovement
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Performance::Excellent => "Excellent! Outstanding performance!",
            Performance::Good => "Good job! Well done!",
            Performance::Average => "Not bad! Room for improvement.",
            Performance::NeedsImprovement => "Keep practicing! You'll improve!",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Performance::Excellent => "excellent",
            Performance::Good => "good",
            Performance::Average => "average",
            Performance::NeedsImprovement => "needs-improvement",
        }
    }
}

/// `part / whole` as a percentage, halves rounded to even; zero when `whole`
/// is zero.
pub fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let scaled = part * 100;
    let (quotient, remainder) = (scaled / whole, scaled % whole);
    let rounded = match (remainder * 2).cmp(&whole) {
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal if quotient % 2 == 1 => quotient + 1,
        _ => quotient,
    };
    rounded as u32
}
