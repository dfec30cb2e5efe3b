use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::{percentage, PresentedQuestion, QuestionRecord, QuizPhase, Submission};

/// Progress of one attempt. Travels with the client between requests; the
/// server never keeps a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSession {
    pub index: usize,
    pub score: usize,
    pub total: usize,
    /// Seeds the question order of this attempt. `None` asks questions in
    /// file order.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl QuizSession {
    pub fn start(total: usize) -> Self {
        Self {
            index: 0,
            score: 0,
            total,
            seed: None,
        }
    }

    pub fn start_shuffled(total: usize, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::start(total)
        }
    }

    pub fn phase(&self) -> QuizPhase {
        if self.index >= self.total {
            QuizPhase::Complete
        } else {
            QuizPhase::InProgress
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase() == QuizPhase::Complete
    }

    /// Shrinks `total` when the loaded question set is smaller than what the
    /// session was started with.
    pub fn clamp_total(&mut self, available: usize) {
        self.total = self.total.min(available);
    }

    /// Positions in the question bank this attempt asks, in asking order.
    /// Drawn from the whole bank, then cut to `total`.
    pub fn question_order(&self, available: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..available).collect();
        if let Some(seed) = self.seed {
            order.shuffle(&mut StdRng::seed_from_u64(seed));
        }
        order.truncate(self.total);
        order
    }

    /// The record at `index`, or `None` once the attempt is complete.
    pub fn current_record<'a>(&self, questions: &'a [QuestionRecord]) -> Option<&'a QuestionRecord> {
        if self.is_complete() {
            return None;
        }
        let position = *self.question_order(questions.len()).get(self.index)?;
        questions.get(position)
    }

    pub fn current_question<R: Rng + ?Sized>(
        &self,
        questions: &[QuestionRecord],
        rng: &mut R,
    ) -> Option<PresentedQuestion> {
        let record = self.current_record(questions)?;
        let mut options = record.get_options();
        options.shuffle(rng);
        Some(PresentedQuestion {
            text: record.text.clone(),
            options,
            number: self.index + 1,
            total: self.total,
        })
    }

    /// Scores `selected` against the current question and moves on by one.
    /// Does nothing once the attempt is complete.
    pub fn submit(&mut self, questions: &[QuestionRecord], selected: &str) -> Submission {
        if self.is_complete() {
            return Submission {
                correct: false,
                complete: true,
            };
        }
        let Some(record) = self.current_record(questions) else {
            self.index = self.total;
            return Submission {
                correct: false,
                complete: true,
            };
        };

        let correct = record.is_correct(selected);
        if correct {
            self.score += 1;
        }
        self.index += 1;

        Submission {
            correct,
            complete: self.is_complete(),
        }
    }

    pub fn percentage(&self) -> u32 {
        percentage(self.score, self.total)
    }
}
