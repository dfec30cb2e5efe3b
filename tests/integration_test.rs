#[cfg(test)]
mod tests {
    use quiz_web::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::error::Error;
    use std::io::Write;
    use tempfile::NamedTempFile;

    // Helper function to create a test question
    fn create_test_question(text: &str, correct: &str) -> QuestionRecord {
        QuestionRecord {
            text: text.to_string(),
            options: ["Paris", "London", "Berlin", "Madrid"].map(String::from),
            correct_answer: correct.to_string(),
        }
    }

    fn three_questions() -> Vec<QuestionRecord> {
        vec![
            create_test_question("Capital of France?", "Paris"),
            create_test_question("Capital of England?", "London"),
            create_test_question("Capital of Germany?", "Berlin"),
        ]
    }

    // Helper function to create a temporary JSON file with the given contents
    fn create_test_json(contents: &str) -> Result<NamedTempFile, Box<dyn Error>> {
        let mut temp_file = NamedTempFile::new()?;
        write!(temp_file, "{}", contents)?;
        Ok(temp_file)
    }

    fn test_state(questions: Vec<QuestionRecord>, max_questions: usize) -> QuizState {
        QuizState::new(
            questions,
            SessionCodec::new(b"secret".to_vec(), 60),
            max_questions,
        )
    }

    #[test]
    fn test_question_get_options() {
        let question = create_test_question("Capital of France?", "Paris");
        let options = question.get_options();

        assert_eq!(options, vec!["Paris", "London", "Berlin", "Madrid"]);
        assert!(question.is_correct("Paris"));
        assert!(!question.is_correct("paris"));
    }

    #[test]
    fn test_load_questions() -> Result<(), Box<dyn Error>> {
        let file = create_test_json(
            r#"[
                {"question": "What is 7 + 8?", "options": ["12", "14", "15", "16"], "correct_answer": "15"},
                {"question": "Smallest prime?", "options": ["0", "1", "2", "3"], "correct_answer": "2"}
            ]"#,
        )?;
        let questions = load_questions(file.path())?;

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].text, "What is 7 + 8?");
        assert_eq!(questions[1].correct_answer, "2");
        Ok(())
    }

    #[test]
    fn test_load_questions_missing_file() {
        let result = load_questions("/nonexistent/questions.json");
        assert!(matches!(result, Err(LoadError::IoError(_))));
    }

    #[test]
    fn test_load_questions_rejects_malformed_json() {
        let missing_field = r#"[{"question": "Q?", "options": ["a", "b", "c", "d"]}]"#;
        assert!(matches!(
            parse_questions(missing_field),
            Err(LoadError::ParseError(_))
        ));

        let three_options = r#"[{"question": "Q?", "options": ["a", "b", "c"], "correct_answer": "a"}]"#;
        assert!(matches!(
            parse_questions(three_options),
            Err(LoadError::ParseError(_))
        ));

        assert!(matches!(
            parse_questions("not json"),
            Err(LoadError::ParseError(_))
        ));
    }

    #[test]
    fn test_load_questions_rejects_invalid_records() {
        let wrong_answer = r#"[
            {"question": "Q1?", "options": ["a", "b", "c", "d"], "correct_answer": "a"},
            {"question": "Q2?", "options": ["a", "b", "c", "d"], "correct_answer": "e"}
        ]"#;
        match parse_questions(wrong_answer) {
            Err(LoadError::Invalid { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected invalid record, got {:?}", other),
        }

        let duplicate = r#"[{"question": "Q?", "options": ["a", "a", "c", "d"], "correct_answer": "a"}]"#;
        assert!(matches!(
            parse_questions(duplicate),
            Err(LoadError::Invalid { index: 0, .. })
        ));

        let blank = r#"[{"question": "  ", "options": ["a", "b", "c", "d"], "correct_answer": "a"}]"#;
        assert!(matches!(
            parse_questions(blank),
            Err(LoadError::Invalid { index: 0, .. })
        ));

        assert!(matches!(parse_questions("[]"), Err(LoadError::Empty)));
    }

    #[test]
    fn test_load_questions_rejects_blank_options() {
        let empty_option = r#"[{"question": "Pick the blank", "options": ["", "a", "b", "c"], "correct_answer": ""}]"#;
        assert!(matches!(
            parse_questions(empty_option),
            Err(LoadError::Invalid { index: 0, .. })
        ));

        let whitespace_option = r#"[{"question": "Q?", "options": ["a", "   ", "b", "c"], "correct_answer": "a"}]"#;
        assert!(matches!(
            parse_questions(whitespace_option),
            Err(LoadError::Invalid { index: 0, .. })
        ));
    }

    #[test]
    fn test_sample_questions_are_valid() -> Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("questions.json");

        assert!(write_sample_questions(&path)?);
        assert!(!write_sample_questions(&path)?);

        let questions = load_questions(&path)?;
        assert_eq!(questions, sample_questions());
        Ok(())
    }

    #[test]
    fn test_start_resets_progress() {
        let session = QuizSession::start(3);

        assert_eq!(session.index, 0);
        assert_eq!(session.score, 0);
        assert_eq!(session.total, 3);
        assert_eq!(session.phase(), QuizPhase::InProgress);
    }

    #[test]
    fn test_all_correct_answers_score_full_marks() {
        let questions = three_questions();
        let mut session = QuizSession::start(questions.len());

        for question in &questions {
            session.submit(&questions, &question.correct_answer);
        }

        assert_eq!(session.score, 3);
        assert!(session.is_complete());
    }

    #[test]
    fn test_correct_wrong_correct_scores_two_of_three() {
        let questions = three_questions();
        let mut session = QuizSession::start(questions.len());

        let first = session.submit(&questions, "Paris");
        let second = session.submit(&questions, "Madrid");
        let third = session.submit(&questions, "Berlin");

        assert!(first.correct && !first.complete);
        assert!(!second.correct && !second.complete);
        assert!(third.correct && third.complete);
        assert_eq!((session.score, session.total), (2, 3));
        assert_eq!(session.percentage(), 67);
    }

    #[test]
    fn test_every_submission_advances_by_one() {
        let questions = three_questions();
        let mut session = QuizSession::start(questions.len());

        session.submit(&questions, "Paris");
        assert_eq!(session.index, 1);
        session.submit(&questions, "not an option");
        assert_eq!(session.index, 2);
        assert_eq!(session.score, 1);
    }

    #[test]
    fn test_complete_session_has_no_current_question() {
        let questions = three_questions();
        let mut session = QuizSession::start(questions.len());
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..3 {
            session.submit(&questions, "Paris");
        }

        assert_eq!(session.phase(), QuizPhase::Complete);
        assert!(session.current_question(&questions, &mut rng).is_none());

        let extra = session.submit(&questions, "Paris");
        assert!(extra.complete && !extra.correct);
        assert_eq!((session.index, session.score), (3, 1));
    }

    #[test]
    fn test_out_of_range_index_is_complete() {
        let questions = three_questions();
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = QuizSession {
            index: 7,
            score: 2,
            total: 3,
            seed: None,
        };

        assert!(session.is_complete());
        assert!(session.current_question(&questions, &mut rng).is_none());

        let mut stale = QuizSession {
            index: 3,
            score: 0,
            total: 10,
            seed: Some(9),
        };
        stale.clamp_total(questions.len());
        assert_eq!(stale.total, 3);
        assert!(stale.is_complete());

        session.clamp_total(questions.len());
        assert_eq!(session.score, 2);
    }

    #[test]
    fn test_restart_after_completion() {
        let state = test_state(three_questions(), 0);
        let mut session = state.start_session();
        for question in &state.questions {
            session.submit(&state.questions, &question.correct_answer);
        }
        assert!(session.is_complete());

        let session = state.start_session();
        assert_eq!((session.index, session.score), (0, 0));
        assert_eq!(session.phase(), QuizPhase::InProgress);
    }

    #[test]
    fn test_shuffled_options_keep_the_same_set() {
        let questions = three_questions();
        let session = QuizSession::start(questions.len());

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let presented = session.current_question(&questions, &mut rng).unwrap();

            let mut shown = presented.options.clone();
            shown.sort();
            let mut expected = questions[0].get_options();
            expected.sort();
            assert_eq!(shown, expected);
            assert_eq!(presented.number, 1);
            assert_eq!(presented.total, 3);
        }
        assert_eq!(questions[0].correct_answer, "Paris");
    }

    #[test]
    fn test_attempt_size_respects_cap() {
        assert_eq!(test_state(three_questions(), 0).attempt_size(), 3);
        assert_eq!(test_state(three_questions(), 2).attempt_size(), 2);
        assert_eq!(test_state(three_questions(), 10).attempt_size(), 3);
    }

    #[test]
    fn test_performance_bands() {
        assert_eq!(Performance::from_percentage(100), Performance::Excellent);
        assert_eq!(Performance::from_percentage(80), Performance::Excellent);
        assert_eq!(Performance::from_percentage(67), Performance::Good);
        assert_eq!(Performance::from_percentage(40), Performance::Average);
        assert_eq!(Performance::from_percentage(0), Performance::NeedsImprovement);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn test_percentage_rounds_half_to_even() {
        assert_eq!(percentage(1, 8), 12);
        assert_eq!(percentage(3, 8), 38);
        assert_eq!(percentage(5, 8), 62);
        assert_eq!(percentage(7, 8), 88);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(3, 3), 100);
    }

    fn numbered_bank(size: usize) -> Vec<QuestionRecord> {
        (0..size)
            .map(|i| create_test_question(&format!("Question number {}?", i), "Paris"))
            .collect()
    }

    #[test]
    fn test_seeds_give_different_question_orders() {
        let bank = numbered_bank(10);
        let orders: Vec<Vec<usize>> = (0..20)
            .map(|seed| QuizSession::start_shuffled(10, seed).question_order(bank.len()))
            .collect();

        for order in &orders {
            let mut sorted = order.clone();
            sorted.sort();
            assert_eq!(sorted, (0..10).collect::<Vec<_>>());
        }
        assert!(orders.iter().any(|order| order != &orders[0]));

        // The same seed always replays the same order
        assert_eq!(
            QuizSession::start_shuffled(10, 3).question_order(10),
            QuizSession::start_shuffled(10, 3).question_order(10)
        );
        assert_eq!(QuizSession::start(4).question_order(10), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_capped_attempt_draws_from_whole_bank() {
        let state = test_state(numbered_bank(10), 3);
        let mut asked = std::collections::HashSet::new();

        for seed in 0..200 {
            let session = QuizSession::start_shuffled(state.attempt_size(), seed);
            let order = session.question_order(state.questions.len());
            assert_eq!(order.len(), 3);
            asked.extend(order);
        }
        assert_eq!(asked.len(), 10);

        let session = state.start_session();
        assert!(session.seed.is_some());
        assert_eq!(session.total, 3);
    }

    #[test]
    fn test_shuffled_attempt_scores_current_record() {
        let questions = three_questions();
        let mut session = QuizSession::start_shuffled(questions.len(), 11);
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = Vec::new();

        for answer_correctly in [true, false, true] {
            let record = session.current_record(&questions).unwrap().clone();
            let presented = session.current_question(&questions, &mut rng).unwrap();
            assert_eq!(presented.text, record.text);
            seen.push(record.text.clone());

            let answer = if answer_correctly {
                record.correct_answer.as_str()
            } else {
                "wrong"
            };
            session.submit(&questions, answer);
        }

        seen.sort();
        let mut all: Vec<String> = questions.iter().map(|q| q.text.clone()).collect();
        all.sort();
        assert_eq!(seen, all);
        assert_eq!((session.score, session.total), (2, 3));
        assert!(session.current_record(&questions).is_none());
    }

    #[test]
    fn test_question_page_shows_missing_answer_notice() {
        let presented = PresentedQuestion {
            text: "Capital of France?".to_string(),
            options: vec!["Rome".into(), "Paris".into(), "Berlin".into(), "Madrid".into()],
            number: 1,
            total: 3,
        };

        let plain = views::question(&presented, None).into_string();
        assert!(!plain.contains(views::MISSING_ANSWER_NOTICE));

        let flagged = views::question(&presented, Some(views::MISSING_ANSWER_NOTICE)).into_string();
        assert!(flagged.contains("Please select an answer before proceeding."));
    }

    #[test]
    fn test_question_page_lists_every_option() {
        let presented = PresentedQuestion {
            text: "Capital of <France>?".to_string(),
            options: vec!["Rome".into(), "Paris".into(), "Berlin".into(), "Madrid".into()],
            number: 2,
            total: 4,
        };
        let html = views::question(&presented, None).into_string();

        assert!(html.contains("Question 2 of 4"));
        assert!(html.contains("width: 25%"));
        assert!(html.contains("Capital of &lt;France&gt;?"));
        for option in &presented.options {
            assert!(html.contains(&format!("value=\"{}\"", option)));
        }
    }

    #[test]
    fn test_results_page_shows_score() {
        let session = QuizSession {
            index: 3,
            score: 2,
            total: 3,
            seed: Some(5),
        };
        let html = views::results(&session).into_string();

        assert!(html.contains("You scored 2 out of 3"));
        assert!(html.contains("67%"));
        assert!(html.contains("Good job!"));
        assert!(html.contains(Route::Restart.path()));
    }
}
