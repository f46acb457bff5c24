//! Weighted scoring of a submission against a questionnaire.
//!
//! Pure function over its two inputs; never touches stored state and
//! never fails. An incomplete or garbled submission simply scores the
//! missing parts as zero.

use uuid::Uuid;

use crate::model::Questionnaire;

/// Compute the total score for a submission.
///
/// The selection list is positionally aligned with the questionnaire's
/// question order: the i-th identifier answers the i-th question. For
/// each question, the weight of the matching answer is added; a missing
/// position or an identifier that matches none of that question's
/// answers contributes zero. The total may be negative; there is no
/// clamping.
///
/// Note: positional matching is a fragile contract inherited from the
/// wire format — if question order changes between fetch and submit,
/// selections land on the wrong questions. A `(question_id, answer_id)`
/// pair submission would remove the ambiguity; callers relying on this
/// function should be aware of the limitation.
pub fn score(questionnaire: &Questionnaire, selections: &[Uuid]) -> f64 {
    questionnaire
        .questions
        .iter()
        .enumerate()
        .map(|(i, question)| {
            selections
                .get(i)
                .and_then(|selected| question.answers.iter().find(|a| a.id == *selected))
                .map(|a| a.weight)
                .unwrap_or(0.0)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Answer, Question};
    use chrono::Utc;

    fn answer(text: &str, weight: f64, is_correct: bool) -> Answer {
        Answer {
            id: Uuid::new_v4(),
            text: text.into(),
            weight,
            is_correct,
        }
    }

    fn questionnaire(questions: Vec<Question>) -> Questionnaire {
        Questionnaire {
            id: Uuid::new_v4(),
            title: "Test".into(),
            questions,
            created_at: Utc::now(),
        }
    }

    fn math() -> Questionnaire {
        questionnaire(vec![Question {
            id: Uuid::new_v4(),
            text: "2+2?".into(),
            answers: vec![answer("3", 0.0, false), answer("4", 10.0, true)],
        }])
    }

    #[test]
    fn correct_selection_scores_the_weight() {
        let q = math();
        let four = q.questions[0].answers[1].id;
        assert_eq!(score(&q, &[four]), 10.0);
    }

    #[test]
    fn wrong_selection_scores_its_own_weight() {
        let q = math();
        let three = q.questions[0].answers[0].id;
        assert_eq!(score(&q, &[three]), 0.0);
    }

    #[test]
    fn empty_submission_scores_zero() {
        let q = math();
        assert_eq!(score(&q, &[]), 0.0);
    }

    #[test]
    fn unknown_identifier_contributes_zero() {
        let q = math();
        assert_eq!(score(&q, &[Uuid::new_v4()]), 0.0);
    }

    #[test]
    fn short_submission_scores_only_covered_positions() {
        let q = questionnaire(vec![
            Question {
                id: Uuid::new_v4(),
                text: "first".into(),
                answers: vec![answer("a", 3.0, true), answer("b", 1.0, false)],
            },
            Question {
                id: Uuid::new_v4(),
                text: "second".into(),
                answers: vec![answer("c", 7.0, true), answer("d", 2.0, false)],
            },
        ]);
        let a = q.questions[0].answers[0].id;
        assert_eq!(score(&q, &[a]), 3.0);
    }

    #[test]
    fn alignment_is_positional_not_by_lookup() {
        // Swapping two entries attributes each selection to the other
        // question; neither id exists there, so both contribute zero.
        let q = questionnaire(vec![
            Question {
                id: Uuid::new_v4(),
                text: "first".into(),
                answers: vec![answer("a", 3.0, true)],
            },
            Question {
                id: Uuid::new_v4(),
                text: "second".into(),
                answers: vec![answer("c", 7.0, true)],
            },
        ]);
        let a = q.questions[0].answers[0].id;
        let c = q.questions[1].answers[0].id;
        assert_eq!(score(&q, &[a, c]), 10.0);
        assert_eq!(score(&q, &[c, a]), 0.0);
    }

    #[test]
    fn negative_weights_can_produce_negative_totals() {
        let q = questionnaire(vec![Question {
            id: Uuid::new_v4(),
            text: "tricky".into(),
            answers: vec![answer("trap", -5.0, false), answer("safe", 5.0, true)],
        }]);
        let trap = q.questions[0].answers[0].id;
        assert_eq!(score(&q, &[trap]), -5.0);
    }

    #[test]
    fn fully_correct_submission_sums_the_best_weights() {
        let q = questionnaire(
            (0..4)
                .map(|i| Question {
                    id: Uuid::new_v4(),
                    text: format!("q{i}"),
                    answers: vec![
                        answer("low", i as f64, false),
                        answer("high", (i + 10) as f64, true),
                    ],
                })
                .collect(),
        );
        let picks: Vec<Uuid> = q
            .questions
            .iter()
            .map(|question| {
                question
                    .answers
                    .iter()
                    .max_by(|a, b| a.weight.total_cmp(&b.weight))
                    .map(|a| a.id)
                    .unwrap()
            })
            .collect();
        let expected: f64 = q
            .questions
            .iter()
            .map(|question| {
                question
                    .answers
                    .iter()
                    .map(|a| a.weight)
                    .fold(f64::NEG_INFINITY, f64::max)
            })
            .sum();
        assert_eq!(score(&q, &picks), expected);
    }
}
