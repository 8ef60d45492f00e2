//! Quiz question selection
//!
//! Picks one question the player has not seen yet. The candidate pool is
//! filtered up front, so an exhausted pool is reported as
//! [`QuizOutcome::Complete`] instead of being retried.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Question, QuestionId};

/// Result of asking for the next quiz question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    /// A fresh question, plus the seen-list extended with its id
    Next {
        question: Question,
        previous: Vec<QuestionId>,
    },
    /// Every candidate has been asked already
    Complete { previous: Vec<QuestionId> },
}

impl QuizOutcome {
    pub fn question(&self) -> Option<&Question> {
        match self {
            Self::Next { question, .. } => Some(question),
            Self::Complete { .. } => None,
        }
    }

    pub fn previous(&self) -> &[QuestionId] {
        match self {
            Self::Next { previous, .. } | Self::Complete { previous } => previous,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }
}

/// Choose uniformly among `pool` entries whose id is not in `previous`.
///
/// The returned seen-list keeps the caller's order, drops duplicates, and
/// appends the chosen id.
pub fn select_next<R>(pool: Vec<Question>, previous: &[QuestionId], rng: &mut R) -> QuizOutcome
where
    R: Rng + ?Sized,
{
    let mut seen = HashSet::with_capacity(previous.len() + 1);
    let mut previous: Vec<QuestionId> = previous.iter().copied().filter(|id| seen.insert(*id)).collect();

    let remaining: Vec<Question> = pool.into_iter().filter(|q| !seen.contains(&q.id)).collect();

    match remaining.choose(rng) {
        Some(question) => {
            previous.push(question.id);
            QuizOutcome::Next {
                question: question.clone(),
                previous,
            }
        }
        None => QuizOutcome::Complete { previous },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question(id: QuestionId, category: i32) -> Question {
        Question {
            id,
            question: format!("question {}", id),
            answer: format!("answer {}", id),
            category,
            difficulty: 1,
        }
    }

    #[test]
    fn single_remaining_candidate_is_chosen() {
        let pool = vec![question(1, 1), question(2, 1), question(3, 1)];
        let mut rng = StdRng::seed_from_u64(7);

        let outcome = select_next(pool, &[1, 2], &mut rng);

        assert_eq!(outcome.question().map(|q| q.id), Some(3));
        assert_eq!(outcome.previous(), &[1, 2, 3]);
    }

    #[test]
    fn exhausted_pool_completes() {
        let pool = vec![question(1, 1), question(2, 1)];
        let mut rng = StdRng::seed_from_u64(7);

        let outcome = select_next(pool, &[2, 1], &mut rng);

        assert!(outcome.is_complete());
        assert_eq!(outcome.previous(), &[2, 1]);
    }

    #[test]
    fn empty_pool_completes() {
        let mut rng = StdRng::seed_from_u64(7);
        let outcome = select_next(Vec::new(), &[], &mut rng);
        assert_eq!(outcome, QuizOutcome::Complete { previous: vec![] });
    }

    #[test]
    fn duplicate_previous_ids_are_collapsed() {
        let pool = vec![question(1, 1), question(2, 1)];
        let mut rng = StdRng::seed_from_u64(1);

        let outcome = select_next(pool, &[1, 1, 1], &mut rng);

        assert_eq!(outcome.question().map(|q| q.id), Some(2));
        assert_eq!(outcome.previous(), &[1, 2]);
    }

    #[test]
    fn repeated_draws_visit_every_question_once() {
        let pool: Vec<Question> = (1..=12).map(|id| question(id, 1)).collect();
        let mut rng = StdRng::seed_from_u64(42);
        let mut previous = Vec::new();
        let mut asked = HashSet::new();

        loop {
            match select_next(pool.clone(), &previous, &mut rng) {
                QuizOutcome::Next {
                    question,
                    previous: next,
                } => {
                    assert!(asked.insert(question.id), "question {} repeated", question.id);
                    previous = next;
                }
                QuizOutcome::Complete { .. } => break,
            }
        }

        assert_eq!(asked.len(), 12);
    }
}
