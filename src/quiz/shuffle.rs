//! Answer option shuffling
//!
//! Fisher-Yates over a copy of the input, plus the presented view of a
//! follow-up question whose correct index follows the permutation.

use crate::error::{Error, Result};
use crate::quiz::MultipleChoiceQuestion;
use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};

/// Return a uniformly shuffled copy of `items`
pub fn shuffle<T: Clone>(items: &[T], rng: &mut dyn RandomSource) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.index(i + 1);
        shuffled.swap(i, j);
    }
    shuffled
}

/// A follow-up question as shown to the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentedQuestion {
    pub question: String,
    /// Options in presentation order
    pub options: Vec<String>,
    /// Position in `options` of the correct answer
    pub correct_index: usize,
    /// `order[i]` is the original index of `options[i]`
    pub order: Vec<usize>,
}

impl PresentedQuestion {
    /// Shuffle a question's options for display
    ///
    /// Fails when `correct_answer` does not name one of the options.
    pub fn present(question: &MultipleChoiceQuestion, rng: &mut dyn RandomSource) -> Result<Self> {
        let indexed: Vec<usize> = (0..question.options.len()).collect();
        let order = shuffle(&indexed, rng);

        let options = order
            .iter()
            .map(|&original| question.options[original].clone())
            .collect();
        let correct_index = order
            .iter()
            .position(|&original| original == question.correct_answer)
            .ok_or_else(|| {
                Error::InvalidRound(format!(
                    "Correct answer {} is not among {} options",
                    question.correct_answer,
                    question.options.len()
                ))
            })?;

        Ok(Self {
            question: question.question.clone(),
            options,
            correct_index,
            order,
        })
    }

    /// Whether `choice` (a presented index) is the correct option
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeededRandom;
    use std::collections::HashMap;

    fn question() -> MultipleChoiceQuestion {
        MultipleChoiceQuestion {
            question: "Which river gave its name to the 1916 offensive?".to_string(),
            options: vec![
                "Marne".to_string(),
                "Somme".to_string(),
                "Meuse".to_string(),
                "Aisne".to_string(),
            ],
            correct_answer: 1,
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = SeededRandom::new(3);
        let items = vec![1, 2, 3, 4, 5, 6, 7];
        let shuffled = shuffle(&items, &mut rng);

        let mut sorted = shuffled.clone();
        sorted.sort();
        assert_eq!(sorted, items);
    }

    #[test]
    fn test_shuffle_does_not_mutate_input() {
        let mut rng = SeededRandom::new(3);
        let items = vec!["a", "b", "c", "d"];
        let _ = shuffle(&items, &mut rng);
        assert_eq!(items, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut rng = SeededRandom::new(3);
        assert!(shuffle::<u8>(&[], &mut rng).is_empty());
        assert_eq!(shuffle(&[9], &mut rng), vec![9]);
    }

    #[test]
    fn test_shuffle_uniform_over_permutations() {
        let mut rng = SeededRandom::new(2024);
        let items = [0, 1, 2, 3];
        let runs = 24_000;
        let mut counts: HashMap<Vec<i32>, usize> = HashMap::new();

        for _ in 0..runs {
            *counts.entry(shuffle(&items, &mut rng)).or_default() += 1;
        }

        assert_eq!(counts.len(), 24, "Not every permutation was produced");
        let expected = runs / 24;
        for (perm, count) in &counts {
            assert!(
                count.abs_diff(expected) < expected / 5,
                "Permutation {:?} seen {} times, expected about {}",
                perm,
                count,
                expected
            );
        }
    }

    #[test]
    fn test_present_tracks_correct_answer() {
        let mut rng = SeededRandom::new(11);
        let q = question();

        for _ in 0..500 {
            let presented = PresentedQuestion::present(&q, &mut rng).unwrap();
            assert_eq!(presented.options[presented.correct_index], "Somme");
            assert_eq!(presented.order[presented.correct_index], q.correct_answer);
            assert!(presented.is_correct(presented.correct_index));

            for (i, &original) in presented.order.iter().enumerate() {
                assert_eq!(presented.options[i], q.options[original]);
            }
        }
        // Source question untouched
        assert_eq!(q, question());
    }

    #[test]
    fn test_present_moves_correct_answer_around() {
        let mut rng = SeededRandom::new(5);
        let q = question();
        let mut positions = [0usize; 4];

        for _ in 0..400 {
            positions[PresentedQuestion::present(&q, &mut rng).unwrap().correct_index] += 1;
        }

        for count in positions {
            assert!(count > 50, "Correct answer positions skewed: {:?}", positions);
        }
    }

    #[test]
    fn test_present_rejects_missing_correct_answer() {
        let mut rng = SeededRandom::new(5);
        let mut q = question();
        q.correct_answer = 4;

        assert!(matches!(
            PresentedQuestion::present(&q, &mut rng),
            Err(Error::InvalidRound(_))
        ));
    }
}
