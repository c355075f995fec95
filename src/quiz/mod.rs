//! Quiz content
//!
//! Categories, difficulties and the round content returned by a provider.
//! Round content is immutable once produced; presentation order of answer
//! options is handled by [`shuffle::PresentedQuestion`].

pub mod shuffle;

use crate::constants::game::{FOLLOW_UPS_PER_ROUND, OPTIONS_PER_QUESTION};
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Historical category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "WW1")]
    Ww1,
    #[serde(rename = "WW2")]
    Ww2,
    #[serde(rename = "Cold War")]
    ColdWar,
    #[serde(rename = "Ancient Rome")]
    AncientRome,
}

impl Category {
    /// Short description shown on the category screen
    pub fn description(&self) -> &'static str {
        match self {
            Self::Ww1 => "World War I (1914-1918)",
            Self::Ww2 => "World War II (1939-1945)",
            Self::ColdWar => "Cold War Era (1947-1991)",
            Self::AncientRome => "Roman Empire & Republic",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ww1 => write!(f, "WW1"),
            Self::Ww2 => write!(f, "WW2"),
            Self::ColdWar => write!(f, "Cold War"),
            Self::AncientRome => write!(f, "Ancient Rome"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ww1" | "wwi" | "world war i" => Ok(Self::Ww1),
            "ww2" | "wwii" | "world war ii" => Ok(Self::Ww2),
            "cold war" | "cold_war" | "cold-war" | "coldwar" => Ok(Self::ColdWar),
            "ancient rome" | "ancient_rome" | "ancient-rome" | "rome" => Ok(Self::AncientRome),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

/// List all available categories
pub fn available_categories() -> Vec<Category> {
    vec![
        Category::Ww1,
        Category::Ww2,
        Category::ColdWar,
        Category::AncientRome,
    ]
}

/// Question difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Professor,
}

impl Difficulty {
    /// Short description shown on the difficulty screen
    pub fn description(&self) -> &'static str {
        match self {
            Self::Easy => "Major events and well-known locations",
            Self::Medium => "Requires solid historical knowledge",
            Self::Hard => "Detailed knowledge required",
            Self::Professor => "Expert level - very challenging",
        }
    }

    /// Guidance given to the question writer for this difficulty
    pub fn guidelines(&self) -> &'static str {
        match self {
            Self::Easy => "- Use well-known events and major cities\n  - Questions should be straightforward",
            Self::Medium => "- Use moderately known events\n  - Require some historical knowledge",
            Self::Hard => "- Use lesser-known events or specific battle locations\n  - Require detailed historical knowledge",
            Self::Professor => "- Use very obscure events or precise military positions\n  - Require expert-level knowledge",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "Easy"),
            Self::Medium => write!(f, "Medium"),
            Self::Hard => write!(f, "Hard"),
            Self::Professor => write!(f, "Professor"),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "professor" => Ok(Self::Professor),
            _ => Err(format!("Unknown difficulty: {}", s)),
        }
    }
}

/// List all available difficulties
pub fn available_difficulties() -> Vec<Difficulty> {
    vec![
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Professor,
    ]
}

/// "Where did this happen?" question for a round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationQuestion {
    pub question: String,
    pub answer: String,
    pub coordinates: Coordinates,
}

/// Multiple-choice follow-up question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleChoiceQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options` of the correct answer
    pub correct_answer: usize,
}

impl MultipleChoiceQuestion {
    /// The text of the correct option
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_answer).map(String::as_str)
    }
}

/// One round: a location question and its follow-ups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRound {
    pub location_question: LocationQuestion,
    pub follow_up_questions: Vec<MultipleChoiceQuestion>,
}

impl GameRound {
    /// Check the round against the content contract
    ///
    /// Exactly 5 follow-ups, each with exactly 4 options and an in-range
    /// correct answer, and in-range coordinates for the location.
    pub fn validate(&self) -> Result<()> {
        self.location_question
            .coordinates
            .validate()
            .map_err(|e| Error::InvalidRound(e.to_string()))?;

        if self.follow_up_questions.len() != FOLLOW_UPS_PER_ROUND {
            return Err(Error::InvalidRound(format!(
                "Expected {} follow-up questions, got {}",
                FOLLOW_UPS_PER_ROUND,
                self.follow_up_questions.len()
            )));
        }

        for (i, q) in self.follow_up_questions.iter().enumerate() {
            if q.options.len() != OPTIONS_PER_QUESTION {
                return Err(Error::InvalidRound(format!(
                    "Follow-up {} has {} options, expected {}",
                    i + 1,
                    q.options.len(),
                    OPTIONS_PER_QUESTION
                )));
            }
            if q.correct_answer >= OPTIONS_PER_QUESTION {
                return Err(Error::InvalidRound(format!(
                    "Follow-up {} has correct answer {} out of range",
                    i + 1,
                    q.correct_answer
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_json() -> serde_json::Value {
        let follow_up = serde_json::json!({
            "question": "Who was assassinated?",
            "options": ["Franz Ferdinand", "Wilhelm II", "Nicholas II", "Franz Joseph"],
            "correctAnswer": 0
        });
        serde_json::json!({
            "locationQuestion": {
                "question": "Where was Archduke Franz Ferdinand shot on 28 June 1914?",
                "answer": "Sarajevo",
                "coordinates": { "lat": 43.8563, "lng": 18.4131 }
            },
            "followUpQuestions": [follow_up.clone(), follow_up.clone(), follow_up.clone(), follow_up.clone(), follow_up]
        })
    }

    #[test]
    fn test_category_roundtrip_names() {
        for category in available_categories() {
            let parsed: Category = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);

            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
        }
    }

    #[test]
    fn test_category_aliases() {
        assert_eq!("cold_war".parse::<Category>().unwrap(), Category::ColdWar);
        assert_eq!("Ancient-Rome".parse::<Category>().unwrap(), Category::AncientRome);
        assert!("Napoleonic".parse::<Category>().is_err());
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("professor".parse::<Difficulty>().unwrap(), Difficulty::Professor);
        assert_eq!(" Easy ".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert!("impossible".parse::<Difficulty>().is_err());
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"Hard\"");
    }

    #[test]
    fn test_parse_round_contract() {
        let round: GameRound = serde_json::from_value(round_json()).unwrap();
        assert_eq!(round.location_question.answer, "Sarajevo");
        assert_eq!(round.follow_up_questions.len(), 5);
        assert_eq!(
            round.follow_up_questions[0].correct_option(),
            Some("Franz Ferdinand")
        );
        assert!(round.validate().is_ok());
    }

    #[test]
    fn test_validate_wrong_follow_up_count() {
        let mut value = round_json();
        value["followUpQuestions"].as_array_mut().unwrap().pop();
        let round: GameRound = serde_json::from_value(value).unwrap();
        assert!(matches!(round.validate(), Err(Error::InvalidRound(_))));
    }

    #[test]
    fn test_validate_wrong_option_count() {
        let mut value = round_json();
        value["followUpQuestions"][2]["options"]
            .as_array_mut()
            .unwrap()
            .pop();
        let round: GameRound = serde_json::from_value(value).unwrap();
        assert!(round.validate().is_err());
    }

    #[test]
    fn test_validate_correct_answer_out_of_range() {
        let mut value = round_json();
        value["followUpQuestions"][4]["correctAnswer"] = serde_json::json!(4);
        let round: GameRound = serde_json::from_value(value).unwrap();
        assert!(round.validate().is_err());
    }

    #[test]
    fn test_validate_bad_coordinates() {
        let mut value = round_json();
        value["locationQuestion"]["coordinates"]["lat"] = serde_json::json!(123.0);
        let round: GameRound = serde_json::from_value(value).unwrap();
        assert!(round.validate().is_err());
    }

    #[test]
    fn test_null_coordinates_rejected() {
        let mut value = round_json();
        value["locationQuestion"]["coordinates"] = serde_json::Value::Null;
        assert!(serde_json::from_value::<GameRound>(value).is_err());
    }

    #[test]
    fn test_negative_correct_answer_rejected() {
        let mut value = round_json();
        value["followUpQuestions"][0]["correctAnswer"] = serde_json::json!(-1);
        assert!(serde_json::from_value::<GameRound>(value).is_err());
    }
}
