//! Game state, phases, actions and events

use crate::constants::game::TOTAL_ROUNDS;
use crate::coord::Coordinates;
use crate::quiz::shuffle::PresentedQuestion;
use crate::quiz::{Category, Difficulty, GameRound};
use serde::{Deserialize, Serialize};

/// The mutable aggregate for one playthrough
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub category: Option<Category>,
    pub difficulty: Option<Difficulty>,
    /// 0-based index of the round being played
    pub current_round: usize,
    pub total_rounds: usize,
    pub score: u32,
    pub rounds: Vec<GameRound>,
    pub user_pin: Option<Coordinates>,
    pub has_submitted_pin: bool,
    /// 0-based index of the follow-up question being answered
    pub current_follow_up_index: usize,
    /// Pin points per round, recorded once at submission
    pub round_scores: Vec<u32>,
    /// Result of the current round's pin, once submitted
    pub last_pin: Option<PinResult>,
    /// Message from the last failed generation
    pub error: Option<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            category: None,
            difficulty: None,
            current_round: 0,
            total_rounds: TOTAL_ROUNDS,
            score: 0,
            rounds: Vec::new(),
            user_pin: None,
            has_submitted_pin: false,
            current_follow_up_index: 0,
            round_scores: Vec::new(),
            last_pin: None,
            error: None,
        }
    }
}

/// Outcome of a pin submission
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinResult {
    pub distance_km: f64,
    pub points: u32,
}

/// Per-question state of the follow-up phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowUp {
    pub presented: PresentedQuestion,
    /// Pending choice, an index into `presented.options`
    pub selected: Option<usize>,
    /// Whether the answer has been submitted and the result shown
    pub revealed: bool,
}

impl FollowUp {
    pub fn new(presented: PresentedQuestion) -> Self {
        Self {
            presented,
            selected: None,
            revealed: false,
        }
    }
}

/// Where the game currently is
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    SelectingCategory,
    SelectingDifficulty,
    GeneratingRounds,
    PlacingPin,
    AnsweringFollowUp(FollowUp),
    Scoreboard,
}

impl Phase {
    /// Short name for logs and error messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectingCategory => "selecting_category",
            Self::SelectingDifficulty => "selecting_difficulty",
            Self::GeneratingRounds => "generating_rounds",
            Self::PlacingPin => "placing_pin",
            Self::AnsweringFollowUp(_) => "answering_follow_up",
            Self::Scoreboard => "scoreboard",
        }
    }
}

/// Player or system input to the state machine
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectCategory(Category),
    SelectDifficulty(Difficulty),
    RoundsGenerated(Vec<GameRound>),
    GenerationFailed(String),
    BackToCategory,
    MovePin(Coordinates),
    SubmitPin,
    SelectOption(usize),
    SubmitAnswer,
    Next,
    PlayAgain,
}

impl Action {
    /// Short name for logs and error messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectCategory(_) => "select_category",
            Self::SelectDifficulty(_) => "select_difficulty",
            Self::RoundsGenerated(_) => "rounds_generated",
            Self::GenerationFailed(_) => "generation_failed",
            Self::BackToCategory => "back_to_category",
            Self::MovePin(_) => "move_pin",
            Self::SubmitPin => "submit_pin",
            Self::SelectOption(_) => "select_option",
            Self::SubmitAnswer => "submit_answer",
            Self::Next => "next",
            Self::PlayAgain => "play_again",
        }
    }
}

/// What a transition did
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    CategorySelected(Category),
    GenerationStarted {
        category: Category,
        difficulty: Difficulty,
    },
    GenerationFailed(String),
    BackToCategory,
    /// A round's pin phase began with the pin at `pin`
    RoundStarted {
        round: usize,
        pin: Coordinates,
    },
    PinMoved(Coordinates),
    PinScored(PinResult),
    OptionSelected(usize),
    AnswerRevealed {
        correct: bool,
        correct_index: usize,
    },
    QuestionStarted {
        index: usize,
    },
    Finished {
        score: u32,
    },
    Reset,
}
