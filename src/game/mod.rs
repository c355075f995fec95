//! Round state machine
//!
//! A playthrough moves through explicit phases:
//!
//! ```text
//! SelectingCategory -> SelectingDifficulty -> GeneratingRounds
//!     -> PlacingPin(r) -> AnsweringFollowUp(r, 0..4) -> PlacingPin(r+1) ...
//!     -> Scoreboard -> SelectingCategory
//! ```
//!
//! Every input is an [`Action`] fed to [`Game::apply`], which either performs
//! the transition and reports an [`Event`], or rejects the action with
//! `Error::InvalidAction` and leaves the game untouched. The game trusts its
//! own score; nothing here is checked by a server.

pub mod state;

pub use state::{Action, Event, FollowUp, GameState, Phase, PinResult};

use crate::constants::game::{
    FIRST_PIN_MAX_KM, FIRST_PIN_MIN_KM, FOLLOW_UPS_PER_ROUND, NEXT_PIN_MAX_KM, NEXT_PIN_MIN_KM,
};
use crate::coord::geodesy::distance_km;
use crate::coord::pin::random_pin;
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::provider::{generate_rounds, RoundProvider};
use crate::quiz::shuffle::PresentedQuestion;
use crate::quiz::{Category, Difficulty, GameRound};
use crate::rng::RandomSource;
use crate::scoring::{max_possible_score, pin_score, FOLLOW_UP_POINTS};
use tracing::{debug, info, warn};

/// Message shown when round generation fails
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate game. Please try again.";

/// A playthrough: state, phase and the random source for pins and shuffles
#[derive(Debug)]
pub struct Game<R: RandomSource> {
    state: GameState,
    phase: Phase,
    rng: R,
}

impl<R: RandomSource> Game<R> {
    /// Create a game waiting for a category
    pub fn new(rng: R) -> Self {
        debug!("New game using {} random source", rng.name());
        Self {
            state: GameState::default(),
            phase: Phase::SelectingCategory,
            rng,
        }
    }

    /// Current state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current phase
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The round being played, once rounds exist
    pub fn current_round(&self) -> Option<&GameRound> {
        self.state.rounds.get(self.state.current_round)
    }

    /// The follow-up question on screen, if any
    pub fn follow_up(&self) -> Option<&FollowUp> {
        match &self.phase {
            Phase::AnsweringFollowUp(follow_up) => Some(follow_up),
            _ => None,
        }
    }

    /// Best score reachable in this game
    pub fn max_possible_score(&self) -> u32 {
        max_possible_score(self.state.total_rounds)
    }

    /// Apply an action
    pub fn apply(&mut self, action: Action) -> Result<Event> {
        debug!("Applying {} in {}", action.name(), self.phase.name());

        match action {
            Action::SelectCategory(category) => self.select_category(category),
            Action::SelectDifficulty(difficulty) => self.select_difficulty(difficulty),
            Action::RoundsGenerated(rounds) => self.rounds_generated(rounds),
            Action::GenerationFailed(message) => self.generation_failed(message),
            Action::BackToCategory => self.back_to_category(),
            Action::MovePin(coords) => self.move_pin(coords),
            Action::SubmitPin => self.submit_pin(),
            Action::SelectOption(index) => self.select_option(index),
            Action::SubmitAnswer => self.submit_answer(),
            Action::Next => self.next(),
            Action::PlayAgain => self.play_again(),
        }
    }

    /// Fetch this game's rounds from `provider`
    ///
    /// Must be called in `GeneratingRounds`. Rounds are requested one after
    /// another; on any failure the game returns to difficulty selection
    /// with an error message and no rounds.
    pub async fn generate<P: RoundProvider>(&mut self, provider: &P) -> Result<Event> {
        let (category, difficulty) = match (&self.phase, self.state.category, self.state.difficulty) {
            (Phase::GeneratingRounds, Some(category), Some(difficulty)) => (category, difficulty),
            _ => return Err(self.invalid("generate")),
        };

        info!(
            "Generating rounds for {} / {} via {}",
            category,
            difficulty,
            provider.name()
        );

        match generate_rounds(provider, category, difficulty).await {
            Ok(rounds) => self.apply(Action::RoundsGenerated(rounds)),
            Err(e) => {
                warn!("Round generation failed: {}", e);
                self.apply(Action::GenerationFailed(GENERATION_FAILED_MESSAGE.to_string()))
            }
        }
    }

    fn invalid(&self, action: &str) -> Error {
        Error::InvalidAction(format!("{} not allowed in {}", action, self.phase.name()))
    }

    fn select_category(&mut self, category: Category) -> Result<Event> {
        if self.phase != Phase::SelectingCategory {
            return Err(self.invalid("select_category"));
        }

        self.state = GameState {
            category: Some(category),
            ..GameState::default()
        };
        self.phase = Phase::SelectingDifficulty;

        Ok(Event::CategorySelected(category))
    }

    fn select_difficulty(&mut self, difficulty: Difficulty) -> Result<Event> {
        let category = match (&self.phase, self.state.category) {
            (Phase::SelectingDifficulty, Some(category)) => category,
            _ => return Err(self.invalid("select_difficulty")),
        };

        self.state.difficulty = Some(difficulty);
        self.state.error = None;
        self.phase = Phase::GeneratingRounds;

        Ok(Event::GenerationStarted {
            category,
            difficulty,
        })
    }

    fn rounds_generated(&mut self, rounds: Vec<GameRound>) -> Result<Event> {
        if self.phase != Phase::GeneratingRounds {
            return Err(self.invalid("rounds_generated"));
        }

        if rounds.len() != self.state.total_rounds {
            warn!(
                "Expected {} rounds, got {}",
                self.state.total_rounds,
                rounds.len()
            );
            return self.generation_failed(GENERATION_FAILED_MESSAGE.to_string());
        }
        if let Some(e) = rounds.iter().find_map(|r| r.validate().err()) {
            warn!("Rejecting generated rounds: {}", e);
            return self.generation_failed(GENERATION_FAILED_MESSAGE.to_string());
        }

        let target = rounds[0].location_question.coordinates;
        let pin = random_pin(target, FIRST_PIN_MIN_KM, FIRST_PIN_MAX_KM, &mut self.rng);

        self.state.rounds = rounds;
        self.state.current_round = 0;
        self.state.current_follow_up_index = 0;
        self.state.has_submitted_pin = false;
        self.state.round_scores.clear();
        self.state.last_pin = None;
        self.state.user_pin = Some(pin);
        self.phase = Phase::PlacingPin;

        Ok(Event::RoundStarted { round: 0, pin })
    }

    fn generation_failed(&mut self, message: String) -> Result<Event> {
        if self.phase != Phase::GeneratingRounds {
            return Err(self.invalid("generation_failed"));
        }

        self.state.rounds.clear();
        self.state.error = Some(message.clone());
        self.phase = Phase::SelectingDifficulty;

        Ok(Event::GenerationFailed(message))
    }

    fn back_to_category(&mut self) -> Result<Event> {
        if self.phase != Phase::SelectingDifficulty {
            return Err(self.invalid("back_to_category"));
        }

        self.state.category = None;
        self.state.difficulty = None;
        self.state.error = None;
        self.phase = Phase::SelectingCategory;

        Ok(Event::BackToCategory)
    }

    fn move_pin(&mut self, coords: Coordinates) -> Result<Event> {
        if self.phase != Phase::PlacingPin || self.state.has_submitted_pin {
            return Err(self.invalid("move_pin"));
        }
        coords.validate()?;

        self.state.user_pin = Some(coords);

        Ok(Event::PinMoved(coords))
    }

    fn submit_pin(&mut self) -> Result<Event> {
        if self.phase != Phase::PlacingPin || self.state.has_submitted_pin {
            return Err(self.invalid("submit_pin"));
        }
        let pin = self
            .state
            .user_pin
            .ok_or_else(|| Error::InvalidAction("No pin placed".to_string()))?;
        let round = self
            .state
            .rounds
            .get(self.state.current_round)
            .ok_or_else(|| Error::InvalidAction("No round to score".to_string()))?;

        let distance = distance_km(pin, round.location_question.coordinates);
        let points = pin_score(distance);
        let presented = PresentedQuestion::present(&round.follow_up_questions[0], &mut self.rng)?;

        let result = PinResult {
            distance_km: distance,
            points,
        };
        self.state.round_scores.push(points);
        self.state.score += points;
        self.state.has_submitted_pin = true;
        self.state.current_follow_up_index = 0;
        self.state.last_pin = Some(result);
        self.phase = Phase::AnsweringFollowUp(FollowUp::new(presented));

        debug!(
            "Round {} pin {:.1} km off for {} points",
            self.state.current_round + 1,
            distance,
            points
        );

        Ok(Event::PinScored(result))
    }

    fn select_option(&mut self, index: usize) -> Result<Event> {
        let follow_up = match &mut self.phase {
            Phase::AnsweringFollowUp(follow_up) if !follow_up.revealed => follow_up,
            _ => return Err(self.invalid("select_option")),
        };
        if index >= follow_up.presented.options.len() {
            return Err(Error::InvalidAction(format!("No option {}", index)));
        }

        follow_up.selected = Some(index);

        Ok(Event::OptionSelected(index))
    }

    fn submit_answer(&mut self) -> Result<Event> {
        let follow_up = match &mut self.phase {
            Phase::AnsweringFollowUp(follow_up) if !follow_up.revealed => follow_up,
            _ => return Err(self.invalid("submit_answer")),
        };
        let choice = follow_up
            .selected
            .ok_or_else(|| Error::InvalidAction("No option selected".to_string()))?;

        let correct = follow_up.presented.is_correct(choice);
        let correct_index = follow_up.presented.correct_index;
        follow_up.revealed = true;
        if correct {
            self.state.score += FOLLOW_UP_POINTS;
        }

        Ok(Event::AnswerRevealed {
            correct,
            correct_index,
        })
    }

    fn next(&mut self) -> Result<Event> {
        if !matches!(&self.phase, Phase::AnsweringFollowUp(f) if f.revealed) {
            return Err(self.invalid("next"));
        }

        let next_question = self.state.current_follow_up_index + 1;
        if next_question < FOLLOW_UPS_PER_ROUND {
            let round = &self.state.rounds[self.state.current_round];
            let presented =
                PresentedQuestion::present(&round.follow_up_questions[next_question], &mut self.rng)?;

            self.state.current_follow_up_index = next_question;
            self.phase = Phase::AnsweringFollowUp(FollowUp::new(presented));

            return Ok(Event::QuestionStarted {
                index: next_question,
            });
        }

        let next_round = self.state.current_round + 1;
        if next_round < self.state.total_rounds {
            let target = self.state.rounds[next_round].location_question.coordinates;
            let pin = random_pin(target, NEXT_PIN_MIN_KM, NEXT_PIN_MAX_KM, &mut self.rng);

            self.state.current_round = next_round;
            self.state.has_submitted_pin = false;
            self.state.current_follow_up_index = 0;
            self.state.last_pin = None;
            self.state.user_pin = Some(pin);
            self.phase = Phase::PlacingPin;

            return Ok(Event::RoundStarted {
                round: next_round,
                pin,
            });
        }

        info!("Game finished with {} points", self.state.score);
        self.phase = Phase::Scoreboard;

        Ok(Event::Finished {
            score: self.state.score,
        })
    }

    fn play_again(&mut self) -> Result<Event> {
        if self.phase != Phase::Scoreboard {
            return Err(self.invalid("play_again"));
        }

        self.state = GameState::default();
        self.phase = Phase::SelectingCategory;

        Ok(Event::Reset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::fixed::{sample_rounds, FixedProvider};
    use crate::provider::RoundRequest;
    use crate::rng::SeededRandom;

    fn new_game() -> Game<SeededRandom> {
        Game::new(SeededRandom::new(42))
    }

    /// A game sitting in PlacingPin(0) with the sample rounds
    fn started_game() -> Game<SeededRandom> {
        let mut game = new_game();
        game.apply(Action::SelectCategory(Category::Ww1)).unwrap();
        game.apply(Action::SelectDifficulty(Difficulty::Easy)).unwrap();
        game.apply(Action::RoundsGenerated(sample_rounds())).unwrap();
        game
    }

    fn target(game: &Game<SeededRandom>) -> Coordinates {
        game.current_round().unwrap().location_question.coordinates
    }

    /// Answer the remaining follow-ups of the current round
    fn answer_follow_ups(game: &mut Game<SeededRandom>, correctly: bool) -> Event {
        let mut last = None;
        for _ in game.state().current_follow_up_index..FOLLOW_UPS_PER_ROUND {
            let follow_up = game.follow_up().unwrap();
            let correct = follow_up.presented.correct_index;
            let choice = if correctly { correct } else { (correct + 1) % 4 };

            game.apply(Action::SelectOption(choice)).unwrap();
            let revealed = game.apply(Action::SubmitAnswer).unwrap();
            assert_eq!(
                revealed,
                Event::AnswerRevealed {
                    correct: correctly,
                    correct_index: correct
                }
            );
            last = Some(game.apply(Action::Next).unwrap());
        }
        last.unwrap()
    }

    fn assert_round_invariants(game: &Game<SeededRandom>) {
        let state = game.state();
        assert!(state.current_round < state.total_rounds);
        assert!(state.current_follow_up_index < FOLLOW_UPS_PER_ROUND);
        let expected = if state.has_submitted_pin {
            state.current_round + 1
        } else {
            state.current_round
        };
        assert_eq!(state.round_scores.len(), expected);
    }

    struct FailingProvider;

    impl RoundProvider for FailingProvider {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn generate_round(&self, request: &RoundRequest) -> Result<GameRound> {
            if request.round_number == 3 {
                return Err(Error::Generation("upstream timeout".to_string()));
            }
            Ok(sample_rounds()[request.round_number - 1].clone())
        }
    }

    #[test]
    fn test_initial_phase() {
        let game = new_game();
        assert_eq!(game.phase(), &Phase::SelectingCategory);
        assert_eq!(game.state(), &GameState::default());
        assert_eq!(game.max_possible_score(), 45);
    }

    #[test]
    fn test_category_then_difficulty() {
        let mut game = new_game();

        let event = game.apply(Action::SelectCategory(Category::ColdWar)).unwrap();
        assert_eq!(event, Event::CategorySelected(Category::ColdWar));
        assert_eq!(game.phase(), &Phase::SelectingDifficulty);

        let event = game.apply(Action::SelectDifficulty(Difficulty::Hard)).unwrap();
        assert_eq!(
            event,
            Event::GenerationStarted {
                category: Category::ColdWar,
                difficulty: Difficulty::Hard
            }
        );
        assert_eq!(game.phase(), &Phase::GeneratingRounds);
    }

    #[test]
    fn test_back_to_category() {
        let mut game = new_game();
        game.apply(Action::SelectCategory(Category::Ww2)).unwrap();

        assert_eq!(game.apply(Action::BackToCategory).unwrap(), Event::BackToCategory);
        assert_eq!(game.phase(), &Phase::SelectingCategory);
        assert_eq!(game.state().category, None);
    }

    #[test]
    fn test_rounds_generated_places_first_pin() {
        let game = started_game();

        assert_eq!(game.phase(), &Phase::PlacingPin);
        let pin = game.state().user_pin.unwrap();
        let d = distance_km(pin, target(&game));
        assert!((100.0 - 1e-3..=800.0 + 1e-3).contains(&d), "first pin {} km away", d);
        assert_round_invariants(&game);
    }

    #[test]
    fn test_invalid_round_set_is_generation_failure() {
        let mut game = new_game();
        game.apply(Action::SelectCategory(Category::Ww1)).unwrap();
        game.apply(Action::SelectDifficulty(Difficulty::Easy)).unwrap();

        let mut rounds = sample_rounds();
        rounds.pop();
        let event = game.apply(Action::RoundsGenerated(rounds)).unwrap();

        assert!(matches!(event, Event::GenerationFailed(_)));
        assert_eq!(game.phase(), &Phase::SelectingDifficulty);
        assert!(game.state().rounds.is_empty());

        // Bad content inside an otherwise complete set
        game.apply(Action::SelectDifficulty(Difficulty::Easy)).unwrap();
        let mut rounds = sample_rounds();
        rounds[1].follow_up_questions[3].correct_answer = 7;
        let event = game.apply(Action::RoundsGenerated(rounds)).unwrap();
        assert!(matches!(event, Event::GenerationFailed(_)));
    }

    #[test]
    fn test_move_pin_repeatable_without_scoring() {
        let mut game = started_game();

        for lat in [10.0, 20.0, 30.0] {
            let coords = Coordinates::new(lat, 5.0);
            assert_eq!(game.apply(Action::MovePin(coords)).unwrap(), Event::PinMoved(coords));
        }

        assert_eq!(game.state().user_pin, Some(Coordinates::new(30.0, 5.0)));
        assert_eq!(game.state().score, 0);
        assert!(game.state().round_scores.is_empty());
    }

    #[test]
    fn test_move_pin_rejects_invalid_coordinates() {
        let mut game = started_game();
        let before = game.state().clone();

        assert!(game.apply(Action::MovePin(Coordinates::new(95.0, 0.0))).is_err());
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_pin_on_target_scores_ten() {
        let mut game = started_game();
        let answer = target(&game);

        game.apply(Action::MovePin(answer)).unwrap();
        let event = game.apply(Action::SubmitPin).unwrap();

        assert_eq!(
            event,
            Event::PinScored(PinResult {
                distance_km: 0.0,
                points: 10
            })
        );
        assert_eq!(game.state().score, 10);
        assert_eq!(game.state().round_scores, vec![10]);
        assert!(game.state().has_submitted_pin);
        assert!(game.follow_up().is_some());
        assert_round_invariants(&game);
    }

    #[test]
    fn test_far_pin_scores_zero() {
        let mut game = started_game();
        // Sarajevo to Lisbon is well over 500 km
        game.apply(Action::MovePin(Coordinates::new(38.7223, -9.1393))).unwrap();
        game.apply(Action::SubmitPin).unwrap();

        assert_eq!(game.state().score, 0);
        assert_eq!(game.state().round_scores, vec![0]);
        assert!(game.state().last_pin.unwrap().distance_km > 500.0);
    }

    #[test]
    fn test_submit_pin_only_once_per_round() {
        let mut game = started_game();
        game.apply(Action::SubmitPin).unwrap();
        let before = game.state().clone();

        assert!(matches!(game.apply(Action::SubmitPin), Err(Error::InvalidAction(_))));
        assert!(game.apply(Action::MovePin(Coordinates::new(0.0, 0.0))).is_err());
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_answer_requires_selection_and_counts_once() {
        let mut game = started_game();
        game.apply(Action::MovePin(target(&game))).unwrap();
        game.apply(Action::SubmitPin).unwrap();

        // Nothing selected yet
        assert!(game.apply(Action::SubmitAnswer).is_err());
        // Can't skip ahead before answering
        assert!(game.apply(Action::Next).is_err());

        let correct = game.follow_up().unwrap().presented.correct_index;
        game.apply(Action::SelectOption((correct + 1) % 4)).unwrap();
        game.apply(Action::SelectOption(correct)).unwrap();
        assert_eq!(game.state().score, 10);

        game.apply(Action::SubmitAnswer).unwrap();
        assert_eq!(game.state().score, 11);

        // Revealed: no more changes, no second point
        assert!(game.apply(Action::SelectOption(correct)).is_err());
        assert!(game.apply(Action::SubmitAnswer).is_err());
        assert_eq!(game.state().score, 11);
    }

    #[test]
    fn test_select_option_out_of_range() {
        let mut game = started_game();
        game.apply(Action::SubmitPin).unwrap();
        assert!(game.apply(Action::SelectOption(4)).is_err());
        assert_eq!(game.follow_up().unwrap().selected, None);
    }

    #[test]
    fn test_wrong_answer_scores_nothing() {
        let mut game = started_game();
        game.apply(Action::MovePin(target(&game))).unwrap();
        game.apply(Action::SubmitPin).unwrap();

        let event = answer_follow_ups(&mut game, false);
        assert!(matches!(event, Event::RoundStarted { round: 1, .. }));
        assert_eq!(game.state().score, 10);
    }

    #[test]
    fn test_follow_ups_present_the_round_questions() {
        let mut game = started_game();
        game.apply(Action::SubmitPin).unwrap();
        let round = game.current_round().unwrap().clone();

        for q in 0..FOLLOW_UPS_PER_ROUND {
            let follow_up = game.follow_up().unwrap().clone();
            let original = &round.follow_up_questions[q];
            assert_eq!(follow_up.presented.question, original.question);
            assert_eq!(
                follow_up.presented.options[follow_up.presented.correct_index],
                original.options[original.correct_answer]
            );
            assert_eq!(game.state().current_follow_up_index, q);

            game.apply(Action::SelectOption(0)).unwrap();
            game.apply(Action::SubmitAnswer).unwrap();
            game.apply(Action::Next).unwrap();
        }
    }

    #[test]
    fn test_first_round_scenario() {
        let mut game = started_game();
        game.apply(Action::MovePin(target(&game))).unwrap();
        game.apply(Action::SubmitPin).unwrap();
        assert_eq!(game.state().score, 10);

        let event = answer_follow_ups(&mut game, true);

        assert_eq!(game.state().score, 15);
        assert_eq!(game.phase(), &Phase::PlacingPin);
        assert_eq!(game.state().current_round, 1);
        assert!(!game.state().has_submitted_pin);
        assert_eq!(game.state().current_follow_up_index, 0);
        assert_eq!(game.state().last_pin, None);

        let Event::RoundStarted { round, pin } = event else {
            panic!("expected RoundStarted, got {:?}", event);
        };
        assert_eq!(round, 1);
        assert_eq!(game.state().user_pin, Some(pin));
        let d = distance_km(pin, target(&game));
        assert!((300.0 - 1e-3..=800.0 + 1e-3).contains(&d), "next pin {} km away", d);
        assert_round_invariants(&game);
    }

    #[test]
    fn test_perfect_game_reaches_max_score() {
        let mut game = started_game();

        for round in 0..3 {
            assert_eq!(game.state().current_round, round);
            game.apply(Action::MovePin(target(&game))).unwrap();
            game.apply(Action::SubmitPin).unwrap();
            assert_round_invariants(&game);
            answer_follow_ups(&mut game, true);
        }

        assert_eq!(game.phase(), &Phase::Scoreboard);
        assert_eq!(game.state().score, 45);
        assert_eq!(game.state().score, game.max_possible_score());
        assert_eq!(game.state().round_scores, vec![10, 10, 10]);
    }

    #[test]
    fn test_finish_event_and_play_again() {
        let mut game = started_game();
        let mut last = None;
        for _ in 0..3 {
            game.apply(Action::SubmitPin).unwrap();
            last = Some(answer_follow_ups(&mut game, true));
        }

        let score = game.state().score;
        assert_eq!(last, Some(Event::Finished { score }));
        assert!(game.apply(Action::Next).is_err());

        assert_eq!(game.apply(Action::PlayAgain).unwrap(), Event::Reset);
        assert_eq!(game.phase(), &Phase::SelectingCategory);
        assert_eq!(game.state(), &GameState::default());
    }

    #[test]
    fn test_invalid_actions_leave_game_untouched() {
        let mut game = new_game();
        let actions = [
            Action::SelectDifficulty(Difficulty::Easy),
            Action::RoundsGenerated(sample_rounds()),
            Action::GenerationFailed("nope".to_string()),
            Action::BackToCategory,
            Action::MovePin(Coordinates::new(1.0, 1.0)),
            Action::SubmitPin,
            Action::SelectOption(0),
            Action::SubmitAnswer,
            Action::Next,
            Action::PlayAgain,
        ];

        for action in actions {
            let name = action.name();
            assert!(
                matches!(game.apply(action), Err(Error::InvalidAction(_))),
                "{} accepted in selecting_category",
                name
            );
            assert_eq!(game.phase(), &Phase::SelectingCategory);
            assert_eq!(game.state(), &GameState::default());
        }

        let mut game = started_game();
        assert!(game.apply(Action::SelectCategory(Category::Ww2)).is_err());
        assert!(game.apply(Action::PlayAgain).is_err());
        assert!(game.apply(Action::RoundsGenerated(sample_rounds())).is_err());
    }

    #[tokio::test]
    async fn test_generate_with_provider() {
        let mut game = new_game();
        game.apply(Action::SelectCategory(Category::Ww1)).unwrap();
        game.apply(Action::SelectDifficulty(Difficulty::Easy)).unwrap();

        let event = game.generate(&FixedProvider::sample()).await.unwrap();

        assert!(matches!(event, Event::RoundStarted { round: 0, .. }));
        assert_eq!(game.state().rounds, sample_rounds());
        assert_eq!(game.phase(), &Phase::PlacingPin);
    }

    #[tokio::test]
    async fn test_generate_failure_returns_to_difficulty() {
        let mut game = new_game();
        game.apply(Action::SelectCategory(Category::Ww1)).unwrap();
        game.apply(Action::SelectDifficulty(Difficulty::Medium)).unwrap();

        let event = game.generate(&FailingProvider).await.unwrap();

        assert_eq!(event, Event::GenerationFailed(GENERATION_FAILED_MESSAGE.to_string()));
        assert_eq!(game.phase(), &Phase::SelectingDifficulty);
        assert!(game.state().rounds.is_empty());
        assert_eq!(game.state().error.as_deref(), Some(GENERATION_FAILED_MESSAGE));
        assert_eq!(game.state().category, Some(Category::Ww1));

        // Picking a difficulty again clears the error and retries
        game.apply(Action::SelectDifficulty(Difficulty::Easy)).unwrap();
        assert_eq!(game.state().error, None);
        game.generate(&FixedProvider::sample()).await.unwrap();
        assert_eq!(game.phase(), &Phase::PlacingPin);
    }

    #[tokio::test]
    async fn test_generate_outside_generating_phase() {
        let mut game = new_game();
        assert!(game.generate(&FixedProvider::sample()).await.is_err());
    }

    #[test]
    fn test_seeded_games_are_reproducible() {
        let a = started_game();
        let b = started_game();
        assert_eq!(a.state().user_pin, b.state().user_pin);
    }
}
