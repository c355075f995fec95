//! Play command handler
//!
//! Runs a game in the terminal. The map click becomes a typed "lat, lng"
//! pin move; everything else maps one-to-one onto game actions.

use crate::cli::init_logging;
use crate::cli::scores::print_scores;
use crate::config::Config;
use crate::constants::game::FOLLOW_UPS_PER_ROUND;
use crate::constants::leaderboard::MAX_ENTRIES;
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::game::{Action, Event, Game, Phase};
use crate::leaderboard::{normalize_name, Leaderboard};
use crate::provider::{get_provider, RoundProvider};
use crate::quiz::{available_categories, available_difficulties, Category, Difficulty};
use crate::rng::{get_source, RandomSource};
use clap::Args;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;

/// Play command arguments
#[derive(Args)]
pub struct PlayArgs {
    /// Category to play (skips the category menu)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Difficulty to play (skips the difficulty menu)
    #[arg(long, short = 'd')]
    pub difficulty: Option<String>,

    /// Round provider: groq, remote or fixed
    #[arg(long, short = 'p')]
    pub provider: Option<String>,

    /// JSON file of rounds (implies --provider fixed)
    #[arg(long)]
    pub rounds_file: Option<PathBuf>,

    /// Seed for pin placement and option order
    #[arg(long)]
    pub seed: Option<u64>,

    /// Don't record the result on the leaderboard
    #[arg(long)]
    pub no_scores: bool,
}

/// Run the play command
pub async fn run(args: PlayArgs) -> Result<()> {
    init_logging("warn");

    let mut config = Config::load()?;
    let mut provider_name = args.provider;
    if let Some(file) = &args.rounds_file {
        config.provider.rounds_file = file.display().to_string();
        provider_name.get_or_insert_with(|| "fixed".to_string());
    }
    let provider = get_provider(&config, provider_name.as_deref())?;

    let category = args
        .category
        .as_deref()
        .map(Category::from_str)
        .transpose()
        .map_err(Error::Config)?;
    let difficulty = args
        .difficulty
        .as_deref()
        .map(Difficulty::from_str)
        .transpose()
        .map_err(Error::Config)?;

    let leaderboard_path = Leaderboard::leaderboard_path()?;

    let stdin = io::stdin();
    let mut session = Session::new(
        Game::new(get_source(args.seed)),
        &provider,
        stdin.lock(),
        io::stdout(),
    )
    .with_presets(category, difficulty)
    .with_leaderboard(leaderboard_path, !args.no_scores);

    session.run().await
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Step {
    Continue,
    Quit,
}

/// An interactive game over a line-based input and an output
pub struct Session<'a, R: RandomSource, P, I, O> {
    game: Game<R>,
    provider: &'a P,
    input: I,
    out: O,
    category: Option<Category>,
    difficulty: Option<Difficulty>,
    /// Leaderboard file, re-read at every scoreboard
    leaderboard: Option<PathBuf>,
    record_scores: bool,
}

impl<'a, R, P, I, O> Session<'a, R, P, I, O>
where
    R: RandomSource,
    P: RoundProvider,
    I: BufRead,
    O: Write,
{
    pub fn new(game: Game<R>, provider: &'a P, input: I, out: O) -> Self {
        Self {
            game,
            provider,
            input,
            out,
            category: None,
            difficulty: None,
            leaderboard: None,
            record_scores: false,
        }
    }

    /// Pre-select category and difficulty for the first game
    pub fn with_presets(mut self, category: Option<Category>, difficulty: Option<Difficulty>) -> Self {
        self.category = category;
        self.difficulty = difficulty;
        self
    }

    /// Show the leaderboard at `path` after each game, and offer to add
    /// the result to it when `record` is set
    pub fn with_leaderboard(mut self, path: PathBuf, record: bool) -> Self {
        self.leaderboard = Some(path);
        self.record_scores = record;
        self
    }

    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    pub fn output(&self) -> &O {
        &self.out
    }

    /// Play until the player quits or input runs out
    pub async fn run(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "geo-history: find the place on the map, then answer {} questions about it.",
            FOLLOW_UPS_PER_ROUND
        )?;
        writeln!(self.out, "Type q at any prompt to quit.")?;

        loop {
            let step = match self.game.phase() {
                Phase::SelectingCategory => self.choose_category()?,
                Phase::SelectingDifficulty => self.choose_difficulty()?,
                Phase::GeneratingRounds => self.generate().await?,
                Phase::PlacingPin => self.place_pin()?,
                Phase::AnsweringFollowUp(_) => self.answer_follow_up()?,
                Phase::Scoreboard => self.scoreboard()?,
            };

            if step == Step::Quit {
                self.out.flush()?;
                return Ok(());
            }
        }
    }

    /// Read one trimmed line; None on end of input or a quit command
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.out, "{}", message)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }
        Ok(Some(line.to_string()))
    }

    fn choose_category(&mut self) -> Result<Step> {
        let category = match self.category.take() {
            Some(category) => category,
            None => {
                let categories = available_categories();
                writeln!(self.out, "\nChoose a category:")?;
                for (i, c) in categories.iter().enumerate() {
                    writeln!(self.out, "  {}) {:<13} {}", i + 1, c, c.description())?;
                }

                let Some(line) = self.prompt("Category: ")? else {
                    return Ok(Step::Quit);
                };
                match pick(&line, &categories) {
                    Some(category) => category,
                    None => {
                        writeln!(self.out, "Unknown category: {}", line)?;
                        return Ok(Step::Continue);
                    }
                }
            }
        };

        self.game.apply(Action::SelectCategory(category))?;
        Ok(Step::Continue)
    }

    fn choose_difficulty(&mut self) -> Result<Step> {
        let difficulty = match self.difficulty.take() {
            Some(difficulty) => difficulty,
            None => {
                if let Some(error) = &self.game.state().error {
                    writeln!(self.out, "\n{}", error)?;
                }

                let difficulties = available_difficulties();
                writeln!(self.out, "\nChoose a difficulty:")?;
                for (i, d) in difficulties.iter().enumerate() {
                    writeln!(self.out, "  {}) {:<10} {}", i + 1, d, d.description())?;
                }

                let Some(line) = self.prompt("Difficulty (b to go back): ")? else {
                    return Ok(Step::Quit);
                };
                if line.eq_ignore_ascii_case("b") {
                    self.game.apply(Action::BackToCategory)?;
                    return Ok(Step::Continue);
                }
                match pick(&line, &difficulties) {
                    Some(difficulty) => difficulty,
                    None => {
                        writeln!(self.out, "Unknown difficulty: {}", line)?;
                        return Ok(Step::Continue);
                    }
                }
            }
        };

        self.game.apply(Action::SelectDifficulty(difficulty))?;
        Ok(Step::Continue)
    }

    async fn generate(&mut self) -> Result<Step> {
        writeln!(self.out, "\nGenerating rounds...")?;
        self.out.flush()?;

        self.game.generate(self.provider).await?;
        Ok(Step::Continue)
    }

    fn place_pin(&mut self) -> Result<Step> {
        let (question, pin) = match (self.game.current_round(), self.game.state().user_pin) {
            (Some(round), Some(pin)) => (round.location_question.question.clone(), pin),
            _ => return Err(Error::InvalidAction("No round to place a pin for".to_string())),
        };
        let state = self.game.state();
        writeln!(
            self.out,
            "\n=== Round {}/{} === Score: {}",
            state.current_round + 1,
            state.total_rounds,
            state.score
        )?;
        writeln!(self.out, "{}", question)?;
        writeln!(self.out, "Your pin is at {}", pin)?;

        let Some(line) = self.prompt("Move the pin (lat, lng) or press Enter to submit: ")? else {
            return Ok(Step::Quit);
        };

        if !line.is_empty() {
            match line.parse::<Coordinates>() {
                Ok(coords) => {
                    self.game.apply(Action::MovePin(coords))?;
                }
                Err(e) => writeln!(self.out, "{}", e)?,
            }
            return Ok(Step::Continue);
        }

        if let Event::PinScored(result) = self.game.apply(Action::SubmitPin)? {
            if let Some(round) = self.game.current_round() {
                let location = &round.location_question;
                writeln!(self.out, "Answer: {} ({})", location.answer, location.coordinates)?;
            }
            writeln!(
                self.out,
                "Your pin was {:.1} km away: +{} points",
                result.distance_km, result.points
            )?;
        }
        Ok(Step::Continue)
    }

    fn answer_follow_up(&mut self) -> Result<Step> {
        let Some(follow_up) = self.game.follow_up().cloned() else {
            return Ok(Step::Continue);
        };
        let state = self.game.state();
        let index = state.current_follow_up_index;

        if follow_up.revealed {
            let what_next = if index + 1 < FOLLOW_UPS_PER_ROUND {
                "the next question"
            } else if state.current_round + 1 < state.total_rounds {
                "the next round"
            } else {
                "your final score"
            };
            if self.prompt(&format!("Press Enter for {}: ", what_next))?.is_none() {
                return Ok(Step::Quit);
            }
            self.game.apply(Action::Next)?;
            return Ok(Step::Continue);
        }

        let presented = &follow_up.presented;
        writeln!(
            self.out,
            "\nQuestion {}/{}: {}",
            index + 1,
            FOLLOW_UPS_PER_ROUND,
            presented.question
        )?;
        for (i, option) in presented.options.iter().enumerate() {
            writeln!(self.out, "  {}) {}", i + 1, option)?;
        }

        let Some(line) = self.prompt("Answer: ")? else {
            return Ok(Step::Quit);
        };
        let choice = match line.parse::<usize>() {
            Ok(n) if (1..=presented.options.len()).contains(&n) => n - 1,
            _ => {
                writeln!(self.out, "Pick a number from 1 to {}", presented.options.len())?;
                return Ok(Step::Continue);
            }
        };

        self.game.apply(Action::SelectOption(choice))?;
        if let Event::AnswerRevealed {
            correct,
            correct_index,
        } = self.game.apply(Action::SubmitAnswer)?
        {
            if correct {
                writeln!(self.out, "Correct! +1 point")?;
            } else {
                writeln!(self.out, "Wrong. The answer was: {}", presented.options[correct_index])?;
            }
        }
        Ok(Step::Continue)
    }

    fn scoreboard(&mut self) -> Result<Step> {
        let state = self.game.state();
        let (score, category, difficulty) = (state.score, state.category, state.difficulty);

        writeln!(self.out, "\n=== Game over ===")?;
        writeln!(self.out, "Final score: {}/{}", score, self.game.max_possible_score())?;
        for (i, points) in state.round_scores.iter().enumerate() {
            writeln!(self.out, "  Round {}: {} pin points", i + 1, points)?;
        }

        if let Some(path) = self.leaderboard.clone() {
            let board = Leaderboard::load_from(path.clone());
            if !board.is_empty() {
                writeln!(self.out)?;
                print_scores(board.entries(), MAX_ENTRIES, &mut self.out)?;
            }

            if self.record_scores {
                let Some(name) = self.prompt("\nName for the leaderboard (Enter to skip): ")? else {
                    return Ok(Step::Quit);
                };
                if let (Some(category), Some(difficulty)) = (category, difficulty) {
                    self.record_score(path, &name, score, category, difficulty)?;
                }
            }
        }

        match self.prompt("Play again? [y/N]: ")? {
            Some(answer) if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") => {
                self.game.apply(Action::PlayAgain)?;
                Ok(Step::Continue)
            }
            _ => Ok(Step::Quit),
        }
    }

    /// Add the result to the leaderboard file, reading it fresh first
    fn record_score(
        &mut self,
        path: PathBuf,
        name: &str,
        score: u32,
        category: Category,
        difficulty: Difficulty,
    ) -> Result<()> {
        if normalize_name(name).is_none() {
            return Ok(());
        }

        let mut board = Leaderboard::load_from(path);

        match board.submit(name, score, category, difficulty) {
            Some(rank) => {
                if let Err(e) = board.save() {
                    warn!("Could not save leaderboard: {}", e);
                }
                writeln!(self.out, "You placed #{}!\n", rank + 1)?;
                print_scores(board.entries(), MAX_ENTRIES, &mut self.out)?;
            }
            None => writeln!(self.out, "Not in the top {} this time.", MAX_ENTRIES)?,
        }
        Ok(())
    }
}

/// Resolve a menu answer given as a 1-based number or a name
fn pick<T: Copy + FromStr>(line: &str, choices: &[T]) -> Option<T> {
    if let Ok(n) = line.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| choices.get(i)).copied();
    }
    line.parse().ok()
}
