//! Fixed round provider
//!
//! Serves rounds from a JSON file (an array of rounds) or from a built-in
//! sample set. Used for offline play and as a deterministic provider in
//! tests.

use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::provider::{RoundProvider, RoundRequest};
use crate::quiz::{GameRound, LocationQuestion, MultipleChoiceQuestion};
use std::fs;
use std::path::Path;

/// Provider backed by a fixed list of rounds
#[derive(Debug, Clone)]
pub struct FixedProvider {
    rounds: Vec<GameRound>,
}

impl FixedProvider {
    /// Create a provider over `rounds`
    ///
    /// Every round is validated up front so bad files fail at startup.
    pub fn new(rounds: Vec<GameRound>) -> Result<Self> {
        if rounds.is_empty() {
            return Err(Error::InvalidRound("Round list is empty".to_string()));
        }
        for round in &rounds {
            round.validate()?;
        }
        Ok(Self { rounds })
    }

    /// Provider over the built-in sample rounds
    pub fn sample() -> Self {
        Self {
            rounds: sample_rounds(),
        }
    }

    /// Load rounds from a JSON file containing an array of rounds
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read rounds file {}: {}", path.display(), e))
        })?;

        let rounds: Vec<GameRound> = serde_json::from_str(&content).map_err(|e| {
            Error::Config(format!("Failed to parse rounds file {}: {}", path.display(), e))
        })?;

        Self::new(rounds)
    }
}

impl RoundProvider for FixedProvider {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn generate_round(&self, request: &RoundRequest) -> Result<GameRound> {
        let index = request.round_number.saturating_sub(1) % self.rounds.len();
        Ok(self.rounds[index].clone())
    }
}

fn mcq(question: &str, options: [&str; 4], correct_answer: usize) -> MultipleChoiceQuestion {
    MultipleChoiceQuestion {
        question: question.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer,
    }
}

/// Three WW1 rounds for offline play
pub fn sample_rounds() -> Vec<GameRound> {
    vec![
        GameRound {
            location_question: LocationQuestion {
                question: "Where was Archduke Franz Ferdinand assassinated on 28 June 1914?"
                    .to_string(),
                answer: "Sarajevo".to_string(),
                coordinates: Coordinates::new(43.8563, 18.4131),
            },
            follow_up_questions: vec![
                mcq(
                    "Who fired the shots that killed the Archduke?",
                    ["Gavrilo Princip", "Nedeljko Čabrinović", "Dragutin Dimitrijević", "Muhamed Mehmedbašić"],
                    0,
                ),
                mcq(
                    "Which secret society armed the assassins?",
                    ["The Carbonari", "The Black Hand", "The Okhrana", "The Young Turks"],
                    1,
                ),
                mcq(
                    "Which empire had annexed Bosnia and Herzegovina in 1908?",
                    ["Ottoman Empire", "Russian Empire", "German Empire", "Austria-Hungary"],
                    3,
                ),
                mcq(
                    "Who was killed alongside the Archduke?",
                    ["His son Maximilian", "General Potiorek", "His wife Sophie", "Count Harrach"],
                    2,
                ),
                mcq(
                    "When did Austria-Hungary declare war on Serbia?",
                    ["28 July 1914", "1 August 1914", "4 August 1914", "23 July 1914"],
                    0,
                ),
            ],
        },
        GameRound {
            location_question: LocationQuestion {
                question: "Where did the German offensive of 21 February 1916 open the longest battle of the war?"
                    .to_string(),
                answer: "Verdun".to_string(),
                coordinates: Coordinates::new(49.1600, 5.3845),
            },
            follow_up_questions: vec![
                mcq(
                    "Which German general planned the offensive?",
                    ["Paul von Hindenburg", "Erich von Falkenhayn", "Erich Ludendorff", "Helmuth von Moltke"],
                    1,
                ),
                mcq(
                    "Which French commander is associated with 'Ils ne passeront pas'?",
                    ["Ferdinand Foch", "Joseph Joffre", "Robert Nivelle", "Douglas Haig"],
                    2,
                ),
                mcq(
                    "What name was given to the supply road into Verdun?",
                    ["La Voie Sacrée", "Le Chemin des Dames", "La Route Nationale", "La Voie Ferrée"],
                    0,
                ),
                mcq(
                    "Which fort fell to the Germans on 25 February 1916?",
                    ["Fort Vaux", "Fort Souville", "Fort Tavannes", "Fort Douaumont"],
                    3,
                ),
                mcq(
                    "On which river does Verdun stand?",
                    ["Marne", "Somme", "Meuse", "Moselle"],
                    2,
                ),
            ],
        },
        GameRound {
            location_question: LocationQuestion {
                question: "Where did ANZAC troops land on 25 April 1915?".to_string(),
                answer: "Gallipoli (Anzac Cove)".to_string(),
                coordinates: Coordinates::new(40.2460, 26.2780),
            },
            follow_up_questions: vec![
                mcq(
                    "Which strait was the campaign meant to open?",
                    ["Bosporus", "Dardanelles", "Strait of Otranto", "Kerch Strait"],
                    1,
                ),
                mcq(
                    "Which British minister championed the campaign?",
                    ["David Lloyd George", "Herbert Asquith", "Winston Churchill", "Lord Kitchener"],
                    2,
                ),
                mcq(
                    "Which Ottoman officer rose to fame defending the peninsula?",
                    ["Enver Pasha", "Mustafa Kemal", "Djemal Pasha", "Talaat Pasha"],
                    1,
                ),
                mcq(
                    "When were the last Allied troops evacuated?",
                    ["January 1916", "August 1915", "December 1916", "March 1916"],
                    0,
                ),
                mcq(
                    "What does ANZAC stand for?",
                    [
                        "Allied Navy Zone Assault Corps",
                        "Australian National Zealand Army Command",
                        "Atlantic and North Zone Army Corps",
                        "Australian and New Zealand Army Corps",
                    ],
                    3,
                ),
            ],
        },
    ]
}
