use std::{fs, time::Duration};

use agent::strategy::Scripted;
use common::{
    error::EngineError,
    model::{
        game::{Move, Outcome},
        round::{Phase, RoundId},
    },
};
use serde::Deserialize;
use tokio::time;
use tracing::{debug, info, Level};

use crate::{config::EngineConfig, service::round_engine::RoundEngine};

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Event {
    Submit {
        value: Move,
        #[serde(default)]
        rejected: bool,
    },
    Reset,
    Advance {
        ms: u64,
    },
    // Absent fields are expected to be absent; `display` is only checked when given
    Expect {
        phase: Phase,
        player_move: Option<Move>,
        opponent_move: Option<Move>,
        outcome: Option<Outcome>,
        display: Option<Move>,
        same_round: Option<bool>,
    },
    Comment {
        text: String,
    },
}

/// A scripted round, replayed against an engine whose opponent plays
/// `opponent` in order.
#[derive(Deserialize)]
pub struct ScenarioCase {
    opponent: Vec<Move>,
    #[serde(default)]
    suspense_ms: Option<u64>,
    sequence: Vec<Event>,
}

impl ScenarioCase {
    pub fn load(name: &str) -> Self {
        let file_path = env!("CARGO_MANIFEST_DIR").to_string() + "/test/data/" + name;
        let text = fs::read_to_string(&file_path).expect("Unable to read file");
        serde_json::from_str(&text).expect("Could not parse test case")
    }

    pub async fn run(&self) {
        let _ = tracing_subscriber::fmt()
            .with_line_number(true)
            .with_file(true)
            .with_max_level(Level::DEBUG)
            .try_init();

        let mut config = EngineConfig::default();
        if let Some(ms) = self.suspense_ms {
            config.suspense = Duration::from_millis(ms);
        }
        let mut engine =
            RoundEngine::with_strategy(config, Box::new(Scripted::new(self.opponent.clone())))
                .expect("Invalid scenario config");
        let mut last_round: Option<RoundId> = None;

        for (step, event) in self.sequence.iter().enumerate() {
            match event {
                Event::Submit { value, rejected } => {
                    let before = engine.current_state();
                    let result = engine.submit_move(*value);
                    debug!("Step {}: submit {} -> {:?}", step, value, result);
                    if *rejected {
                        assert_eq!(
                            result,
                            Err(EngineError::InvalidTransition {
                                phase: before.phase
                            }),
                            "step {}",
                            step
                        );
                        assert_eq!(engine.current_state(), before, "step {}", step);
                    } else {
                        assert_eq!(result, Ok(()), "step {}", step);
                    }
                }
                Event::Reset => engine.reset(),
                Event::Advance { ms } => time::sleep(Duration::from_millis(*ms)).await,
                Event::Expect {
                    phase,
                    player_move,
                    opponent_move,
                    outcome,
                    display,
                    same_round,
                } => {
                    let state = engine.current_state();
                    assert_eq!(&state.phase, phase, "step {}", step);
                    assert_eq!(&state.player_move, player_move, "step {}", step);
                    assert_eq!(&state.opponent_move, opponent_move, "step {}", step);
                    assert_eq!(&state.outcome, outcome, "step {}", step);
                    if let Some(display) = display {
                        assert_eq!(&state.suspense_display_move, display, "step {}", step);
                    }
                    if let (Some(same), Some(last)) = (same_round, last_round) {
                        assert_eq!(state.round_id == last, *same, "step {}", step);
                    }
                    last_round = Some(state.round_id);
                }
                Event::Comment { text } => {
                    info!("Comment: {:}", text)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn rock_beats_scissors() {
        ScenarioCase::load("rock_beats_scissors.json").run().await;
    }

    #[tokio::test(start_paused = true)]
    async fn paper_against_paper_draws() {
        ScenarioCase::load("paper_draw.json").run().await;
    }

    #[tokio::test(start_paused = true)]
    async fn scissors_lose_to_rock() {
        ScenarioCase::load("scissors_lose_to_rock.json").run().await;
    }

    #[tokio::test(start_paused = true)]
    async fn reset_during_suspense_discards_round() {
        ScenarioCase::load("reset_during_suspense.json").run().await;
    }

    #[tokio::test(start_paused = true)]
    async fn moves_rejected_until_reset() {
        ScenarioCase::load("rejected_moves.json").run().await;
    }

    #[tokio::test(start_paused = true)]
    async fn placeholder_cycles_in_order() {
        ScenarioCase::load("display_cycle.json").run().await;
    }
}
