use std::sync::Arc;

use agent::strategy::{RandomMove, Strategy};
use common::{
    error::{ConfigError, EngineError},
    model::{
        game::{Move, Outcome},
        round::{Phase, RoundId, RoundState},
    },
};
use tokio::{
    sync::{watch, Mutex},
    time::Instant,
};
use tracing::{debug, info, warn};

use super::suspense::{SuspenseJob, SuspenseTimer};
use crate::config::EngineConfig;

/// Owns the state of the current round and drives it through
/// `Idle -> Suspense -> Resolved -> (reset) -> Idle`.
///
/// Resolution happens on a spawned task, so a tokio runtime must be running
/// when a move is submitted. Presenters observe the round through
/// [`RoundEngine::current_state`] or [`RoundEngine::subscribe`].
pub struct RoundEngine {
    config: EngineConfig,
    state: Arc<watch::Sender<RoundState>>,
    opponent: Arc<Mutex<Box<dyn Strategy>>>,
    timer: Option<SuspenseTimer>,
}

impl RoundEngine {
    /// Engine with a uniformly random opponent, seeded from `config.seed`.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        let opponent = RandomMove::from_seed(config.seed);
        Self::with_strategy(config, Box::new(opponent))
    }

    pub fn with_strategy(
        config: EngineConfig,
        opponent: Box<dyn Strategy>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let (state, _) = watch::channel(RoundState::new());
        Ok(RoundEngine {
            config,
            state: Arc::new(state),
            opponent: Arc::new(Mutex::new(opponent)),
            timer: None,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Plays `player_move` and starts the suspense countdown. Only valid while idle.
    pub fn submit_move(&mut self, player_move: Move) -> Result<(), EngineError> {
        let (phase, round_id) = {
            let state = self.state.borrow();
            (state.phase, state.round_id)
        };
        if phase != Phase::Idle {
            warn!(
                "Rejected {} for round {}: round is {}",
                player_move, round_id, phase
            );
            return Err(EngineError::InvalidTransition { phase });
        }

        let started_at = Instant::now();
        self.state.send_modify(|state| {
            state.player_move = Some(player_move);
            state.phase = Phase::Suspense;
            state.suspense_display_move = Move::ALL[0];
        });
        self.timer = Some(SuspenseTimer::start(SuspenseJob {
            round_id,
            started_at,
            config: self.config.clone(),
            state: self.state.clone(),
            opponent: self.opponent.clone(),
        }));
        info!(
            "Round {}: player played {}, resolving in {:?}",
            round_id, player_move, self.config.suspense
        );
        Ok(())
    }

    /// Starts a new round from any phase, cancelling a pending resolution.
    pub fn reset(&mut self) {
        self.cancel_timer();
        let previous = self.state.send_replace(RoundState::new());
        info!(
            "Round {} reset while {}, new round {}",
            previous.round_id,
            previous.phase,
            self.state.borrow().round_id
        );
    }

    pub fn current_state(&self) -> RoundState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every transition and every placeholder update.
    pub fn subscribe(&self) -> watch::Receiver<RoundState> {
        self.state.subscribe()
    }

    /// Cancels any pending resolution. The current state is left as is.
    pub fn shutdown(&mut self) {
        self.cancel_timer();
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            debug!("Dropping suspense timer for round {}", timer.round_id());
            timer.cancel();
        }
    }
}

impl Drop for RoundEngine {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Completes `state` with the opponent's move if it is still round `round_id`
/// in suspense. Returns the outcome when the round was resolved.
pub(crate) fn resolve(
    state: &mut RoundState,
    round_id: RoundId,
    opponent_move: Move,
) -> Option<Outcome> {
    if state.round_id != round_id || state.phase != Phase::Suspense {
        return None;
    }
    let player_move = state.player_move?;
    let outcome = Outcome::decide(player_move, opponent_move);
    state.opponent_move = Some(opponent_move);
    state.outcome = Some(outcome);
    state.phase = Phase::Resolved;
    Some(outcome)
}
