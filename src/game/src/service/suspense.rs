use std::sync::Arc;

use agent::strategy::Strategy;
use common::model::{
    game::Move,
    round::{Phase, RoundId, RoundState},
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tokio::{
    sync::{watch, Mutex},
    task::JoinHandle,
    time::{self, Instant, Interval},
};
use tracing::{debug, info, trace};

use super::round_engine::resolve;
use crate::config::{CycleMode, EngineConfig};

// Keeps the placeholder stream apart from the opponent's stream under one seed.
const DISPLAY_SEED_OFFSET: u64 = 0x9E37_79B9_7F4A_7C15;

/// Handle to the scheduled resolution of one round.
///
/// The countdown and the cosmetic tick live in the same task, so cancelling
/// (or dropping) the handle stops both.
pub struct SuspenseTimer {
    round_id: RoundId,
    handle: JoinHandle<()>,
}

impl SuspenseTimer {
    pub(crate) fn start(job: SuspenseJob) -> Self {
        let round_id = job.round_id;
        let handle = tokio::spawn(job.run());
        SuspenseTimer { round_id, handle }
    }

    pub fn round_id(&self) -> RoundId {
        self.round_id
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn cancel(self) {
        if !self.handle.is_finished() {
            debug!("Cancelling pending resolution of round {}", self.round_id);
        }
        // Drop aborts the task
    }
}

impl Drop for SuspenseTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub(crate) struct SuspenseJob {
    pub round_id: RoundId,
    pub started_at: Instant,
    pub config: EngineConfig,
    pub state: Arc<watch::Sender<RoundState>>,
    pub opponent: Arc<Mutex<Box<dyn Strategy>>>,
}

impl SuspenseJob {
    async fn run(self) {
        let deadline = self.started_at + self.config.suspense;
        let mut ticker = self
            .config
            .tick
            .map(|period| time::interval_at(self.started_at + period, period));
        let mut cycle = DisplayCycle::new(self.config.cycle, self.config.seed);

        let countdown = time::sleep_until(deadline);
        tokio::pin!(countdown);
        loop {
            tokio::select! {
                // The countdown wins when it lands on the same instant as a tick
                biased;
                _ = &mut countdown => break,
                _ = next_tick(&mut ticker) => {
                    if !self.advance_display(&mut cycle) {
                        // Superseded round, nothing left to do
                        return;
                    }
                }
            }
        }

        let opponent_move = self.opponent.lock().await.make_move();
        let round_id = self.round_id;
        let mut outcome = None;
        self.state.send_if_modified(|state| {
            outcome = resolve(state, round_id, opponent_move);
            outcome.is_some()
        });
        match outcome {
            Some(outcome) => info!(
                "Round {} resolved: opponent played {}, {:?}",
                round_id, opponent_move, outcome
            ),
            None => debug!("Round {} was superseded before resolving", round_id),
        }
    }

    // Returns false once the round this job belongs to is gone.
    fn advance_display(&self, cycle: &mut DisplayCycle) -> bool {
        let round_id = self.round_id;
        let mut current = true;
        self.state.send_if_modified(|state| {
            if state.round_id != round_id || state.phase != Phase::Suspense {
                current = false;
                return false;
            }
            state.suspense_display_move = cycle.next(state.suspense_display_move);
            trace!("Round {} showing {}", round_id, state.suspense_display_move);
            true
        });
        current
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

enum DisplayCycle {
    Sequential,
    Random(ChaCha8Rng),
}

impl DisplayCycle {
    fn new(mode: CycleMode, seed: Option<u64>) -> Self {
        match mode {
            CycleMode::Sequential => DisplayCycle::Sequential,
            CycleMode::Random => DisplayCycle::Random(match seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(DISPLAY_SEED_OFFSET)),
                None => ChaCha8Rng::from_entropy(),
            }),
        }
    }

    fn next(&mut self, current: Move) -> Move {
        match self {
            DisplayCycle::Sequential => current.next(),
            DisplayCycle::Random(rng) => Move::ALL[rng.gen_range(0..Move::ALL.len())],
        }
    }
}
