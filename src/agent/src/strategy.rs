use common::model::game::Move;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

/// Chooses the computer's move for a round.
pub trait Strategy: Send {
    fn make_move(&mut self) -> Move;
}

// Random
/// Draws each move with probability 1/3, independent of anything the player did.
pub struct RandomMove {
    rng: ChaCha8Rng,
}
impl RandomMove {
    pub fn new() -> Self {
        RandomMove {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Reproducible sequence of moves for a given seed.
    pub fn seeded(seed: u64) -> Self {
        RandomMove {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }
}
impl Default for RandomMove {
    fn default() -> Self {
        Self::new()
    }
}
impl Strategy for RandomMove {
    fn make_move(&mut self) -> Move {
        let chosen = Move::ALL[self.rng.gen_range(0..Move::ALL.len())];
        trace!("RandomMove drew {}", chosen);
        chosen
    }
}

// Trivial strategies
pub struct Fixed(pub Move);
impl Strategy for Fixed {
    fn make_move(&mut self) -> Move {
        self.0
    }
}

/// Plays `moves` in order, starting over after the last one.
pub struct Scripted {
    moves: Vec<Move>,
    position: usize,
}
impl Scripted {
    pub fn new(moves: Vec<Move>) -> Self {
        assert!(!moves.is_empty(), "Scripted strategy needs at least one move");
        Scripted { moves, position: 0 }
    }
}
impl Strategy for Scripted {
    fn make_move(&mut self) -> Move {
        let next = self.moves[self.position];
        self.position = (self.position + 1) % self.moves.len();
        next
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn random_move_is_uniform() {
        let trials = 30_000;
        let mut strategy = RandomMove::seeded(7);
        let mut counts: HashMap<Move, usize> = HashMap::new();
        for _ in 0..trials {
            *counts.entry(strategy.make_move()).or_default() += 1;
        }
        // Expected 10_000 each, sd ~82; 500 is a generous bound.
        for mv in Move::ALL {
            let count = counts.get(&mv).copied().unwrap_or(0);
            assert!(
                count.abs_diff(trials / 3) < 500,
                "{} drawn {} times out of {}",
                mv,
                count,
                trials
            );
        }
    }

    #[test]
    fn seeded_random_move_is_reproducible() {
        let mut a = RandomMove::seeded(42);
        let mut b = RandomMove::from_seed(Some(42));
        let first: Vec<Move> = (0..32).map(|_| a.make_move()).collect();
        let second: Vec<Move> = (0..32).map(|_| b.make_move()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn fixed_always_plays_its_move() {
        let mut strategy = Fixed(Move::Paper);
        assert!((0..10).all(|_| strategy.make_move() == Move::Paper));
    }

    #[test]
    fn scripted_wraps_around() {
        let mut strategy = Scripted::new(vec![Move::Scissors, Move::Rock]);
        let played: Vec<Move> = (0..5).map(|_| strategy.make_move()).collect();
        assert_eq!(
            played,
            vec![
                Move::Scissors,
                Move::Rock,
                Move::Scissors,
                Move::Rock,
                Move::Scissors
            ]
        );
    }

    #[test]
    #[should_panic]
    fn scripted_needs_moves() {
        Scripted::new(vec![]);
    }
}
