use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::game::{Move, Outcome};

/// Identifies one round. A new id is minted whenever a round state is created,
/// so work scheduled for an earlier round can tell it has been superseded.
#[derive(Debug, Hash, Eq, PartialEq, Clone, Copy)]
pub struct RoundId(pub Uuid);

impl RoundId {
    pub fn new() -> Self {
        RoundId(Uuid::new_v4())
    }
}

impl Default for RoundId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for RoundId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let uuid = Uuid::parse_str(&s).map_err(serde::de::Error::custom)?;
        Ok(RoundId(uuid))
    }
}
impl Serialize for RoundId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    Suspense,
    Resolved,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Suspense => "in suspense",
            Phase::Resolved => "resolved",
        };
        f.write_str(name)
    }
}

/// Snapshot of a single round.
///
/// `opponent_move` and `outcome` are present exactly when the phase is
/// [`Phase::Resolved`]; `player_move` is present from the moment the player
/// acts until the round is reset. `suspense_display_move` only carries meaning
/// while in [`Phase::Suspense`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RoundState {
    pub round_id: RoundId,
    pub phase: Phase,
    pub player_move: Option<Move>,
    pub opponent_move: Option<Move>,
    pub outcome: Option<Outcome>,
    pub suspense_display_move: Move,
}

impl RoundState {
    pub fn new() -> Self {
        RoundState {
            round_id: RoundId::new(),
            phase: Phase::Idle,
            player_move: None,
            opponent_move: None,
            outcome: None,
            suspense_display_move: Move::ALL[0],
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}
