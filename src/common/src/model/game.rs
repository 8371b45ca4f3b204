use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseMoveError;

/// Shown wherever a move isn't known yet.
pub const UNKNOWN_GLYPH: &str = "❓";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    PlayerWins,
    OpponentWins,
    Draw,
}
impl Outcome {
    /// Outcome of `player` against `opponent` under the cyclic rule:
    /// rock beats scissors, scissors beats paper, paper beats rock.
    pub fn decide(player: Move, opponent: Move) -> Self {
        match player.beats(&opponent) {
            None => Outcome::Draw,
            Some(true) => Outcome::PlayerWins,
            Some(false) => Outcome::OpponentWins,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Outcome::PlayerWins => "You win!",
            Outcome::OpponentWins => "You lose!",
            Outcome::Draw => "It's a draw!",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}
impl Move {
    /// Every move, in enumeration order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    pub fn beats(&self, other: &Move) -> Option<bool> {
        if self == other {
            None
        } else {
            Some(matches!(
                (self, other),
                (Move::Rock, Move::Scissors)
                    | (Move::Scissors, Move::Paper)
                    | (Move::Paper, Move::Rock)
            ))
        }
    }

    /// The following move in enumeration order, wrapping from scissors to rock.
    pub fn next(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Move::Rock => "✊",
            Move::Paper => "✋",
            Move::Scissors => "✌️",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        };
        f.write_str(name)
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        match input.to_lowercase().as_str() {
            "rock" | "r" | "✊" => Ok(Move::Rock),
            "paper" | "p" | "✋" => Ok(Move::Paper),
            "scissors" | "s" | "✌️" | "✌" => Ok(Move::Scissors),
            _ => Err(ParseMoveError {
                input: input.to_owned(),
            }),
        }
    }
}
