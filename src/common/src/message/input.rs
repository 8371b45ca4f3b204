use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{error::ParseInputError, model::game::Move};

/// Requests a presenter forwards to the round engine.
///
/// Text input is either a bare command (`rock`, `p`, `✌️`, `new`, `quit`, ...)
/// or, for scripted front ends, a JSON object such as
/// `{"type": "Move", "value": "Rock"}`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum Input {
    Move { value: Move },
    Reset,
    Quit,
}

impl FromStr for Input {
    type Err = ParseInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.starts_with('{') {
            return Ok(serde_json::from_str(text)?);
        }
        match text.to_lowercase().as_str() {
            "new" | "reset" | "n" => Ok(Input::Reset),
            "quit" | "exit" | "q" => Ok(Input::Quit),
            _ => text
                .parse::<Move>()
                .map(|value| Input::Move { value })
                .map_err(|_| ParseInputError::Unknown {
                    input: text.to_owned(),
                }),
        }
    }
}
