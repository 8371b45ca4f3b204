use std::io;

use async_trait::async_trait;
use common::model::{
    game::{Move, UNKNOWN_GLYPH},
    round::{Phase, RoundState},
};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, Lines};

use super::presenter::Presenter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One serialized snapshot per line.
    Json,
}

/// Line based front end over any async reader/writer pair (stdin/stdout in the binary).
pub struct ConsolePresenter<R, W> {
    lines: Lines<BufReader<R>>,
    out: W,
    format: OutputFormat,
}

impl<R, W> ConsolePresenter<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(input: R, out: W, format: OutputFormat) -> Self {
        ConsolePresenter {
            lines: BufReader::new(input).lines(),
            out,
            format,
        }
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    async fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.out.write_all(line.as_bytes()).await?;
        self.out.write_all(b"\n").await?;
        self.out.flush().await
    }
}

pub fn describe(state: &RoundState) -> String {
    match state.phase {
        Phase::Idle => format!(
            "CPU: {}  Make your selection: rock, paper or scissors",
            UNKNOWN_GLYPH
        ),
        Phase::Suspense => format!(
            "CPU: {}  thinking...",
            state.suspense_display_move.glyph()
        ),
        Phase::Resolved => {
            let glyph = |mv: Option<Move>| {
                mv.map(|mv| mv.glyph()).unwrap_or(UNKNOWN_GLYPH)
            };
            let result = state.outcome.map(|o| o.message()).unwrap_or_default();
            format!(
                "You: {}  CPU: {}  {}\nType `new` to start a new game",
                glyph(state.player_move),
                glyph(state.opponent_move),
                result
            )
        }
    }
}

#[async_trait]
impl<R, W> Presenter for ConsolePresenter<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn render(&mut self, state: &RoundState) -> io::Result<()> {
        let line = match self.format {
            OutputFormat::Text => describe(state),
            OutputFormat::Json => serde_json::to_string(state)?,
        };
        self.write_line(&line).await
    }

    async fn read_input(&mut self) -> io::Result<Option<String>> {
        self.lines.next_line().await
    }

    async fn notify(&mut self, message: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => self.write_line(message).await,
            OutputFormat::Json => {
                let line = serde_json::json!({ "notice": message }).to_string();
                self.write_line(&line).await
            }
        }
    }
}
