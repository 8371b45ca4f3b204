use std::{future::Future, io};

use async_trait::async_trait;
use common::{message::input::Input, model::round::RoundState};
use tracing::{debug, info};

use super::round_engine::RoundEngine;

/// A front end for the round engine. It shows snapshots and hands back raw
/// lines of user input; it never touches round state itself.
#[async_trait]
pub trait Presenter: Send {
    async fn render(&mut self, state: &RoundState) -> io::Result<()>;

    /// Next line of input, or `None` once input is exhausted.
    /// Must be cancel safe, it races against state updates.
    async fn read_input(&mut self) -> io::Result<Option<String>>;

    /// Feedback that isn't a state change, e.g. a rejected move.
    async fn notify(&mut self, message: &str) -> io::Result<()>;
}

/// Runs `presenter` against `engine` until the user quits, input ends, or
/// `shutdown` resolves. Any pending resolution is cancelled on the way out.
pub async fn drive<P, S>(presenter: &mut P, engine: &mut RoundEngine, shutdown: S) -> io::Result<()>
where
    P: Presenter,
    S: Future<Output = ()>,
{
    let mut updates = engine.subscribe();
    let initial = updates.borrow_and_update().clone();
    presenter.render(&initial).await?;

    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("Shutdown requested");
                break;
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                presenter.render(&state).await?;
            }
            line = presenter.read_input() => {
                let Some(line) = line? else {
                    debug!("Input closed");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<Input>() {
                    Ok(Input::Move { value }) => {
                        if let Err(e) = engine.submit_move(value) {
                            presenter.notify(&e.to_string()).await?;
                        }
                    }
                    Ok(Input::Reset) => engine.reset(),
                    Ok(Input::Quit) => break,
                    Err(e) => presenter.notify(&e.to_string()).await?,
                }
            }
        }
    }
    engine.shutdown();
    Ok(())
}
