use clap::Parser;
use game::{
    config::Args,
    entrypoint::{init_logging, play, Result},
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    play(args).await
}
