//! Terminal client: plays the game locally and talks to the score service
//! only to submit a finished game and to show the high scores.

use std::io;

use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};

use snake_scores::api::{ApiResult, ScoreClient};
use snake_scores::game::TICK_INTERVAL;
use snake_scores::{Leaderboard, ScoreEntry};

mod app;
mod term;
mod view;

use app::{App, Command, FetchId};
use term::TermManager;

/// Answers from the score service, delivered back to the event loop.
enum Reply {
    Submitted(ApiResult<ScoreEntry>),
    Scores(FetchId, ApiResult<Leaderboard<ScoreEntry>>),
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let client = ScoreClient::from_env();

    let mut term = TermManager::new();
    term.setup()?;
    let result = run(&mut term, client).await;
    term.restore()?;
    result
}

async fn run(term: &mut TermManager, client: ScoreClient) -> io::Result<()> {
    let (key_sender, mut keys) = mpsc::unbounded_channel();
    std::thread::spawn(move || term::forward_keys(key_sender));

    let (reply_sender, mut replies) = mpsc::unbounded_channel();

    let mut ticks = interval(TICK_INTERVAL);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut rng = rand::thread_rng();
    let mut app = App::new();
    term.draw(&view::render(&app))?;

    loop {
        let command = tokio::select! {
            _ = ticks.tick() => app.handle_tick(&mut rng),
            key = keys.recv() => match key {
                Some(key) => app.handle_key(key, &mut rng),
                None => Some(Command::Quit),
            },
            Some(reply) = replies.recv() => {
                match reply {
                    Reply::Submitted(result) => app.submission_finished(result),
                    Reply::Scores(fetch, result) => app.scores_loaded(fetch, result),
                }
                None
            }
        };

        match command {
            Some(Command::Quit) => break,
            Some(Command::Submit(new_score)) => {
                let client = client.clone();
                let reply_sender = reply_sender.clone();
                tokio::spawn(async move {
                    let result = client.submit(&new_score).await;
                    reply_sender.send(Reply::Submitted(result)).ok();
                });
            }
            Some(Command::FetchScores(fetch)) => {
                let client = client.clone();
                let reply_sender = reply_sender.clone();
                tokio::spawn(async move {
                    let result = client.list().await;
                    reply_sender.send(Reply::Scores(fetch, result)).ok();
                });
            }
            None => {}
        }

        term.draw(&view::render(&app))?;
    }

    Ok(())
}
