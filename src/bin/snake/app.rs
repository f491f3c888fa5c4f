use rand::Rng;

use snake_scores::api::ApiResult;
use snake_scores::game::{Direction, Game, PlayerName, TickOutcome, MAX_PLAYER_NAME_LEN};
use snake_scores::{Leaderboard, NewScore, ScoreEntry};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Game,
    Score,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
    Tab,
    Arrow(Direction),
    Quit,
}

/// Identifies one score list request, so late answers can be told apart.
pub type FetchId = u64;

/// Work the event loop has to carry out on behalf of the app.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Submit(NewScore),
    FetchScores(FetchId),
    Quit,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ScoresView {
    Loading,
    Loaded(Leaderboard<ScoreEntry>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: &'static str,
    pub description: &'static str,
}

const NAME_REQUIRED: Notification = Notification {
    title: "Player name required",
    description: "Please enter your name before starting",
};

const API_UNREACHABLE: Notification = Notification {
    title: "Error",
    description: "Failed to connect to the API",
};

/// Client state: which tab is shown, the game, the name field and the
/// outcome of the last request.
pub struct App {
    tab: Tab,
    game: Game,
    name_input: String,
    player: Option<PlayerName>,
    submitting: bool,
    scores: ScoresView,
    /// The only score list request whose answer is still wanted.
    pending_fetch: Option<FetchId>,
    next_fetch: FetchId,
    notification: Option<Notification>,
}

impl App {
    pub fn new() -> Self {
        Self {
            tab: Tab::Game,
            game: Game::new(),
            name_input: String::new(),
            player: None,
            submitting: false,
            scores: ScoresView::Loading,
            pending_fetch: None,
            next_fetch: 0,
            notification: None,
        }
    }

    pub fn handle_key<R: Rng + ?Sized>(&mut self, key: Key, rng: &mut R) -> Option<Command> {
        match key {
            Key::Quit => return Some(Command::Quit),
            Key::Tab => return self.switch_tab(),
            _ => {}
        }

        if self.tab != Tab::Game {
            return None;
        }

        if self.game.is_playing() {
            match key {
                Key::Arrow(direction) => {
                    self.game.turn(direction);
                }
                Key::Char(c) => {
                    if let Some(direction) = wasd(c) {
                        self.game.turn(direction);
                    }
                }
                Key::Enter => self.start(rng),
                _ => {}
            }
            return None;
        }

        match key {
            Key::Char(c) if !c.is_control() => {
                if self.name_input.chars().count() < MAX_PLAYER_NAME_LEN {
                    self.name_input.push(c);
                }
            }
            Key::Backspace => {
                self.name_input.pop();
            }
            Key::Enter => self.start(rng),
            _ => {}
        }
        None
    }

    /// Advances the game by one tick. Returns the score submission when
    /// this tick ended the game.
    pub fn handle_tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Command> {
        // The game is paused while the score table is shown
        if self.tab != Tab::Game {
            return None;
        }

        match self.game.tick(rng) {
            TickOutcome::GameOver { score } => {
                let player = self.player.as_ref()?;
                self.submitting = true;
                Some(Command::Submit(NewScore::new(score, player.as_str())))
            }
            _ => None,
        }
    }

    pub fn submission_finished(&mut self, result: ApiResult<ScoreEntry>) {
        self.submitting = false;
        if result.is_err() {
            self.notification = Some(API_UNREACHABLE);
        }
    }

    /// Applies the answer to request `fetch`. Answers to requests that were
    /// superseded, or that arrive after the score tab was left, are dropped.
    pub fn scores_loaded(&mut self, fetch: FetchId, result: ApiResult<Leaderboard<ScoreEntry>>) {
        if self.pending_fetch != Some(fetch) {
            return;
        }
        self.pending_fetch = None;

        match result {
            Ok(scores) => self.scores = ScoresView::Loaded(scores),
            Err(_) => {
                self.scores = ScoresView::Loaded(Leaderboard::default());
                self.notification = Some(API_UNREACHABLE);
            }
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn name_input(&self) -> &str {
        &self.name_input
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn scores(&self) -> &ScoresView {
        &self.scores
    }

    pub fn notification(&self) -> Option<Notification> {
        self.notification
    }

    fn switch_tab(&mut self) -> Option<Command> {
        match self.tab {
            Tab::Game => {
                let fetch = self.next_fetch;
                self.next_fetch += 1;
                self.pending_fetch = Some(fetch);
                self.tab = Tab::Score;
                self.scores = ScoresView::Loading;
                Some(Command::FetchScores(fetch))
            }
            Tab::Score => {
                self.tab = Tab::Game;
                self.pending_fetch = None;
                None
            }
        }
    }

    fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.submitting {
            return;
        }
        match PlayerName::parse(&self.name_input) {
            Some(player) => {
                self.player = Some(player);
                self.notification = None;
                self.game.start(rng);
            }
            None => self.notification = Some(NAME_REQUIRED),
        }
    }
}

fn wasd(c: char) -> Option<Direction> {
    match c.to_ascii_lowercase() {
        'w' => Some(Direction::Up),
        'a' => Some(Direction::Left),
        's' => Some(Direction::Down),
        'd' => Some(Direction::Right),
        _ => None,
    }
}
