//! Turns the app state into the lines of one terminal frame.

use snake_scores::game::{Position, Status, GRID_SIZE};
use snake_scores::ScoreEntry;

use crate::app::{App, ScoresView, Tab};

const EMPTY_CELL: &str = " .";
const SNAKE_CELL: &str = "[]";
const HEAD_CELL: &str = "@@";
const FOOD_CELL: &str = "()";

/// Width of the grid on screen, borders included.
const BOARD_WIDTH: usize = GRID_SIZE as usize * 2 + 2;

pub fn render(app: &App) -> Vec<String> {
    let mut lines = vec![navbar(app.tab()), String::new()];

    match app.tab() {
        Tab::Game => render_game(app, &mut lines),
        Tab::Score => render_scores(app.scores(), &mut lines),
    }

    lines.push(String::new());
    if let Some(notification) = app.notification() {
        lines.push(format!("! {}: {}", notification.title, notification.description));
    }
    lines
}

fn navbar(tab: Tab) -> String {
    let (game, score) = match tab {
        Tab::Game => ("[Game]", " Score "),
        Tab::Score => (" Game ", "[Score]"),
    };
    format!(
        "My snake game   {} {}   (Tab: switch, Esc: quit)",
        game, score
    )
}

fn render_game(app: &App, lines: &mut Vec<String>) {
    let game = app.game();

    let button = if game.is_playing() {
        "Restart"
    } else {
        "Start Game"
    };
    lines.push(format!(
        "Name: {:<20}  Score: {:<6} [Enter] {}",
        app.name_input(),
        game.score(),
        button
    ));
    lines.push(String::new());

    let border = format!("+{}+", "-".repeat(BOARD_WIDTH - 2));
    lines.push(border.clone());

    let snake: Vec<Position> = game.snake().collect();
    let head = game.head();
    let mut rows: Vec<String> = (0..GRID_SIZE)
        .map(|y| {
            let cells: String = (0..GRID_SIZE)
                .map(|x| {
                    let position = Position::new(x, y);
                    if position == head {
                        HEAD_CELL
                    } else if snake.contains(&position) {
                        SNAKE_CELL
                    } else if position == game.food() {
                        FOOD_CELL
                    } else {
                        EMPTY_CELL
                    }
                })
                .collect();
            format!("|{}|", cells)
        })
        .collect();

    if game.status() == Status::GameOver {
        let last = if app.is_submitting() {
            "Submitting...".to_owned()
        } else {
            "[Enter] Play Again".to_owned()
        };
        let message = [
            "Game Over!".to_owned(),
            format!("Final Score: {}", game.score()),
            last,
        ];
        let top = rows.len() / 2 - message.len() / 2;
        for (row, text) in rows[top..].iter_mut().zip(message.iter()) {
            *row = format!("|{:^width$}|", text, width = BOARD_WIDTH - 2);
        }
    }

    lines.extend(rows);
    lines.push(border);
    lines.push("Use arrow keys to control the snake".to_owned());
}

fn render_scores(scores: &ScoresView, lines: &mut Vec<String>) {
    lines.push("High Scores".to_owned());
    lines.push(String::new());
    lines.push(format!(
        "{:<6} {:<20} {:<17} {:>8}",
        "Rank", "Player Name", "Date", "Score"
    ));

    match scores {
        ScoresView::Loading => lines.push("Loading scores...".to_owned()),
        ScoresView::Loaded(entries) if entries.is_empty() => {
            lines.push("No scores available".to_owned())
        }
        ScoresView::Loaded(entries) => {
            lines.extend(entries.iter().enumerate().map(|(index, entry)| score_row(index, entry)))
        }
    }
}

fn score_row(index: usize, entry: &ScoreEntry) -> String {
    format!(
        "{:<6} {:<20} {:<17} {:>8}",
        format!("#{}", index + 1),
        entry.player_name,
        entry.creation_date.format("%Y-%m-%d %H:%M"),
        entry.score
    )
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use snake_scores::Leaderboard;

    use crate::app::{Command, FetchId, Key};

    fn contains(lines: &[String], text: &str) -> bool {
        lines.iter().any(|line| line.contains(text))
    }

    #[test]
    fn idle_board() {
        let lines = render(&App::new());
        assert!(contains(&lines, "[Game]"));
        assert!(contains(&lines, "Start Game"));
        assert!(contains(&lines, HEAD_CELL));
        assert!(contains(&lines, FOOD_CELL));

        let board_rows = lines.iter().filter(|line| line.starts_with('|')).count();
        assert_eq!(board_rows, GRID_SIZE as usize);
        assert!(lines
            .iter()
            .filter(|line| line.starts_with('|'))
            .all(|line| line.chars().count() == BOARD_WIDTH));
    }

    fn open_score_tab(app: &mut App, rng: &mut StdRng) -> FetchId {
        match app.handle_key(Key::Tab, rng) {
            Some(Command::FetchScores(fetch)) => fetch,
            other => panic!("expected a fetch, got {:?}", other),
        }
    }

    fn entry(id: i64, score: u32, player_name: &str) -> ScoreEntry {
        ScoreEntry {
            id,
            score,
            player_name: player_name.to_owned(),
            creation_date: Utc.with_ymd_and_hms(2024, 5, 1, 9, 5, 0).unwrap(),
        }
    }

    #[test]
    fn score_table_states() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut app = App::new();
        let fetch = open_score_tab(&mut app, &mut rng);
        assert!(contains(&render(&app), "Loading scores..."));

        app.scores_loaded(fetch, Ok(Leaderboard::default()));
        assert!(contains(&render(&app), "No scores available"));

        app.handle_key(Key::Tab, &mut rng);
        let fetch = open_score_tab(&mut app, &mut rng);
        let scores = Leaderboard::new(vec![entry(1, 40, "bob"), entry(2, 230, "alice")]);
        app.scores_loaded(fetch, Ok(scores));

        let lines = render(&app);
        let first = lines.iter().find(|line| line.starts_with("#1")).unwrap();
        assert!(first.contains("alice"));
        assert!(first.contains("2024-05-01 09:05"));
        assert!(first.ends_with("230"));
        let second = lines.iter().find(|line| line.starts_with("#2")).unwrap();
        assert!(second.contains("bob"));
    }

    #[test]
    fn missing_name_is_reported() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut app = App::new();
        app.handle_key(Key::Enter, &mut rng);
        assert!(contains(&render(&app), "Player name required"));
    }
}
