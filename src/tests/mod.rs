use chrono::{TimeZone, Utc};
use rocket::{
    http::{ContentType, Header, Status},
    local::asynchronous::{Client, LocalResponse},
};

use snake_scores::{NewScore, ScoreEntry};

use crate::database;

const SCORES_URI: &str = "/api/scores/";

/// Spawns a client around a fresh in-memory database
async fn spawn_client() -> Client {
    let database_pool = database::connect("sqlite::memory:")
        .await
        .expect("in-memory database");
    Client::tracked(super::build(database_pool))
        .await
        .expect("valid rocket instance")
}

fn new_score(score: u32, player_name: &str, day: u32) -> NewScore {
    NewScore {
        score,
        player_name: player_name.to_owned(),
        creation_date: Some(Utc.with_ymd_and_hms(2024, 5, day, 12, 30, 0).unwrap()),
    }
}

/// Submits a score and returns the stored record
async fn add_score<'a>(
    client: &'a Client,
    new_score: &NewScore,
) -> Result<ScoreEntry, LocalResponse<'a>> {
    let response = client.post(SCORES_URI).json(new_score).dispatch().await;
    if response.status() != Status::Ok {
        return Err(response);
    }

    Ok(response.into_json::<ScoreEntry>().await.unwrap())
}

/// Lists every score
async fn get_scores<'a>(client: &'a Client) -> Result<Vec<ScoreEntry>, LocalResponse<'a>> {
    let response = client.get(SCORES_URI).dispatch().await;
    if response.status() != Status::Ok {
        return Err(response);
    }

    Ok(response.into_json::<Vec<ScoreEntry>>().await.unwrap())
}

#[rocket::async_test]
async fn index_banner() {
    let client = spawn_client().await;
    let response = client.get("/").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(
        response.into_string().await.unwrap(),
        "This is the snake high score server!"
    );
}

#[rocket::async_test]
async fn empty_database_lists_nothing() {
    let client = spawn_client().await;
    assert_eq!(get_scores(&client).await.unwrap(), vec![]);
}

/// Submits a score and checks exactly that score is persisted
#[rocket::async_test]
async fn add_then_get_score() {
    let client = spawn_client().await;

    let submitted = new_score(120, "alice", 1);
    let entry = add_score(&client, &submitted).await.unwrap();
    assert_eq!(entry.score, 120);
    assert_eq!(entry.player_name, "alice");
    assert_eq!(Some(entry.creation_date), submitted.creation_date);

    let scores = get_scores(&client).await.unwrap();
    assert_eq!(scores, vec![entry]);
}

#[rocket::async_test]
async fn scores_are_listed_highest_first() {
    let client = spawn_client().await;

    let submissions = [
        new_score(10, "a", 1),
        new_score(250, "b", 2),
        new_score(0, "c", 3),
        new_score(90, "d", 4),
        new_score(250, "e", 5),
    ];
    for submission in &submissions {
        add_score(&client, submission).await.unwrap();
    }

    let scores = get_scores(&client).await.unwrap();
    assert_eq!(scores.len(), submissions.len());
    assert!(scores.windows(2).all(|pair| pair[0].score >= pair[1].score));

    // Equal scores: the later submission ranks higher
    let names: Vec<_> = scores.iter().map(|entry| entry.player_name.as_str()).collect();
    assert_eq!(names, vec!["e", "b", "d", "a", "c"]);
}

#[rocket::async_test]
async fn duplicate_submissions_create_separate_rows() {
    let client = spawn_client().await;

    let submitted = new_score(40, "bob", 7);
    let first = add_score(&client, &submitted).await.unwrap();
    let second = add_score(&client, &submitted).await.unwrap();
    assert_ne!(first.id, second.id);

    assert_eq!(get_scores(&client).await.unwrap().len(), 2);
}

#[rocket::async_test]
async fn client_supplied_id_is_ignored() {
    let client = spawn_client().await;

    let body = r#"{"id": 4242, "score": 30, "playerName": "mallory", "creationDate": "2024-05-01T08:00:00.000Z"}"#;
    let response = client
        .post(SCORES_URI)
        .header(ContentType::JSON)
        .body(body)
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let entry = response.into_json::<ScoreEntry>().await.unwrap();
    assert_ne!(entry.id, 4242);
    assert_eq!(entry.player_name, "mallory");
}

#[rocket::async_test]
async fn missing_creation_date_is_stamped() {
    let client = spawn_client().await;

    let before = Utc::now();
    let submitted = NewScore {
        score: 70,
        player_name: "carol".to_owned(),
        creation_date: None,
    };
    let entry = add_score(&client, &submitted).await.unwrap();
    assert!(entry.creation_date >= before);
    assert!(entry.creation_date <= Utc::now());
}

#[rocket::async_test]
async fn malformed_submission_is_rejected() {
    let client = spawn_client().await;

    for body in [
        r#"{"score": -5, "playerName": "eve"}"#,
        r#"{"score": 10}"#,
        r#"not json"#,
    ] {
        let response = client
            .post(SCORES_URI)
            .header(ContentType::JSON)
            .body(body)
            .dispatch()
            .await;
        assert!(response.status().class().is_client_error(), "{}", body);
    }

    assert_eq!(get_scores(&client).await.unwrap(), vec![]);
}

/// One route serves both spellings of the scores path
#[rocket::async_test]
async fn trailing_slash_is_optional() {
    let client = spawn_client().await;

    for (uri, player_name) in [("/api/scores", "dave"), ("/api/scores/", "frank")] {
        let response = client
            .post(uri)
            .json(&new_score(5, player_name, 9))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok, "POST {}", uri);
    }

    for uri in ["/api/scores", "/api/scores/"] {
        let response = client.get(uri).dispatch().await;
        assert_eq!(response.status(), Status::Ok, "GET {}", uri);
        let scores = response.into_json::<Vec<ScoreEntry>>().await.unwrap();
        assert_eq!(scores.len(), 2);
    }
}

#[rocket::async_test]
async fn responses_allow_any_origin() {
    let client = spawn_client().await;

    let response = client
        .get(SCORES_URI)
        .header(Header::new("Origin", "http://game.example"))
        .dispatch()
        .await;
    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Origin"),
        Some("*")
    );
}

#[rocket::async_test]
async fn preflight_is_answered() {
    let client = spawn_client().await;

    let response = client
        .options(SCORES_URI)
        .header(Header::new("Origin", "http://game.example"))
        .header(Header::new("Access-Control-Request-Method", "POST"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::NoContent);
    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Origin"),
        Some("*")
    );
    assert!(response
        .headers()
        .get_one("Access-Control-Allow-Methods")
        .unwrap()
        .contains("POST"));
}
