use super::*;

/// Tests creating a valid game over HTTP.
///
/// Expected: 201 with success envelope, message, and the stored record
#[tokio::test]
async fn creates_game() {
    let (app, _test) = test_app().await;

    let (status, body) = send(&app, Method::POST, "/api/games", Some(chrono_trigger())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Game created successfully"));
    assert_eq!(body["data"]["title"], json!("Chrono Trigger"));
    assert_eq!(body["data"]["releaseYear"], json!(1995));
    assert!(Uuid::parse_str(body["data"]["id"].as_str().unwrap()).is_ok());
    assert_eq!(body["data"]["createdAt"], body["data"]["updatedAt"]);
}

/// Tests a created game can be fetched back unchanged.
///
/// Expected: 200 with the same data as the create response
#[tokio::test]
async fn created_game_can_be_fetched() {
    let (app, _test) = test_app().await;

    let (_, created) = send(&app, Method::POST, "/api/games", Some(chrono_trigger())).await;
    let id = created["data"]["id"].as_str().unwrap();

    let (status, fetched) = send(&app, Method::GET, &format!("/api/games/{}", id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"], created["data"]);
    assert!(fetched.get("message").is_none());
}

/// Tests an out of range year is rejected with the year violation listed.
///
/// Expected: 400 with one error naming the lower bound
#[tokio::test]
async fn rejects_year_1800() {
    let (app, _test) = test_app().await;

    let payload = json!({"title": "X", "genre": "Y", "platform": "Z", "releaseYear": 1800});
    let (status, body) = send(&app, Method::POST, "/api/games", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Validation failed"));
    assert_eq!(
        body["errors"],
        json!(["Release year must be 1950 or later"])
    );
}

/// Tests an empty object lists every missing field.
///
/// Expected: 400 with four errors
#[tokio::test]
async fn lists_every_missing_field() {
    let (app, _test) = test_app().await;

    let (status, body) = send(&app, Method::POST, "/api/games", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"],
        json!([
            "Title is required",
            "Genre is required",
            "Platform is required",
            "Release year is required"
        ])
    );

    let (_, list) = send(&app, Method::GET, "/api/games", None).await;
    assert_eq!(list["count"], json!(0));
}

/// Tests strings are trimmed and numeric strings accepted for the year.
///
/// Expected: 201 with trimmed fields and integer year
#[tokio::test]
async fn trims_strings_and_reads_numeric_year_string() {
    let (app, _test) = test_app().await;

    let payload = json!({
        "title": "  EarthBound ",
        "genre": " RPG",
        "platform": "SNES ",
        "releaseYear": "1994"
    });
    let (status, body) = send(&app, Method::POST, "/api/games", Some(payload)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["title"], json!("EarthBound"));
    assert_eq!(body["data"]["genre"], json!("RPG"));
    assert_eq!(body["data"]["platform"], json!("SNES"));
    assert_eq!(body["data"]["releaseYear"], json!(1994));
}

/// Tests client supplied server fields are ignored.
///
/// Expected: 201 with a server generated id
#[tokio::test]
async fn ignores_client_supplied_id() {
    let (app, _test) = test_app().await;

    let mut payload = chrono_trigger();
    payload["id"] = json!("00000000-0000-0000-0000-000000000000");
    let (status, body) = send(&app, Method::POST, "/api/games", Some(payload)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(
        body["data"]["id"],
        json!("00000000-0000-0000-0000-000000000000")
    );
}

/// Tests scalar numbers and booleans are stored in their text form.
///
/// Expected: 201 with title "42", while arrays are still rejected
#[tokio::test]
async fn reads_scalar_values_as_strings() {
    let (app, _test) = test_app().await;

    let payload = json!({"title": 42, "genre": true, "platform": "PC", "releaseYear": 2001});
    let (status, body) = send(&app, Method::POST, "/api/games", Some(payload)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["title"], json!("42"));
    assert_eq!(body["data"]["genre"], json!("true"));

    let payload = json!({"title": ["Doom"], "genre": "FPS", "platform": "PC", "releaseYear": 1993});
    let (status, body) = send(&app, Method::POST, "/api/games", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"], json!(["Title must be a string"]));
}
