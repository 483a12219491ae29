use super::*;

/// Tests listing with no games.
///
/// Expected: 200 with count 0 and empty data
#[tokio::test]
async fn lists_empty_collection() {
    let (app, _test) = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/games", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "count": 0, "data": []}));
}

/// Tests listing returns every game newest first with a count.
///
/// Expected: 200 with count 3 and ids in reverse creation order
#[tokio::test]
async fn lists_games_newest_first() {
    let (app, test) = test_app().await;
    let db = test.db.as_ref().unwrap();

    let created = factory::helpers::create_games(db, 3).await.unwrap();

    let (status, body) = send(&app, Method::GET, "/api/games", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], json!(3));

    let ids: Vec<String> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["id"].as_str().unwrap().to_string())
        .collect();
    let expected: Vec<String> = created.iter().rev().map(|g| g.id.to_string()).collect();
    assert_eq!(ids, expected);
}
