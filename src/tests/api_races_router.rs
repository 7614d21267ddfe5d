use crate::error::ErrorStatusPolicy;
use crate::tests::fixtures::{get_json, seeded_app};
use axum::http::StatusCode;
use serde_json::{Value, json};

fn year_rounds(json: &Value) -> Vec<(i64, i64)> {
    json.as_array()
        .expect("Should be an array of races")
        .iter()
        .map(|race| (race["year"].as_i64().unwrap(), race["round"].as_i64().unwrap()))
        .collect()
}

#[tokio::test]
async fn test_list_races_sorted_with_circuit_fields() {
    let app = seeded_app(ErrorStatusPolicy::Legacy).await;

    let (status, json) = get_json(&app, "/api/races").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        year_rounds(&json),
        vec![(2021, 1), (2021, 3), (2021, 5), (2020, 1), (2020, 2), (2019, 4)]
    );

    for race in json.as_array().unwrap() {
        assert!(race["circuitName"].is_string());
        assert!(race["location"].is_string());
        assert!(race["country"].is_string());
    }
}

#[tokio::test]
async fn test_race_by_year_round() {
    let app = seeded_app(ErrorStatusPolicy::Legacy).await;

    let (status, json) = get_json(&app, "/api/races/2021/5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["raceId"], 1056);
    assert_eq!(json["name"], "British Grand Prix");
    assert_eq!(json["circuitName"], "Silverstone Circuit");
    assert_eq!(json["location"], "Silverstone");
    assert_eq!(json["country"], "UK");

    // the season-prefixed route answers the same
    let (_, season_json) = get_json(&app, "/api/races/season/2021/5").await;
    assert_eq!(season_json, json);

    let (status, json) = get_json(&app, "/api/races/2021/9").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "error": "Race not found" }));
}

#[tokio::test]
async fn test_races_by_circuit() {
    let app = seeded_app(ErrorStatusPolicy::Legacy).await;

    let (_, json) = get_json(&app, "/api/races/circuits/silverstone").await;
    assert_eq!(year_rounds(&json), vec![(2021, 5), (2020, 1), (2020, 2)]);

    // known circuit without races and unknown circuit answer alike
    for uri in ["/api/races/circuits/123", "/api/races/circuits/imola"] {
        let (status, json) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({ "error": "No races found for this circuit" }));
    }
}

#[tokio::test]
async fn test_races_by_season() {
    let app = seeded_app(ErrorStatusPolicy::Legacy).await;

    let (_, json) = get_json(&app, "/api/races/season/2020").await;
    assert_eq!(year_rounds(&json), vec![(2020, 1), (2020, 2)]);

    let (_, json) = get_json(&app, "/api/races/season/1950").await;
    assert_eq!(json, json!({ "error": "No races found for this season" }));
}
