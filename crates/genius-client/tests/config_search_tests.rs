use genius_client::{GeniusClient, GeniusError, SearchOptions};
use genius_config::GeniusConfig;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> GeniusConfig {
    GeniusConfig {
        api_key: Some("config-token".to_string()),
        base_url: server.uri(),
        timeout_secs: Some(5),
        optimize_query: true,
    }
}

#[tokio::test]
async fn test_best_match_from_configured_options() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "money trees kendrick lamar jay rock"))
        .and(query_param("access_token", "config-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": { "status": 200 },
            "response": { "hits": [ { "result": {
                "id": 81159,
                "url": "https://genius.com/Kendrick-lamar-money-trees-lyrics",
                "title": "Money Trees",
                "song_art_image_url": "https://images.genius.com/money-trees.jpg"
            } } ] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let client = GeniusClient::from_config(&config).unwrap();
    let options =
        SearchOptions::from_config(&config, "Money Trees (Album Version)", "Kendrick Lamar feat. Jay Rock")
            .unwrap();

    let song = client.get_best_match(&options).await.unwrap().unwrap();
    assert_eq!(song.id, 81159);
    assert_eq!(song.title, "Money Trees");
    assert_eq!(song.url, "https://genius.com/Kendrick-lamar-money-trees-lyrics");
    assert_eq!(song.album_art_url, "https://images.genius.com/money-trees.jpg");
}

#[tokio::test]
async fn test_server_error_surfaces_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let client = GeniusClient::from_config(&config).unwrap();
    let options = SearchOptions::from_config(&config, "Money Trees", "Kendrick Lamar").unwrap();

    let result = client.get_best_match(&options).await;
    match result {
        Err(GeniusError::BadStatus(status)) => assert_eq!(status, 500),
        other => panic!("expected BadStatus error, got: {other:?}"),
    }
}
