use mockito::Matcher;
use pantry_keeper::{
    generate_recipe_blocks, GoogleProvider, PantryError, ProviderConfig, TextBlock, TextProvider,
};
use serde_json::json;

const GENERATE_PATH: &str = "/models/gemini-2.5-flash:generateContent";

fn config_for(server: &mockito::ServerGuard) -> ProviderConfig {
    ProviderConfig {
        api_key: Some("test-key".to_string()),
        base_url: Some(server.url()),
        ..ProviderConfig::default()
    }
}

fn gemini_body(text: &str) -> String {
    json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": text }],
                "role": "model"
            }
        }]
    })
    .to_string()
}

#[tokio::test]
async fn test_generate_sends_prompt_and_returns_text() {
    let _ = env_logger::try_init();
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .match_body(Matcher::PartialJson(json!({
            "contents": [{ "parts": [{ "text": "Recommend a dish" }] }],
            "generationConfig": { "maxOutputTokens": 2000 }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gemini_body("**Dish Name:** Bibimbap"))
        .create_async()
        .await;

    let provider = GoogleProvider::new(&config_for(&server)).unwrap();
    let text = provider.generate("Recommend a dish").await.unwrap();

    assert_eq!(text, "**Dish Name:** Bibimbap");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body("API key not valid")
        .create_async()
        .await;

    let provider = GoogleProvider::new(&config_for(&server)).unwrap();
    let result = provider.generate("Recommend a dish").await;

    match result {
        Err(PantryError::ProviderStatus { status, body }) => {
            assert_eq!(status, 403);
            assert!(body.contains("API key not valid"));
        }
        other => panic!("Expected ProviderStatus error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_candidates_is_empty_response() {
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#)
        .create_async()
        .await;

    let provider = GoogleProvider::new(&config_for(&server)).unwrap();
    let result = provider.generate("Recommend a dish").await;

    assert!(matches!(result, Err(PantryError::EmptyResponse(_))));
}

#[tokio::test]
async fn test_blank_text_is_empty_response() {
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gemini_body("  \n "))
        .create_async()
        .await;

    let provider = GoogleProvider::new(&config_for(&server)).unwrap();
    let result = provider.generate("Recommend a dish").await;

    assert!(matches!(result, Err(PantryError::EmptyResponse(_))));
}

#[tokio::test]
async fn test_generated_text_is_formatted() {
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gemini_body(
            "**Cooking Instructions:**\n1. Boil water\n- Salt **to taste**",
        ))
        .create_async()
        .await;

    let provider = GoogleProvider::new(&config_for(&server)).unwrap();
    let blocks = generate_recipe_blocks(&provider, "Create a recipe for ramyeon")
        .await
        .unwrap();

    assert_eq!(blocks.len(), 3);
    assert_eq!(
        blocks[0],
        TextBlock::SectionHeader {
            text: "Cooking Instructions:".to_string()
        }
    );
    assert!(matches!(blocks[1], TextBlock::NumberedItem { .. }));
    assert!(matches!(blocks[2], TextBlock::BulletItem { .. }));
}

#[tokio::test]
async fn test_unreachable_server_is_http_error() {
    let config = ProviderConfig {
        api_key: Some("test-key".to_string()),
        base_url: Some("http://127.0.0.1:1".to_string()),
        timeout: 2,
        ..ProviderConfig::default()
    };

    let provider = GoogleProvider::new(&config).unwrap();
    let result = provider.generate("Recommend a dish").await;

    assert!(matches!(result, Err(PantryError::Http(_))));
}
