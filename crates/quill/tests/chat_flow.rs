use anyhow::Result;
use quill::{
    formatter::render_inline,
    models::{role::Role, segment::SegmentKind},
    providers::{configs::GeminiProviderConfig, gemini::GeminiProvider},
    session::{ChatSession, SubmitOutcome},
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

async fn session_against(server: &MockServer) -> Result<ChatSession> {
    let mut config = GeminiProviderConfig::new("integration-key");
    config.host = server.uri();
    let provider = GeminiProvider::new(config)?;
    Ok(ChatSession::new(Box::new(provider)))
}

#[tokio::test]
async fn test_numbered_answer_is_split_and_formatted() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {
                    "parts": [{
                        "text": "### Tips\n1. Use **cargo** to build.\n2. The cost is $O(n)$.\n3. Run `cargo test`."
                    }]
                }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session_against(&server).await?;
    let outcome = session.submit("How do I work with Rust?").await;
    assert_eq!(outcome, SubmitOutcome::Answered { items: 4 });

    let answers = session.last_answers(4);
    assert!(answers.iter().all(|message| message.role == Role::Assistant));

    let heading = render_inline(&answers[0].text);
    assert_eq!(heading.len(), 1);
    assert_eq!(heading[0].kind, SegmentKind::Heading);
    assert_eq!(heading[0].content, "Tips");

    let kinds: Vec<_> = answers[1..]
        .iter()
        .map(|message| {
            render_inline(&message.text)
                .into_iter()
                .map(|segment| segment.kind)
                .collect::<Vec<_>>()
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            vec![SegmentKind::Plain, SegmentKind::Bold, SegmentKind::Plain],
            vec![SegmentKind::Plain, SegmentKind::Math, SegmentKind::Plain],
            vec![SegmentKind::Plain, SegmentKind::Code, SegmentKind::Plain],
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_malformed_response_degrades_to_no_answer() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let mut session = session_against(&server).await?;
    assert_eq!(session.submit("anything").await, SubmitOutcome::Failed);
    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.messages()[0].role, Role::User);
    Ok(())
}

#[tokio::test]
async fn test_server_failure_degrades_to_no_answer() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut session = session_against(&server).await?;
    assert_eq!(session.submit("anything").await, SubmitOutcome::Failed);
    assert_eq!(session.questions().collect::<Vec<_>>(), vec!["anything"]);
    Ok(())
}
