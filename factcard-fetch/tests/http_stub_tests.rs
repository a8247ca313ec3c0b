//! HTTP sources and the translator against a local stub server.

use std::sync::{Arc, Mutex};

use factcard_core::{FactResult, FallbackPool, ProviderSpec};
use factcard_fetch::{
    FactResolver, FactSource, FetchContext, FetchError, FetchSettings, GoogleTranslator,
    HttpFactSource, TranslateApi,
};
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

// ============================================================================
// Stub Server
// ============================================================================

/// Serves one canned response to every request and records request targets.
struct StubServer {
    base: String,
    targets: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    async fn start(status: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let targets = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&targets);

        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    break;
                };

                let mut request = Vec::new();
                let mut buf = [0_u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }

                let head = String::from_utf8_lossy(&request);
                if let Some(target) = head.split_whitespace().nth(1) {
                    recorded.lock().unwrap().push(target.to_string());
                }

                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: application/json\r\n\
                     Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        Self { base, targets }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    fn targets(&self) -> Vec<String> {
        self.targets.lock().unwrap().clone()
    }
}

fn fact_field(body: &Value) -> Option<String> {
    body.get("fact")?.as_str().map(str::to_string)
}

fn stub_source(id: &'static str, server: &StubServer) -> HttpFactSource {
    let endpoint: &'static str = server.url("/fact").leak();
    HttpFactSource::new(ProviderSpec::new(id, id, endpoint, fact_field))
}

fn translator_for(server: &StubServer) -> GoogleTranslator {
    let ctx = FetchContext::builder()
        .settings(FetchSettings {
            translate_url: server.url("/translate_a/single"),
            ..FetchSettings::default()
        })
        .build();
    GoogleTranslator::from_context(&ctx)
}

// ============================================================================
// Fact Sources
// ============================================================================

#[tokio::test]
async fn source_reads_fact_from_success_body() {
    let server = StubServer::start("200 OK", r#"{"fact": "Cats purr.", "length": 10}"#).await;
    let ctx = FetchContext::new();

    let text = stub_source("stub", &server).fetch(&ctx).await.unwrap();

    assert_eq!(text, "Cats purr.");
    assert_eq!(server.targets(), vec!["/fact".to_string()]);
}

#[tokio::test]
async fn source_maps_error_status_to_unavailable() {
    let server = StubServer::start("503 Service Unavailable", "{}").await;
    let ctx = FetchContext::new();

    let err = stub_source("stub", &server).fetch(&ctx).await.unwrap_err();

    match err {
        FetchError::ProviderUnavailable { source_id, reason } => {
            assert_eq!(source_id, "stub");
            assert!(reason.contains("503"), "reason was {reason}");
        }
        other => panic!("expected ProviderUnavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn source_without_fact_field_is_unavailable() {
    let server = StubServer::start("200 OK", r#"{"data": []}"#).await;
    let ctx = FetchContext::new();

    let err = stub_source("stub", &server).fetch(&ctx).await.unwrap_err();

    assert!(matches!(err, FetchError::ProviderUnavailable { .. }));
}

#[tokio::test]
async fn resolver_moves_past_error_status() {
    let failing = StubServer::start("500 Internal Server Error", "{}").await;
    let working = StubServer::start("200 OK", r#"{"fact": "Cats sleep a lot."}"#).await;
    let pool = FallbackPool::new(["Los gatos duermen."]).unwrap();
    let resolver = FactResolver::with_sources(
        vec![
            Box::new(stub_source("failing", &failing)),
            Box::new(stub_source("working", &working)),
        ],
        pool,
    );

    let outcome = resolver.resolve(&FetchContext::new()).await;

    assert_eq!(
        outcome.result,
        FactResult::success("Cats sleep a lot.", "working")
    );
    assert_eq!(outcome.attempts.len(), 2);
    assert!(!outcome.attempts[0].success);
    assert!(outcome.attempts[1].success);
}

// ============================================================================
// Translator
// ============================================================================

#[tokio::test]
async fn translator_joins_segments_from_success_body() {
    let server = StubServer::start(
        "200 OK",
        r#"[[["Los gatos ","Cats ",null,null,10],["ronronean.","purr.",null,null,10]],null,"en"]"#,
    )
    .await;
    let translator = translator_for(&server);

    assert_eq!(translator.translate("Cats purr.").await, "Los gatos ronronean.");

    let targets = server.targets();
    assert_eq!(targets.len(), 1);
    assert!(targets[0].starts_with("/translate_a/single?"));
    assert!(targets[0].contains("tl=es"));
    assert!(targets[0].contains("client=gtx"));
}

#[tokio::test]
async fn translator_error_status_yields_empty_string() {
    let server = StubServer::start("429 Too Many Requests", "[]").await;
    let translator = translator_for(&server);

    let err = translator.try_translate("Cats purr.").await.unwrap_err();
    assert!(matches!(err, FetchError::TranslationUnavailable(_)));

    assert_eq!(translator.translate("Cats purr.").await, "");
    assert_eq!(server.targets().len(), 2);
}
