use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};

use voxbridge::application::ports::{GenerationError, ResponseGenerator};
use voxbridge::infrastructure::llm::OllamaGenerator;

/// Serve exactly one canned HTTP response on an ephemeral port.
async fn one_shot_server(status_line: &'static str, body: &'static str) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 8192];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "{}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        let _ = socket.write_all(response.as_bytes()).await;
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn given_well_formed_response_when_generate_then_returns_response_field() {
    let base_url = one_shot_server(
        "HTTP/1.1 200 OK",
        r#"{"model":"llama3.1:8b","response":"Hello back!","done":true}"#,
    )
    .await;

    let generator = OllamaGenerator::new(&base_url);
    let reply = generator.generate("hello", "llama3.1:8b").await.unwrap();
    assert_eq!(reply, "Hello back!");
}

#[tokio::test]
async fn given_unparsable_response_when_generate_then_returns_raw_body() {
    let base_url = one_shot_server("HTTP/1.1 503 Service Unavailable", "model overloaded").await;

    let generator = OllamaGenerator::new(&base_url);
    let reply = generator.generate("hello", "llama3.1:8b").await.unwrap();
    assert_eq!(reply, "model overloaded", "raw body is the fallback reply");
}

#[tokio::test]
async fn given_unreachable_service_when_generate_then_errors() {
    // Bind and immediately drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let generator = OllamaGenerator::new(&format!("http://{}", addr));
    let err = generator
        .generate("hello", "llama3.1:8b")
        .await
        .expect_err("nothing is listening");
    assert!(matches!(err, GenerationError::ServiceUnreachable(_)));
}

#[tokio::test]
async fn given_local_ollama_available_when_generate_then_returns_non_empty_reply() {
    let available = reqwest::Client::new()
        .get("http://localhost:11434/api/tags")
        .timeout(Duration::from_secs(2))
        .send()
        .await
        .is_ok();
    if !available {
        eprintln!("Skipping: Ollama not available at localhost:11434");
        return;
    }

    let generator = OllamaGenerator::new("http://localhost:11434");
    let reply = generator
        .generate("Reply with the single word: pong", "llama3.1:8b")
        .await
        .expect("generate() failed");
    assert!(!reply.is_empty(), "reply should not be empty");
    eprintln!("Ollama reply: {reply}");
}
