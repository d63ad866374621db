use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::Client;
use tokio::sync::mpsc;

use crate::constants::ANALYZE_PATH;

use super::error::AnalyzeError;
use super::model::{AnalysisResult, AnalyzeRequest};

/// Async client for the analysis service.
///
/// Cheap to clone; each submission runs on its own spawned task and reports
/// back through an [`AnalyzeEvent`].
#[derive(Debug, Clone)]
pub struct AnalyzerClient {
    client: Client,
    endpoint: String,
}

/// Events sent from a request task back to the main loop.
#[derive(Debug)]
pub enum AnalyzeEvent {
    /// The service returned a result.
    Completed {
        id: u64,
        result: Box<AnalysisResult>,
        elapsed: Duration,
    },
    /// Non-2xx status, transport or decode failure.
    Failed { id: u64, error: AnalyzeError },
}

impl AnalyzerClient {
    pub fn new(server_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            endpoint: endpoint_url(server_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST `{"text": ...}` and decode the result.
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalyzeError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&AnalyzeRequest { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalyzeError::Status(status));
        }

        Ok(response.json::<AnalysisResult>().await?)
    }

    /// Spawn one request and report its outcome on `tx`.
    pub fn spawn_analyze(&self, id: u64, text: String, tx: mpsc::UnboundedSender<AnalyzeEvent>) {
        let client = self.clone();
        tokio::spawn(async move {
            let started = Instant::now();
            let event = match client.analyze(&text).await {
                Ok(result) => AnalyzeEvent::Completed {
                    id,
                    result: Box::new(result),
                    elapsed: started.elapsed(),
                },
                Err(error) => AnalyzeEvent::Failed { id, error },
            };
            // Receiver gone means the UI has quit.
            let _ = tx.send(event);
        });
    }
}

/// Join the base URL and the analyze path, tolerating a trailing slash.
fn endpoint_url(server_url: &str) -> String {
    format!("{}{}", server_url.trim_end_matches('/'), ANALYZE_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    /// One captured request: method, url, body.
    type Captured = (String, String, String);

    /// Serve exactly one request with `status`/`body` and hand back what was received.
    fn stub_server(status: u16, body: &'static str) -> (String, std::sync::mpsc::Receiver<Captured>) {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();
        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            if let Ok(mut request) = server.recv() {
                let mut content = String::new();
                request.as_reader().read_to_string(&mut content).unwrap();
                tx.send((
                    request.method().to_string(),
                    request.url().to_string(),
                    content,
                ))
                .unwrap();
                let response = tiny_http::Response::from_string(body).with_status_code(status);
                let _ = request.respond(response);
            }
        });
        (format!("http://{}", addr), rx)
    }

    const OK_BODY: &str = r#"{"text": "great day", "polarity": 0.62, "subjectivity": 0.75,
        "sentiment": "Positive", "emotions": {"Happy": 100.0}, "sentence_breakdown": []}"#;

    fn client(url: &str) -> AnalyzerClient {
        AnalyzerClient::new(url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn endpoint_url_joins_path() {
        assert_eq!(endpoint_url("http://localhost:5000"), "http://localhost:5000/analyze");
        assert_eq!(endpoint_url("http://localhost:5000/"), "http://localhost:5000/analyze");
        assert_eq!(endpoint_url("http://h/api/"), "http://h/api/analyze");
    }

    #[tokio::test]
    async fn analyze_posts_text_as_json() {
        let (url, rx) = stub_server(200, OK_BODY);
        let result = client(&url).analyze("great day").await.unwrap();

        let (method, path, body) = rx.recv().unwrap();
        assert_eq!(method, "POST");
        assert_eq!(path, "/analyze");
        let sent: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(sent, serde_json::json!({"text": "great day"}));

        assert_eq!(result.sentiment, "Positive");
        assert_eq!(result.polarity, 0.62);
    }

    #[tokio::test]
    async fn non_success_status_is_request_failure() {
        let (url, _rx) = stub_server(400, r#"{"error": "No text provided"}"#);
        let err = client(&url).analyze("x").await.unwrap_err();
        assert!(matches!(err, AnalyzeError::Status(s) if s.as_u16() == 400));
    }

    #[tokio::test]
    async fn undecodable_body_is_request_failure() {
        let (url, _rx) = stub_server(200, "<html>oops</html>");
        let err = client(&url).analyze("x").await.unwrap_err();
        assert!(matches!(err, AnalyzeError::Transport(_)));
    }

    #[tokio::test]
    async fn connection_refused_is_request_failure() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let err = client(&format!("http://127.0.0.1:{}", port))
            .analyze("x")
            .await
            .unwrap_err();
        assert!(matches!(err, AnalyzeError::Transport(_)));
    }

    #[tokio::test]
    async fn spawn_analyze_reports_completion_once() {
        let (url, rx) = stub_server(200, OK_BODY);
        let (tx, mut events) = mpsc::unbounded_channel();
        client(&url).spawn_analyze(7, "great day".to_string(), tx);

        match events.recv().await {
            Some(AnalyzeEvent::Completed { id, result, .. }) => {
                assert_eq!(id, 7);
                assert_eq!(result.text, "great day");
            }
            other => panic!("unexpected event: {:?}", other),
        }
        // Sender dropped after the single event.
        assert!(events.recv().await.is_none());
        assert_eq!(rx.try_iter().count(), 1);
    }
}
