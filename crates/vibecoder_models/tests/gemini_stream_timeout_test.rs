//! Streaming against a local server that sends chunks slowly.

mod test_utils;

use futures_util::StreamExt;
use std::time::Duration;
use test_utils::create_test_request;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use vibecoder_config::GeminiConfig;
use vibecoder_context::SharedContext;
use vibecoder_interface::Streaming;
use vibecoder_models::GeminiClient;

const CHUNK: &str = "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"x\"}]}}]}\n\n";

/// Serve one SSE response of `chunks` events spaced `gap` apart.
async fn slow_sse_server(chunks: usize, gap: Duration) -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => return,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }

        let head = "HTTP/1.1 200 OK\r\nContent-Type: text/event-stream\r\nConnection: close\r\n\r\n";
        if socket.write_all(head.as_bytes()).await.is_err() {
            return;
        }
        for _ in 0..chunks {
            tokio::time::sleep(gap).await;
            if socket.write_all(CHUNK.as_bytes()).await.is_err() {
                return;
            }
        }
        let _ = socket.shutdown().await;
    });

    Ok(format!("http://{}", addr))
}

#[tokio::test]
async fn test_stream_outlives_the_buffered_request_limit() -> anyhow::Result<()> {
    let base_url = slow_sse_server(4, Duration::from_millis(500)).await?;
    let config = GeminiConfig {
        base_url,
        timeout_secs: 1,
        ..GeminiConfig::default()
    };
    let client = GeminiClient::new(config, SharedContext::empty())?;

    let events: Vec<_> = client
        .generate_stream(&create_test_request("Slow script", false), "AIza-local")
        .await
        .collect()
        .await;

    let last = events.last().expect("stream yields events");
    assert!(*last.is_final());
    assert_eq!(last.error(), &None, "stream failed: {:?}", last.error());
    let text: String = events
        .iter()
        .filter_map(|e| e.text_delta().as_deref())
        .collect();
    assert_eq!(text, "xxxx");
    Ok(())
}
