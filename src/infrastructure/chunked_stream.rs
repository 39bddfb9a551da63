// Chunked JSON streaming utilities
use crate::domain::stream::StreamMessage;
use async_compression::tokio::bufread::BrotliEncoder;
use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use axum::response::IntoResponse;
use bytes::{BufMut, Bytes, BytesMut};
use futures::stream::Stream;
use futures::StreamExt;
use tokio::io::AsyncReadExt;

pub const STREAM_CONTENT_TYPE: &str = "application/octet-stream";

/// Create a chunked streaming response. Each chunk is a 4-byte big-endian
/// length followed by a JSON message, Brotli-compressed when `compress` is set.
pub fn chunked_json_stream<S>(stream: S, compress: bool) -> Result<Response<Body>, StatusCode>
where
    S: Stream<Item = StreamMessage> + Send + 'static,
{
    let byte_stream = stream.then(move |msg| async move { serialize_chunk(&msg, compress).await });

    // Chunks are compressed individually, so no Content-Encoding on the response
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, STREAM_CONTENT_TYPE)
        .body(Body::from_stream(byte_stream))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Serialize a single StreamMessage to a length-prefixed chunk
pub async fn serialize_chunk(msg: &StreamMessage, compress: bool) -> Result<Bytes, std::io::Error> {
    let json = serde_json::to_vec(msg)?;

    let payload = if compress { brotli(json).await? } else { json };

    let mut chunk = BytesMut::with_capacity(4 + payload.len());
    chunk.put_u32(payload.len() as u32);
    chunk.put_slice(&payload);

    Ok(chunk.freeze())
}

pub async fn brotli(data: Vec<u8>) -> Result<Vec<u8>, std::io::Error> {
    let mut encoder = BrotliEncoder::new(std::io::Cursor::new(data));
    let mut compressed = Vec::new();
    encoder.read_to_end(&mut compressed).await?;
    Ok(compressed)
}

/// Helper to create a streaming response from a receiver
pub fn stream_from_receiver(
    mut rx: tokio::sync::mpsc::Receiver<StreamMessage>,
    compress: bool,
) -> impl IntoResponse {
    let stream = async_stream::stream! {
        while let Some(msg) = rx.recv().await {
            yield msg;
        }
    };

    match chunked_json_stream(stream, compress) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_compression::tokio::bufread::BrotliDecoder;

    fn complete() -> StreamMessage {
        StreamMessage::Complete {
            total_widgets: 2,
            duration_ms: 15,
        }
    }

    #[tokio::test]
    async fn test_plain_chunk_is_length_prefixed_json() {
        let chunk = serialize_chunk(&complete(), false).await.unwrap();
        let len = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]) as usize;
        assert_eq!(len, chunk.len() - 4);

        let json: serde_json::Value = serde_json::from_slice(&chunk[4..]).unwrap();
        assert_eq!(json, serde_json::json!({"type": "complete", "totalWidgets": 2, "durationMs": 15}));
    }

    #[tokio::test]
    async fn test_compressed_chunk_decodes() {
        let chunk = serialize_chunk(&complete(), true).await.unwrap();
        let len = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]) as usize;
        assert_eq!(len, chunk.len() - 4);

        let mut decoder = BrotliDecoder::new(&chunk[4..]);
        let mut plain = Vec::new();
        decoder.read_to_end(&mut plain).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&plain).unwrap();
        assert_eq!(json["type"], "complete");
    }
}
