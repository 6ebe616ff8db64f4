//! Playlist acquisition from local files or HTTP(S) URLs.

use std::time::Duration;

use tracing::debug;

use crate::error::AppError;

/// Some portals refuse unfamiliar user agents; a curl identity is the most
/// widely accepted.
const USER_AGENT: &str = "curl/8";

/// Read a playlist source into normalized lines. `src` is fetched over HTTP
/// when it looks like a URL, otherwise read as a local file.
pub async fn read_lines(src: &str, timeout_secs: u64) -> Result<Vec<String>, AppError> {
    let bytes = if src.starts_with("http://") || src.starts_with("https://") {
        fetch(src, timeout_secs).await?
    } else {
        tokio::fs::read(src)
            .await
            .map_err(|e| AppError::SourceUnavailable(format!("{src}: {e}")))?
    };
    let text = decode_text(&bytes);
    Ok(m3u::split_lines(&text))
}

async fn fetch(url: &str, timeout_secs: u64) -> Result<Vec<u8>, AppError> {
    debug!(url, timeout_secs, "fetching playlist");
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| AppError::SourceUnavailable(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| AppError::SourceUnavailable(e.to_string()))?;

    let bytes = response
        .bytes()
        .await
        .map_err(|e| AppError::SourceUnavailable(e.to_string()))?;
    debug!(len = bytes.len(), "playlist fetched");
    Ok(bytes.to_vec())
}

/// Decode playlist bytes as UTF-8, falling back to Latin-1 so no input is
/// ever rejected for its encoding.
fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_input_decodes_unchanged() {
        assert_eq!(decode_text("#EXTM3U\nfoö".as_bytes()), "#EXTM3U\nfoö");
    }

    #[test]
    fn invalid_utf8_falls_back_to_latin1() {
        // 0xE9 is 'é' in Latin-1 and invalid as a lone UTF-8 byte
        let bytes = b"caf\xE9";
        assert_eq!(decode_text(bytes), "café");
    }

    #[tokio::test]
    async fn missing_file_is_source_unavailable() {
        let err = read_lines("/no/such/playlist.m3u", 60).await.unwrap_err();
        assert!(matches!(err, AppError::SourceUnavailable(_)));
    }
}
