//! Binary result encoding.
//!
//! Image and audio operations return their payload as a `data:` URI so
//! the whole operation surface stays `String`-valued. Consuming the URI
//! is side-effect free; decoding it twice yields the same bytes.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Encode raw bytes as a `data:<mime>;base64,…` URI.
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Decode a `data:` URI produced by [`data_uri`] back into its MIME type
/// and bytes. Returns `None` for anything else (e.g. a plain URL).
pub fn parse_data_uri(uri: &str) -> Option<(String, Vec<u8>)> {
    let rest = uri.strip_prefix("data:")?;
    let (mime, payload) = rest.split_once(";base64,")?;
    let bytes = STANDARD.decode(payload).ok()?;
    Some((mime.to_owned(), bytes))
}
