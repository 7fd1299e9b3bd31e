// crates/infra/src/codec.rs
use base64::{Engine, engine::general_purpose::STANDARD};
use filekit_ports::BinaryCodec;
use filekit_shared_kernel::{InfrastructureError, Result};

/// RFC 4648 standard alphabet with padding, no line wrapping.
#[derive(Debug, Default, Clone, Copy)]
pub struct Base64Codec;

impl Base64Codec {
    pub fn new() -> Self {
        Self
    }

    pub fn text_to_base64(&self, text: &str) -> String {
        self.encode(text.as_bytes())
    }

    /// Lossy: malformed base64 or non UTF-8 payloads yield an empty string.
    pub fn base64_to_text(&self, data: &str) -> String {
        self.base64_to_text_checked(data).unwrap_or_else(|err| {
            log::warn!("base64 to text returned empty text: {err}");
            String::new()
        })
    }

    pub fn base64_to_text_checked(&self, data: &str) -> Result<String> {
        let bytes = self.decode(data)?;
        String::from_utf8(bytes).map_err(|err| {
            InfrastructureError::Decode { format: "UTF-8 text".into(), details: err.to_string() }.into()
        })
    }
}

impl BinaryCodec for Base64Codec {
    fn encode(&self, bytes: &[u8]) -> String {
        STANDARD.encode(bytes)
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>> {
        STANDARD
            .decode(text)
            .map_err(|err| InfrastructureError::Decode { format: "base64".into(), details: err.to_string() }.into())
    }
}
