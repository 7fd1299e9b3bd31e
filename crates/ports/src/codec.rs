// crates/ports/src/codec.rs
use filekit_shared_kernel::Result;

/// Reversible text encoding of arbitrary bytes.
pub trait BinaryCodec: Send + Sync {
    fn encode(&self, bytes: &[u8]) -> String;
    fn decode(&self, text: &str) -> Result<Vec<u8>>;
}
