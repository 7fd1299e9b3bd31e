use filekit_domain::PathSpec;
use filekit_ports::{BinaryCodec, ContentHasher, HashValue};
use filekit_shared_kernel::Outcome;
use filekit_usecase::Base64ToFile;

use super::{FileHelper, report_default};

impl FileHelper {
    /// Streaming MD5 of the file contents.
    pub fn hash_file(&self, path: &PathSpec) -> Outcome<HashValue> {
        report_default("hash_file", self.target(path).and_then(|p| self.hasher.hash_file(&p)))
    }

    pub fn hash_bytes(&self, bytes: &[u8]) -> HashValue {
        self.hasher.hash_bytes(bytes)
    }

    pub fn encode(&self, bytes: &[u8]) -> String {
        self.codec.encode(bytes)
    }

    pub fn decode(&self, data: &str) -> Outcome<Vec<u8>> {
        report_default("decode", self.codec.decode(data))
    }

    pub fn text_to_base64(&self, text: &str) -> String {
        self.codec.text_to_base64(text)
    }

    /// Lossy: empty text when `data` is not base64 of UTF-8 text.
    /// [`Self::base64_to_text_checked`] reports the failure instead.
    pub fn base64_to_text(&self, data: &str) -> String {
        self.codec.base64_to_text(data)
    }

    pub fn base64_to_text_checked(&self, data: &str) -> Outcome<String> {
        report_default("base64_to_text", self.codec.base64_to_text_checked(data))
    }

    /// Decodes `data` into `path`. The destination directory must already exist.
    pub fn base64_to_file(&self, path: &PathSpec, data: &str) -> Outcome<()> {
        let result = Base64ToFile::new(&self.fs, &self.codec, &self.resolver).run(path, data).map(drop);
        report_default("base64_to_file", result)
    }
}
