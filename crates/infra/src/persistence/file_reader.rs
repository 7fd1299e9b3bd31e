// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::{BufReader, Read, Seek, SeekFrom, Write},
    path::Path,
};

/// Scoped read helpers; every handle is closed before returning.
pub struct FileReader;

impl FileReader {
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    pub fn open_buffered(path: &Path, capacity: usize) -> std::io::Result<BufReader<File>> {
        Self::open(path).map(|file| BufReader::with_capacity(capacity, file))
    }

    /// Read the entire file into memory.
    pub fn read_to_end(path: &Path) -> std::io::Result<Vec<u8>> {
        let mut file = Self::open(path)?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Copy exactly `len` bytes starting at `offset` into `out`.
    pub fn copy_range<W: Write>(file: &mut File, offset: u64, len: u64, out: &mut W) -> std::io::Result<u64> {
        file.seek(SeekFrom::Start(offset))?;
        let copied = std::io::copy(&mut Read::by_ref(file).take(len), out)?;
        if copied < len {
            return Err(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "file shrank while reading"));
        }
        Ok(copied)
    }
}
