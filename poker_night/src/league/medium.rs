//! Seekable byte stores backing the file league.

use std::{
    fs::File,
    io::{self, Cursor, Read, Seek, SeekFrom, Write},
};

/// A byte store that is always read and written as a whole, from offset zero.
pub trait Medium: Send {
    /// Read the entire content
    fn read_all(&mut self) -> io::Result<Vec<u8>>;

    /// Replace the entire content with `bytes`.
    ///
    /// After a successful call the store holds exactly `bytes`, even when the
    /// previous content was longer.
    fn rewrite(&mut self, bytes: &[u8]) -> io::Result<()>;
}

impl Medium for File {
    fn read_all(&mut self) -> io::Result<Vec<u8>> {
        self.seek(SeekFrom::Start(0))?;
        let mut buf = Vec::new();
        self.read_to_end(&mut buf)?;
        Ok(buf)
    }

    fn rewrite(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.seek(SeekFrom::Start(0))?;
        self.write_all(bytes)?;
        self.set_len(bytes.len() as u64)?;
        self.flush()
    }
}

impl Medium for Cursor<Vec<u8>> {
    fn read_all(&mut self) -> io::Result<Vec<u8>> {
        self.seek(SeekFrom::Start(0))?;
        let mut buf = Vec::new();
        self.read_to_end(&mut buf)?;
        Ok(buf)
    }

    fn rewrite(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.seek(SeekFrom::Start(0))?;
        self.write_all(bytes)?;
        self.get_mut().truncate(bytes.len());
        Ok(())
    }
}
