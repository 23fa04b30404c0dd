//! Load the files named by `%file`.

use std::{fs, io};

/// Source of the bytes for `%file <path>`.
pub trait Loader {
    /// Read the whole contents of `path`. The path is taken verbatim from
    /// the command line.
    fn load(&mut self, path: &str) -> io::Result<Vec<u8>>;
}

/// Read files from the file system, relative to the working directory.
#[derive(Copy, Clone, Debug, Default)]
pub struct FileSystem;

impl Loader for FileSystem {
    fn load(&mut self, path: &str) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

impl<F> Loader for F
where
    F: FnMut(&str) -> io::Result<Vec<u8>>,
{
    fn load(&mut self, path: &str) -> io::Result<Vec<u8>> {
        self(path)
    }
}
