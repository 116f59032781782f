use std::io;
use std::path::Path;
use std::time::SystemTime;

pub trait FsOps {
    fn is_file(&self, path: &Path) -> bool;

    /// Read the raw bytes of `path`.
    ///
    /// # Errors
    /// Returns the underlying I/O error when the file cannot be read.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

pub struct DefaultFsOps;
impl FsOps for DefaultFsOps {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

pub trait Clock {
    fn now(&self) -> SystemTime;
}

pub struct DefaultClock;
impl Clock for DefaultClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}
