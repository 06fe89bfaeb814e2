//! Opening pairs files: decompression and I/O method selection.
//!
//! Pairs files arrive either plain or gzip-compressed, and routinely run to
//! tens of gigabytes. Opening goes through one helper that picks the reader:
//!
//! - `.gz` extension: streamed through [`MultiGzDecoder`] (handles
//!   multi-member gzip, which bgzip-style writers produce)
//! - plain file at or above [`MMAP_THRESHOLD`]: memory-mapped and wrapped in
//!   a cursor, so the kernel handles readahead for the sequential pass
//! - anything else: a plain buffered reader

use crate::error::Result;
use flate2::read::MultiGzDecoder;
use memmap2::Mmap;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

/// Minimum plain-file size for memory-mapped reading (50 MB).
///
/// Below this the mapping setup costs more than it saves.
pub const MMAP_THRESHOLD: u64 = 50 * 1024 * 1024;

/// Open a pairs file as a buffered line source.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or stat'd.
pub fn open_pairs_file(path: &Path) -> Result<Box<dyn BufRead + Send>> {
    if path.extension().map_or(false, |ext| ext == "gz") {
        let file = File::open(path)?;
        return Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))));
    }

    let file_size = std::fs::metadata(path)?.len();
    if file_size >= MMAP_THRESHOLD {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(Box::new(Cursor::new(mmap)))
    } else {
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn test_open_plain_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"0 1 100 0 0 2 200 0\n").unwrap();

        let mut reader = open_pairs_file(tmp.path()).unwrap();
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        assert_eq!(line, "0 1 100 0 0 2 200 0\n");
    }

    #[test]
    fn test_open_gzip_file() {
        let tmp = tempfile::Builder::new()
            .suffix(".pairs.gz")
            .tempfile()
            .unwrap();
        let mut encoder = GzEncoder::new(tmp.reopen().unwrap(), Compression::default());
        encoder.write_all(b"0 1 100 0 0 2 200 0\n").unwrap();
        encoder.finish().unwrap();

        let mut reader = open_pairs_file(tmp.path()).unwrap();
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        assert_eq!(line, "0 1 100 0 0 2 200 0\n");
    }

    #[test]
    fn test_missing_file_errors() {
        let result = open_pairs_file(Path::new("/no/such/file.pairs"));
        assert!(result.is_err());
    }
}
