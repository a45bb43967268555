//! mp3meta - read title, artist, album and year from MP3 tags
//!
//! Files starting with `ID3` are read through the ID3v2 frame walker;
//! everything else falls back to the 128-byte ID3v1 trailer.
//!
//! ```no_run
//! let metadata = mp3meta::read_metadata("song.mp3")?;
//! println!("{} - {}", metadata.artist, metadata.title);
//! # Ok::<(), mp3meta::Error>(())
//! ```

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use tracing::debug;

pub mod error;
pub mod field_mapping;
pub mod id3;
pub mod metadata;
pub mod options;
pub mod utils;

pub use error::{Error, Result};
pub use field_mapping::StandardField;
pub use id3::{Id3v1Tag, Id3v2Tag, TagFormat};
pub use metadata::Metadata;
pub use options::{ReadOptions, Utf16Mode};

/// Read metadata from the file at `path` with default options
pub fn read_metadata<P: AsRef<Path>>(path: P) -> Result<Metadata> {
    read_metadata_with(path, &ReadOptions::default())
}

/// Read metadata from the file at `path`
pub fn read_metadata_with<P: AsRef<Path>>(path: P, options: &ReadOptions) -> Result<Metadata> {
    let mut reader = open(path.as_ref())?;
    read_metadata_from(&mut reader, options)
}

/// Read metadata from any seekable byte source
pub fn read_metadata_from<R: Read + Seek>(reader: &mut R, options: &ReadOptions) -> Result<Metadata> {
    let mut metadata = Metadata::new();

    if id3::has_id3v2_tag(reader)? {
        let tag = Id3v2Tag::read(reader)?;
        debug!(frames = tag.frames.len(), "read ID3v2 tag");
        tag.apply(&mut metadata, options);
    } else {
        metadata = Id3v1Tag::read(reader, options)?.into();
    }

    Ok(metadata)
}

/// Detect the tag format of the file at `path`
pub fn detect_format<P: AsRef<Path>>(path: P) -> Result<TagFormat> {
    let mut reader = open(path.as_ref())?;
    detect_format_from(&mut reader)
}

/// Detect the tag format of any seekable byte source
pub fn detect_format_from<R: Read + Seek>(reader: &mut R) -> Result<TagFormat> {
    Ok(id3::detect_format(reader)?)
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}
