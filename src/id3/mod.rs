// ID3 metadata handling module
pub mod frames;
pub mod v1;
pub mod v2;

use std::io::{Read, Seek};

use tracing::debug;

use crate::utils::io::starts_with;

pub use v1::Id3v1Tag;
pub use v2::{Id3v2Header, Id3v2Tag};

/// Which tag a file carries. ID3v2 wins when both are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagFormat {
    Id3v2,
    Id3v1,
    None,
}

impl std::fmt::Display for TagFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagFormat::Id3v2 => write!(f, "ID3v2"),
            TagFormat::Id3v1 => write!(f, "ID3v1"),
            TagFormat::None => write!(f, "none"),
        }
    }
}

/// True iff the stream starts with `ID3`. Moves the read position.
pub fn has_id3v2_tag<R: Read + Seek>(reader: &mut R) -> std::io::Result<bool> {
    starts_with(reader, &Id3v2Header::ID)
}

/// Report the tag format without decoding any fields
pub fn detect_format<R: Read + Seek>(reader: &mut R) -> std::io::Result<TagFormat> {
    let format = if has_id3v2_tag(reader)? {
        TagFormat::Id3v2
    } else if Id3v1Tag::is_present(reader)? {
        TagFormat::Id3v1
    } else {
        TagFormat::None
    };
    debug!(%format, "detected tag format");
    Ok(format)
}
