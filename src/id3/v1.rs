// ID3v1 tag implementation

use std::io::{Read, Seek, SeekFrom};

use tracing::debug;

use crate::error::{Error, Result};
use crate::metadata::Metadata;
use crate::options::ReadOptions;
use crate::utils::encoding::decode_latin1;
use crate::utils::io::{read_array, stream_len};

/// ID3v1 tag structure
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Id3v1Tag {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub year: String,
}

impl Id3v1Tag {
    pub const TAG_SIZE: usize = 128;
    pub const TAG_ID: [u8; 3] = [b'T', b'A', b'G'];

    /// Check whether the last 128 bytes start with `TAG`
    pub fn is_present<R: Read + Seek>(reader: &mut R) -> std::io::Result<bool> {
        Ok(Self::read_block(reader)?.is_some_and(|block| block[0..3] == Self::TAG_ID))
    }

    /// Read ID3v1 tag from the end of the stream
    pub fn read<R: Read + Seek>(reader: &mut R, options: &ReadOptions) -> Result<Self> {
        let block = Self::read_block(reader)?.ok_or(Error::NoLegacyTag)?;

        // Check for TAG identifier
        if block[0..3] != Self::TAG_ID {
            return Err(Error::NoLegacyTag);
        }

        debug!("found ID3v1 trailer");
        Ok(Self::parse(&block, options))
    }

    /// The trailing 128-byte block, or `None` if the stream is shorter
    fn read_block<R: Read + Seek>(reader: &mut R) -> std::io::Result<Option<[u8; 128]>> {
        if stream_len(reader)? < Self::TAG_SIZE as u64 {
            return Ok(None);
        }

        reader.seek(SeekFrom::End(-(Self::TAG_SIZE as i64)))?;
        read_array(reader).map(Some)
    }

    /// Parse ID3v1 tag from buffer
    fn parse(buffer: &[u8; 128], options: &ReadOptions) -> Self {
        let field = |bytes: &[u8]| Self::parse_string(bytes, options.trim_padding);

        Id3v1Tag {
            title: field(&buffer[3..33]),
            artist: field(&buffer[33..63]),
            album: field(&buffer[63..93]),
            year: field(&buffer[93..97]),
        }
    }

    /// Decode a fixed-width field, optionally cutting it at the first NUL
    fn parse_string(bytes: &[u8], trim: bool) -> String {
        if !trim {
            return decode_latin1(bytes);
        }
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        decode_latin1(&bytes[..end]).trim().to_string()
    }
}

impl From<Id3v1Tag> for Metadata {
    fn from(tag: Id3v1Tag) -> Self {
        Metadata {
            title: tag.title,
            artist: tag.artist,
            album: tag.album,
            year: tag.year,
        }
    }
}
