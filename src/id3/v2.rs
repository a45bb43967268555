// ID3v2 tag implementation

use std::io::{Read, Seek, SeekFrom};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::field_mapping::FieldMappings;
use crate::id3::frames::{FrameHeader, Id3Frame};
use crate::metadata::Metadata;
use crate::options::ReadOptions;
use crate::utils::encoding::decode_text_frame;
use crate::utils::io::{read_array, read_synchsafe_u32, stream_len};

/// ID3v2 header structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Id3v2Header {
    pub version: (u8, u8),
    pub flags: u8,
    /// Size of everything after the 10-byte header
    pub size: u32,
}

impl Id3v2Header {
    pub const HEADER_SIZE: usize = 10;
    pub const ID: [u8; 3] = [b'I', b'D', b'3'];

    /// Read ID3v2 header from the start of the stream.
    /// The identifier is not checked here; detection happens before.
    pub fn read<R: Read + Seek>(reader: &mut R) -> std::io::Result<Self> {
        reader.seek(SeekFrom::Start(0))?;
        let prefix: [u8; 6] = read_array(reader)?;
        let size = read_synchsafe_u32(reader)?;

        Ok(Id3v2Header {
            version: (prefix[3], prefix[4]),
            flags: prefix[5],
            size,
        })
    }

    /// Absolute offset of the first byte after the tag
    pub fn tag_end(&self) -> u64 {
        Self::HEADER_SIZE as u64 + self.size as u64
    }
}

/// ID3v2 tag structure: the header plus the recognized text frames that fit inside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Id3v2Tag {
    pub header: Id3v2Header,
    pub frames: Vec<Id3Frame>,
}

impl Id3v2Tag {
    /// Read ID3v2 tag from the start of the stream.
    ///
    /// Frames are walked until the bytes consumed (header included) reach the
    /// declared size. A frame whose payload would cross the end of the tag ends
    /// the walk without being read. Zero-sized frames are skipped, and the
    /// payloads of frames without a metadata field are seeked over.
    pub fn read<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        let file_len = stream_len(reader)?;
        let header = Id3v2Header::read(reader)?;
        debug!(
            version = ?header.version,
            size = header.size,
            "reading ID3v2 tag"
        );

        let declared = header.size as u64;
        let mut consumed = Id3v2Header::HEADER_SIZE as u64;
        let mut frames = Vec::new();

        while consumed < declared {
            let frame_header = FrameHeader::read(reader)?;
            consumed += FrameHeader::SIZE as u64;

            let size = frame_header.size as u64;
            if consumed + size > header.tag_end() {
                warn!(
                    frame = %frame_header.id_lossy(),
                    size,
                    "frame overruns the tag, stopping"
                );
                break;
            }

            let available = file_len.saturating_sub(consumed);
            if size > available {
                return Err(Error::Truncated {
                    frame: frame_header.id_lossy(),
                    needed: size,
                    available,
                });
            }
            consumed += size;

            if size == 0 {
                continue;
            }
            if FieldMappings::from_id3v2(&frame_header.id).is_none() {
                debug!(frame = %frame_header.id_lossy(), size, "skipping frame");
                reader.seek(SeekFrom::Current(size as i64))?;
                continue;
            }
            frames.push(Id3Frame::read_payload(reader, frame_header)?);
        }

        Ok(Id3v2Tag { header, frames })
    }

    /// Fill `metadata` from the recognized text frames. Later frames win.
    pub fn apply(&self, metadata: &mut Metadata, options: &ReadOptions) {
        for frame in &self.frames {
            if let Some(field) = FieldMappings::from_id3v2(&frame.header.id) {
                debug!(frame = %frame.header.id_lossy(), %field, "text frame");
                metadata.set(field, decode_text_frame(&frame.data, options.utf16));
            }
        }
    }
}
