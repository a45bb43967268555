// ID3v2 frame reading

use std::io::Read;

use crate::utils::io::{decode_synchsafe, read_array};

/// Frame header: 4-byte id, synchsafe size, 2 flag bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub id: [u8; 4],
    pub size: u32,
    pub flags: u16,
}

impl FrameHeader {
    pub const SIZE: usize = 10;

    pub fn read<R: Read>(reader: &mut R) -> std::io::Result<Self> {
        Ok(Self::parse(read_array(reader)?))
    }

    pub fn parse(buffer: [u8; Self::SIZE]) -> Self {
        FrameHeader {
            id: [buffer[0], buffer[1], buffer[2], buffer[3]],
            size: decode_synchsafe([buffer[4], buffer[5], buffer[6], buffer[7]]),
            flags: u16::from_be_bytes([buffer[8], buffer[9]]),
        }
    }

    /// Printable form of the id for logs and errors
    pub fn id_lossy(&self) -> String {
        String::from_utf8_lossy(&self.id).into_owned()
    }
}

/// ID3v2 frame with its payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Id3Frame {
    pub header: FrameHeader,
    pub data: Vec<u8>,
}

impl Id3Frame {
    /// Read the payload that follows `header`. The caller checks the size first.
    pub fn read_payload<R: Read>(reader: &mut R, header: FrameHeader) -> std::io::Result<Self> {
        let mut data = vec![0u8; header.size as usize];
        reader.read_exact(&mut data)?;
        Ok(Id3Frame { header, data })
    }
}
