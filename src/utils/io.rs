// I/O helpers for reading tag structures

use std::io::{Read, Seek, SeekFrom};

/// Read exactly `N` bytes into a fixed-size array
pub fn read_array<const N: usize, R: Read>(reader: &mut R) -> std::io::Result<[u8; N]> {
    let mut buffer = [0u8; N];
    reader.read_exact(&mut buffer)?;
    Ok(buffer)
}

/// Decode a synchsafe 32-bit integer (low 7 bits of each byte)
pub fn decode_synchsafe(bytes: [u8; 4]) -> u32 {
    ((bytes[0] & 0x7F) as u32) << 21
        | ((bytes[1] & 0x7F) as u32) << 14
        | ((bytes[2] & 0x7F) as u32) << 7
        | (bytes[3] & 0x7F) as u32
}

/// Read synchsafe 32-bit integer (7 bits per byte)
pub fn read_synchsafe_u32<R: Read>(reader: &mut R) -> std::io::Result<u32> {
    read_array::<4, _>(reader).map(decode_synchsafe)
}

/// Total length of the stream. Leaves the position at the end.
pub fn stream_len<R: Seek>(reader: &mut R) -> std::io::Result<u64> {
    reader.seek(SeekFrom::End(0))
}

/// Check if the stream has `signature` at the very beginning
pub fn starts_with<R: Read + Seek>(reader: &mut R, signature: &[u8]) -> std::io::Result<bool> {
    reader.seek(SeekFrom::Start(0))?;
    let mut buffer = vec![0u8; signature.len()];
    reader.read_exact(&mut buffer)?;
    Ok(buffer == signature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn synchsafe_uses_low_seven_bits() {
        assert_eq!(decode_synchsafe([0x00, 0x00, 0x00, 0x2A]), 42);
        assert_eq!(decode_synchsafe([0x00, 0x00, 0x01, 0x00]), 128);
        assert_eq!(decode_synchsafe([0x7F, 0x7F, 0x7F, 0x7F]), 0x0FFF_FFFF);
    }

    #[test]
    fn synchsafe_masks_high_bit() {
        assert_eq!(decode_synchsafe([0x80, 0x80, 0x80, 0x81]), 1);
        assert_eq!(decode_synchsafe([0xFF, 0xFF, 0xFF, 0xFF]), 0x0FFF_FFFF);
    }

    #[test]
    fn read_synchsafe_reports_short_input() {
        let mut reader = Cursor::new(vec![0u8, 1]);
        let err = read_synchsafe_u32(&mut reader).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn starts_with_rewinds_before_reading() {
        let mut reader = Cursor::new(b"ID3rest".to_vec());
        reader.set_position(5);
        assert!(starts_with(&mut reader, b"ID3").unwrap());
        assert!(!starts_with(&mut reader, b"TAG").unwrap());
    }

    #[test]
    fn stream_len_counts_all_bytes() {
        let mut reader = Cursor::new(vec![0u8; 300]);
        assert_eq!(stream_len(&mut reader).unwrap(), 300);
    }
}
