// Text decoding for tag fields and ID3v2 text frames

use encoding_rs::{UTF_16BE, UTF_16LE};

use crate::options::Utf16Mode;

/// Text encoding indicator found in the first byte of a text frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Iso8859_1,
    Utf16,
    Other(u8),
}

impl TextEncoding {
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0 => TextEncoding::Iso8859_1,
            1 => TextEncoding::Utf16,
            other => TextEncoding::Other(other),
        }
    }
}

/// Decode ISO-8859-1: each byte becomes the code point of the same value.
/// NULs and padding are kept.
pub fn decode_latin1(data: &[u8]) -> String {
    data.iter().map(|&b| char::from(b)).collect()
}

/// Decode UTF-16 text, honoring a byte order mark (little endian without one)
pub fn decode_utf16(data: &[u8]) -> String {
    match data {
        [0xFF, 0xFE, rest @ ..] => UTF_16LE.decode_without_bom_handling(rest).0.into_owned(),
        [0xFE, 0xFF, rest @ ..] => UTF_16BE.decode_without_bom_handling(rest).0.into_owned(),
        _ => UTF_16LE.decode_without_bom_handling(data).0.into_owned(),
    }
}

/// Keep only the second byte of each 2-byte unit. A trailing odd byte is dropped.
fn decode_utf16_compat(data: &[u8]) -> String {
    let low: Vec<u8> = data.chunks_exact(2).map(|unit| unit[1]).collect();
    decode_latin1(&low)
}

/// Decode an ID3v2 text frame payload
pub fn decode_text_frame(data: &[u8], utf16: Utf16Mode) -> String {
    let Some((&indicator, text)) = data.split_first() else {
        return String::new();
    };

    match (TextEncoding::from_byte(indicator), utf16) {
        (TextEncoding::Iso8859_1, _) => decode_latin1(text),
        (TextEncoding::Utf16, Utf16Mode::Compat) => decode_utf16_compat(text),
        (TextEncoding::Utf16, Utf16Mode::Full) => decode_utf16(text),
        (TextEncoding::Other(_), _) => decode_latin1(text),
    }
}
