// Read configuration

/// How frames with encoding indicator 1 (UTF-16) are decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Utf16Mode {
    /// Keep the second byte of every code unit. Only single-byte
    /// characters survive; this matches what most simple readers produce.
    #[default]
    Compat,
    /// Decode as real UTF-16, honoring a byte order mark.
    Full,
}

/// Options controlling how tags are turned into text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadOptions {
    pub utf16: Utf16Mode,
    /// Strip NUL and space padding from ID3v1 fields
    pub trim_padding: bool,
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_utf16(mut self, mode: Utf16Mode) -> Self {
        self.utf16 = mode;
        self
    }

    pub fn with_trim_padding(mut self, trim: bool) -> Self {
        self.trim_padding = trim;
        self
    }
}
