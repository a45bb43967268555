// Metadata field mapping
//
// Maps ID3v2 frame identifiers onto the fields of `Metadata`.
// Supporting another text frame means adding one row to `ID3V2_TEXT_FRAMES`.

/// Standard metadata fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardField {
    Title,
    Artist,
    Album,
    Year,
}

impl StandardField {
    pub const ALL: [StandardField; 4] = [
        StandardField::Title,
        StandardField::Artist,
        StandardField::Album,
        StandardField::Year,
    ];

    /// Get standard field name (lowercase)
    pub fn as_str(&self) -> &'static str {
        match self {
            StandardField::Title => "title",
            StandardField::Artist => "artist",
            StandardField::Album => "album",
            StandardField::Year => "year",
        }
    }

    /// Parse from string, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "title" => Some(StandardField::Title),
            "artist" => Some(StandardField::Artist),
            "album" => Some(StandardField::Album),
            "year" => Some(StandardField::Year),
            _ => None,
        }
    }
}

impl std::fmt::Display for StandardField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ID3v2 frame identifiers
pub mod frame_ids {
    pub const TITLE: &[u8; 4] = b"TIT2"; // Title/songname/content description
    pub const ARTIST: &[u8; 4] = b"TPE1"; // Lead performer(s)/Soloist(s)
    pub const ALBUM: &[u8; 4] = b"TALB"; // Album/Movie/Show title
    pub const YEAR: &[u8; 4] = b"TYER"; // Year
}

/// Text frames that populate a metadata field
pub const ID3V2_TEXT_FRAMES: &[(&[u8; 4], StandardField)] = &[
    (frame_ids::TITLE, StandardField::Title),
    (frame_ids::ARTIST, StandardField::Artist),
    (frame_ids::ALBUM, StandardField::Album),
    (frame_ids::YEAR, StandardField::Year),
];

/// Format-specific field mappings
pub struct FieldMappings;

impl FieldMappings {
    /// Convert ID3v2 frame to standard field
    pub fn from_id3v2(frame_id: &[u8; 4]) -> Option<StandardField> {
        ID3V2_TEXT_FRAMES
            .iter()
            .find(|(id, _)| *id == frame_id)
            .map(|(_, field)| *field)
    }

    /// Parse a comma-separated field list such as `title,artist`
    pub fn parse_list(list: &str) -> Result<Vec<StandardField>, String> {
        list.split(',')
            .filter(|s| !s.trim().is_empty())
            .map(|s| StandardField::parse(s).ok_or_else(|| format!("unknown field '{}'", s.trim())))
            .collect()
    }
}
