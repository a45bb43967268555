// Metadata record returned by the tag readers

use serde::Serialize;

use crate::field_mapping::StandardField;

/// Title, artist, album and year read from a tag.
/// Fields missing from the tag stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub year: String,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: StandardField) -> &str {
        match field {
            StandardField::Title => &self.title,
            StandardField::Artist => &self.artist,
            StandardField::Album => &self.album,
            StandardField::Year => &self.year,
        }
    }

    pub fn field_mut(&mut self, field: StandardField) -> &mut String {
        match field {
            StandardField::Title => &mut self.title,
            StandardField::Artist => &mut self.artist,
            StandardField::Album => &mut self.album,
            StandardField::Year => &mut self.year,
        }
    }

    /// Overwrite a field
    pub fn set(&mut self, field: StandardField, value: String) {
        *self.field_mut(field) = value;
    }

    /// True when no field carries any text
    pub fn is_empty(&self) -> bool {
        StandardField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

impl std::fmt::Display for Metadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Metadata(title={:?}, artist={:?}, album={:?}, year={:?})",
            self.title, self.artist, self.album, self.year
        )
    }
}
