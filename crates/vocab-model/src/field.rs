use std::fmt;

/// The fixed target attributes of a vocabulary record, independent of how
/// source columns were labeled.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    Level,
    Headword,
    Romanization,
    Meaning,
    AudioUrl,
    Example,
    ExampleRomanization,
    ExampleMeaning,
}

impl CanonicalField {
    /// All canonical fields in schema order.
    pub const ALL: [Self; 8] = [
        Self::Level,
        Self::Headword,
        Self::Romanization,
        Self::Meaning,
        Self::AudioUrl,
        Self::Example,
        Self::ExampleRomanization,
        Self::ExampleMeaning,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Level => "level",
            Self::Headword => "headword",
            Self::Romanization => "romanization",
            Self::Meaning => "meaning",
            Self::AudioUrl => "audio_url",
            Self::Example => "example",
            Self::ExampleRomanization => "example_romanization",
            Self::ExampleMeaning => "example_meaning",
        }
    }

    /// True for fields a record can do without.
    pub fn is_optional(self) -> bool {
        !matches!(self, Self::Headword)
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
