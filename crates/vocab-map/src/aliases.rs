use vocab_model::CanonicalField;

/// Accepted header-label variants per canonical field, in priority order.
///
/// Header labels are author-supplied free text across English and
/// Vietnamese, so the table is deliberately permissive. Resolution walks
/// aliases in the declared order; the table itself is the reviewable
/// artifact — extend it here, never probe labels ad hoc.
pub const FIELD_ALIASES: &[(CanonicalField, &[&str])] = &[
    (
        CanonicalField::Level,
        &["Level", "HSK", "Cấp độ", "Trình độ"],
    ),
    (
        CanonicalField::Headword,
        &["Hán tự", "Hanzi", "Character", "Word", "Chữ Hán"],
    ),
    (CanonicalField::Romanization, &["Pinyin", "Phiên âm"]),
    (
        CanonicalField::Meaning,
        &["Nghĩa", "Meaning", "Definition", "Nghĩa tiếng việt"],
    ),
    (
        CanonicalField::AudioUrl,
        &["Phát âm", "Audio", "Sound", "Mp3", "Link", "Audio Url"],
    ),
    (
        CanonicalField::Example,
        &["Ví dụ (chữ hán)", "Ví dụ", "Example", "Sentence", "Câu ví dụ"],
    ),
    (
        CanonicalField::ExampleRomanization,
        &["Phiên âm ví dụ", "Example Pinyin", "Phiên âm"],
    ),
    (
        CanonicalField::ExampleMeaning,
        &["Dịch", "Example Meaning", "Dịch nghĩa", "Nghĩa ví dụ"],
    ),
];

/// Aliases for one canonical field, in priority order.
pub fn aliases_for(field: CanonicalField) -> &'static [&'static str] {
    FIELD_ALIASES
        .iter()
        .find(|(candidate, _)| *candidate == field)
        .map(|(_, aliases)| *aliases)
        .unwrap_or(&[])
}
