/// The fixed set of languages the relay will translate into. Immutable
/// and process-wide; requested languages are validated against it.
pub const SUPPORTED_LANGUAGES: [&str; 25] = [
    "English",
    "Assamese",
    "Bangla",
    "Bodo",
    "Dogri",
    "Gujarati",
    "Hindi",
    "Kashmiri",
    "Kannada",
    "Konkani",
    "Maithili",
    "Malayalam",
    "Manipuri",
    "Marathi",
    "Nepali",
    "Odia",
    "Punjabi",
    "Tamil",
    "Telugu",
    "Santali",
    "Sindhi",
    "Urdu",
    "Konyak",
    "Khasi",
    "Jaintia",
];

pub fn is_supported(language: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&language)
}

/// All supported languages as owned strings, in canonical order.
pub fn all_supported() -> Vec<String> {
    SUPPORTED_LANGUAGES.iter().map(|l| l.to_string()).collect()
}
