use unicode_normalization::UnicodeNormalization;

/// Strip accents from a courier display name.
///
/// The name is decomposed (NFKD) and every code point outside ASCII is
/// dropped, so combining marks disappear and the base letters remain.
/// Characters with no ASCII decomposition are discarded rather than
/// rejected; this never fails.
pub fn normalize_name(name: &str) -> String {
    name.nfkd().filter(char::is_ascii).collect()
}
