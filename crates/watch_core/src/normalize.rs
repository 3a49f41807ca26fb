use unicode_normalization::UnicodeNormalization;

/// Canonical form of `text` for accent, case and punctuation insensitive
/// substring matching.
///
/// Compatibility decomposition first, so "í" becomes "i" plus a combining
/// mark; the mark is then dropped together with every other non-ASCII char.
/// What survives is lowercased and reduced to word characters and
/// whitespace, then trimmed.
pub fn normalize_text(text: &str) -> String {
    let folded: String = text
        .nfkd()
        .filter(char::is_ascii)
        .map(|ch| ch.to_ascii_lowercase())
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '_' || ch.is_ascii_whitespace())
        .collect();
    folded.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents_and_case() {
        assert_eq!(normalize_text("Inscríbite"), "inscribite");
        assert_eq!(normalize_text("INSCRIBITE"), normalize_text("inscríbite"));
    }

    #[test]
    fn drops_punctuation_and_emoji() {
        assert_eq!(normalize_text("  ¡Inscribite acá! 👉 "), "inscribite aca");
        assert_eq!(normalize_text("snake_case-word"), "snake_caseword");
    }

    #[test]
    fn empty_in_empty_out() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text("¿?¡!"), "");
    }
}
