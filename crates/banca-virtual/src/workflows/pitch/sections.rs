/// Section labels a structurally complete deck is expected to mention.
pub const COMMON_SECTIONS: [&str; 11] = [
    "Problema",
    "Solução",
    "Produto",
    "Mercado",
    "Modelo de Negócio",
    "Go-to-Market",
    "Concorrência",
    "Tração",
    "Equipe",
    "Roadmap",
    "Use of Funds",
];

/// Fraction of expected section labels found in `text`, in [0,1].
///
/// Case-insensitive literal substring containment; no stemming or fuzzy
/// matching. This is a rough structural-completeness signal, not NLP, and is
/// kept deliberately crude. Zero expected sections yields 0.
pub fn section_coverage<S: AsRef<str>>(text: &str, expected_sections: &[S]) -> f64 {
    let haystack = text.to_lowercase();
    let hits = expected_sections
        .iter()
        .filter(|section| haystack.contains(&section.as_ref().to_lowercase()))
        .count();
    hits as f64 / expected_sections.len().max(1) as f64
}

/// Coverage of [`COMMON_SECTIONS`] in extracted deck text.
pub fn deck_structure_score(text: &str) -> f64 {
    section_coverage(text, &COMMON_SECTIONS)
}
