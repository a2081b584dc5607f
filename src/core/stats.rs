use crate::core::GreetingStats;

/// Character and word counts plus `!`/`?` presence for `text`.
///
/// Counts Unicode scalar values, so `"¡Hola Mundo!"` has 12 characters.
/// Inverted marks (`¡`, `¿`) do not set the flags.
pub fn analyze(text: &str) -> GreetingStats {
    GreetingStats {
        character_count: text.chars().count(),
        word_count: text.split_whitespace().count(),
        has_exclamation: text.contains('!'),
        has_question: text.contains('?'),
    }
}
