//! Punctuation-aware word tokenizer.

use super::{NormalizedQuery, Normalizer};

/// Lower-cases the message and splits it into words, peeling leading and
/// trailing punctuation off into tokens of their own.
///
/// `"¿Cuánto cuesta Zelda?"` becomes `["¿", "cuánto", "cuesta", "zelda", "?"]`.
/// Punctuation inside a word (`pac-man`, `7.5`) is kept, and a chunk made only
/// of punctuation (`...`) stays a single token.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordNormalizer;

impl WordNormalizer {
    fn split_chunk(chunk: &str, tokens: &mut Vec<String>) {
        let Some(start) = chunk.find(char::is_alphanumeric) else {
            tokens.push(chunk.to_string());
            return;
        };
        let end = chunk
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_alphanumeric())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(chunk.len());

        tokens.extend(chunk[..start].chars().map(String::from));
        tokens.push(chunk[start..end].to_string());
        tokens.extend(chunk[end..].chars().map(String::from));
    }
}

impl Normalizer for WordNormalizer {
    fn normalize(&self, text: &str) -> NormalizedQuery {
        let text = text.to_lowercase();

        let mut tokens = Vec::new();
        for chunk in text.split_whitespace() {
            Self::split_chunk(chunk, &mut tokens);
        }

        NormalizedQuery { tokens, text }
    }
}
