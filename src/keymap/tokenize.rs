//! Quote-aware tokenizer for ACT and SCR entry bodies

/// Split a string by whitespace while keeping double-quoted runs together
///
/// A `"..."` run becomes one token with its quotes removed and its inner
/// whitespace preserved. Unquoted runs end at whitespace or at a quote. A
/// quote with no closing partner is dropped and scanning continues after it.
pub fn split_preserving_quotes(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        if ch.is_whitespace() {
            rest = &rest[ch.len_utf8()..];
            continue;
        }

        if ch == '"' {
            let inner = &rest[1..];
            match inner.find('"') {
                Some(end) => {
                    tokens.push(&inner[..end]);
                    rest = &inner[end + 1..];
                }
                None => rest = inner,
            }
            continue;
        }

        let end = rest
            .find(|c: char| c.is_whitespace() || c == '"')
            .unwrap_or(rest.len());
        tokens.push(&rest[..end]);
        rest = &rest[end..];
    }

    tokens
}
