//! HTML entity decoding for upstream question text
//!
//! The trivia service HTML-encodes its text fields (`&quot;`, `&#039;`,
//! `&eacute;`, ...). Decoding goes through the scraper HTML parser so the
//! full named-entity table is honoured.

use scraper::Html;

/// Decode HTML character references in `text`.
///
/// Strings without an `&` are returned unchanged, so decoding entity-free
/// text is a no-op. A literal `<` never starts markup: it is escaped before
/// parsing and comes back out as `<`.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let escaped = text.replace('<', "&lt;");
    let fragment = Html::parse_fragment(&escaped);
    fragment.root_element().text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_common_entities() {
        assert_eq!(
            decode_entities("Who wrote &quot;Hamlet&quot;?"),
            "Who wrote \"Hamlet\"?"
        );
        assert_eq!(decode_entities("It&#039;s"), "It's");
        assert_eq!(decode_entities("Tom &amp; Jerry"), "Tom & Jerry");
    }

    #[test]
    fn test_decode_named_accents() {
        assert_eq!(decode_entities("Pok&eacute;mon"), "Pokémon");
    }

    #[test]
    fn test_decode_keeps_angle_brackets_as_text() {
        assert_eq!(decode_entities("&lt;b&gt; tag"), "<b> tag");
        assert_eq!(decode_entities("a<b &amp;&amp; c"), "a<b && c");
    }

    #[test]
    fn test_decode_is_noop_without_entities() {
        for s in ["", "Plain text", "x < y > z", "1+1=2?", "  spaced  "] {
            assert_eq!(decode_entities(s), s);
        }
    }

    #[test]
    fn test_decode_is_idempotent_on_decoded_text() {
        let once = decode_entities("&quot;Quote&quot; and It&#039;s");
        assert_eq!(decode_entities(&once), once);
    }
}
