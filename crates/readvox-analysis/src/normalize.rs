/// Normalize raw text into the word sequence every downstream index
/// refers to.
///
/// Sentence punctuation (`.` `,` `!` `?`) becomes a space before anything
/// else so adjacent sentences never merge ("town.A" must tokenize as
/// "town", "a"). Apostrophes and hyphens are kept; stripping them would
/// split contractions the ASR output leaves intact.
pub fn normalize(text: &str) -> Vec<String> {
    text.replace(['.', ',', '!', '?'], " ")
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_becomes_word_boundary() {
        assert_eq!(normalize("Town.A bird"), vec!["town", "a", "bird"]);
    }

    #[test]
    fn lowercases_and_collapses_whitespace() {
        assert_eq!(
            normalize("  The   sun ROSE,  slowly. "),
            vec!["the", "sun", "rose", "slowly"]
        );
    }

    #[test]
    fn apostrophes_and_hyphens_survive() {
        assert_eq!(
            normalize("don't half-way"),
            vec!["don't", "half-way"]
        );
    }

    #[test]
    fn empty_input_gives_empty_sequence() {
        assert!(normalize("").is_empty());
        assert!(normalize("  .,!? ").is_empty());
    }

    #[test]
    fn normalization_is_idempotent() {
        let first = normalize("Cool rain fell, softly... on the EMPTY street!");
        let second = normalize(&first.join(" "));
        assert_eq!(first, second);
    }
}
