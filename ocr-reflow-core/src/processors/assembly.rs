//! Final assembly of merged lines into a single text block.

use crate::core::constants::LINE_SEPARATOR;
use itertools::Itertools;

/// Joins merged lines into the final text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextAssembler;

impl TextAssembler {
    /// Joins lines with a single newline. No trailing newline is emitted and
    /// empty input gives an empty string.
    pub fn assemble<S: AsRef<str>>(lines: &[S]) -> String {
        lines.iter().map(AsRef::as_ref).join(LINE_SEPARATOR)
    }

    /// Splits assembled text back into its lines.
    ///
    /// Inverse of [`assemble`](TextAssembler::assemble) for lines that do not
    /// themselves contain a newline.
    pub fn split(text: &str) -> Vec<&str> {
        if text.is_empty() {
            return Vec::new();
        }
        text.split(LINE_SEPARATOR).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble() {
        assert_eq!(TextAssembler::assemble(&["a b", "c"]), "a b\nc");
        assert_eq!(TextAssembler::assemble(&["only"]), "only");
        assert_eq!(TextAssembler::assemble::<&str>(&[]), "");
    }

    #[test]
    fn test_keeps_empty_lines() {
        assert_eq!(TextAssembler::assemble(&["a", "", "b"]), "a\n\nb");
    }

    #[test]
    fn test_split_inverts_assemble() {
        let lines = vec!["Invoice  2024".to_string(), "CSV template".to_string()];
        let text = TextAssembler::assemble(&lines);
        assert_eq!(TextAssembler::split(&text), lines);
        assert!(TextAssembler::split("").is_empty());
    }
}
