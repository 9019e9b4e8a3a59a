//! Script classification for mixed Latin/Chinese text.
//!
//! Input is split into maximal runs of CJK ideographs, maximal runs of ASCII
//! letters and digits, and single "other" characters. Concatenating the runs
//! reproduces the input exactly.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptClass {
    Cjk,
    LatinDigit,
    Other,
}

/// A contiguous slice of the source text tagged with its script class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub class: ScriptClass,
}

impl<'a> Token<'a> {
    /// Length in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// CJK Unified Ideographs block (U+4E00..=U+9FFF).
pub fn is_cjk(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

pub fn classify_char(c: char) -> ScriptClass {
    if is_cjk(c) {
        ScriptClass::Cjk
    } else if c.is_ascii_alphanumeric() {
        ScriptClass::LatinDigit
    } else {
        ScriptClass::Other
    }
}

pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(is_cjk)
}

/// Splits `text` into script runs in source order.
///
/// `Other` characters never merge: each one is its own token.
pub fn classify(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut run: Option<(usize, ScriptClass)> = None;

    for (idx, c) in text.char_indices() {
        let class = classify_char(c);

        if let Some((start, current)) = run {
            if current == class && class != ScriptClass::Other {
                continue;
            }
            tokens.push(Token {
                text: &text[start..idx],
                class: current,
            });
        }
        run = Some((idx, class));
    }

    if let Some((start, class)) = run {
        tokens.push(Token {
            text: &text[start..],
            class,
        });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
        tokens.iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_classify_empty_string() {
        assert!(classify("").is_empty());
    }

    #[test]
    fn test_classify_mixed_script() {
        let tokens = classify("Hello 你好 World");
        assert_eq!(texts(&tokens), vec!["Hello", " ", "你好", " ", "World"]);
        let classes: Vec<ScriptClass> = tokens.iter().map(|t| t.class).collect();
        assert_eq!(
            classes,
            vec![
                ScriptClass::LatinDigit,
                ScriptClass::Other,
                ScriptClass::Cjk,
                ScriptClass::Other,
                ScriptClass::LatinDigit,
            ]
        );
    }

    #[test]
    fn test_other_characters_never_merge() {
        let tokens = classify("a...  b");
        assert_eq!(texts(&tokens), vec!["a", ".", ".", ".", " ", " ", "b"]);
    }

    #[test]
    fn test_letters_and_digits_share_a_run() {
        let tokens = classify("abc123def");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].class, ScriptClass::LatinDigit);
    }

    #[test]
    fn test_non_latin_letters_are_other() {
        let tokens = classify("café");
        assert_eq!(texts(&tokens), vec!["caf", "é"]);
        assert_eq!(tokens[1].class, ScriptClass::Other);
    }

    #[test]
    fn test_cjk_punctuation_is_other() {
        let tokens = classify("你好，世界");
        assert_eq!(texts(&tokens), vec!["你好", "，", "世界"]);
        assert_eq!(tokens[1].class, ScriptClass::Other);
    }

    #[test]
    fn test_cjk_block_bounds() {
        assert!(is_cjk('\u{4E00}'));
        assert!(is_cjk('\u{9FFF}'));
        assert!(!is_cjk('\u{4DFF}'));
        assert!(!is_cjk('\u{A000}'));
    }

    #[test]
    fn test_char_len_counts_characters() {
        let tokens = classify("学习");
        assert_eq!(tokens[0].char_len(), 2);
        assert_eq!(tokens[0].text.len(), 6);
    }

    #[test]
    fn test_runs_reconstruct_input() {
        let input = "Rust 1.80 发布了! ok?\n";
        let rebuilt: String = classify(input).iter().map(|t| t.text).collect();
        assert_eq!(rebuilt, input);
    }
}
