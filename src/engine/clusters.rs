/// Consonant clusters that must not be split by a cut.
///
/// Two- and three-letter sequences, lowercase, matched case-insensitively.
#[rustfmt::skip]
pub const CONSONANT_CLUSTERS: &[&str] = &[
    // digraphs
    "th", "ch", "sh", "wh", "ph", "gh",
    // r blends
    "tr", "dr", "br", "cr", "gr", "fr", "pr",
    // l blends
    "bl", "cl", "fl", "gl", "pl", "sl",
    // s blends
    "sc", "sk", "sm", "sn", "sp", "st", "sw",
    "tw", "dw", "qu",
    // trigraphs
    "str", "spr", "scr", "spl", "shr", "thr",
];

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

/// True when `pos` lies strictly inside a cluster occurrence in `word`.
///
/// `word` is indexed by character; a cut at `pos` falls between
/// `word[pos - 1]` and `word[pos]`.
pub fn is_in_consonant_cluster(word: &[char], pos: usize) -> bool {
    CONSONANT_CLUSTERS.iter().any(|cluster| {
        let len = cluster.len();
        if word.len() < len {
            return false;
        }
        (0..=word.len() - len).any(|start| {
            start < pos
                && pos < start + len
                && word[start..start + len]
                    .iter()
                    .zip(cluster.chars())
                    .all(|(w, c)| w.to_ascii_lowercase() == c)
        })
    })
}
