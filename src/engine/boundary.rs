use super::clusters::{is_in_consonant_cluster, is_vowel};

/// Candidates are searched this many characters either side of the ratio cut.
pub const SEARCH_RANGE: usize = 2;

const CONSONANT_VOWEL_BONUS: f64 = 10.0;
const VOWEL_CONSONANT_BONUS: f64 = 5.0;
const CLUSTER_PENALTY: f64 = 20.0;
const DISTANCE_PENALTY: f64 = 0.5;

/// `ceil(len * ratio)`, never below 1 and never past `len`.
pub fn ratio_len(len: usize, ratio: f64) -> usize {
    let scaled = (len as f64 * ratio).ceil().max(1.0) as usize;
    scaled.min(len.max(1))
}

/// Picks the focus length for a Latin/digit token.
///
/// The cut falls between character `p - 1` and `p`, counted in characters:
/// - all-digit tokens take the ratio length directly
/// - tokens of three characters or fewer are capped at half their length
/// - longer tokens search `base ± SEARCH_RANGE` for the best-scoring syllable
///   break, where `base` is the ratio length
///
/// For non-digit tokens of two or more characters the result lies in
/// `1..=len - 1`. Returns 0 for an empty token.
pub fn best_cut(word: &str, ratio: f64) -> usize {
    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();

    if len == 0 {
        return 0;
    }

    if chars.iter().all(char::is_ascii_digit) {
        return ratio_len(len, ratio);
    }

    if len <= 3 {
        return ratio_len(len, ratio).min(len.div_ceil(2));
    }

    let base = ratio_len(len, ratio);
    let lo = base.saturating_sub(SEARCH_RANGE).max(1);
    let hi = (base + SEARCH_RANGE).min(len - 1);

    // Later candidates replace the best only on strict improvement, so the
    // lowest position wins a tie.
    let mut best: Option<(usize, f64)> = None;
    for pos in lo..=hi {
        let score = score_cut(&chars, pos, base);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    best.map_or(base.min(len - 1), |(pos, _)| pos)
}

/// Heuristic score of cutting `chars` at `pos`, relative to the ratio cut `base`.
pub fn score_cut(chars: &[char], pos: usize, base: usize) -> f64 {
    let prev = chars[pos - 1];
    let next = chars[pos];

    let mut score = match (is_vowel(prev), is_vowel(next)) {
        (false, true) => CONSONANT_VOWEL_BONUS,
        (true, false) => VOWEL_CONSONANT_BONUS,
        _ => 0.0,
    };

    if is_in_consonant_cluster(chars, pos) {
        score -= CLUSTER_PENALTY;
    }

    score - DISTANCE_PENALTY * pos.abs_diff(base) as f64
}
