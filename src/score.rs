// Scoring bytes for how much they look like English text.
//
// Every byte gets a fixed weight and a text's score is the mean weight, so
// scores of columns with different numbers of bytes are comparable.
// Lowercase letters are weighted by how often they appear in English and
// space, the most common character of all, gets the largest weight. Upper
// and lowercase letters differ only in bit 5, so XOR-ing with a key that
// differs from the true key by 0x20 swaps the case of every letter. Giving
// uppercase letters less weight than lowercase breaks that tie in favour of
// lower case, which is the usual reading except at the start of a sentence.
// Control characters and bytes outside ASCII are
// heavily penalised as a single one is strong evidence the key is wrong.

use crate::xor::xor_with_key;

use rayon::prelude::*;

// Percentages, from
// http://practicalcryptography.com/cryptanalysis/letter-frequencies-various-languages/english-letter-frequencies/
const LETTER_FREQUENCIES: [f64; 26] = [
    8.55, // A
    1.60, // B
    3.16, // C
    3.87, // D
    12.10, // E
    2.18, // F
    2.09, // G
    4.96, // H
    7.33, // I
    0.22, // J
    0.81, // K
    4.21, // L
    2.53, // M
    7.17, // N
    7.47, // O
    2.07, // P
    0.10, // Q
    6.33, // R
    6.73, // S
    8.94, // T
    2.68, // U
    1.06, // V
    1.83, // W
    0.19, // X
    1.72, // Y
    0.11, // Z
];
const SPACE_WEIGHT: f64 = 13.0;
const UPPERCASE_FACTOR: f64 = 0.5;
const PUNCTUATION_CHARS: &[u8] = b".,'!?;:-\"";
const PUNCTUATION_WEIGHT: f64 = 1.0;
const DIGIT_WEIGHT: f64 = 0.5;
const OTHER_PRINTABLE_WEIGHT: f64 = 0.1;
const NON_PRINTABLE_WEIGHT: f64 = -10.0;

/// Scores how plausible some bytes are as plaintext. Higher is better.
///
/// Implementations must be pure functions of their input; the attack
/// evaluates many columns concurrently against a single scorer.
pub trait Scorer: Sync {
    fn score(&self, bytes: &[u8]) -> f64;
}

/// Mean per-byte weight of English text.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishFrequency;

impl Scorer for EnglishFrequency {
    fn score(&self, bytes: &[u8]) -> f64 {
        if bytes.is_empty() {
            return 0.0;
        }
        bytes.iter().map(|&b| byte_weight(b)).sum::<f64>() / bytes.len() as f64
    }
}

pub fn score_english_by_frequency(bytes: &[u8]) -> f64 {
    EnglishFrequency.score(bytes)
}

fn byte_weight(byte: u8) -> f64 {
    match byte {
        b' ' => SPACE_WEIGHT,
        b'a'..=b'z' => LETTER_FREQUENCIES[(byte - b'a') as usize],
        b'A'..=b'Z' => LETTER_FREQUENCIES[(byte - b'A') as usize] * UPPERCASE_FACTOR,
        _ if PUNCTUATION_CHARS.contains(&byte) => PUNCTUATION_WEIGHT,
        b'0'..=b'9' => DIGIT_WEIGHT,
        b'!'..=b'~' | b'\t' | b'\n' | b'\r' => OTHER_PRINTABLE_WEIGHT,
        _ => NON_PRINTABLE_WEIGHT,
    }
}

/// Fraction of bytes that are printable ASCII or common whitespace. An
/// empty buffer is trivially printable.
pub fn printable_ratio(bytes: &[u8]) -> f64 {
    if bytes.is_empty() {
        return 1.0;
    }
    let n_printable = bytes
        .iter()
        .filter(|&&b| matches!(b, b' '..=b'~' | b'\t' | b'\n' | b'\r'))
        .count();
    n_printable as f64 / bytes.len() as f64
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XorCrackResult {
    pub key: u8,
    pub score: f64,
}

impl XorCrackResult {
    /// The better of two candidates; the smaller key wins a tie so the
    /// choice doesn't depend on evaluation order.
    fn better(self, other: Self) -> Self {
        match self.score.total_cmp(&other.score) {
            std::cmp::Ordering::Greater => self,
            std::cmp::Ordering::Less => other,
            std::cmp::Ordering::Equal if self.key <= other.key => self,
            std::cmp::Ordering::Equal => other,
        }
    }
}

/// Find the single-byte XOR key that makes `bytes` score best.
///
/// Candidates the scorer can't rate (NaN) are ignored. If no candidate can be
/// rated the key is 0.
pub fn brute_force_byte_xor<S: Scorer + ?Sized>(bytes: &[u8], scorer: &S) -> XorCrackResult {
    (0..=255u8)
        .into_par_iter()
        .map(|key| XorCrackResult {
            key,
            score: scorer.score(&xor_with_key(bytes, key)),
        })
        .filter(|candidate| !candidate.score.is_nan())
        .reduce_with(XorCrackResult::better)
        .unwrap_or(XorCrackResult {
            key: 0,
            score: f64::NAN,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    struct Constant(f64);

    impl Scorer for Constant {
        fn score(&self, _: &[u8]) -> f64 {
            self.0
        }
    }

    #[test]
    fn brute_force_xor_recovers_key() {
        let bytes = [
            0x1b, 0x37, 0x37, 0x33, 0x31, 0x36, 0x3f, 0x78, 0x15, 0x1b, 0x7f, 0x2b, 0x78, 0x34,
            0x31, 0x33, 0x3d, 0x78, 0x39, 0x78, 0x28, 0x37, 0x2d, 0x36, 0x3c, 0x78, 0x37, 0x3e,
            0x78, 0x3a, 0x39, 0x3b, 0x37, 0x36,
        ];

        let result = brute_force_byte_xor(&bytes, &EnglishFrequency);

        assert_eq!(result.key, 88);
        assert_eq!(
            xor_with_key(&bytes, result.key),
            b"Cooking MC's like a pound of bacon"
        );
    }

    #[test]
    fn brute_force_xor_breaks_ties_with_smallest_key() {
        let result = brute_force_byte_xor(b"anything", &Constant(1.0));

        assert_eq!(result, XorCrackResult { key: 0, score: 1.0 });
    }

    #[test]
    fn brute_force_xor_ignores_unscorable_candidates() {
        let result = brute_force_byte_xor(b"anything", &Constant(f64::NAN));

        assert_eq!(result.key, 0);
        assert!(result.score.is_nan());
    }

    #[rstest]
    #[case("hello world", "HELLO WORLD")]
    #[case("hello world", "hello\x00world")]
    #[case("the end.", "12345678")]
    #[case("It was the best of times", "iT\x00WAS\x00THE\x00BEST\x00OF\x00TIMES")]
    fn english_scores_higher_than_alternative(#[case] english: &str, #[case] other: &str) {
        assert!(
            score_english_by_frequency(english.as_bytes())
                > score_english_by_frequency(other.as_bytes())
        );
    }

    #[test]
    fn score_is_a_mean_over_bytes() {
        assert_eq!(score_english_by_frequency(b"    "), SPACE_WEIGHT);
        assert_eq!(score_english_by_frequency(b"\x00\x01"), NON_PRINTABLE_WEIGHT);
        assert_eq!(score_english_by_frequency(b""), 0.0);
    }

    #[rstest]
    #[case(b"plain text\n", 1.0)]
    #[case(b"", 1.0)]
    #[case(b"ab\x00\xff", 0.5)]
    fn printable_ratio_counts_printable_bytes(#[case] bytes: &[u8], #[case] expected: f64) {
        assert_eq!(printable_ratio(bytes), expected);
    }
}
