// Break CTR mode encryption that reuses a fixed nonce.
//
// CTR mode turns a block cipher into a stream cipher: the ciphertext is the
// plaintext XOR-ed with a keystream generated from the key and nonce alone.
// When every message is encrypted with the same key and nonce, every message
// is XOR-ed with the same keystream, so for every message i and offset p
//
//     ciphertext[i][p] ⊕ plaintext[i][p] = keystream[p].
//
// Taking the byte at offset p from every ciphertext gives a "column" that was
// encrypted with a single-byte XOR key, keystream[p]. We break each column as
// we would a single-byte XOR cipher, by trying all 256 keys and keeping the
// one that makes the column look most like English.
//
// Only offsets that every message reaches give a full column, so everything
// is truncated to the shortest ciphertext and bytes beyond it are never
// recovered. This is a statistical attack: with few messages, or columns of
// mostly non-alphabetic text, some keystream bytes will come out wrong. That
// is a limit on the quality of the answer, not an error.
//
// A column of letters reads as well in upper case as in lower case (the two
// keys differ only in bit 0x20), and the scorer favours lower case. That is
// right everywhere except offset 0, where messages usually start with a
// capital. So at offset 0 a column that decrypts to letters only is read as
// mostly capitals.

use crate::{
    error::ModeError,
    modes::ctr::ctr_encrypt,
    score::{self, brute_force_byte_xor, EnglishFrequency, Scorer},
    xor::{xor_bytes, xor_with_key},
    BlockCipher,
};

use rayon::prelude::*;
use tracing::{debug, trace};

const CASE_BIT: u8 = 0x20;

/// The keystream guess and the messages it decrypts to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeystreamRecovery {
    pub keystream: Vec<u8>,
    /// One plaintext per ciphertext, in order, each truncated to the length
    /// of the keystream.
    pub plaintexts: Vec<Vec<u8>>,
}

impl KeystreamRecovery {
    pub fn truncated_len(&self) -> usize {
        self.keystream.len()
    }

    /// Mean fraction of printable bytes across the recovered plaintexts, a
    /// quick sanity check on the guess.
    pub fn printable_ratio(&self) -> f64 {
        if self.plaintexts.is_empty() {
            return 1.0;
        }
        self.plaintexts
            .iter()
            .map(|p| score::printable_ratio(p))
            .sum::<f64>()
            / self.plaintexts.len() as f64
    }
}

pub fn break_many_time_pad<T>(ciphertexts: &[T]) -> KeystreamRecovery
where
    T: AsRef<[u8]> + Sync,
{
    break_many_time_pad_with(ciphertexts, &EnglishFrequency)
}

/// Recover the keystream shared by `ciphertexts` using `scorer` to judge
/// candidate plaintext columns.
///
/// With no ciphertexts the result is empty. A single ciphertext has nothing
/// to compare against, so the keystream is all zeros and the "plaintext" is
/// the ciphertext itself.
pub fn break_many_time_pad_with<T, S>(ciphertexts: &[T], scorer: &S) -> KeystreamRecovery
where
    T: AsRef<[u8]> + Sync,
    S: Scorer + ?Sized,
{
    if let [ciphertext] = ciphertexts {
        let ciphertext = ciphertext.as_ref();
        debug!(len = ciphertext.len(), "single ciphertext, nothing to recover");
        return KeystreamRecovery {
            keystream: vec![0; ciphertext.len()],
            plaintexts: vec![ciphertext.to_vec()],
        };
    }
    let Some(truncated_len) = ciphertexts.iter().map(|c| c.as_ref().len()).min() else {
        return KeystreamRecovery::default();
    };
    let n_discarded: usize = ciphertexts
        .iter()
        .map(|c| c.as_ref().len() - truncated_len)
        .sum();
    debug!(
        n_messages = ciphertexts.len(),
        truncated_len, n_discarded, "breaking fixed keystream"
    );

    let keystream: Vec<u8> = (0..truncated_len)
        .into_par_iter()
        .map(|byte_idx| {
            // Every byte in this column was XOR-ed with the same keystream
            // byte.
            let column: Vec<u8> = ciphertexts.iter().map(|c| c.as_ref()[byte_idx]).collect();
            crack_column(&column, byte_idx, scorer)
        })
        .collect();

    let plaintexts = ciphertexts
        .iter()
        .map(|c| xor_bytes(&c.as_ref()[..truncated_len], &keystream))
        .collect();
    KeystreamRecovery {
        keystream,
        plaintexts,
    }
}

fn crack_column<S: Scorer + ?Sized>(column: &[u8], byte_idx: usize, scorer: &S) -> u8 {
    let best = brute_force_byte_xor(column, scorer);
    trace!(byte_idx, key = best.key, score = best.score, "cracked column");
    if byte_idx == 0 {
        prefer_capitals(column, best.key)
    } else {
        best.key
    }
}

/// Flip the case of a letters-only column that decrypts to mostly lower case.
fn prefer_capitals(column: &[u8], key: u8) -> u8 {
    let plaintext = xor_with_key(column, key);
    let all_letters = plaintext.iter().all(u8::is_ascii_alphabetic);
    let n_upper = plaintext.iter().filter(|b| b.is_ascii_uppercase()).count();
    if all_letters && n_upper * 2 < plaintext.len() {
        trace!(key, flipped = key ^ CASE_BIT, "reading first column as capitals");
        key ^ CASE_BIT
    } else {
        key
    }
}

/// Ciphertexts collected one message at a time, all under the same key and
/// nonce.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CiphertextSession {
    ciphertexts: Vec<Vec<u8>>,
}

impl CiphertextSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ciphertext: impl Into<Vec<u8>>) {
        self.ciphertexts.push(ciphertext.into());
    }

    /// CTR encrypt `plaintext` on its own (from the start of the keystream)
    /// and add the ciphertext to the session.
    pub fn push_encrypted<C: BlockCipher + ?Sized>(
        &mut self,
        cipher: &C,
        nonce: &[u8],
        plaintext: &[u8],
    ) -> Result<(), ModeError> {
        self.ciphertexts.push(ctr_encrypt(cipher, nonce, plaintext)?);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.ciphertexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ciphertexts.is_empty()
    }

    /// Length of the shortest ciphertext, which bounds how much keystream
    /// can be recovered.
    pub fn min_len(&self) -> Option<usize> {
        self.ciphertexts.iter().map(Vec::len).min()
    }

    pub fn ciphertexts(&self) -> &[Vec<u8>] {
        &self.ciphertexts
    }

    pub fn break_keystream(&self) -> KeystreamRecovery {
        break_many_time_pad(&self.ciphertexts)
    }

    pub fn break_keystream_with<S: Scorer + ?Sized>(&self, scorer: &S) -> KeystreamRecovery {
        break_many_time_pad_with(&self.ciphertexts, scorer)
    }
}

impl FromIterator<Vec<u8>> for CiphertextSession {
    fn from_iter<I: IntoIterator<Item = Vec<u8>>>(iter: I) -> Self {
        Self {
            ciphertexts: iter.into_iter().collect(),
        }
    }
}

impl Extend<Vec<u8>> for CiphertextSession {
    fn extend<I: IntoIterator<Item = Vec<u8>>>(&mut self, iter: I) {
        self.ciphertexts.extend(iter);
    }
}
