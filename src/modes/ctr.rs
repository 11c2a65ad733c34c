// Counter mode.
//
//         nonce|counter0                nonce|counter1
//              ↓                             ↓
//     key → < E >                   key → < E >
//              ↓                             ↓                 ...
// plaintext →  ⊕               plaintext  →  ⊕
//              ↓                             ↓
//          ciphertext                    ciphertext
//
// The counter is the final 8 bytes of the block, little-endian. The
// keystream depends only on the key, the nonce and the block offset, never
// on the message, so encrypting and decrypting are the same operation.
use super::check_iv_len;
use crate::{error::ModeError, BlockCipher};

use tracing::trace;

const COUNTER_LEN: usize = 8;

pub fn ctr_encrypt<C: BlockCipher + ?Sized>(
    cipher: &C,
    nonce: &[u8],
    data: &[u8],
) -> Result<Vec<u8>, ModeError> {
    check_iv_len(cipher, nonce)?;
    let block_size = cipher.block_size();
    if block_size < COUNTER_LEN {
        return Err(ModeError::CounterWidth(block_size));
    }

    let counter_offset = block_size - COUNTER_LEN;
    let mut ctr_block = nonce.to_vec();
    let mut counter = read_counter(&ctr_block[counter_offset..]);
    let mut keystream_block = vec![0u8; block_size];
    let mut output = Vec::with_capacity(data.len());
    for message_block in data.chunks(block_size) {
        keystream_block.copy_from_slice(&ctr_block);
        cipher.encrypt_block(&mut keystream_block);

        // A short final block only uses a prefix of the keystream block.
        output.extend(
            message_block
                .iter()
                .zip(&keystream_block)
                .map(|(m, k)| m ^ k),
        );

        counter = counter.wrapping_add(1);
        ctr_block[counter_offset..].copy_from_slice(&counter.to_le_bytes());
    }
    trace!(
        n_blocks = data.len().div_ceil(block_size),
        len = data.len(),
        "applied CTR keystream"
    );
    Ok(output)
}

pub fn ctr_decrypt<C: BlockCipher + ?Sized>(
    cipher: &C,
    nonce: &[u8],
    data: &[u8],
) -> Result<Vec<u8>, ModeError> {
    ctr_encrypt(cipher, nonce, data)
}

/// The first `len` bytes of keystream that CTR mode XORs against data.
pub fn ctr_keystream<C: BlockCipher + ?Sized>(
    cipher: &C,
    nonce: &[u8],
    len: usize,
) -> Result<Vec<u8>, ModeError> {
    ctr_encrypt(cipher, nonce, &vec![0u8; len])
}

/// Build a 16-byte nonce block from an 8-byte prefix and the initial
/// counter value, both little-endian.
pub fn make_nonce(prefix: u64, counter: u64) -> [u8; 16] {
    let mut nonce = [0u8; 16];
    nonce[..8].copy_from_slice(&prefix.to_le_bytes());
    nonce[8..].copy_from_slice(&counter.to_le_bytes());
    nonce
}

fn read_counter(bytes: &[u8]) -> u64 {
    let mut counter = [0u8; COUNTER_LEN];
    counter.copy_from_slice(bytes);
    u64::from_le_bytes(counter)
}
