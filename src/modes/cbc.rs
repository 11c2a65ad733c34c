// Cipher block chaining.
//
//     C_i = E(P_i ⊕ C_{i-1}),    P_i = D(C_i) ⊕ C_{i-1},    C_0 = IV
use super::{check_aligned, check_iv_len};
use crate::{
    error::{self, ModeError},
    padding::{check_and_strip, pad_to},
    xor::xor_in_place,
    BlockCipher,
};

pub fn cbc_encrypt<C: BlockCipher + ?Sized>(
    cipher: &C,
    iv: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>, ModeError> {
    check_iv_len(cipher, iv)?;
    check_aligned(cipher, plaintext)?;

    let mut ciphertext = plaintext.to_vec();
    let mut last_block = iv.to_vec();
    for block in ciphertext.chunks_exact_mut(cipher.block_size()) {
        xor_in_place(block, &last_block);
        cipher.encrypt_block(block);
        last_block.copy_from_slice(block);
    }
    Ok(ciphertext)
}

pub fn cbc_decrypt<C: BlockCipher + ?Sized>(
    cipher: &C,
    iv: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>, ModeError> {
    check_iv_len(cipher, iv)?;
    check_aligned(cipher, ciphertext)?;

    let mut plaintext = ciphertext.to_vec();
    let mut last_block = iv.to_vec();
    let mut ciphertext_block = vec![0u8; cipher.block_size()];
    for block in plaintext.chunks_exact_mut(cipher.block_size()) {
        // Decrypting in place overwrites the next chaining value.
        ciphertext_block.copy_from_slice(block);
        cipher.decrypt_block(block);
        xor_in_place(block, &last_block);
        std::mem::swap(&mut last_block, &mut ciphertext_block);
    }
    Ok(plaintext)
}

/// Pad the plaintext to the block size and then CBC encrypt it.
pub fn cbc_encrypt_padded<C: BlockCipher + ?Sized>(
    cipher: &C,
    iv: &[u8],
    plaintext: &[u8],
) -> error::Result<Vec<u8>> {
    let block_size = u8::try_from(cipher.block_size())
        .map_err(|_| ModeError::PadWidth(cipher.block_size()))?;
    Ok(cbc_encrypt(cipher, iv, &pad_to(plaintext, block_size))?)
}

/// CBC decrypt and then validate and strip the padding.
pub fn cbc_decrypt_padded<C: BlockCipher + ?Sized>(
    cipher: &C,
    iv: &[u8],
    ciphertext: &[u8],
) -> error::Result<Vec<u8>> {
    let padded = cbc_decrypt(cipher, iv, ciphertext)?;
    Ok(check_and_strip(&padded)?.to_vec())
}
