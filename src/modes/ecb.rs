// Electronic codebook mode: every block is transformed on its own.
use super::check_aligned;
use crate::{error::ModeError, BlockCipher};

pub fn ecb_encrypt<C: BlockCipher + ?Sized>(
    cipher: &C,
    data: &[u8],
) -> Result<Vec<u8>, ModeError> {
    check_aligned(cipher, data)?;
    let mut out = data.to_vec();
    out.chunks_exact_mut(cipher.block_size())
        .for_each(|block| cipher.encrypt_block(block));
    Ok(out)
}

pub fn ecb_decrypt<C: BlockCipher + ?Sized>(
    cipher: &C,
    data: &[u8],
) -> Result<Vec<u8>, ModeError> {
    check_aligned(cipher, data)?;
    let mut out = data.to_vec();
    out.chunks_exact_mut(cipher.block_size())
        .for_each(|block| cipher.decrypt_block(block));
    Ok(out)
}
