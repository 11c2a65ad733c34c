pub mod cbc;
pub mod ctr;
pub mod ecb;

use crate::{error::ModeError, BlockCipher};

fn check_block_size<C: BlockCipher + ?Sized>(cipher: &C) -> Result<usize, ModeError> {
    match cipher.block_size() {
        0 => Err(ModeError::ZeroBlockSize),
        block_size => Ok(block_size),
    }
}

fn check_iv_len<C: BlockCipher + ?Sized>(cipher: &C, iv: &[u8]) -> Result<(), ModeError> {
    let block_size = check_block_size(cipher)?;
    if iv.len() != block_size {
        return Err(ModeError::IvLength {
            block_size,
            actual: iv.len(),
        });
    }
    Ok(())
}

fn check_aligned<C: BlockCipher + ?Sized>(cipher: &C, data: &[u8]) -> Result<(), ModeError> {
    let block_size = check_block_size(cipher)?;
    if data.len() % block_size != 0 {
        return Err(ModeError::Unaligned {
            block_size,
            len: data.len(),
        });
    }
    Ok(())
}
