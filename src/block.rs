use aes::cipher::{
    generic_array::GenericArray, BlockDecrypt, BlockEncrypt, BlockSizeUser, KeyInit,
};
pub use aes::{Aes128, Aes192, Aes256};
use rand::{rngs::StdRng, RngCore, SeedableRng};

/// The single-block cipher primitive that the modes are built on.
///
/// Implementations are key-scheduled once and then shared; none of the
/// methods take `&mut self`, so a cipher can be borrowed by any number of
/// mode calls at once.
pub trait BlockCipher {
    fn block_size(&self) -> usize;

    /// Encrypt exactly one block in place. `block.len()` must equal
    /// `block_size()`.
    fn encrypt_block(&self, block: &mut [u8]);

    /// Decrypt exactly one block in place. `block.len()` must equal
    /// `block_size()`.
    fn decrypt_block(&self, block: &mut [u8]);
}

macro_rules! impl_block_cipher {
    ($($cipher:ty),+) => {
        $(
            impl BlockCipher for $cipher {
                fn block_size(&self) -> usize {
                    <$cipher as BlockSizeUser>::block_size()
                }

                fn encrypt_block(&self, block: &mut [u8]) {
                    BlockEncrypt::encrypt_block(self, GenericArray::from_mut_slice(block));
                }

                fn decrypt_block(&self, block: &mut [u8]) {
                    BlockDecrypt::decrypt_block(self, GenericArray::from_mut_slice(block));
                }
            }
        )+
    };
}

impl_block_cipher!(Aes128, Aes192, Aes256);

pub fn aes128(key: &[u8; 16]) -> Aes128 {
    Aes128::new(GenericArray::from_slice(key))
}

/// Bytes from the thread-local CSPRNG.
pub fn random_bytes<const N: usize>() -> [u8; N] {
    let mut bytes = [0u8; N];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes
}

/// Reproducible pseudo-random bytes. Not suitable for real key material.
pub fn random_bytes_with_seed<const N: usize>(seed: u64) -> [u8; N] {
    let mut bytes = [0u8; N];
    StdRng::seed_from_u64(seed).fill_bytes(&mut bytes);
    bytes
}

pub fn random_aes128_key() -> [u8; 16] {
    random_bytes::<16>()
}
