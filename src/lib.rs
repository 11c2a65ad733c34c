mod attack;
mod block;
mod error;
mod modes;
mod padding;
mod score;
mod xor;

pub use attack::{
    break_many_time_pad, break_many_time_pad_with, CiphertextSession, KeystreamRecovery,
};
pub use block::{
    aes128, random_aes128_key, random_bytes, random_bytes_with_seed, Aes128, Aes192, Aes256,
    BlockCipher,
};
pub use error::{BadPad, Error, ModeError, Result};
pub use modes::cbc::{cbc_decrypt, cbc_decrypt_padded, cbc_encrypt, cbc_encrypt_padded};
pub use modes::ctr::{ctr_decrypt, ctr_encrypt, ctr_keystream, make_nonce};
pub use modes::ecb::{ecb_decrypt, ecb_encrypt};
pub use padding::{check_and_strip, pad_to, pad_to_len};
pub use score::{
    brute_force_byte_xor, printable_ratio, score_english_by_frequency, EnglishFrequency, Scorer,
    XorCrackResult,
};
pub use xor::{xor_bytes, xor_with_key};
