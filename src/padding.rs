// Padding where every pad byte holds the number of pad bytes (PKCS#7).

use crate::error::BadPad;

/// Pad `data` to exactly `len` bytes.
///
/// Returns the data unchanged if it is already at least `len` bytes long,
/// and `None` if the pad count would not fit in a byte.
pub fn pad_to_len(data: &[u8], len: usize) -> Option<Vec<u8>> {
    if len <= data.len() {
        return Some(data.to_vec());
    }
    let n_pad = u8::try_from(len - data.len()).ok()?;
    let mut out = Vec::with_capacity(len);
    out.extend_from_slice(data);
    out.resize(len, n_pad);
    Some(out)
}

/// Pad `data` to the next multiple of `block_size`.
///
/// Already-aligned data gets a whole extra block, so the output is always
/// longer than the input. A `block_size` of zero has no multiples to pad to
/// and leaves the data as is.
pub fn pad_to(data: &[u8], block_size: u8) -> Vec<u8> {
    if block_size == 0 {
        return data.to_vec();
    }
    let size = block_size as usize;
    let n_pad = size - data.len() % size;
    let mut out = Vec::with_capacity(data.len() + n_pad);
    out.extend_from_slice(data);
    out.resize(data.len() + n_pad, n_pad as u8);
    out
}

/// Validate and remove padding.
///
/// On a byte mismatch the error carries the original, unstripped buffer.
/// Whatever the error, the caller must not treat any part of the buffer as
/// stripped plaintext.
pub fn check_and_strip(data: &[u8]) -> Result<&[u8], BadPad> {
    let claimed = match data.last() {
        Some(&n_pad) => n_pad,
        None => {
            return Err(BadPad::InvalidLength {
                claimed: 0,
                len: 0,
            })
        }
    };
    if claimed == 0 || claimed as usize > data.len() {
        return Err(BadPad::InvalidLength {
            claimed,
            len: data.len(),
        });
    }

    let (stripped, padding) = data.split_at(data.len() - claimed as usize);
    if padding.iter().all(|&b| b == claimed) {
        Ok(stripped)
    } else {
        Err(BadPad::Mismatch {
            claimed,
            unstripped: data.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("YELL", 4, "YELL\x04\x04\x04\x04")]
    #[case("YELLOWS!!!", 6, "YELLOWS!!!\x02\x02")]
    #[case("YELLOW SUBMARINE", 20, "YELLOW SUBMARINE\x04\x04\x04\x04")]
    #[case("", 3, "\x03\x03\x03")]
    fn pad_to_pads_message(#[case] msg: &str, #[case] block_size: u8, #[case] expected: &str) {
        let padded = pad_to(msg.as_bytes(), block_size);

        assert_eq!(padded, expected.as_bytes());
    }

    #[test]
    fn pad_to_with_zero_block_size_leaves_data_alone() {
        assert_eq!(pad_to(b"abc", 0), b"abc");
    }

    #[rstest]
    #[case("YELLOW SUBMARINE", 20, Some("YELLOW SUBMARINE\x04\x04\x04\x04"))]
    #[case("YELLOW SUBMARINE", 16, Some("YELLOW SUBMARINE"))]
    #[case("YELLOW SUBMARINE", 10, Some("YELLOW SUBMARINE"))]
    fn pad_to_len_pads_to_exact_length(
        #[case] msg: &str,
        #[case] len: usize,
        #[case] expected: Option<&str>,
    ) {
        let padded = pad_to_len(msg.as_bytes(), len);

        assert_eq!(padded.as_deref(), expected.map(str::as_bytes));
    }

    #[test]
    fn pad_to_len_refuses_pad_counts_over_a_byte() {
        assert_eq!(pad_to_len(b"abc", 3 + 256), None);
        assert_eq!(pad_to_len(b"abc", 3 + 255).map(|p| p.len()), Some(258));
    }

    #[test]
    fn check_and_strip_strips_valid_padding() {
        let msg = b"ICE ICE BABY\x04\x04\x04\x04";

        let stripped = check_and_strip(msg);

        assert_eq!(stripped, Ok(&b"ICE ICE BABY"[..]));
    }

    #[test]
    fn check_and_strip_strips_whole_block_of_padding() {
        assert_eq!(check_and_strip(b"\x04\x04\x04\x04"), Ok(&b""[..]));
    }

    #[rstest]
    #[case(b"ICE ICE BABY\x00")]
    #[case(b"\x00")]
    #[case(b"ICE\x05")]
    #[case(b"")]
    fn check_and_strip_rejects_out_of_range_pad_length(#[case] padded: &[u8]) {
        let err = check_and_strip(padded).unwrap_err();

        assert!(matches!(err, BadPad::InvalidLength { .. }));
        assert_eq!(err.unstripped(), None);
    }

    #[rstest]
    #[case(b"ICE ICE BABY\x05\x05\x05\x05")]
    #[case(b"ICE ICE BABY\x01\x02\x03\x04")]
    fn check_and_strip_returns_unstripped_data_on_mismatch(#[case] padded: &[u8]) {
        let err = check_and_strip(padded).unwrap_err();

        assert!(matches!(err, BadPad::Mismatch { .. }));
        assert_eq!(err.unstripped(), Some(padded));
    }

    proptest! {
        #[test]
        fn prop_pad_then_strip_round_trips(
            data in proptest::collection::vec(any::<u8>(), 0..100),
            block_size in 1u8..=255,
        ) {
            let padded = pad_to(&data, block_size);

            prop_assert!(padded.len() > data.len());
            prop_assert_eq!(padded.len() % block_size as usize, 0);
            prop_assert_eq!(check_and_strip(&padded), Ok(&data[..]));
        }
    }
}
