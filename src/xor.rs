/// XOR two buffers together, stopping at the end of the shorter one.
pub fn xor_bytes(buf_a: &[u8], buf_b: &[u8]) -> Vec<u8> {
    buf_a.iter().zip(buf_b).map(|(a, b)| a ^ b).collect()
}

pub fn xor_in_place(buf: &mut [u8], other: &[u8]) {
    buf.iter_mut().zip(other).for_each(|(a, b)| *a ^= b);
}

pub fn xor_with_key(bytes: &[u8], key: u8) -> Vec<u8> {
    bytes.iter().map(|b| b ^ key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_streams() {
        let a = [0x1c, 0x01, 0x11, 0x00, 0x1f, 0x01, 0x01, 0x00];
        let b = b"hit the ";

        let xored = xor_bytes(&a, b);

        assert_eq!(xored, b"the kid ");
    }

    #[test]
    fn xor_bytes_truncates_to_shorter_buffer() {
        assert_eq!(xor_bytes(b"abcdef", &[0, 0, 0]), b"abc");
        assert_eq!(xor_bytes(&[], b"abc"), Vec::<u8>::new());
    }

    #[test]
    fn xor_in_place_only_touches_overlap() {
        let mut buf = *b"AAAA";

        xor_in_place(&mut buf, &[0x20, 0x20]);

        assert_eq!(&buf, b"aaAA");
    }

    #[test]
    fn xor_with_key_is_an_involution() {
        let msg = b"Cooking MC's like a pound of bacon";

        assert_eq!(xor_with_key(&xor_with_key(msg, 88), 88), msg);
    }
}
