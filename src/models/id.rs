//! Short random record identifiers.

use rand::Rng;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 7;

/// Generate a 7-character lowercase base-36 identifier.
pub fn uid() -> String {
    let mut rng = rand::rng();
    (0..ID_LEN)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Generate an identifier not contained in `taken`.
pub fn unique_uid<'a, I>(taken: I) -> String
where
    I: IntoIterator<Item = &'a str> + Clone,
{
    loop {
        let candidate = uid();
        if !taken.clone().into_iter().any(|t| t == candidate) {
            return candidate;
        }
    }
}
