use rand::Rng;

/// The four bases every generated sequence is drawn from.
pub const NUCLEOTIDES: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// Generates a uniformly random DNA sequence of `length` bases.
///
/// Each base is drawn independently (with replacement) from [`NUCLEOTIDES`].
/// The RNG is passed in rather than taken from a global source so that tests
/// can run the generator against a seeded `StdRng`.
///
/// # Arguments
///
/// * `length` - The number of bases to generate. The caller guarantees this
///   is positive.
/// * `rng` - The random source to draw bases from.
pub fn generate(length: usize, rng: &mut impl Rng) -> String {
    (0..length)
        .map(|_| NUCLEOTIDES[rng.gen_range(0..NUCLEOTIDES.len())] as char)
        .collect()
}
