/// Percentage composition of a DNA sequence. Every field is rounded to one
/// decimal place.
#[derive(Clone, Debug, PartialEq)]
pub struct Composition {
    pub pc_a: f64, // percentage of A
    pub pc_c: f64, // percentage of C
    pub pc_g: f64, // percentage of G
    pub pc_t: f64, // percentage of T
    /// The (C+G) count as a percentage of the (A+T) count, or 0 when the
    /// sequence contains no A and no T.
    pub cg_to_at: f64,
}

/// Computes the percentage composition of `seq`.
///
/// The statistics are intended for the sequence as generated, before any
/// marker is embedded. A pure function: calling it twice on the same
/// sequence yields identical results.
///
/// # Arguments
///
/// * `seq` - A non-empty sequence over the A/C/G/T alphabet. The caller
///   guarantees non-emptiness; the per-base shares divide by the length.
pub fn composition(seq: &str) -> Composition {
    debug_assert!(!seq.is_empty());

    let [a, c, g, t] = base_counts(seq);
    let len = seq.len() as f64;
    let share = |count: usize| round1(count as f64 / len * 100.0);

    let cg = c + g;
    let at = a + t;
    let cg_to_at = if at != 0 {
        round1(cg as f64 / at as f64 * 100.0)
    } else {
        0.0
    };

    Composition {
        pc_a: share(a),
        pc_c: share(c),
        pc_g: share(g),
        pc_t: share(t),
        cg_to_at,
    }
}

/// Occurrence counts of A, C, G and T, in that order.
fn base_counts(seq: &str) -> [usize; 4] {
    let mut counts = [0usize; 4];
    for b in seq.bytes() {
        match b {
            b'A' => counts[0] += 1,
            b'C' => counts[1] += 1,
            b'G' => counts[2] += 1,
            b'T' => counts[3] += 1,
            _ => {}
        }
    }
    counts
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
