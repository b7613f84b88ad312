use crate::board::Square;
use rand::Rng;

/// Choose uniformly among equally ranked candidates.
/// Returns `None` only when `pool` is empty.
pub fn choose_uniform<R: Rng + ?Sized>(pool: &[Square], rng: &mut R) -> Option<Square> {
    match pool.len() {
        0 => None,
        1 => Some(pool[0]),
        n => Some(pool[rng.gen_range(0..n)]),
    }
}
