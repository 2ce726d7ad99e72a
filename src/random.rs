use rand::Rng;

use crate::constants::{RANDOM_DRAW_MAX, RANDOM_DRAW_MIN};

/// Uniform draw from `RANDOM_DRAW_MIN..=RANDOM_DRAW_MAX` (1, 2 or 3) on the thread RNG.
pub fn draw_initial_slide() -> u32 {
    let mut rng = rand::rng();
    draw_initial_slide_with(&mut rng)
}

pub fn draw_initial_slide_with<R: Rng>(rng: &mut R) -> u32 {
    rng.random_range(RANDOM_DRAW_MIN..=RANDOM_DRAW_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn draws_stay_in_range_and_cover_it() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [0usize; 3];
        for _ in 0..3000 {
            let value = draw_initial_slide_with(&mut rng);
            assert!((1..=3).contains(&value));
            seen[(value - 1) as usize] += 1;
        }
        // Roughly uniform: each bucket near 1000
        assert!(seen.iter().all(|&count| count > 800 && count < 1200), "{:?}", seen);
    }

    #[test]
    fn thread_rng_draw_is_in_range() {
        for _ in 0..50 {
            assert!((1..=3).contains(&draw_initial_slide()));
        }
    }
}
