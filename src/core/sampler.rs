// Copyright @yucwang 2026

use crate::math::constants::Float;

// One instance per pixel, never shared across threads.
pub trait Sampler {
    fn next_f32(&mut self) -> Float;
}

pub struct LcgRng {
    state: u64,
}

impl LcgRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
}

impl Sampler for LcgRng {
    fn next_f32(&mut self) -> Float {
        // 24 bits keep the quotient strictly below 1.0 in f32.
        ((self.next_u32() >> 8) as Float) * (1.0 / 16777216.0)
    }
}

pub fn pixel_seed(base: u64, x: usize, y: usize) -> u64 {
    ((base & 0xFFF) << 32) | (((y as u64) & 0xFFFF) << 16) | ((x as u64) & 0xFFFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcg_stays_in_unit_interval() {
        let mut rng = LcgRng::new(42);
        for _ in 0..10000 {
            let v = rng.next_f32();
            assert!(v >= 0.0 && v < 1.0);
        }
    }

    #[test]
    fn test_lcg_is_deterministic() {
        let mut a = LcgRng::new(1337);
        let mut b = LcgRng::new(1337);
        for _ in 0..64 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_lcg_seeds_diverge() {
        let mut a = LcgRng::new(1);
        let mut b = LcgRng::new(2);
        let differs = (0..16).any(|_| a.next_u32() != b.next_u32());
        assert!(differs);
    }

    #[test]
    fn test_pixel_seed_separates_neighbours() {
        let s = pixel_seed(7, 10, 20);
        assert_ne!(s, pixel_seed(7, 11, 20));
        assert_ne!(s, pixel_seed(7, 10, 21));
        assert_ne!(s, pixel_seed(8, 10, 20));
    }
}
