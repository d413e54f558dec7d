//! Uniform sources: the trait every draw goes through, plus a tiny LCG.
//! Avoids rand dependency

/// Anything that yields uniform samples in `[0, 1)`.
///
/// This is the "platform" generator the biased service wraps.  Closures
/// returning `f64` implement it too, which is handy for scripted sequences.
pub trait UniformSource {
    fn draw_uniform(&mut self) -> f64;
}

impl<F: FnMut() -> f64> UniformSource for F {
    #[inline]
    fn draw_uniform(&mut self) -> f64 {
        self()
    }
}

/// 64-bit linear congruential generator (Knuth's MMIX constants).
#[derive(Clone, Debug)]
pub struct Lcg(u64);

impl Lcg {
    #[must_use]
    pub fn seed(seed: u64) -> Self {
        Self(seed)
    }

    /// Seeds from the wall clock; a clock before the epoch seeds with 0.
    #[must_use]
    pub fn seed_from_time() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        // low 64 bits are the fast-moving ones
        #[allow(clippy::cast_possible_truncation)]
        let seed = nanos as u64;
        Self(seed)
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1);
        (self.0 >> 32) as u32
    }

    /// Uniform `[0, 1)`: 32 random bits over 2³², so 1.0 is unreachable.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

impl UniformSource for Lcg {
    #[inline]
    fn draw_uniform(&mut self) -> f64 {
        self.next_f64()
    }
}
