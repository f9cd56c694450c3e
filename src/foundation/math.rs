/// 32-bit FNV-1a over UTF-16 code units.
///
/// Hashing code units (not bytes) keeps seeds identical to the ones a
/// browser-side caller computes from the same project key.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a32(u32);

impl Fnv1a32 {
    pub(crate) const OFFSET_BASIS: u32 = 0x811C_9DC5;
    const PRIME: u32 = 0x0100_0193;

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_unit(&mut self, unit: u16) {
        let mut h = self.0;
        h ^= u32::from(unit);
        h = h.wrapping_mul(Self::PRIME);
        self.0 = h;
    }

    pub(crate) fn write_str(&mut self, s: &str) {
        for unit in s.encode_utf16() {
            self.write_unit(unit);
        }
    }

    pub(crate) fn finish(self) -> u32 {
        self.0
    }
}

/// Seed for a string key; an empty key still yields a valid seed.
pub(crate) fn hash_str(s: &str) -> u32 {
    let mut h = Fnv1a32::new_default();
    h.write_str(s);
    h.finish()
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub(crate) fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub(crate) fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Next value in `[0, 1)`.
    pub(crate) fn next_f64_01(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Uniform index in `0..bound`; `bound` must be non-zero.
    pub(crate) fn next_index(&mut self, bound: usize) -> usize {
        let idx = (self.next_f64_01() * bound as f64) as usize;
        idx.min(bound - 1)
    }
}

/// Deterministic Fisher-Yates shuffle driven by `rng`.
pub(crate) fn shuffle<T>(items: &mut [T], rng: &mut XorShift32) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
