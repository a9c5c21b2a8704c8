// crates/dial-core/src/fixed/counter32.rs

/// 32-bit event counter with register semantics: arithmetic is mod 2^32.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Counter32(pub u32);

impl Counter32 {
    pub const ZERO: Counter32 = Counter32(0);
    pub const MAX: Counter32 = Counter32(u32::MAX);

    #[inline]
    pub fn wrapping_add(self, delta: u32) -> Counter32 {
        Counter32(self.0.wrapping_add(delta))
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}
