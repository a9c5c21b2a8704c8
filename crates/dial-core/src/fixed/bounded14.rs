// crates/dial-core/src/fixed/bounded14.rs

/// A value known to fit in 14 bits (`0..=0x3FFF`).
///
/// This is the only input type `fast_mod::reduce` accepts, so the Barrett
/// precondition cannot be violated by a caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounded14(u16);

impl Bounded14 {
    pub const BITS: u32 = 14;
    pub const MASK: u32 = (1 << Self::BITS) - 1;
    pub const MAX: Bounded14 = Bounded14(Self::MASK as u16);

    /// Returns `None` when `x` needs more than 14 bits.
    #[inline]
    pub fn new(x: u32) -> Option<Bounded14> {
        if x <= Self::MASK {
            Some(Bounded14(x as u16))
        } else {
            None
        }
    }

    /// Keep only the low 14 bits of `x`.
    #[inline]
    pub fn from_low_bits(x: u32) -> Bounded14 {
        Bounded14((x & Self::MASK) as u16)
    }

    #[inline]
    pub fn get(self) -> u16 {
        self.0
    }
}
