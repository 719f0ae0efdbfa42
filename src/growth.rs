/// Smallest region allocated by [`PowerOfTwo`].
pub const MIN_CAPACITY: usize = 256;

/// Decides how large the storage region becomes when a write does not fit.
///
/// The policy is consulted only for expandable streams and only when
/// `required > current`. Returning `None` means the size cannot be
/// represented, and the write fails with `StreamError::NotEnoughSpace`.
/// A returned value smaller than `required` is treated the same way.
pub trait GrowthPolicy {
    fn next_capacity(&self, current: usize, required: usize) -> Option<usize>;
}

/// Doubling growth: the smallest power of two that is at least
/// [`MIN_CAPACITY`] and at least the required size.
///
/// Sequence: 256, 512, 1024, ...
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PowerOfTwo;

impl GrowthPolicy for PowerOfTwo {
    fn next_capacity(&self, _current: usize, required: usize) -> Option<usize> {
        if required <= MIN_CAPACITY {
            return Some(MIN_CAPACITY);
        }
        required.checked_next_power_of_two()
    }
}

/// Linear growth in fixed-size chunks: the smallest multiple of `chunk`
/// that holds the required size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Linear {
    pub chunk: usize,
}

impl Linear {
    #[must_use]
    pub fn new(chunk: usize) -> Self {
        Self { chunk }
    }
}

impl GrowthPolicy for Linear {
    fn next_capacity(&self, _current: usize, required: usize) -> Option<usize> {
        if self.chunk == 0 {
            return Some(required);
        }
        let chunks = required.div_ceil(self.chunk);
        chunks.checked_mul(self.chunk)
    }
}

impl<G: GrowthPolicy + ?Sized> GrowthPolicy for &G {
    fn next_capacity(&self, current: usize, required: usize) -> Option<usize> {
        (**self).next_capacity(current, required)
    }
}
