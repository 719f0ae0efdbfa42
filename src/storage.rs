use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

use crate::error::StreamError;
use crate::growth::GrowthPolicy;

/// Owned backing region of a stream.
///
/// The region is replaced only by `ensure`, never shrunk, and never
/// replaced at all when the storage is not expandable.
pub(crate) struct Storage<G> {
    region: Box<[u8]>,
    expandable: bool,
    policy: G,
}

impl<G: GrowthPolicy> Storage<G> {
    pub(crate) fn expandable(capacity: usize, policy: G) -> Self {
        Self {
            region: vec![0u8; capacity].into_boxed_slice(),
            expandable: true,
            policy,
        }
    }

    pub(crate) fn fixed(capacity: usize, policy: G) -> Self {
        Self {
            region: vec![0u8; capacity].into_boxed_slice(),
            expandable: false,
            policy,
        }
    }

    /// Makes room for at least `required` bytes, keeping the first
    /// `preserve` bytes of the current region.
    ///
    /// # Errors
    ///
    /// Returns `StreamError::NotEnoughSpace` if the storage is fixed, or if
    /// the growth policy cannot produce a large enough size.
    pub(crate) fn ensure(&mut self, required: usize, preserve: usize) -> Result<(), StreamError> {
        let current = self.capacity();
        if required <= current {
            return Ok(());
        }
        if !self.expandable {
            return Err(StreamError::NotEnoughSpace);
        }

        let new_capacity = self
            .policy
            .next_capacity(current, required)
            .filter(|&size| size >= required)
            .ok_or(StreamError::NotEnoughSpace)?;
        self.reallocate(new_capacity, preserve);
        Ok(())
    }

    fn reallocate(&mut self, new_capacity: usize, preserve: usize) {
        log::trace!("grow storage {} -> {new_capacity} bytes", self.capacity());

        let mut region = vec![0u8; new_capacity].into_boxed_slice();
        let preserve = preserve.min(self.region.len());
        region[..preserve].copy_from_slice(&self.region[..preserve]);
        self.region = region;
    }
}

impl<G> Storage<G> {
    pub(crate) fn capacity(&self) -> usize {
        self.region.len()
    }

    pub(crate) fn is_expandable(&self) -> bool {
        self.expandable
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.region
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.region
    }

    pub(crate) fn into_vec(self, len: usize) -> Vec<u8> {
        let mut data = self.region.into_vec();
        data.truncate(len);
        data
    }
}
