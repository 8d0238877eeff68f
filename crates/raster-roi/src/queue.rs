use crate::error::{CapacityKind, RoiError};

/// A fixed capacity FIFO backed by a power of two ring buffer.
///
/// Positions are wrapped with a bitmask. Pushing into a full queue is an error,
/// queued items are never overwritten.
#[derive(Debug)]
pub(crate) struct RingQueue {
    buf: Vec<usize>,
    mask: usize,
    head: usize,
    len: usize,
}

impl RingQueue {
    /// Creates a queue able to hold at least `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1).next_power_of_two();
        Self {
            buf: vec![0; capacity],
            mask: capacity - 1,
            head: 0,
            len: 0,
        }
    }

    /// Number of slots in the ring.
    #[cfg(test)]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `value`, failing with [`RoiError::CapacityExceeded`] when full.
    #[inline]
    pub fn push(&mut self, value: usize) -> Result<(), RoiError> {
        if self.len == self.buf.len() {
            return Err(RoiError::CapacityExceeded(CapacityKind::Frontier(
                self.buf.len(),
            )));
        }
        self.buf[(self.head + self.len) & self.mask] = value;
        self.len += 1;
        Ok(())
    }

    #[inline]
    pub fn pop(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let value = self.buf[self.head];
        self.head = (self.head + 1) & self.mask;
        self.len -= 1;
        Some(value)
    }
}
