//! Shared test doubles

use rand::RngCore;

/// An RNG that replays a fixed sequence of `u32` values, cycling forever
pub struct SequenceRng {
    values: Vec<u32>,
    next: usize,
}

impl SequenceRng {
    pub fn new(values: Vec<u32>) -> Self {
        assert!(!values.is_empty(), "sequence must not be empty");
        Self { values, next: 0 }
    }

    /// Always returns `value`
    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }
}

impl RngCore for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
