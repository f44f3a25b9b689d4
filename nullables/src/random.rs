//! Nullable entropy — deterministic random byte generation.

use rand::{CryptoRng, Error, RngCore};

/// A deterministic entropy source for testing.
///
/// Returns pre-configured 32-byte values in order, cycling when the script
/// runs out. Implements `CryptoRng` so it can stand in for the system RNG in
/// key generation; the marker is a promise the production source keeps, not
/// this one.
pub struct NullEntropy {
    outputs: Vec<[u8; 32]>,
    index: usize,
}

impl NullEntropy {
    /// Create with a sequence of deterministic values.
    ///
    /// # Panics
    /// Panics if `outputs` is empty.
    pub fn new(outputs: Vec<[u8; 32]>) -> Self {
        assert!(!outputs.is_empty(), "scripted entropy needs at least one value");
        Self { outputs, index: 0 }
    }

    /// Create with a single value returned for every draw.
    pub fn constant(value: [u8; 32]) -> Self {
        Self::new(vec![value])
    }

    fn next_output(&mut self) -> [u8; 32] {
        let value = self.outputs[self.index % self.outputs.len()];
        self.index += 1;
        value
    }
}

impl RngCore for NullEntropy {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(32) {
            let value = self.next_output();
            chunk.copy_from_slice(&value[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for NullEntropy {}
