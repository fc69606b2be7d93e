use core::hash::Hasher;

/// Hashes integers to themselves, so tests can choose buckets.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct IdentityHasher(u64);

impl Hasher for IdentityHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.0 = (self.0 << 8) | u64::from(byte);
        }
    }

    fn write_u32(&mut self, i: u32) {
        self.0 = u64::from(i);
    }

    fn write_i32(&mut self, i: i32) {
        self.0 = i as u64;
    }

    fn write_u64(&mut self, i: u64) {
        self.0 = i;
    }

    fn write_i64(&mut self, i: i64) {
        self.0 = i as u64;
    }

    fn write_usize(&mut self, i: usize) {
        self.0 = i as u64;
    }
}

/// Sends everything to the same bucket.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct ConstantHasher;

impl Hasher for ConstantHasher {
    fn finish(&self) -> u64 {
        0
    }

    fn write(&mut self, _bytes: &[u8]) {}
}
