//! Scratch buffer for the operands of the record being written.

/// Operands of one record, reused across records to avoid reallocating.
///
/// Scalar operands are collected as `u64` values in operand order; a string or file name
/// operand goes into the trailing blob. The buffer is cleared before each record is built.
#[derive(Debug, Default)]
pub struct RecordBuffer {
    values: Vec<u64>,
    blob: Vec<u8>,
    has_blob: bool,
}

impl RecordBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        RecordBuffer {
            values: Vec::with_capacity(32),
            blob: Vec::new(),
            has_blob: false,
        }
    }

    /// Drops all operands.
    pub fn clear(&mut self) {
        self.values.clear();
        self.blob.clear();
        self.has_blob = false;
    }

    /// Appends a scalar operand.
    pub fn push(&mut self, value: u64) {
        self.values.push(value);
    }

    /// Appends each byte as its own scalar operand.
    pub fn extend_bytes(&mut self, bytes: &[u8]) {
        self.values.extend(bytes.iter().map(|byte| u64::from(*byte)));
    }

    /// Sets the blob operand.
    pub fn set_blob(&mut self, bytes: &[u8]) {
        self.blob.clear();
        self.blob.extend_from_slice(bytes);
        self.has_blob = true;
    }

    /// The scalar operands.
    #[must_use]
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// The blob operand, if one was set.
    #[must_use]
    pub fn blob(&self) -> Option<&[u8]> {
        self.has_blob.then_some(self.blob.as_slice())
    }
}
