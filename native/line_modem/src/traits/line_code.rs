//! LineCode trait - bit ↔ symbol mapping
//!
//! One symbol per bit, no redundancy expansion. Decoding only has to recover
//! bit values; any extra information a code carries (AMI polarity) may be
//! discarded.

/// Line code trait
pub trait LineCode: Send + Sync {
    /// Symbol levels this code can emit
    fn levels(&self) -> &'static [i8];

    /// Map bits (0/1) to symbols, same length
    fn encode(&self, bits: &[u8]) -> Vec<i8>;

    /// Map symbols back to bits, same length
    fn decode(&self, symbols: &[i8]) -> Vec<u8>;
}
