use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fmt;

/// SHA-256 digest as a lowercase hex string.
pub type BlockHash = String;

/// Payload of the automatically created first block.
pub const GENESIS_PAYLOAD: &str = "Genesis Block";

/// `previous_hash` sentinel for the genesis block, which has no predecessor.
pub const GENESIS_PREVIOUS_HASH: &str = "";

/// A single record in the chain: position, creation time, opaque payload,
/// and the digest of its predecessor.
///
/// `index` and `previous_hash` are assigned by [`Chain::append`] — a freshly
/// constructed block carries genesis-slot defaults until it is appended.
/// Fields are public so callers can mutate a stored block to stage tamper
/// scenarios; the chain itself never mutates a block after insertion.
///
/// [`Chain::append`]: crate::chain::Chain::append
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Block {
    /// Position in the chain, 0 for genesis.
    pub index: u64,
    /// When the block was created.
    pub timestamp: DateTime<Utc>,
    /// Opaque payload; never interpreted beyond serialization for hashing.
    pub data: Value,
    /// Digest of the predecessor at append time; empty for genesis.
    pub previous_hash: BlockHash,
}

impl Block {
    /// Create a block carrying `data`, timestamped now. The chain fills in
    /// `index` and `previous_hash` at append time.
    pub fn new(data: Value) -> Self {
        Self::with_timestamp(data, Utc::now())
    }

    /// Create a block with an explicit timestamp (for testing / determinism).
    pub fn with_timestamp(data: Value, timestamp: DateTime<Utc>) -> Self {
        Self {
            index: 0,
            timestamp,
            data,
            previous_hash: GENESIS_PREVIOUS_HASH.to_string(),
        }
    }

    /// Digest of the block's current field values.
    ///
    /// Pure and recomputed on every call — never cached — so any mutation of
    /// `index`, `timestamp`, `data`, or `previous_hash` changes the result.
    /// The preimage frames the four fields in fixed order; `data` stringifies
    /// as compact JSON with sorted object keys, so the digest is independent
    /// of payload key insertion order.
    pub fn hash(&self) -> BlockHash {
        let preimage = format!(
            "index:{}\ntimestamp:{}\ndata:{}\nprevious_hash:{}",
            self.index,
            self.timestamp.to_rfc3339(),
            self.data,
            self.previous_hash,
        );
        compute_hash(preimage.as_bytes())
    }
}

/// Compute the SHA-256 hex digest of some data.
pub fn compute_hash(data: &[u8]) -> BlockHash {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Block #{}", self.index)?;
        writeln!(f, "  Timestamp: {}", self.timestamp.to_rfc3339())?;
        writeln!(f, "  Data: {}", self.data)?;
        writeln!(f, "  Hash: {}", self.hash())?;
        write!(f, "  Previous Hash: {}", self.previous_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hash_is_deterministic() {
        let b = Block::new(json!({"account": "Anna", "amount": 25}));
        assert_eq!(b.hash(), b.hash());
    }

    #[test]
    fn hash_covers_every_field() {
        let ts = Utc::now();
        let base = Block::with_timestamp(json!({"account": "Anna"}), ts);

        let mut b = base.clone();
        b.index = 7;
        assert_ne!(b.hash(), base.hash());

        let mut b = base.clone();
        b.timestamp = ts + chrono::Duration::seconds(1);
        assert_ne!(b.hash(), base.hash());

        let mut b = base.clone();
        b.data = json!({"account": "Joe"});
        assert_ne!(b.hash(), base.hash());

        let mut b = base.clone();
        b.previous_hash = "deadbeef".into();
        assert_ne!(b.hash(), base.hash());
    }

    #[test]
    fn hash_independent_of_payload_key_order() {
        let ts = Utc::now();
        let b1 = Block::with_timestamp(json!({"account": "Anna", "amount": 25, "action": "buy"}), ts);
        let b2 = Block::with_timestamp(json!({"action": "buy", "amount": 25, "account": "Anna"}), ts);
        assert_eq!(b1.hash(), b2.hash());
    }

    #[test]
    fn digest_is_lowercase_hex() {
        let h = Block::new(json!("payload")).hash();
        assert_eq!(h.len(), 64);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn new_block_has_genesis_slot_defaults() {
        let b = Block::new(json!(null));
        assert_eq!(b.index, 0);
        assert_eq!(b.previous_hash, GENESIS_PREVIOUS_HASH);
    }
}
