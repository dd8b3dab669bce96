use crate::block::{Block, GENESIS_PAYLOAD};
use crate::error::{ChainError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// An ordered, append-only sequence of hash-linked blocks.
///
/// Index 0 is always the genesis block, seeded at construction. The chain
/// grows strictly by [`append`]; there is no deletion, reordering, or
/// replacement. Single-owner, single-threaded — no internal locking.
///
/// [`append`]: Chain::append
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chain {
    blocks: Vec<Block>,
}

impl Chain {
    /// Create a chain seeded with the genesis block.
    pub fn new() -> Self {
        let mut chain = Self { blocks: Vec::new() };
        let genesis = Block::new(Value::String(GENESIS_PAYLOAD.to_string()));
        chain.blocks.push(genesis);
        chain
    }

    /// Create a chain seeded with genesis, then append each supplied block
    /// in order through the regular [`append`](Chain::append) path.
    pub fn with_blocks(blocks: impl IntoIterator<Item = Block>) -> Self {
        let mut chain = Self::new();
        for block in blocks {
            chain.append(block);
        }
        chain
    }

    /// Append a block, linking it to the current tail.
    ///
    /// Overwrites the block's `previous_hash` with the tail's digest and its
    /// `index` with the new position, then pushes it. Always succeeds:
    /// append enforces forward linkage at insertion time only, and never
    /// re-validates earlier blocks — retroactive tamper detection is
    /// [`validate`](Chain::validate)'s job.
    pub fn append(&mut self, mut block: Block) {
        block.previous_hash = self.tail().hash();
        block.index = self.blocks.len() as u64;
        debug!("appending block #{}", block.index);
        self.blocks.push(block);
    }

    /// Number of blocks, genesis included.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always false: genesis is seeded at construction.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The last block. Guaranteed to exist, since genesis is always present.
    pub fn tail(&self) -> &Block {
        self.blocks.last().expect("chain always holds genesis")
    }

    /// Read-only positional access.
    pub fn get(&self, index: usize) -> Result<&Block> {
        self.blocks.get(index).ok_or(ChainError::IndexOutOfRange {
            index,
            len: self.blocks.len(),
        })
    }

    /// Mutable positional access. The chain never mutates stored blocks
    /// itself; this exists so callers can stage tamper scenarios against
    /// [`validate`](Chain::validate).
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Block> {
        let len = self.blocks.len();
        self.blocks
            .get_mut(index)
            .ok_or(ChainError::IndexOutOfRange { index, len })
    }

    /// Walk every adjacent pair and check the stored linkage.
    ///
    /// Each predecessor's digest is recomputed from its *current* field
    /// values, not a cached hash, so mutating any field of any block breaks
    /// the check at the edge immediately after it. Fails fast on the first
    /// mismatch with [`ChainError::ChainInvalid`].
    pub fn validate(&self) -> Result<()> {
        for pair in self.blocks.windows(2) {
            let (previous, current) = (&pair[0], &pair[1]);
            if current.previous_hash != previous.hash() {
                debug!("linkage mismatch at block #{}", current.index);
                return Err(ChainError::ChainInvalid {
                    index: current.index,
                });
            }
        }
        Ok(())
    }

    /// Iterate over blocks in chain order.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                writeln!(f, "------------")?;
            }
            writeln!(f, "{}", block)?;
        }
        Ok(())
    }
}
