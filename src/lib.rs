//! Append-only, tamper-evident hash chain.
//!
//! Each [`Block`] commits to its own content and to the digest of the block
//! before it. [`Chain`] owns the sequence: it seeds a genesis block, links
//! every appended block to the current tail, and exposes a validation pass
//! that recomputes digests from live field values to detect tampering
//! anywhere in history.
//!
//! ```
//! use chainseal::{Block, Chain};
//! use serde_json::json;
//!
//! let mut chain = Chain::new();
//! chain.append(Block::new(json!({"account": "Anna", "amount": 25})));
//! assert!(chain.validate().is_ok());
//!
//! chain.get_mut(1).unwrap().data = json!({"account": "Anna", "amount": 100});
//! assert!(chain.validate().is_err());
//! ```

pub mod block;
pub mod chain;
pub mod error;

pub use block::{Block, BlockHash};
pub use chain::Chain;
pub use error::{ChainError, Result};
