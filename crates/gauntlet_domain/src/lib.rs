//! Domain model for probe conversations against a target model.
//!
//! A conversation is an ordered sequence of turns between an automated actor
//! and a target; each turn is made of [`PromptPiece`] fragments carrying the
//! text before and after conversion, deterministic content fingerprints, and
//! provenance [`Identifier`] tags from the collaborators that produced them.
//! [`PromptResponse`] validates that a set of pieces forms one coherent turn,
//! and [`group_by_sequence`] partitions a conversation history into turns.

mod conversation;
mod error;
mod fingerprint;
mod identifier;
mod piece;
mod response;
mod role;

pub use conversation::*;
pub use error::*;
pub use fingerprint::*;
pub use identifier::*;
pub use piece::*;
pub use response::*;
pub use role::*;
