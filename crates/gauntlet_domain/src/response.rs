use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ConvertedText, Error, PromptPiece, Result};

/// All pieces believed to belong to one conversation turn. Carries no
/// identity of its own; it exists so a set of pieces can be validated
/// together before being handed to a target or a memory layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptResponse {
    pub request_pieces: Vec<PromptPiece>,
}

impl PromptResponse {
    pub fn new(request_pieces: Vec<PromptPiece>) -> Self {
        Self { request_pieces }
    }

    pub fn from_piece(piece: PromptPiece) -> Self {
        Self { request_pieces: vec![piece] }
    }

    pub fn first(&self) -> Option<&PromptPiece> {
        self.request_pieces.first()
    }

    /// Converted text of the first piece, when present.
    pub fn value(&self) -> Option<&str> {
        self.first()
            .and_then(|piece| piece.converted_prompt_text.as_str())
    }

    pub fn len(&self) -> usize {
        self.request_pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.request_pieces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PromptPiece> {
        self.request_pieces.iter()
    }

    /// Checks that the pieces form one coherent, fully converted turn.
    ///
    /// Checks run in order and stop at the first failure: the set must be
    /// non-empty, every piece must carry the first piece's conversation id,
    /// and every piece must have converted text. Purely a predicate; callers
    /// decide whether a failure aborts the run or triggers re-conversion.
    pub fn validate(&self) -> Result<()> {
        let first = self.request_pieces.first().ok_or(Error::EmptyResponse)?;

        if self
            .request_pieces
            .iter()
            .any(|piece| piece.conversation_id != first.conversation_id)
        {
            return Err(Error::ConversationIdMismatch);
        }

        for piece in &self.request_pieces {
            match &piece.converted_prompt_text {
                ConvertedText::Converted(_) => {}
                ConvertedText::Unconverted => return Err(Error::MissingConvertedText),
            }
        }

        debug!(pieces = self.request_pieces.len(), "Validated prompt response");
        Ok(())
    }
}

/// Partitions one conversation's pieces into per-turn responses keyed by
/// sequence number.
///
/// All pieces must share a single conversation id; grouping across
/// conversations is meaningless, so that precondition is checked before any
/// grouping happens. Groups come out in ascending sequence order and each
/// group keeps its pieces in their original relative order; every distinct
/// sequence value present yields exactly one group. The emitted responses
/// are not validated here.
pub fn group_by_sequence(pieces: Vec<PromptPiece>) -> Result<Vec<PromptResponse>> {
    let Some(first) = pieces.first() else {
        return Ok(Vec::new());
    };

    let conversation_id = first.conversation_id.clone();
    if pieces
        .iter()
        .any(|piece| piece.conversation_id != conversation_id)
    {
        return Err(Error::ConversationIdMismatch);
    }

    let mut turns: BTreeMap<usize, Vec<PromptPiece>> = BTreeMap::new();
    for piece in pieces {
        turns.entry(piece.sequence).or_default().push(piece);
    }

    debug!(
        conversation_id = %conversation_id,
        turns = turns.len(),
        "Grouped conversation pieces by sequence"
    );

    Ok(turns.into_values().map(PromptResponse::new).collect())
}
