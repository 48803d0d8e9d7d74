use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};
use derive_more::derive::Display;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::fingerprint::fingerprint;
use crate::{ConversationId, Identifier, Role};

/// Unique id of a single piece. Assigned at construction, never reused.
#[derive(Clone, Copy, Debug, Display, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PieceId(Uuid);

impl PieceId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

/// Conversion state of a piece's prompt text.
///
/// Modeled as a two-state tag instead of a nullable string so the
/// conversion-completeness check in [`PromptResponse::validate`] is a total
/// match rather than a null check. Serializes as the converted string, or
/// `null` while unconverted, which keeps the persisted shape of
/// `converted_prompt_text` stable.
///
/// [`PromptResponse::validate`]: crate::PromptResponse::validate
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConvertedText {
    Converted(String),
    #[default]
    Unconverted,
}

impl ConvertedText {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConvertedText::Converted(text) => Some(text),
            ConvertedText::Unconverted => None,
        }
    }

    pub fn is_converted(&self) -> bool {
        matches!(self, ConvertedText::Converted(_))
    }
}

impl From<String> for ConvertedText {
    fn from(value: String) -> Self {
        ConvertedText::Converted(value)
    }
}

impl From<&str> for ConvertedText {
    fn from(value: &str) -> Self {
        ConvertedText::Converted(value.to_string())
    }
}

/// The atomic record of one turn fragment: the text an actor sent or a
/// target returned, before and after conversion, plus content fingerprints
/// and the provenance of every collaborator that touched it.
///
/// `id`, the two text fields, both fingerprints and `timestamp` are fixed at
/// construction; fingerprints are derived from the corresponding text and
/// are never independently settable. `sequence` and `conversation_id` stay
/// reassignable because the owning memory or orchestrator may renumber turns
/// after the fact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Setters)]
#[setters(into, strip_option)]
pub struct PromptPiece {
    #[setters(skip)]
    pub id: PieceId,
    pub role: Role,
    pub conversation_id: ConversationId,
    pub sequence: usize,
    #[setters(skip)]
    pub original_prompt_text: String,
    #[setters(skip)]
    pub converted_prompt_text: ConvertedText,
    #[setters(skip)]
    pub original_prompt_data_sha256: String,
    #[setters(skip)]
    pub converted_prompt_data_sha256: Option<String>,
    #[serde(default)]
    pub converter_identifiers: Vec<Identifier>,
    #[serde(default)]
    pub prompt_target_identifier: Option<Identifier>,
    #[serde(default)]
    pub orchestrator_identifier: Option<Identifier>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[setters(skip)]
    pub timestamp: DateTime<Utc>,
}

impl PromptPiece {
    /// Creates an unconverted piece with a fresh id, a generated
    /// conversation id and sequence 0. The original-text fingerprint is
    /// computed before this returns.
    pub fn new(role: Role, original_prompt_text: impl ToString) -> Self {
        let original_prompt_text = original_prompt_text.to_string();
        let original_prompt_data_sha256 = fingerprint(&original_prompt_text);

        Self {
            id: PieceId::generate(),
            role,
            conversation_id: ConversationId::generate(),
            sequence: 0,
            original_prompt_text,
            converted_prompt_text: ConvertedText::Unconverted,
            original_prompt_data_sha256,
            converted_prompt_data_sha256: None,
            converter_identifiers: Vec::new(),
            prompt_target_identifier: None,
            orchestrator_identifier: None,
            labels: BTreeMap::new(),
            timestamp: next_timestamp(),
        }
    }

    /// Sets the converted text and recomputes its fingerprint in the same
    /// step, so the two can never drift apart.
    pub fn converted_text(mut self, text: impl ToString) -> Self {
        let text = text.to_string();
        self.converted_prompt_data_sha256 = Some(fingerprint(&text));
        self.converted_prompt_text = ConvertedText::Converted(text);
        self
    }
}

impl std::fmt::Display for PromptPiece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = self
            .converted_prompt_text
            .as_str()
            .unwrap_or(&self.original_prompt_text);
        write!(f, "{}: {}", self.role, text)
    }
}

/// Wall clock nudged past the last value handed out, so pieces constructed
/// back to back never tie and later pieces always compare strictly greater.
fn next_timestamp() -> DateTime<Utc> {
    static LAST_NANOS: AtomicI64 = AtomicI64::new(0);

    let now = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let prev = LAST_NANOS
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or_default();

    DateTime::from_timestamp_nanos(now.max(prev + 1))
}
