use serde::{Deserialize, Serialize};

/// Provenance stamp naming the collaborator that produced or handled a
/// piece: the concrete kind, the module that defines it, and, for stateful
/// collaborators such as orchestrator instances, a per-instance id.
///
/// The field names are a stable contract consumed by persistence and
/// reporting; once attached to a piece the record is never modified.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub type_name: String,
    pub module_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
}

impl Identifier {
    /// Identifier for a stateless collaborator kind (e.g. a converter).
    pub fn stateless(type_name: impl ToString, module_path: impl ToString) -> Self {
        Self {
            type_name: type_name.to_string(),
            module_path: module_path.to_string(),
            instance_id: None,
        }
    }

    /// Identifier for a stateful collaborator instance (e.g. an
    /// orchestrator run).
    pub fn stateful(
        type_name: impl ToString,
        module_path: impl ToString,
        instance_id: impl ToString,
    ) -> Self {
        Self {
            type_name: type_name.to_string(),
            module_path: module_path.to_string(),
            instance_id: Some(instance_id.to_string()),
        }
    }
}

/// Contract implemented by every collaborator that stamps provenance on
/// pieces. Implementations return a static, hand-authored record; no runtime
/// reflection is involved.
pub trait Identify {
    fn identifier(&self) -> Identifier;
}
