use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Badge category (e.g. a suite year) → badge identifiers, in checker order.
pub type Badges = Map<String, Value>;

/// What the checker reports for one descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceRecord {
    /// Package name as declared in the descriptor; the index key.
    pub name: String,
    /// Copied into listings as emitted; `null` when the checker omits it.
    #[serde(default)]
    pub badges: Value,
    /// Any other fields the checker emits, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ComplianceRecord {
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    /// The badges to store on a listing entry. Lua encoders emit an empty
    /// table as `[]`; that and a missing field become `{}`. Everything else is
    /// passed through unchanged.
    pub fn badges_value(&self) -> Value {
        match &self.badges {
            Value::Null => Value::Object(Badges::new()),
            Value::Array(items) if items.is_empty() => Value::Object(Badges::new()),
            other => other.clone(),
        }
    }
}
