//! Bundled scripting-value model.
//!
//! [`ScriptValue`] is the runtime representation the dispatch core moves
//! between the scripting host and native candidates. Embedders with their own
//! value type implement the [`Frontend`](crate::Frontend) contract over it
//! instead; everything in the core is generic over "a value the frontend can
//! fingerprint".

use std::fmt;

use crate::{Insight, TypeToken};

/// Handle to a scripted object of a registered class.
///
/// Carries the class token (what [`detect_type`](crate::Frontend::detect_type)
/// reports), the runtime insight (typically the concrete subclass), and a
/// numeric object id so identity survives round trips through dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectHandle {
    /// Registered class of the object.
    pub class: TypeToken,
    /// Runtime refinement reported for this object.
    pub insight: Insight,
    /// Host-assigned object identity.
    pub id: u64,
}

impl ObjectHandle {
    /// Create a handle with no runtime refinement.
    pub fn new(class: TypeToken, id: u64) -> Self {
        Self {
            class,
            insight: Insight::NONE,
            id,
        }
    }

    /// Attach a runtime refinement to the handle.
    pub fn with_insight(mut self, insight: Insight) -> Self {
        self.insight = insight;
        self
    }
}

/// A dynamically typed scripting value.
#[derive(Clone, PartialEq)]
pub enum ScriptValue {
    /// Void/empty.
    Void,
    /// Boolean value.
    Bool(bool),
    /// Integer value (all integer widths stored as i64).
    Int(i64),
    /// Floating point value (f32 and f64 stored as f64).
    Float(f64),
    /// String value (owned).
    Str(String),
    /// Handle to a scripted object.
    Object(ObjectHandle),
    /// Null handle.
    Null,
}

impl ScriptValue {
    /// Human-readable name of this value's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            ScriptValue::Void => "void",
            ScriptValue::Bool(_) => "bool",
            ScriptValue::Int(_) => "int",
            ScriptValue::Float(_) => "float",
            ScriptValue::Str(_) => "string",
            ScriptValue::Object(_) => "object",
            ScriptValue::Null => "null",
        }
    }

    /// Check whether this value is void.
    pub fn is_void(&self) -> bool {
        matches!(self, ScriptValue::Void)
    }

    /// Check whether this value is the null handle.
    pub fn is_null(&self) -> bool {
        matches!(self, ScriptValue::Null)
    }
}

impl fmt::Debug for ScriptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptValue::Void => write!(f, "Void"),
            ScriptValue::Bool(v) => write!(f, "Bool({v})"),
            ScriptValue::Int(v) => write!(f, "Int({v})"),
            ScriptValue::Float(v) => write!(f, "Float({v})"),
            ScriptValue::Str(s) => write!(f, "Str({s:?})"),
            ScriptValue::Object(h) => write!(f, "Object(id={}, class={})", h.id, h.class),
            ScriptValue::Null => write!(f, "Null"),
        }
    }
}
