//! Bundled frontend and memory manager over [`ScriptValue`].

use overpass_core::{Frontend, Insight, MemoryManager, ScriptValue, TypeToken, builtin};

/// Frontend for the bundled value model.
///
/// Maps each [`ScriptValue`] variant to its builtin token; objects report
/// their registered class and whatever insight their handle carries.
#[derive(Debug, Default, Clone, Copy)]
pub struct ValueFrontend;

impl Frontend for ValueFrontend {
    fn detect_type(&self, value: &ScriptValue) -> TypeToken {
        match value {
            ScriptValue::Void => builtin::void(),
            ScriptValue::Bool(_) => builtin::boolean(),
            ScriptValue::Int(_) => builtin::int(),
            ScriptValue::Float(_) => builtin::float(),
            ScriptValue::Str(_) => builtin::string(),
            ScriptValue::Object(handle) => handle.class,
            ScriptValue::Null => builtin::null(),
        }
    }

    fn detect_insight(&self, value: &ScriptValue) -> Insight {
        match value {
            ScriptValue::Object(handle) => handle.insight,
            _ => Insight::NONE,
        }
    }
}

/// Memory manager for the bundled value model: releasing is dropping.
#[derive(Debug, Default, Clone, Copy)]
pub struct DropMemory;

impl MemoryManager for DropMemory {
    fn release(&self, value: ScriptValue) {
        drop(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use overpass_core::ObjectHandle;

    #[test]
    fn primitive_values_map_to_builtin_tokens() {
        let frontend = ValueFrontend;
        assert_eq!(frontend.detect_type(&ScriptValue::Int(1)), builtin::int());
        assert_eq!(
            frontend.detect_type(&ScriptValue::Float(1.0)),
            builtin::float()
        );
        assert_eq!(
            frontend.detect_type(&ScriptValue::Str("x".into())),
            builtin::string()
        );
        assert_eq!(frontend.detect_type(&ScriptValue::Null), builtin::null());
    }

    #[test]
    fn primitives_carry_no_insight() {
        let frontend = ValueFrontend;
        assert_eq!(frontend.detect_insight(&ScriptValue::Int(1)), Insight::NONE);
    }

    #[test]
    fn objects_report_class_and_insight() {
        let frontend = ValueFrontend;
        let base = TypeToken::from_name("Entity");
        let derived = TypeToken::from_name("Player");
        let value =
            ScriptValue::Object(ObjectHandle::new(base, 5).with_insight(Insight::from(derived)));

        assert_eq!(frontend.detect_type(&value), base);
        assert_eq!(frontend.detect_insight(&value), Insight::from(derived));
    }
}
