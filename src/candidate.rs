//! Candidate native functions.

use overpass_core::{CandidateTraits, NativeError, NativeFn, ScriptValue, TypeToken};

/// One native function in an overloaded set.
///
/// A candidate is its formal signature, its return type, and an opaque
/// invoker that knows how to marshal already-converted scripting values into
/// the native call and wrap the native return.
#[derive(Debug, Clone)]
pub struct CandidateFunction {
    signature: Box<[TypeToken]>,
    return_type: TypeToken,
    traits: CandidateTraits,
    invoker: NativeFn,
}

impl CandidateFunction {
    /// Create a candidate from signature, return type, and invoker.
    pub fn new(signature: Vec<TypeToken>, return_type: TypeToken, invoker: NativeFn) -> Self {
        Self {
            signature: signature.into_boxed_slice(),
            return_type,
            traits: CandidateTraits::default(),
            invoker,
        }
    }

    /// Attach qualifier traits (const, static) to the candidate.
    pub fn with_traits(mut self, traits: CandidateTraits) -> Self {
        self.traits = traits;
        self
    }

    /// The formal parameter types, in positional order.
    pub fn signature(&self) -> &[TypeToken] {
        &self.signature
    }

    /// Number of formal parameters.
    pub fn arity(&self) -> usize {
        self.signature.len()
    }

    /// The native return type.
    pub fn return_type(&self) -> TypeToken {
        self.return_type
    }

    /// The candidate's qualifier traits.
    pub fn traits(&self) -> CandidateTraits {
        self.traits
    }

    /// Invoke the native function with converted arguments.
    pub fn invoke(&self, args: &[ScriptValue]) -> Result<ScriptValue, NativeError> {
        self.invoker.call(args)
    }

    /// Whether two candidates have element-wise identical signatures.
    ///
    /// Traits are deliberately ignored: a const and a non-const overload
    /// sharing a parameter list are the same alternative for ambiguity
    /// purposes.
    pub fn identical_signature(&self, other: &CandidateFunction) -> bool {
        self.signature == other.signature
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use overpass_core::builtin;

    fn nop(name: &str, signature: Vec<TypeToken>) -> CandidateFunction {
        let id = TypeToken::from_function(name, &signature);
        CandidateFunction::new(
            signature,
            builtin::void(),
            NativeFn::new(id, |_: &[ScriptValue]| {
                Ok::<_, NativeError>(ScriptValue::Void)
            }),
        )
    }

    #[test]
    fn identical_signature_is_reflexive_and_symmetric() {
        let a = nop("m", vec![builtin::int(), builtin::float()]);
        let b = nop("m", vec![builtin::int(), builtin::float()]);
        let c = nop("m", vec![builtin::float(), builtin::int()]);

        assert!(a.identical_signature(&a));
        assert!(a.identical_signature(&b));
        assert!(b.identical_signature(&a));
        assert!(!a.identical_signature(&c));
    }

    #[test]
    fn identical_signature_ignores_traits() {
        let plain = nop("m", vec![builtin::int()]);
        let constant = nop("m", vec![builtin::int()]).with_traits(CandidateTraits::CONST);
        assert!(plain.identical_signature(&constant));
        assert_ne!(plain.traits(), constant.traits());
    }

    #[test]
    fn arity_mismatch_is_not_identical() {
        let a = nop("m", vec![builtin::int()]);
        let b = nop("m", vec![builtin::int(), builtin::int()]);
        assert!(!a.identical_signature(&b));
    }

    #[test]
    fn invoke_passes_through() {
        let id = TypeToken::from_function("sum", &[builtin::int(), builtin::int()]);
        let candidate = CandidateFunction::new(
            vec![builtin::int(), builtin::int()],
            builtin::int(),
            NativeFn::new(id, |args: &[ScriptValue]| match args {
                [ScriptValue::Int(a), ScriptValue::Int(b)] => Ok(ScriptValue::Int(a + b)),
                _ => Err(NativeError::Other {
                    message: "bad arguments".to_string(),
                }),
            }),
        );

        let out = candidate
            .invoke(&[ScriptValue::Int(2), ScriptValue::Int(3)])
            .unwrap();
        assert_eq!(out, ScriptValue::Int(5));
    }
}
