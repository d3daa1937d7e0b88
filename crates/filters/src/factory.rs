//! Factories that turn positional arguments into transformer instances.
//!
//! Every transformer type is registered with exactly one factory, which
//! decides how positional arguments are consumed.

use crate::error::ConstructionError;
use crate::traits::Transformer;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

type BuildFn =
    dyn Fn(&[Value]) -> Result<Box<dyn Transformer>, ConstructionError> + Send + Sync;

/// Shape of a transformer's constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signature {
    /// No constructor declared: arguments are ignored
    None,
    /// Constructor taking exactly this many positional arguments
    Positional(usize),
}

/// Builds one transformer type.
#[derive(Clone)]
pub struct TransformerFactory {
    transformer: String,
    signature: Signature,
    build: Arc<BuildFn>,
}

impl TransformerFactory {
    /// Factory for a type without a constructor. Any configured arguments
    /// are ignored and the instance is built with no arguments.
    pub fn without_constructor<F, T>(transformer: impl Into<String>, build: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
        T: Transformer + 'static,
    {
        Self {
            transformer: transformer.into(),
            signature: Signature::None,
            build: Arc::new(move |_args: &[Value]| {
                Ok::<_, ConstructionError>(Box::new(build()) as Box<dyn Transformer>)
            }),
        }
    }

    /// Factory for a type whose constructor takes `arity` positional
    /// arguments. The argument count is checked before `build` runs;
    /// `build` itself reports wrongly typed values.
    pub fn with_constructor<F, T>(transformer: impl Into<String>, arity: usize, build: F) -> Self
    where
        F: Fn(&[Value]) -> Result<T, ConstructionError> + Send + Sync + 'static,
        T: Transformer + 'static,
    {
        Self {
            transformer: transformer.into(),
            signature: Signature::Positional(arity),
            build: Arc::new(move |args: &[Value]| {
                build(args).map(|t| Box::new(t) as Box<dyn Transformer>)
            }),
        }
    }

    pub fn transformer(&self) -> &str {
        &self.transformer
    }

    pub fn signature(&self) -> Signature {
        self.signature
    }

    /// Construct a new instance from positional arguments.
    pub fn construct(&self, args: &[Value]) -> Result<Box<dyn Transformer>, ConstructionError> {
        match self.signature {
            Signature::None => (self.build)(&[]),
            Signature::Positional(expected) => {
                if args.len() != expected {
                    return Err(ConstructionError::ArityMismatch {
                        transformer: self.transformer.clone(),
                        expected,
                        found: args.len(),
                    });
                }
                (self.build)(args)
            }
        }
    }
}

impl fmt::Debug for TransformerFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformerFactory")
            .field("transformer", &self.transformer)
            .field("signature", &self.signature)
            .finish()
    }
}

/// Read positional argument `index` as a string.
pub fn string_arg(
    transformer: &str,
    args: &[Value],
    index: usize,
) -> Result<String, ConstructionError> {
    args.get(index)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ConstructionError::InvalidArgument {
            transformer: transformer.to_string(),
            index,
            expected: "string",
        })
}
