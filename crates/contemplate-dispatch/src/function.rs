//! Named helper functions.
//!
//! A [`FunctionTable`] is an explicit capability lookup: callers ask for a
//! function by name and either get it or a [`DispatchError::UnknownFunction`].
//! Functions share the controller calling convention.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::controller::{ControllerArgs, ControllerResult};
use crate::error::DispatchError;

/// A named helper function.
#[derive(Clone)]
pub struct Function {
    name: String,
    callback: Arc<dyn Fn(ControllerArgs) -> ControllerResult + Send + Sync>,
}

impl Function {
    /// The registered name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Calls the function.
    pub fn call(&self, args: ControllerArgs) -> ControllerResult {
        (self.callback)(args)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Functions by name.
#[derive(Clone, Default)]
pub struct FunctionTable {
    functions: HashMap<String, Function>,
}

impl FunctionTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a function.
    ///
    /// # Errors
    ///
    /// [`DispatchError::DuplicateFunction`] if the name is taken.
    pub fn register<F>(&mut self, name: impl Into<String>, callback: F) -> Result<(), DispatchError>
    where
        F: Fn(ControllerArgs) -> ControllerResult + Send + Sync + 'static,
    {
        let name = name.into();
        if self.functions.contains_key(&name) {
            return Err(DispatchError::DuplicateFunction { name });
        }
        self.functions.insert(
            name.clone(),
            Function {
                name,
                callback: Arc::new(callback),
            },
        );
        Ok(())
    }

    /// Removes a function.
    pub fn drop_function(&mut self, name: &str) -> Result<Function, DispatchError> {
        self.functions
            .remove(name)
            .ok_or_else(|| DispatchError::UnknownFunction { name: name.into() })
    }

    /// Looks up a function.
    pub fn get(&self, name: &str) -> Result<&Function, DispatchError> {
        self.functions
            .get(name)
            .ok_or_else(|| DispatchError::UnknownFunction { name: name.into() })
    }

    /// Returns `true` if the name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Looks up and calls a function. Lookup failures come back as errors.
    pub fn call(&self, name: &str, args: ControllerArgs) -> ControllerResult {
        self.get(name)?.call(args)
    }
}

impl fmt::Debug for FunctionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionTable")
            .field("names", &self.functions.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn uppercase(args: ControllerArgs) -> ControllerResult {
        let text = args.first().and_then(Value::as_str).unwrap_or_default();
        Ok(json!(text.to_uppercase()))
    }

    #[test]
    fn test_register_and_call() {
        let mut table = FunctionTable::new();
        table.register("uppercase", uppercase).unwrap();

        assert!(table.contains("uppercase"));
        assert_eq!(table.get("uppercase").unwrap().name(), "uppercase");
        assert_eq!(
            table.call("uppercase", vec![json!("jonathan")]).unwrap(),
            json!("JONATHAN")
        );
    }

    #[test]
    fn test_register_duplicate() {
        let mut table = FunctionTable::new();
        table.register("uppercase", uppercase).unwrap();
        let err = table.register("uppercase", uppercase).unwrap_err();
        assert!(matches!(err, DispatchError::DuplicateFunction { .. }));
    }

    #[test]
    fn test_drop_function() {
        let mut table = FunctionTable::new();
        table.register("uppercase", uppercase).unwrap();
        table.drop_function("uppercase").unwrap();
        assert!(!table.contains("uppercase"));

        let err = table.drop_function("uppercase").unwrap_err();
        assert!(matches!(err, DispatchError::UnknownFunction { .. }));
    }

    #[test]
    fn test_unknown_function() {
        let table = FunctionTable::new();
        assert!(table.get("missing").is_err());
        let err = table.call("missing", vec![]).unwrap_err();
        assert!(err.to_string().contains("missing"));
    }
}
