use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A mapping from identifier names to values, with an optional reference to
/// an enclosing environment.
///
/// Lookup walks the chain innermost-first; defining a binding always writes
/// the innermost frame and never touches an outer one. Environments are
/// shared behind `Rc` because closures keep their captured frame alive for
/// as long as the closure itself is reachable, and sibling closures may
/// share one frame. A recursive closure makes the graph cyclic; such cycles
/// are tolerated (the frames are simply not reclaimed until process exit).
///
/// # Examples
/// ```
/// use quill::interpreter::value::{core::Value, environment::Environment};
///
/// let outer = Environment::new();
/// outer.set("x".to_string(), Value::Integer(1));
///
/// let inner = Environment::enclosed(&outer);
/// inner.set("y".to_string(), Value::Integer(2));
///
/// assert_eq!(inner.get("x"), Some(Value::Integer(1)));
/// assert_eq!(inner.get("y"), Some(Value::Integer(2)));
/// assert_eq!(outer.get("y"), None);
/// ```
pub struct Environment {
    store: RefCell<HashMap<String, Value>>,
    outer: Option<Rc<Environment>>,
}

impl Environment {
    /// Creates a root environment with no enclosing frame.
    #[must_use]
    pub fn new() -> Rc<Self> {
        Rc::new(Self { store: RefCell::new(HashMap::new()),
                       outer: None, })
    }

    /// Creates an environment whose lookups fall through to `outer`.
    ///
    /// The evaluator allocates one of these per call frame, parented on the
    /// callee's captured environment.
    #[must_use]
    pub fn enclosed(outer: &Rc<Self>) -> Rc<Self> {
        Rc::new(Self { store: RefCell::new(HashMap::new()),
                       outer: Some(Rc::clone(outer)), })
    }

    /// Looks up `name`, searching the chain innermost-first.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.borrow().get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.get(name)),
        }
    }

    /// Defines `name` in the innermost frame, overwriting any previous
    /// binding of the same name in that frame.
    pub fn set(&self, name: String, value: Value) {
        self.store.borrow_mut().insert(name, value);
    }
}
