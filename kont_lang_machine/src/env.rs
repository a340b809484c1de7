//! persistent environments.

use std::rc::Rc;

use kont_lang_core::abstract_syntax::Name;

use crate::error::EvalError;
use crate::eval::Value;

/// a persistent chain of name-to-value bindings. `extend` prepends without
/// touching the existing chain, so a closure holding an older `Env` keeps
/// seeing exactly the bindings it captured, whatever happens at the
/// extension site afterwards.
#[derive(Clone, Debug, Default)]
pub struct Env(Option<Rc<Binding>>);

#[derive(Debug)]
struct Binding {
    name: Name,
    value: Value,
    rest: Env,
}

impl Env {
    /// the environment with no bindings.
    pub fn new() -> Env {
        Env(None)
    }

    /// prepend a binding. constant time; `self` stays valid and unchanged.
    pub fn extend(&self, name: Name, value: Value) -> Env {
        Env(Some(Rc::new(Binding {
            name,
            value,
            rest: self.clone(),
        })))
    }

    /// walk the chain head-first and return the value of the most recent
    /// binding of `name`. shadowing is by recency, not uniqueness.
    pub fn lookup(&self, name: &Name) -> Result<Value, EvalError> {
        let mut cur = self;
        loop {
            match &cur.0 {
                None => return Err(EvalError::UnboundVariable(name.clone())),
                Some(b) if b.name == *name => return Ok(b.value.clone()),
                Some(b) => cur = &b.rest,
            }
        }
    }
}
