//! `kont_lang` runtime values and evaluators.
//!
//! three evaluators share one semantics: a direct-style interpreter
//! ([`eval`]), a continuation-passing interpreter whose continuations are
//! host closures ([`cps`]), and the defunctionalized machine ([`machine`]),
//! whose continuations are plain heap data stepped by an iterative loop.
//! the machine is the depth-robust entry point; the other two bound
//! evaluation depth by the host stack.

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod cps;
pub mod env;
pub mod error;
pub mod eval;
pub mod machine;

pub mod test;
