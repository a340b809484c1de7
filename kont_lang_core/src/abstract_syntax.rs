use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// wrapper around `String`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Name(pub String);

/// `Expr` is the core type of `kont_lang`. a program is a single `Expr`
/// built directly by the caller; there is no concrete syntax. children are
/// `Arc` so closure bodies and pending continuations share subtrees with
/// the caller's tree instead of cloning them.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    Lit(Lit),
    Var(Name),
    Arith(ArithOp, Arc<Expr>, Arc<Expr>),
    Eql(Arc<Expr>, Arc<Expr>),
    If(Arc<Expr>, Arc<Expr>, Arc<Expr>),
    Lam(Name, Arc<Expr>),
    App(Arc<Expr>, Arc<Expr>),
}

/// literal value.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Lit {
    LInt(i64),
    LBool(bool),
}

/// integer arithmetic operator.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// construct an application of 2 exprs.
#[macro_export]
macro_rules! app {
    ( $f: expr, $a: expr ) => {
        Expr::App(::std::sync::Arc::new($f), ::std::sync::Arc::new($a))
    };
}

/// construct a lambda.
#[macro_export]
macro_rules! lam {
    ( $nm: expr, $bd: expr ) => {
        Expr::Lam($nm, ::std::sync::Arc::new($bd))
    };
}

/// construct an arithmetic node.
#[macro_export]
macro_rules! arith {
    ( $op: expr, $a: expr, $b: expr ) => {
        Expr::Arith($op, ::std::sync::Arc::new($a), ::std::sync::Arc::new($b))
    };
}

// helpers

pub fn lit_int(x: i64) -> Expr {
    Expr::Lit(Lit::LInt(x))
}

pub fn lit_bool(x: bool) -> Expr {
    Expr::Lit(Lit::LBool(x))
}

pub fn var(s: &str) -> Expr {
    Expr::Var(Name(s.to_string()))
}

pub fn name(s: &str) -> Name {
    Name(s.to_string())
}
