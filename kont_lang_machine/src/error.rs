//! the failure taxonomy for evaluation.

use pretty::RcDoc;

use kont_lang_core::abstract_syntax::Name;
use kont_lang_core::pretty::ppr_name;
use kont_lang_core::sp;

/// the shape of value a site required or received.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Int,
    Bool,
    Closure,
}

/// a terminal evaluation failure. any of these aborts the evaluation in
/// progress; none is retried or coerced into a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalError {
    /// a `Var` lookup found no binding at all.
    UnboundVariable(Name),
    /// a site required one value shape and got another. `site` names the
    /// requiring position, e.g. "if guard".
    TypeMismatch {
        expected: ValueKind,
        found: ValueKind,
        site: &'static str,
    },
    /// integer division with a zero divisor.
    DivisionByZero,
    /// application of a non-closure value; carries what was found in
    /// callee position.
    NotCallable(ValueKind),
}

impl ValueKind {
    pub fn ppr(&self) -> RcDoc<()> {
        match self {
            ValueKind::Int => RcDoc::text("Int"),
            ValueKind::Bool => RcDoc::text("Bool"),
            ValueKind::Closure => RcDoc::text("Closure"),
        }
    }
}

impl EvalError {
    pub fn ppr(&self) -> RcDoc<()> {
        match self {
            EvalError::UnboundVariable(nm) => {
                RcDoc::text("unbound variable: ").append(ppr_name(nm))
            }
            EvalError::TypeMismatch {
                expected,
                found,
                site,
            } => RcDoc::intersperse(
                vec![
                    RcDoc::text("type mismatch at"),
                    RcDoc::text(*site)
                        .append(RcDoc::text(":")),
                    RcDoc::text("expected"),
                    expected.ppr().append(RcDoc::text(",")),
                    RcDoc::text("found"),
                    found.ppr(),
                ],
                sp!(),
            ),
            EvalError::DivisionByZero => RcDoc::text("division by zero"),
            EvalError::NotCallable(kind) => RcDoc::text("not callable: ").append(kind.ppr()),
        }
    }
}
