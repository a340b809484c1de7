//! runtime values and the direct-style evaluator.

use pretty::RcDoc;
use std::sync::Arc;

use kont_lang_core::abstract_syntax::{ArithOp, Expr, Lit, Name};

use crate::env::Env;
use crate::error::{EvalError, ValueKind};

#[derive(Clone, Debug)]
pub enum Value {
    VInt(i64),
    VBool(bool),
    /// parameter, body, and the environment captured where the lambda was
    /// evaluated. the body is shared with the expression tree, the
    /// environment with every other holder of it.
    VClosure(Name, Arc<Expr>, Env),
}

use Value::*;

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (VInt(i1), VInt(i2)) => i1 == i2,
            (VBool(b1), VBool(b2)) => b1 == b2,
            // closures have no useful notion of equality
            (_, _) => false,
        }
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            VInt(_) => ValueKind::Int,
            VBool(_) => ValueKind::Bool,
            VClosure(_, _, _) => ValueKind::Closure,
        }
    }

    pub fn ppr(&self) -> RcDoc<()> {
        match self {
            VInt(n) => RcDoc::as_string(n),
            VBool(true) => RcDoc::text("true"),
            VBool(false) => RcDoc::text("false"),
            VClosure(_, _, _) => RcDoc::text("<<closure>>"),
        }
    }

    pub(crate) fn as_int(&self, site: &'static str) -> Result<i64, EvalError> {
        match self {
            VInt(n) => Ok(*n),
            v => Err(EvalError::TypeMismatch {
                expected: ValueKind::Int,
                found: v.kind(),
                site,
            }),
        }
    }

    pub(crate) fn as_bool(&self, site: &'static str) -> Result<bool, EvalError> {
        match self {
            VBool(b) => Ok(*b),
            v => Err(EvalError::TypeMismatch {
                expected: ValueKind::Bool,
                found: v.kind(),
                site,
            }),
        }
    }
}

/// apply an arithmetic operator to two integer operands. the divisor is
/// checked before any division runs, so a zero divisor is always reported
/// as `DivisionByZero` and never as a host fault. the operators wrap on
/// overflow (two's-complement machine integers), which also covers
/// `i64::MIN / -1`.
pub(crate) fn apply_arith(op: ArithOp, lhs: i64, rhs: i64) -> Result<i64, EvalError> {
    match op {
        ArithOp::Add => Ok(lhs.wrapping_add(rhs)),
        ArithOp::Sub => Ok(lhs.wrapping_sub(rhs)),
        ArithOp::Mul => Ok(lhs.wrapping_mul(rhs)),
        ArithOp::Div if rhs == 0 => Err(EvalError::DivisionByZero),
        ArithOp::Div => Ok(lhs.wrapping_div(rhs)),
    }
}

pub fn eval(expr: &Expr) -> Result<Value, EvalError> {
    eval_(&Env::new(), expr)
}

/// direct-style evaluator: ordinary structural recursion, one host stack
/// frame per nesting level. operands evaluate left to right, and each is
/// type-checked before the next is evaluated.
pub fn eval_(env: &Env, expr: &Expr) -> Result<Value, EvalError> {
    match expr {
        Expr::Lit(Lit::LInt(x)) => Ok(VInt(*x)),
        Expr::Lit(Lit::LBool(x)) => Ok(VBool(*x)),

        Expr::Var(nm) => env.lookup(nm),

        Expr::Arith(op, l, r) => {
            let lhs = eval_(env, l)?.as_int("arithmetic left operand")?;
            let rhs = eval_(env, r)?.as_int("arithmetic right operand")?;
            Ok(VInt(apply_arith(*op, lhs, rhs)?))
        }

        Expr::Eql(l, r) => {
            let lhs = eval_(env, l)?.as_int("equality left operand")?;
            let rhs = eval_(env, r)?.as_int("equality right operand")?;
            Ok(VBool(lhs == rhs))
        }

        Expr::If(tst, thn, els) => {
            if eval_(env, tst)?.as_bool("if guard")? {
                eval_(env, thn)
            } else {
                eval_(env, els)
            }
        }

        // the body is not evaluated; the current environment is captured
        // as-is, which is what makes scoping lexical.
        Expr::Lam(nm, bd) => Ok(VClosure(nm.clone(), bd.clone(), env.clone())),

        Expr::App(f, a) => match eval_(env, f)? {
            VClosure(nm, bd, clo_env) => {
                let arg = eval_(env, a)?;
                let app_env = clo_env.extend(nm, arg);
                eval_(&app_env, &bd)
            }
            v => Err(EvalError::NotCallable(v.kind())),
        },
    }
}
