//! the defunctionalized-CPS machine.
//!
//! where [`crate::cps`] captures "the rest of the work" in host closures,
//! this module reifies it as [`Kont`]: a closed chain of heap-allocated
//! frames interpreted by one dispatch function. the driver is an iterative
//! loop that swaps the current [`Step`] for its successor, so evaluation
//! depth is bounded by heap, never by the host call stack, and the entire
//! pending computation is a walkable value at every instant.

use std::sync::Arc;

use kont_lang_core::abstract_syntax::{ArithOp, Expr, Lit, Name};

use crate::env::Env;
use crate::error::EvalError;
use crate::eval::{apply_arith, Value, Value::*};

/// one frame of pending work. frames chain through `Box` down to [`Kont::Halt`];
/// the chain is only ever grown by prepending and consumed frame-by-frame.
#[derive(Clone, Debug)]
pub enum Kont {
    /// nothing remains: the delivered value is the program result.
    Halt,
    /// an arithmetic left operand is under evaluation; holds the operator,
    /// the unevaluated right operand, and the env to evaluate it under.
    ArithRight(ArithOp, Arc<Expr>, Env, Box<Kont>),
    /// an arithmetic right operand is under evaluation; the left value is
    /// already known.
    ArithApply(ArithOp, i64, Box<Kont>),
    /// an equality left operand is under evaluation.
    EqlRight(Arc<Expr>, Env, Box<Kont>),
    /// an equality right operand is under evaluation; the left value is
    /// already known.
    EqlApply(i64, Box<Kont>),
    /// a guard is under evaluation; holds both branches unevaluated and the
    /// env they would run under.
    Branch(Arc<Expr>, Arc<Expr>, Env, Box<Kont>),
    /// a callee is under evaluation; holds the unevaluated argument.
    AppArg(Arc<Expr>, Env, Box<Kont>),
    /// an argument is under evaluation; holds the closure being applied,
    /// already destructured into parameter, body, and captured env.
    AppClosure(Name, Arc<Expr>, Env, Box<Kont>),
}

/// the machine's instantaneous state.
#[derive(Clone, Debug)]
pub enum Step {
    /// evaluate an expression under an environment, then feed the frame chain.
    Eval(Arc<Expr>, Env, Kont),
    /// feed a value to the topmost frame.
    Apply(Kont, Value),
    /// terminal.
    Done(Value),
}

pub fn eval(expr: &Arc<Expr>) -> Result<Value, EvalError> {
    eval_(&Env::new(), expr)
}

/// the trampoline: replace the current step with its successor until the
/// machine reports `Done`. the only loop in the interpreter; neither step
/// function calls itself or the other.
pub fn eval_(env: &Env, expr: &Arc<Expr>) -> Result<Value, EvalError> {
    let mut step = Step::Eval(expr.clone(), env.clone(), Kont::Halt);
    loop {
        step = match step {
            Step::Eval(expr, env, kont) => eval_step(expr, env, kont)?,
            Step::Apply(kont, value) => apply_step(kont, value)?,
            Step::Done(value) => return Ok(value),
        };
    }
}

/// dispatch on the expression. leaves deliver their value to the frame
/// chain; interior nodes descend into their first subexpression, pushing a
/// frame that records everything needed to resume.
pub fn eval_step(expr: Arc<Expr>, env: Env, kont: Kont) -> Result<Step, EvalError> {
    match &*expr {
        Expr::Lit(Lit::LInt(x)) => Ok(Step::Apply(kont, VInt(*x))),
        Expr::Lit(Lit::LBool(x)) => Ok(Step::Apply(kont, VBool(*x))),

        Expr::Var(nm) => Ok(Step::Apply(kont, env.lookup(nm)?)),

        Expr::Arith(op, l, r) => Ok(Step::Eval(
            l.clone(),
            env.clone(),
            Kont::ArithRight(*op, r.clone(), env, Box::new(kont)),
        )),

        Expr::Eql(l, r) => Ok(Step::Eval(
            l.clone(),
            env.clone(),
            Kont::EqlRight(r.clone(), env, Box::new(kont)),
        )),

        Expr::If(tst, thn, els) => Ok(Step::Eval(
            tst.clone(),
            env.clone(),
            Kont::Branch(thn.clone(), els.clone(), env, Box::new(kont)),
        )),

        // the body is not evaluated; the current environment is captured.
        Expr::Lam(nm, bd) => Ok(Step::Apply(kont, VClosure(nm.clone(), bd.clone(), env))),

        Expr::App(f, a) => Ok(Step::Eval(
            f.clone(),
            env.clone(),
            Kont::AppArg(a.clone(), env, Box::new(kont)),
        )),
    }
}

/// dispatch on the topmost frame, folding `value` into it. every frame
/// type-checks the incoming value before anything else happens, so a
/// failure always reports the first offending site in evaluation order.
pub fn apply_step(kont: Kont, value: Value) -> Result<Step, EvalError> {
    match kont {
        Kont::Halt => Ok(Step::Done(value)),

        Kont::ArithRight(op, right, env, k) => {
            let lhs = value.as_int("arithmetic left operand")?;
            Ok(Step::Eval(right, env, Kont::ArithApply(op, lhs, k)))
        }

        Kont::ArithApply(op, lhs, k) => {
            let rhs = value.as_int("arithmetic right operand")?;
            Ok(Step::Apply(*k, VInt(apply_arith(op, lhs, rhs)?)))
        }

        Kont::EqlRight(right, env, k) => {
            let lhs = value.as_int("equality left operand")?;
            Ok(Step::Eval(right, env, Kont::EqlApply(lhs, k)))
        }

        Kont::EqlApply(lhs, k) => {
            let rhs = value.as_int("equality right operand")?;
            Ok(Step::Apply(*k, VBool(lhs == rhs)))
        }

        // the surviving branch runs under the frame's env with the frame's
        // continuation unchanged, so its result lands exactly where the
        // whole `if`'s result was expected.
        Kont::Branch(thn, els, env, k) => {
            if value.as_bool("if guard")? {
                Ok(Step::Eval(thn, env, *k))
            } else {
                Ok(Step::Eval(els, env, *k))
            }
        }

        // the callee is rejected here if it is not a closure - before the
        // argument is evaluated.
        Kont::AppArg(arg, env, k) => match value {
            VClosure(nm, bd, clo_env) => {
                Ok(Step::Eval(arg, env, Kont::AppClosure(nm, bd, clo_env, k)))
            }
            v => Err(EvalError::NotCallable(v.kind())),
        },

        // enter the closure body under its own captured environment
        // extended with the argument - never the application site's env.
        Kont::AppClosure(nm, bd, clo_env, k) => {
            Ok(Step::Eval(bd, clo_env.extend(nm, value), *k))
        }
    }
}
