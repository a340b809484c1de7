//! continuation-passing evaluator.
//!
//! the continuation here is a native boxed closure: each composite
//! expression allocates the "rest of the work" as a host closure and hands
//! it down. control still rides the host stack - the machine in
//! [`crate::machine`] is what this module looks like after
//! defunctionalization.

use std::sync::Arc;

use kont_lang_core::abstract_syntax::{Expr, Lit};

use crate::env::Env;
use crate::error::EvalError;
use crate::eval::{apply_arith, Value, Value::*};

/// what to do with the value of the expression under evaluation.
pub type Kont = Box<dyn FnOnce(Value) -> Result<Value, EvalError>>;

pub fn eval(expr: &Arc<Expr>) -> Result<Value, EvalError> {
    eval_(&Env::new(), expr)
}

pub fn eval_(env: &Env, expr: &Arc<Expr>) -> Result<Value, EvalError> {
    evaluate(expr.clone(), env.clone(), Box::new(Ok))
}

fn evaluate(expr: Arc<Expr>, env: Env, kont: Kont) -> Result<Value, EvalError> {
    match &*expr {
        Expr::Lit(Lit::LInt(x)) => kont(VInt(*x)),
        Expr::Lit(Lit::LBool(x)) => kont(VBool(*x)),

        Expr::Var(nm) => kont(env.lookup(nm)?),

        Expr::Arith(op, l, r) => {
            let (op, r, arith_env) = (*op, r.clone(), env.clone());
            evaluate(
                l.clone(),
                env,
                Box::new(move |lv| {
                    let lhs = lv.as_int("arithmetic left operand")?;
                    evaluate(
                        r,
                        arith_env,
                        Box::new(move |rv| {
                            let rhs = rv.as_int("arithmetic right operand")?;
                            kont(VInt(apply_arith(op, lhs, rhs)?))
                        }),
                    )
                }),
            )
        }

        Expr::Eql(l, r) => {
            let (r, eql_env) = (r.clone(), env.clone());
            evaluate(
                l.clone(),
                env,
                Box::new(move |lv| {
                    let lhs = lv.as_int("equality left operand")?;
                    evaluate(
                        r,
                        eql_env,
                        Box::new(move |rv| {
                            let rhs = rv.as_int("equality right operand")?;
                            kont(VBool(lhs == rhs))
                        }),
                    )
                }),
            )
        }

        Expr::If(tst, thn, els) => {
            let (thn, els, branch_env) = (thn.clone(), els.clone(), env.clone());
            evaluate(
                tst.clone(),
                env,
                Box::new(move |tv| {
                    if tv.as_bool("if guard")? {
                        evaluate(thn, branch_env, kont)
                    } else {
                        evaluate(els, branch_env, kont)
                    }
                }),
            )
        }

        Expr::Lam(nm, bd) => kont(VClosure(nm.clone(), bd.clone(), env)),

        Expr::App(f, a) => {
            let (a, app_env) = (a.clone(), env.clone());
            evaluate(
                f.clone(),
                env,
                Box::new(move |fv| match fv {
                    VClosure(nm, bd, clo_env) => evaluate(
                        a,
                        app_env,
                        Box::new(move |av| evaluate(bd, clo_env.extend(nm, av), kont)),
                    ),
                    v => Err(EvalError::NotCallable(v.kind())),
                }),
            )
        }
    }
}
