use quickcheck::{Arbitrary, Gen, TestResult};
use std::sync::Arc;

use kont_lang_core::abstract_syntax::{lit_int, name, ArithOp, Expr};
use kont_lang_core::arith;
use kont_lang_core::test_helpers::abstract_syntax::arbitrary_expr;

use crate::env::Env;
use crate::error::EvalError;
use crate::eval::{Value, Value::*};
use crate::machine::{apply_step, eval_step, Kont, Step};
use crate::{cps, eval, machine};

/// wrapper so quickcheck drives the sized generator instead of
/// `Expr::arbitrary` (which is deliberately unusable).
#[derive(Clone, Debug)]
struct AnyExpr(Expr);

impl Arbitrary for AnyExpr {
    fn arbitrary<G: Gen>(g: &mut G) -> AnyExpr {
        AnyExpr(arbitrary_expr(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = AnyExpr>> {
        Box::new(self.0.shrink().map(AnyExpr))
    }
}

/// drive the machine through its public step functions, giving up after
/// `budget` transitions. programs in this language can diverge (through
/// self-application), so agreement is only checked for programs the
/// machine finishes.
fn run_bounded(env: &Env, expr: &Arc<Expr>, budget: usize) -> Option<Result<Value, EvalError>> {
    let mut step = Step::Eval(expr.clone(), env.clone(), Kont::Halt);
    for _ in 0..budget {
        step = match step {
            Step::Done(value) => return Some(Ok(value)),
            Step::Eval(e, env, k) => match eval_step(e, env, k) {
                Ok(next) => next,
                Err(err) => return Some(Err(err)),
            },
            Step::Apply(k, v) => match apply_step(k, v) {
                Ok(next) => next,
                Err(err) => return Some(Err(err)),
            },
        };
    }
    None
}

/// closure results agree when parameter and body coincide; value equality
/// deliberately never looks inside a closure.
fn agree(a: &Result<Value, EvalError>, b: &Result<Value, EvalError>) -> bool {
    match (a, b) {
        (Ok(VClosure(nm1, bd1, _)), Ok(VClosure(nm2, bd2, _))) => nm1 == nm2 && bd1 == bd2,
        _ => a == b,
    }
}

#[quickcheck]
fn evaluators_agree(expr: AnyExpr) -> TestResult {
    let expr = Arc::new(expr.0);
    let env = Env::new();
    match run_bounded(&env, &expr, 10_000) {
        None => TestResult::discard(),
        Some(machine_result) => {
            let direct_result = eval::eval_(&env, &expr);
            let cps_result = cps::eval_(&env, &expr);
            TestResult::from_bool(
                agree(&machine_result, &direct_result) && agree(&machine_result, &cps_result),
            )
        }
    }
}

#[quickcheck]
fn arith_agrees_with_host_integers(op: ArithOp, a: i64, b: i64) -> bool {
    let expr = Arc::new(arith!(op, lit_int(a), lit_int(b)));
    let expected = match op {
        ArithOp::Add => Ok(VInt(a.wrapping_add(b))),
        ArithOp::Sub => Ok(VInt(a.wrapping_sub(b))),
        ArithOp::Mul => Ok(VInt(a.wrapping_mul(b))),
        ArithOp::Div if b == 0 => Err(EvalError::DivisionByZero),
        ArithOp::Div => Ok(VInt(a.wrapping_div(b))),
    };
    machine::eval(&expr) == expected
}

#[quickcheck]
fn division_by_zero_for_every_dividend(a: i64) -> bool {
    let expr = Arc::new(arith!(ArithOp::Div, lit_int(a), lit_int(0)));
    machine::eval(&expr) == Err(EvalError::DivisionByZero)
}

#[quickcheck]
fn eql_agrees_with_host_equality(a: i64, b: i64) -> bool {
    let expr = Arc::new(Expr::Eql(Arc::new(lit_int(a)), Arc::new(lit_int(b))));
    machine::eval(&expr) == Ok(VBool(a == b))
}

#[quickcheck]
fn latest_binding_shadows(a: i64, b: i64) -> bool {
    let x = name("x");
    let env = Env::new()
        .extend(x.clone(), VInt(a))
        .extend(x.clone(), VInt(b));
    env.lookup(&x) == Ok(VInt(b))
}

#[quickcheck]
fn extension_leaves_old_env_visible(a: i64, b: i64) -> bool {
    let x = name("x");
    let old = Env::new().extend(x.clone(), VInt(a));
    let new = old.extend(x.clone(), VInt(b));
    old.lookup(&x) == Ok(VInt(a)) && new.lookup(&x) == Ok(VInt(b))
}
