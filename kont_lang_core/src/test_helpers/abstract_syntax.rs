//! arbitrary generators for key abstract syntax types.

use quickcheck::{empty_shrinker, single_shrinker, Arbitrary, Gen};
use rand::Rng;
use std::sync::Arc;

use crate::abstract_syntax::*;

// this code is unused within this crate because it's library code. we know
// that, so we disable the warnings.
#[allow(dead_code)]
pub fn arbitrary_expr<G: Gen>(g: &mut G) -> Expr {
    gen_expr(g, g.size())
}

impl Arbitrary for Expr {
    fn arbitrary<G: Gen>(_g: &mut G) -> Expr {
        panic!("don't use this - use arbitrary_expr")
    }

    // shrinking steps to the immediate children (plus smaller integer
    // literals). coarser than shrinking one child at a time, but it
    // converges on counterexamples just as reliably for trees this small.
    fn shrink(&self) -> Box<dyn Iterator<Item = Expr>> {
        match self {
            Expr::Lit(Lit::LInt(x)) => Box::new(x.shrink().map(lit_int)),
            Expr::Lit(Lit::LBool(_)) | Expr::Var(_) => empty_shrinker(),
            Expr::Arith(_, l, r) | Expr::Eql(l, r) | Expr::App(l, r) => Box::new(
                vec![l.as_ref().clone(), r.as_ref().clone()].into_iter(),
            ),
            Expr::If(tst, thn, els) => Box::new(
                vec![
                    tst.as_ref().clone(),
                    thn.as_ref().clone(),
                    els.as_ref().clone(),
                ]
                .into_iter(),
            ),
            Expr::Lam(_, bd) => single_shrinker(bd.as_ref().clone()),
        }
    }
}

/// sized generator with an explicit size parameter, divided on the way down
/// so recursion terminates and generated trees stay a predictable size.
#[allow(dead_code)]
pub fn gen_expr<G: Gen>(g: &mut G, size: usize) -> Expr {
    let upper_bound = if size < 1 { 2 } else { 7 };
    match g.gen_range(0, upper_bound) {
        0 => Expr::Lit(arbitrary_lit(g)),
        1 => Expr::Var(arbitrary_name(g)),
        2 => {
            let op = arbitrary_arith_op(g);
            let l = gen_expr(g, size / 2);
            let r = gen_expr(g, size / 2);
            Expr::Arith(op, Arc::new(l), Arc::new(r))
        }
        3 => {
            let l = gen_expr(g, size / 2);
            let r = gen_expr(g, size / 2);
            Expr::Eql(Arc::new(l), Arc::new(r))
        }
        4 => {
            let tst = gen_expr(g, size / 3);
            let thn = gen_expr(g, size / 3);
            let els = gen_expr(g, size / 3);
            Expr::If(Arc::new(tst), Arc::new(thn), Arc::new(els))
        }
        5 => {
            let nm = arbitrary_name(g);
            let bd = gen_expr(g, size * 5 / 6);
            Expr::Lam(nm, Arc::new(bd))
        }
        6 => {
            let f = gen_expr(g, size / 2);
            let a = gen_expr(g, size / 2);
            Expr::App(Arc::new(f), Arc::new(a))
        }
        _ => panic!("impossible: gen_expr: gen out of bounds"),
    }
}

#[allow(dead_code)]
pub fn arbitrary_lit<G: Gen>(g: &mut G) -> Lit {
    match g.gen_range(0, 2) {
        0 => Lit::LInt(i64::arbitrary(g)),
        1 => Lit::LBool(bool::arbitrary(g)),
        _ => panic!("impossible: Arbitrary: Lit: gen out of bounds"),
    }
}

// names come from a small fixed pool so that generated binders and variable
// references collide often - otherwise shadowing and capture paths would
// almost never be exercised.
#[allow(dead_code)]
pub fn arbitrary_name<G: Gen>(g: &mut G) -> Name {
    const POOL: &[&str] = &["a", "b", "c", "d", "e"];
    let idx = g.gen_range(0, POOL.len());
    Name(POOL[idx].to_string())
}

pub fn arbitrary_arith_op<G: Gen>(g: &mut G) -> ArithOp {
    match g.gen_range(0, 4) {
        0 => ArithOp::Add,
        1 => ArithOp::Sub,
        2 => ArithOp::Mul,
        3 => ArithOp::Div,
        _ => panic!("impossible: Arbitrary: ArithOp: gen out of bounds"),
    }
}

impl Arbitrary for ArithOp {
    fn arbitrary<G: Gen>(g: &mut G) -> ArithOp {
        arbitrary_arith_op(g)
    }
}
