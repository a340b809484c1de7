//! rendering abstract syntax to a readable s-expression form.

use pretty::RcDoc;

use crate::abstract_syntax::{ArithOp, ArithOp::*, Expr, Expr::*, Lit, Lit::*, Name};
use crate::sp;
use crate::util::pretty::parens;

pub fn ppr_expr(expr: &Expr) -> RcDoc<()> {
    match expr {
        Lit(x) => ppr_lit(x),
        Var(name) => ppr_name(name),
        Arith(op, l, r) => {
            let docs = vec![ppr_arith_op(op), ppr_expr(l), ppr_expr(r)];
            parens(RcDoc::intersperse(docs, sp!()))
        }
        Eql(l, r) => {
            let docs = vec![RcDoc::text("=="), ppr_expr(l), ppr_expr(r)];
            parens(RcDoc::intersperse(docs, sp!()))
        }
        If(tst, thn, els) => {
            let docs = vec![RcDoc::text("if"), ppr_expr(tst), ppr_expr(thn), ppr_expr(els)];
            parens(RcDoc::intersperse(docs, sp!()))
        }
        Lam(nm, bd) => parens(
            RcDoc::text("lam [")
                .append(ppr_name(nm))
                .append(RcDoc::text("] "))
                .append(ppr_expr(bd)),
        ),
        App(f, a) => parens(ppr_expr(f).append(sp!()).append(ppr_expr(a))),
    }
}

pub fn ppr_lit(lit: &Lit) -> RcDoc<()> {
    match lit {
        LInt(x) => RcDoc::as_string(x),
        LBool(true) => RcDoc::text("true"),
        LBool(false) => RcDoc::text("false"),
    }
}

pub fn ppr_name(nm: &Name) -> RcDoc<()> {
    RcDoc::text(nm.0.clone())
}

pub fn ppr_arith_op(op: &ArithOp) -> RcDoc<()> {
    match op {
        Add => RcDoc::text("+"),
        Sub => RcDoc::text("-"),
        Mul => RcDoc::text("*"),
        Div => RcDoc::text("/"),
    }
}
