//! abstract syntax for `kont_lang`, plus shared pretty-printing helpers.

pub mod abstract_syntax;
pub mod pretty;
pub mod util;

pub mod test_helpers;
