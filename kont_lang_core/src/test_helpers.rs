pub mod abstract_syntax;
