pub mod expression_tree;
pub mod printer;
pub(crate) mod syntax_visitor;
