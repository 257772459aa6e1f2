use crate::interpreter::function::Function;
use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
use crate::interpreter::syntax::expression_tree::{format_number, Node};
use crate::interpreter::syntax::syntax_visitor::{
    walk_binary_operation, walk_function_call, walk_unary_operation, SyntaxVisitor,
};
use itertools::Itertools;

const INDENT_WIDTH: usize = 2;
const BRANCH: &str = "|--- ";
const CONTINUED_PREFIX: &str = "|   ";
const LAST_PREFIX: &str = "    ";

impl Node {
    /// Renders one labelled line per node, e.g. `Binary Op: +`, indenting children by two
    /// spaces per level. Every line ends with a newline.
    pub fn render_indented(&self) -> String {
        let mut visitor = IndentedDumpVisitor {
            depth: 0,
            output: String::new(),
        };
        self.accept(&mut visitor);
        visitor.output
    }

    /// Draws the tree with `|--- ` branches, one node per line:
    ///
    /// ```text
    /// *
    /// |--- +
    /// |   |--- a
    /// |   |--- b
    /// |--- c
    /// ```
    pub fn render_tree(&self) -> String {
        let mut output = String::new();
        output.push_str(&self.label());
        output.push('\n');
        self.render_children("", &mut output);
        output
    }

    fn render_branch(&self, prefix: &str, is_last: bool, output: &mut String) {
        output.push_str(prefix);
        output.push_str(BRANCH);
        output.push_str(&self.label());
        output.push('\n');

        let child_prefix = format!(
            "{}{}",
            prefix,
            if is_last { LAST_PREFIX } else { CONTINUED_PREFIX }
        );
        self.render_children(&child_prefix, output);
    }

    fn render_children(&self, prefix: &str, output: &mut String) {
        let children = self.children();
        let last = children.len().saturating_sub(1);
        for (index, child) in children.into_iter().enumerate() {
            child.render_branch(prefix, index == last, output);
        }
    }

    fn label(&self) -> String {
        match self {
            Node::Number(value) => format_number(*value),
            Node::Variable(name) => name.to_string(),
            Node::BinaryOperation { operator, .. } => operator.to_string(),
            Node::UnaryOperation { operator, .. } => operator.to_string(),
            Node::FunctionCall { function, .. } => format!("{}()", function),
        }
    }
}

struct IndentedDumpVisitor {
    depth: usize,
    output: String,
}

impl IndentedDumpVisitor {
    fn line(&mut self, text: String) {
        self.output.push_str(&" ".repeat(self.depth * INDENT_WIDTH));
        self.output.push_str(&text);
        self.output.push('\n');
    }

    fn nested(&mut self, walk: impl FnOnce(&mut Self)) {
        self.depth += 1;
        walk(self);
        self.depth -= 1;
    }
}

impl SyntaxVisitor for IndentedDumpVisitor {
    fn visit_number(&mut self, value: f64) {
        self.line(format!("Number: {}", format_number(value)));
    }
    fn visit_variable(&mut self, name: &str) {
        self.line(format!("Variable: {}", name));
    }
    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.line(format!("Binary Op: {}", operator));
        self.nested(|visitor| walk_binary_operation(visitor, left_operand, right_operand));
    }
    fn visit_unary_operation(&mut self, operator: &UnaryOperator, operand: &Node) {
        self.line(format!("Unary Op: {}", operator));
        self.nested(|visitor| walk_unary_operation(visitor, operand));
    }
    fn visit_function_call(&mut self, function: &Function, arguments: &[Node]) {
        self.line(format!(
            "Function Call: {}({})",
            function,
            arguments.iter().map(Node::to_infix).join(", ")
        ));
        self.nested(|visitor| walk_function_call(visitor, arguments));
    }
}
