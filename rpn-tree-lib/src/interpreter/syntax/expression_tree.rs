use crate::interpreter::function::Function;
use crate::interpreter::operator::{BinaryOperator, Operator, Precedence, UnaryOperator};
use crate::interpreter::syntax::syntax_visitor::{
    walk_binary_operation, walk_function_call, walk_unary_operation, SyntaxVisitor,
};
use itertools::Itertools;
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Display, Formatter};

/// A node of an expression tree. Every non-leaf node owns its children, and a tree is never
/// changed once it has been built.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // Terminal symbols (leaves)
    Number(f64),
    Variable(String),
    // Non-terminal symbols (non-leaves)
    BinaryOperation {
        operator: BinaryOperator,
        left_operand: Box<Node>,
        right_operand: Box<Node>,
    },
    UnaryOperation {
        operator: UnaryOperator,
        operand: Box<Node>,
    },
    FunctionCall {
        function: Function,
        arguments: Vec<Node>,
    },
}

impl Node {
    pub fn new_number(value: f64) -> Node {
        Node::Number(value)
    }

    pub fn new_variable(name: impl Into<String>) -> Node {
        Node::Variable(name.into())
    }

    pub fn new_binary_operation(
        operator: BinaryOperator,
        left_operand: Node,
        right_operand: Node,
    ) -> Node {
        Node::BinaryOperation {
            operator,
            left_operand: Box::new(left_operand),
            right_operand: Box::new(right_operand),
        }
    }

    pub fn new_binary_addition(left_operand: Node, right_operand: Node) -> Node {
        Self::new_binary_operation(BinaryOperator::Add, left_operand, right_operand)
    }

    pub fn new_binary_subtraction(left_operand: Node, right_operand: Node) -> Node {
        Self::new_binary_operation(BinaryOperator::Subtract, left_operand, right_operand)
    }

    pub fn new_binary_multiplication(left_operand: Node, right_operand: Node) -> Node {
        Self::new_binary_operation(BinaryOperator::Multiply, left_operand, right_operand)
    }

    pub fn new_binary_division(left_operand: Node, right_operand: Node) -> Node {
        Self::new_binary_operation(BinaryOperator::Divide, left_operand, right_operand)
    }

    pub fn new_binary_exponentiation(left_operand: Node, right_operand: Node) -> Node {
        Self::new_binary_operation(BinaryOperator::Power, left_operand, right_operand)
    }

    pub fn new_unary_operation(operator: UnaryOperator, operand: Node) -> Node {
        Node::UnaryOperation {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn new_negation(operand: Node) -> Node {
        Self::new_unary_operation(UnaryOperator::Negative, operand)
    }

    pub fn new_function_call(function: Function, arguments: Vec<Node>) -> Node {
        Node::FunctionCall {
            function,
            arguments,
        }
    }

    pub fn as_operator(&self) -> Option<Operator> {
        match self {
            Node::BinaryOperation { operator, .. } => Some(Operator::Binary(*operator)),
            Node::UnaryOperation { operator, .. } => Some(Operator::Unary(*operator)),
            Node::Number(_) | Node::Variable(_) | Node::FunctionCall { .. } => None,
        }
    }

    /// Direct children, left to right.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Number(_) | Node::Variable(_) => vec![],
            Node::BinaryOperation {
                left_operand,
                right_operand,
                ..
            } => vec![left_operand.as_ref(), right_operand.as_ref()],
            Node::UnaryOperation { operand, .. } => vec![operand.as_ref()],
            Node::FunctionCall { arguments, .. } => arguments.iter().collect(),
        }
    }

    /// Calls the correct visitor method for the node variant on the given visitor.
    pub(crate) fn accept(&self, visitor: &mut impl SyntaxVisitor) {
        match self {
            Node::Number(value) => visitor.visit_number(*value),
            Node::Variable(name) => visitor.visit_variable(name),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => visitor.visit_binary_operation(operator, left_operand, right_operand),
            Node::UnaryOperation { operator, operand } => {
                visitor.visit_unary_operation(operator, operand)
            }
            Node::FunctionCall {
                function,
                arguments,
            } => visitor.visit_function_call(function, arguments),
        }
    }

    /// Names of all variables in the tree, sorted and without duplicates.
    pub fn collect_variables(&self) -> Vec<String> {
        let mut visitor = VariableCollectorVisitor { names: vec![] };
        self.accept(&mut visitor);
        visitor.names.into_iter().sorted().dedup().collect()
    }

    /// Whether at least one variable occurs anywhere in the tree.
    pub fn has_variables(&self) -> bool {
        match self {
            Node::Number(_) => false,
            Node::Variable(_) => true,
            Node::BinaryOperation {
                left_operand,
                right_operand,
                ..
            } => left_operand.has_variables() || right_operand.has_variables(),
            Node::UnaryOperation { operand, .. } => operand.has_variables(),
            Node::FunctionCall { arguments, .. } => arguments.iter().any(Node::has_variables),
        }
    }

    /// Writes the tree back out as an infix expression.
    ///
    /// Parentheses are only added where precedence requires them. A left operand is wrapped
    /// when it binds strictly weaker than its parent, a right operand also when it binds
    /// equally strong, so `a - (b - c)` keeps its parentheses while `(a - b) - c` loses them.
    /// The operand of a negation is never wrapped.
    pub fn to_infix(&self) -> String {
        match self {
            Node::Number(value) => format_number(*value),
            Node::Variable(name) => name.to_string(),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => {
                let mut expression = String::new();

                let wrap_left = left_operand
                    .as_operator()
                    .map_or(false, |child| child.precedence_lt(operator));
                parenthesize_if(&mut expression, wrap_left, &left_operand.to_infix());

                expression.push(' ');
                expression.push(operator.symbol());
                expression.push(' ');

                let wrap_right = right_operand
                    .as_operator()
                    .map_or(false, |child| child.precedence_le(operator));
                parenthesize_if(&mut expression, wrap_right, &right_operand.to_infix());

                expression
            }
            Node::UnaryOperation { operator, operand } => {
                format!("{}{}", operator.symbol(), operand.to_infix())
            }
            Node::FunctionCall {
                function,
                arguments,
            } => format!(
                "{}({})",
                function,
                arguments.iter().map(Node::to_infix).join(", ")
            ),
        }
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut visitor = TreeBuilderVisitor {
            builder: TreeBuilder::new("expression".into()),
        };
        self.accept(&mut visitor);

        let mut buffer: Vec<u8> = Vec::new();
        if write_tree(&visitor.builder.build(), &mut buffer).is_err() {
            return Err(fmt::Error);
        }
        let text = std::str::from_utf8(&buffer).map_err(|_| fmt::Error)?;
        f.write_str(text)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

/// Renders a number without superfluous trailing zeros, e.g. `4` rather than `4.000`
/// and `4.5` rather than `4.500`.
pub(crate) fn format_number(value: f64) -> String {
    let text = value.to_string();
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

fn parenthesize_if(expression: &mut String, predicate: bool, interior: &str) {
    if predicate {
        expression.push('(');
    }

    expression.push_str(interior);

    if predicate {
        expression.push(')');
    }
}

struct VariableCollectorVisitor {
    names: Vec<String>,
}

impl SyntaxVisitor for VariableCollectorVisitor {
    fn visit_variable(&mut self, name: &str) {
        self.names.push(name.to_string());
    }
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl SyntaxVisitor for TreeBuilderVisitor {
    fn visit_number(&mut self, value: f64) {
        self.builder.add_empty_child(format_number(value));
    }
    fn visit_variable(&mut self, name: &str) {
        self.builder.add_empty_child(name.to_string());
    }
    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.builder.begin_child(format!("{}", operator));
        walk_binary_operation(self, left_operand, right_operand);
        self.builder.end_child();
    }
    fn visit_unary_operation(&mut self, operator: &UnaryOperator, operand: &Node) {
        self.builder.begin_child(format!("{}", operator));
        walk_unary_operation(self, operand);
        self.builder.end_child();
    }
    fn visit_function_call(&mut self, function: &Function, arguments: &[Node]) {
        self.builder.begin_child(format!("{}()", function));
        walk_function_call(self, arguments);
        self.builder.end_child();
    }
}
