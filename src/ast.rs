use std::fmt;

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Every expression evaluates to exactly one integer. Child nodes are owned
/// exclusively by their parent, so cloning an expression produces a fully
/// independent tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Number {
        /// The constant value.
        value: i64,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
    },
    /// A binary operation (addition, comparison, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Conditional `if <cond> then <expr> else <expr>` expression.
    Ternary {
        /// The condition; any nonzero value selects `then_branch`.
        condition:   Box<Self>,
        /// Expression evaluated if the condition is nonzero.
        then_branch: Box<Self>,
        /// Expression evaluated if the condition is zero.
        else_branch: Box<Self>,
    },
    /// Function call expression (e.g. `fact(n - 1)`).
    Call {
        /// Name of the function being called.
        callee:    String,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
    },
}

impl Expr {
    /// Builds a binary operation node from two operands.
    ///
    /// ## Example
    /// ```
    /// use recur::ast::{BinaryOperator, Expr};
    ///
    /// let sum = Expr::binary(Expr::Number { value: 1 }, BinaryOperator::Add, Expr::Number { value: 2 });
    ///
    /// assert_eq!(sum.to_string(), "(1 + 2)");
    /// ```
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons. Comparisons produce
/// `1` for true and `0` for false.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Integer division truncating toward zero (`/`)
    Div,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
}

impl BinaryOperator {
    /// Whether the operator is one of the comparison operators.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self, Self::Equal | Self::NotEqual | Self::Less)
    }
}

/// Represents a statement inside a function body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A variable assignment binding a name in the current scope.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
    },
    /// A `return` of the given expression.
    Return(Expr),
    /// A nested function definition, registered when the statement runs.
    Function(FunctionDef),
}

/// Represents a user-defined function definition.
///
/// A function binds its parameters, runs the statements of its body in
/// order and yields the value of its mandatory return expression.
///
/// `Clone` is a deep copy: the clone shares no node with the original, which
/// is what lets the same definition be registered into several scopes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:        String,
    /// The parameter names. Duplicates are allowed; the last one wins.
    pub params:      Vec<String>,
    /// Assignments and nested definitions executed before the return.
    pub body:        Vec<Statement>,
    /// The expression whose value is the result of a call.
    pub return_expr: Expr,
}

impl FunctionDef {
    /// The number of parameters the function declares.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "    ".repeat(depth);
        let inner = "    ".repeat(depth + 1);

        writeln!(f, "{indent}def {}({})", self.name, self.params.join(", "))?;
        for statement in &self.body {
            match statement {
                Statement::Assignment { name, value } => writeln!(f, "{inner}{name} = {value}")?,
                Statement::Return(expr) => writeln!(f, "{inner}return {expr}")?,
                Statement::Function(def) => def.write_indented(f, depth + 1)?,
            }
        }
        writeln!(f, "{inner}return {}", self.return_expr)
    }
}

/// A parsed program: the ordered list of top-level function definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Top-level definitions in source order.
    pub functions: Vec<FunctionDef>,
}

impl Program {
    /// Finds a top-level definition by name.
    ///
    /// When a name is defined more than once, the last definition wins, as it
    /// does when the program is loaded into the global scope.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.iter().rev().find(|def| def.name == name)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{Add, Div, Equal, Less, Mul, NotEqual, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
        };
        write!(f, "{operator}")
    }
}

// Compound nodes are always parenthesized so the output parses back to the
// same tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value } => write!(f, "{value}"),
            Self::Identifier { name } => write!(f, "{name}"),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::Ternary { condition,
                            then_branch,
                            else_branch, } => {
                write!(f, "(if {condition} then {then_branch} else {else_branch})")
            },
            Self::Call { callee, arguments } => {
                write!(f, "{callee}(")?;
                for (i, arg) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            },
        }
    }
}

impl fmt::Display for FunctionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, def) in self.functions.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{def}")?;
        }
        Ok(())
    }
}
