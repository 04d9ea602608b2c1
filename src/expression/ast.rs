//! Compiled expression tree. Variables are resolved to slot indices.

use std::ops::RangeInclusive;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
}

impl BinaryOp {
    /// Binding strength for the infix loop; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Or => 1,
            BinaryOp::And => 2,
            BinaryOp::Eq | BinaryOp::Ne => 3,
            BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge => 4,
            BinaryOp::Add | BinaryOp::Sub => 5,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => 6,
            BinaryOp::Pow => 7,
        }
    }

    pub fn apply(self, a: f64, b: f64) -> f64 {
        let truth = |v: bool| if v { 1.0 } else { 0.0 };
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
            BinaryOp::Mod => a % b,
            BinaryOp::Pow => a.powf(b),
            BinaryOp::Eq => truth(a == b),
            BinaryOp::Ne => truth(a != b),
            BinaryOp::Lt => truth(a < b),
            BinaryOp::Le => truth(a <= b),
            BinaryOp::Gt => truth(a > b),
            BinaryOp::Ge => truth(a >= b),
            // Short-circuit forms are handled by the evaluator
            BinaryOp::And => truth(a > 0.0 && b > 0.0),
            BinaryOp::Or => truth(a > 0.0 || b > 0.0),
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Not,
}

/// Built-in math functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Atan2,
    Sinh,
    Cosh,
    Tanh,
    Sqrt,
    Cbrt,
    Abs,
    Min,
    Max,
    Ceil,
    Floor,
    Round,
    Exp,
    Ln,
    Log10,
    Pow,
    Sign,
}

impl Function {
    pub fn lookup(name: &str) -> Option<Function> {
        Some(match name {
            "sin" => Function::Sin,
            "cos" => Function::Cos,
            "tan" => Function::Tan,
            "asin" => Function::Asin,
            "acos" => Function::Acos,
            "atan" => Function::Atan,
            "atan2" => Function::Atan2,
            "sinh" => Function::Sinh,
            "cosh" => Function::Cosh,
            "tanh" => Function::Tanh,
            "sqrt" => Function::Sqrt,
            "cbrt" => Function::Cbrt,
            "abs" => Function::Abs,
            "min" => Function::Min,
            "max" => Function::Max,
            "ceil" => Function::Ceil,
            "floor" => Function::Floor,
            "round" | "rint" => Function::Round,
            "exp" => Function::Exp,
            "ln" | "log" => Function::Ln,
            "log10" => Function::Log10,
            "pow" => Function::Pow,
            "sign" | "signum" => Function::Sign,
            _ => return None,
        })
    }

    /// Accepted argument counts.
    pub fn arity(self) -> RangeInclusive<usize> {
        match self {
            Function::Atan2 | Function::Pow => 2..=2,
            Function::Min | Function::Max => 2..=3,
            _ => 1..=1,
        }
    }

    pub fn call(self, args: &[f64]) -> f64 {
        let a = args[0];
        match self {
            Function::Sin => a.sin(),
            Function::Cos => a.cos(),
            Function::Tan => a.tan(),
            Function::Asin => a.asin(),
            Function::Acos => a.acos(),
            Function::Atan => a.atan(),
            Function::Atan2 => a.atan2(args[1]),
            Function::Sinh => a.sinh(),
            Function::Cosh => a.cosh(),
            Function::Tanh => a.tanh(),
            Function::Sqrt => a.sqrt(),
            Function::Cbrt => a.cbrt(),
            Function::Abs => a.abs(),
            Function::Min => args.iter().copied().fold(f64::INFINITY, f64::min),
            Function::Max => args.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Function::Ceil => a.ceil(),
            Function::Floor => a.floor(),
            Function::Round => a.round(),
            Function::Exp => a.exp(),
            Function::Ln => a.ln(),
            Function::Log10 => a.log10(),
            Function::Pow => a.powf(args[1]),
            Function::Sign => {
                if a == 0.0 { 0.0 } else { a.signum() }
            }
        }
    }
}

/// Expression node
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Var(usize),
    Assign {
        slot: usize,
        op: Option<BinaryOp>,
        value: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
    Ternary {
        condition: Box<Expr>,
        then: Box<Expr>,
        otherwise: Box<Expr>,
    },
    Call {
        function: Function,
        args: Vec<Expr>,
    },
    Sequence(Vec<Expr>),
}

impl Expr {
    /// Evaluate against the slot table; assignments write into it.
    pub fn eval(&self, slots: &mut [f64]) -> f64 {
        match self {
            Expr::Number(n) => *n,
            Expr::Var(slot) => slots[*slot],
            Expr::Assign { slot, op, value } => {
                let v = value.eval(slots);
                let v = match op {
                    Some(op) => op.apply(slots[*slot], v),
                    None => v,
                };
                slots[*slot] = v;
                v
            }
            Expr::Unary { op, expr } => {
                let v = expr.eval(slots);
                match op {
                    UnaryOp::Neg => -v,
                    UnaryOp::Not => if v > 0.0 { 0.0 } else { 1.0 },
                }
            }
            Expr::Binary { left, op: BinaryOp::And, right } => {
                if left.eval(slots) > 0.0 && right.eval(slots) > 0.0 { 1.0 } else { 0.0 }
            }
            Expr::Binary { left, op: BinaryOp::Or, right } => {
                if left.eval(slots) > 0.0 || right.eval(slots) > 0.0 { 1.0 } else { 0.0 }
            }
            Expr::Binary { left, op, right } => {
                let a = left.eval(slots);
                let b = right.eval(slots);
                op.apply(a, b)
            }
            Expr::Ternary { condition, then, otherwise } => {
                if condition.eval(slots) > 0.0 {
                    then.eval(slots)
                } else {
                    otherwise.eval(slots)
                }
            }
            Expr::Call { function, args } => {
                let mut values = [0.0; 3];
                for (value, arg) in values.iter_mut().zip(args) {
                    *value = arg.eval(slots);
                }
                function.call(&values[..args.len()])
            }
            Expr::Sequence(exprs) => {
                let mut last = 0.0;
                for e in exprs {
                    last = e.eval(slots);
                }
                last
            }
        }
    }
}
