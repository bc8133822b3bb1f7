use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddOp {
    Add,
    Sub,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MulOp {
    Mul,
    Div,
}

/// Arithmetic expression over exact rational literals.
///
/// Chains of `+ -` and of `* /` are stored flat and evaluated left to right,
/// so tree depth only grows with parentheses, powers and signs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Number(BigRational),
    /// `first op term op term ...`
    Sum(Rc<Expr>, Vec<(AddOp, Rc<Expr>)>),
    Product(Rc<Expr>, Vec<(MulOp, Rc<Expr>)>),
    Pow(Rc<Expr>, Rc<Expr>),
    Neg(Rc<Expr>),
}

impl Expr {
    // Helper constructors for cleaner code
    pub fn num(n: i64) -> Rc<Self> {
        Rc::new(Expr::Number(BigRational::from_integer(BigInt::from(n))))
    }

    pub fn rational(n: BigRational) -> Rc<Self> {
        Rc::new(Expr::Number(n))
    }

    /// A sum chain; a chain without terms is just `first`.
    pub fn sum(first: Rc<Expr>, terms: Vec<(AddOp, Rc<Expr>)>) -> Rc<Self> {
        if terms.is_empty() {
            first
        } else {
            Rc::new(Expr::Sum(first, terms))
        }
    }

    /// A product chain; a chain without factors is just `first`.
    pub fn product(first: Rc<Expr>, factors: Vec<(MulOp, Rc<Expr>)>) -> Rc<Self> {
        if factors.is_empty() {
            first
        } else {
            Rc::new(Expr::Product(first, factors))
        }
    }

    pub fn add(lhs: Rc<Expr>, rhs: Rc<Expr>) -> Rc<Self> {
        Self::sum(lhs, vec![(AddOp::Add, rhs)])
    }

    pub fn sub(lhs: Rc<Expr>, rhs: Rc<Expr>) -> Rc<Self> {
        Self::sum(lhs, vec![(AddOp::Sub, rhs)])
    }

    pub fn mul(lhs: Rc<Expr>, rhs: Rc<Expr>) -> Rc<Self> {
        Self::product(lhs, vec![(MulOp::Mul, rhs)])
    }

    pub fn div(lhs: Rc<Expr>, rhs: Rc<Expr>) -> Rc<Self> {
        Self::product(lhs, vec![(MulOp::Div, rhs)])
    }

    pub fn pow(base: Rc<Expr>, exp: Rc<Expr>) -> Rc<Self> {
        Rc::new(Expr::Pow(base, exp))
    }

    pub fn neg(expr: Rc<Expr>) -> Rc<Self> {
        Rc::new(Expr::Neg(expr))
    }

    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Number(_) => 1,
            Expr::Neg(e) => 1 + e.node_count(),
            Expr::Pow(b, e) => 1 + b.node_count() + e.node_count(),
            Expr::Sum(first, terms) => {
                1 + first.node_count() + terms.iter().map(|(_, t)| t.node_count()).sum::<usize>()
            }
            Expr::Product(first, factors) => {
                1 + first.node_count() + factors.iter().map(|(_, t)| t.node_count()).sum::<usize>()
            }
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Expr::Sum(_, _) => 1,
            Expr::Product(_, _) => 2,
            Expr::Neg(_) => 3,
            Expr::Pow(_, _) => 4,
            Expr::Number(n) if !n.is_integer() => 2,
            Expr::Number(n) if n.is_negative() => 3,
            Expr::Number(_) => 5,
        }
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, e: &Expr, parens: bool) -> fmt::Result {
    if parens {
        write!(f, "({})", e)
    } else {
        write!(f, "{}", e)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let my_prec = self.precedence();
        match self {
            Expr::Number(n) => {
                if n.is_integer() {
                    write!(f, "{}", n.numer())
                } else {
                    write!(f, "{}/{}", n.numer(), n.denom())
                }
            }
            // operands at the chain's own level keep their parens so the
            // output parses back to the same tree
            Expr::Sum(first, terms) => {
                write_operand(f, first, first.precedence() <= my_prec)?;
                for (op, term) in terms {
                    let sym = match op {
                        AddOp::Add => " + ",
                        AddOp::Sub => " - ",
                    };
                    write!(f, "{}", sym)?;
                    write_operand(f, term, term.precedence() <= my_prec)?;
                }
                Ok(())
            }
            Expr::Product(first, factors) => {
                write_operand(f, first, first.precedence() <= my_prec)?;
                for (op, factor) in factors {
                    let sym = match op {
                        MulOp::Mul => " * ",
                        MulOp::Div => " / ",
                    };
                    write!(f, "{}", sym)?;
                    write_operand(f, factor, factor.precedence() <= my_prec)?;
                }
                Ok(())
            }
            Expr::Pow(b, e) => {
                // right-associative: (a^b)^c needs parens, a^b^c does not
                write_operand(f, b, b.precedence() <= my_prec)?;
                write!(f, "^")?;
                write_operand(f, e, e.precedence() < my_prec)
            }
            Expr::Neg(e) => {
                write!(f, "-")?;
                write_operand(f, e, e.precedence() < my_prec)
            }
        }
    }
}
