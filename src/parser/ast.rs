//! AST produced by the parser.
//!
//! Nodes are plain owned values. The parser never touches a node again after
//! handing the [`Program`] back to its caller.

/// Ordered clauses in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Clauses parsed from input.
    pub clauses: Vec<Clause>,
}

impl Program {
    /// Creates a program from clauses in source order.
    pub fn new(clauses: Vec<Clause>) -> Self {
        Self { clauses }
    }

    /// Number of clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Returns `true` when no clause was parsed.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Iterates clauses in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Clause> {
        self.clauses.iter()
    }
}

impl IntoIterator for Program {
    type Item = Clause;
    type IntoIter = std::vec::IntoIter<Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.into_iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Clause;
    type IntoIter = std::slice::Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}

/// A head/body pair. Facts carry the synthesized body `true()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub head: ClauseHead,
    pub body: Term,
}

impl Clause {
    /// Creates a fact: `head.` with body `true()`.
    pub fn fact(head: ClauseHead) -> Self {
        Self {
            head,
            body: Term::truth(),
        }
    }

    /// Creates a rule: `head :- body.`
    pub fn rule(head: ClauseHead, body: Term) -> Self {
        Self { head, body }
    }

    /// Returns `true` when the body is the trivial `true()` term.
    pub fn is_fact(&self) -> bool {
        self.body.is_truth()
    }
}

/// Predicate name with its (possibly empty) argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseHead {
    pub name: String,
    pub args: Vec<Term>,
}

impl ClauseHead {
    /// Creates a head value.
    pub fn new(name: impl Into<String>, args: Vec<Term>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Converts the head into the equivalent predicate term.
    pub fn into_term(self) -> Term {
        Term::Pred {
            name: self.name,
            args: self.args,
        }
    }
}

/// Argument or body term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// Uppercase-initial logical variable.
    Variable { name: String },
    /// Predicate application; zero arguments for a plain atom.
    Pred { name: String, args: Vec<Term> },
}

impl Term {
    /// Creates a variable term.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name: name.into() }
    }

    /// Creates a predicate term.
    pub fn pred(name: impl Into<String>, args: Vec<Term>) -> Self {
        Self::Pred {
            name: name.into(),
            args,
        }
    }

    /// Creates a zero-argument predicate term.
    pub fn atom(name: impl Into<String>) -> Self {
        Self::pred(name, Vec::new())
    }

    /// The synthesized body of a fact.
    pub fn truth() -> Self {
        Self::atom("true")
    }

    /// Returns `true` for the zero-argument predicate `true`.
    pub fn is_truth(&self) -> bool {
        matches!(self, Self::Pred { name, args } if name == "true" && args.is_empty())
    }

    /// Name of the variable or predicate.
    pub fn name(&self) -> &str {
        match self {
            Self::Variable { name } | Self::Pred { name, .. } => name,
        }
    }
}
