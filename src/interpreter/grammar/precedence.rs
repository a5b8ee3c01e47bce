use crate::interpreter::lexer::TokenKind;

/// How operators of the same precedence level group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a - b - c` groups as `a - (b - c)`.
    Right,
    /// Chaining two operators of the level is a syntax error.
    NonAssoc,
}

/// The binding strength of a token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precedence {
    /// Index of the group; higher binds tighter.
    pub level:         usize,
    /// Associativity of the group.
    pub associativity: Associativity,
}

/// One entry of a [`PrecedenceTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecedenceGroup {
    /// Associativity shared by every kind in the group.
    pub associativity: Associativity,
    /// The token kinds of the group.
    pub kinds:         Vec<TokenKind>,
}

/// An ordered list of precedence groups. Later groups bind tighter.
///
/// # Example
/// ```
/// use shiftexpr::interpreter::{
///     grammar::precedence::{Associativity, PrecedenceTable},
///     lexer::TokenKind,
/// };
///
/// let table = PrecedenceTable::new().group(Associativity::Left, &[TokenKind::Plus])
///                                   .group(Associativity::Left, &[TokenKind::Mul]);
/// let plus = table.level(TokenKind::Plus).unwrap();
/// let mul = table.level(TokenKind::Mul).unwrap();
/// assert!(mul.level > plus.level);
/// assert!(table.level(TokenKind::Name).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrecedenceTable {
    groups: Vec<PrecedenceGroup>,
}

impl PrecedenceTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Appends a group binding tighter than every group added before it.
    #[must_use]
    pub fn group(mut self, associativity: Associativity, kinds: &[TokenKind]) -> Self {
        self.groups.push(PrecedenceGroup { associativity,
                                           kinds: kinds.to_vec() });
        self
    }

    /// The groups, loosest first.
    #[must_use]
    pub fn groups(&self) -> &[PrecedenceGroup] {
        &self.groups
    }

    /// Looks up the precedence of a token kind, if it has one.
    #[must_use]
    pub fn level(&self, kind: TokenKind) -> Option<Precedence> {
        self.groups
            .iter()
            .position(|group| group.kinds.contains(&kind))
            .map(|level| Precedence { level,
                                      associativity: self.groups[level].associativity })
    }
}

/// The outcome of a shift/reduce conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Consume the incoming token first.
    Shift,
    /// Complete the pending production first.
    Reduce,
    /// The two operators may not be chained.
    Error,
}

/// Decides a shift/reduce conflict between a completed production and an
/// incoming token.
///
/// `rule` is the precedence of the production (that of its operator) and
/// `lookahead` the precedence of the incoming token. A tighter lookahead is
/// shifted, a looser one forces the reduction, and on a tie the associativity
/// of the level decides. When either side has no precedence the token is
/// shifted.
///
/// # Example
/// ```
/// use shiftexpr::interpreter::grammar::precedence::{Associativity, Precedence, Resolution, resolve};
///
/// let add = Precedence { level: 0, associativity: Associativity::Left };
/// let mul = Precedence { level: 1, associativity: Associativity::Left };
///
/// assert_eq!(resolve(Some(add), Some(mul)), Resolution::Shift);
/// assert_eq!(resolve(Some(mul), Some(add)), Resolution::Reduce);
/// assert_eq!(resolve(Some(add), Some(add)), Resolution::Reduce);
/// ```
#[must_use]
pub fn resolve(rule: Option<Precedence>, lookahead: Option<Precedence>) -> Resolution {
    let (Some(rule), Some(lookahead)) = (rule, lookahead) else {
        return Resolution::Shift;
    };

    match lookahead.level.cmp(&rule.level) {
        std::cmp::Ordering::Greater => Resolution::Shift,
        std::cmp::Ordering::Less => Resolution::Reduce,
        std::cmp::Ordering::Equal => match rule.associativity {
            Associativity::Left => Resolution::Reduce,
            Associativity::Right => Resolution::Shift,
            Associativity::NonAssoc => Resolution::Error,
        },
    }
}
