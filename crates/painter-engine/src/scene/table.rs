//! Operation Table: the fixed mapping from command keyword to operation.

use super::op::{Move, Operation};
use super::shapes::{BoundingRect, Figure, Fill};

/// What a command keyword produces.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum OpKind {
    White,
    Green,
    Figure,
    BoundingRect,
    Move,
    Update,
    Reset,
}

/// Keyword → kind, in documentation order.
pub const TABLE: &[(&str, OpKind)] = &[
    ("white", OpKind::White),
    ("green", OpKind::Green),
    ("figure", OpKind::Figure),
    ("brect", OpKind::BoundingRect),
    ("move", OpKind::Move),
    ("update", OpKind::Update),
    ("reset", OpKind::Reset),
];

/// Looks up a keyword. Matching is exact (case-sensitive).
pub fn lookup(keyword: &str) -> Option<OpKind> {
    TABLE.iter().find(|(k, _)| *k == keyword).map(|&(_, kind)| kind)
}

impl OpKind {
    pub fn keyword(self) -> &'static str {
        TABLE
            .iter()
            .find(|&&(_, kind)| kind == self)
            .map(|&(k, _)| k)
            .unwrap_or("?")
    }

    /// Exact number of numeric arguments the command takes.
    pub const fn arity(self) -> usize {
        match self {
            OpKind::White | OpKind::Green | OpKind::Update | OpKind::Reset => 0,
            OpKind::Figure | OpKind::Move => 2,
            OpKind::BoundingRect => 4,
        }
    }

    /// Control tokens steer batching and never take inline arguments.
    pub const fn is_control(self) -> bool {
        matches!(self, OpKind::Update | OpKind::Reset)
    }

    /// Builds the operation from already-parsed arguments.
    ///
    /// Returns `None` when `args.len()` differs from [`arity`](Self::arity).
    pub fn build(self, args: &[f64]) -> Option<Operation> {
        if args.len() != self.arity() {
            return None;
        }
        Some(match (self, args) {
            (OpKind::White, _) => Operation::Fill(Fill::white()),
            (OpKind::Green, _) => Operation::Fill(Fill::green()),
            (OpKind::Figure, &[x, y]) => Operation::Figure(Figure::new(x, y)),
            (OpKind::BoundingRect, &[x1, y1, x2, y2]) => {
                Operation::BoundingRect(BoundingRect::new(x1, y1, x2, y2))
            }
            (OpKind::Move, &[x, y]) => Operation::Move(Move::new(x, y)),
            (OpKind::Update, _) => Operation::UpdateMarker,
            (OpKind::Reset, _) => Operation::Reset,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_keyword_round_trips() {
        for &(keyword, kind) in TABLE {
            assert_eq!(lookup(keyword), Some(kind));
            assert_eq!(kind.keyword(), keyword);
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(lookup("White"), None);
        assert_eq!(lookup("figures"), None);
    }

    #[test]
    fn build_checks_arity() {
        assert_eq!(OpKind::Figure.build(&[0.1]), None);
        assert_eq!(OpKind::White.build(&[1.0]), None);
        assert_eq!(
            OpKind::Figure.build(&[0.25, 0.5]),
            Some(Operation::Figure(Figure::new(0.25, 0.5)))
        );
    }

    #[test]
    fn brect_builds_sorted_bounds() {
        assert_eq!(
            OpKind::BoundingRect.build(&[0.75, 0.75, 0.25, 0.25]),
            Some(Operation::BoundingRect(BoundingRect::new(0.25, 0.25, 0.75, 0.75)))
        );
    }

    #[test]
    fn control_kinds() {
        assert!(OpKind::Update.is_control());
        assert!(OpKind::Reset.is_control());
        assert!(!OpKind::Move.is_control());
        assert_eq!(OpKind::Update.build(&[]), Some(Operation::UpdateMarker));
    }
}
