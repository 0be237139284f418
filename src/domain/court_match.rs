use serde::{Deserialize, Serialize};

use crate::domain::team::Team;

/// Сторона корта, за которую засчитывается победа.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Матч, посаженный на корт: две команды, левая и правая.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourtMatch {
    pub left: Team,
    pub right: Team,
}

impl CourtMatch {
    pub fn new(left: Team, right: Team) -> Self {
        Self { left, right }
    }

    /// (победитель, проигравший) по стороне.
    pub fn winner_loser(&self, side: Side) -> (&Team, &Team) {
        match side {
            Side::Left => (&self.left, &self.right),
            Side::Right => (&self.right, &self.left),
        }
    }

    /// Матч корректен, если обе команды валидны и не делят игроков.
    pub fn is_consistent(&self) -> bool {
        self.left.is_valid() && self.right.is_valid() && !self.left.overlaps(&self.right)
    }

    /// Тот же матч с точностью до перестановки сторон.
    pub fn same_pairing(&self, other: &CourtMatch) -> bool {
        (self.left == other.left && self.right == other.right)
            || (self.left == other.right && self.right == other.left)
    }
}
