use serde::{Deserialize, Serialize};

use crate::domain::{CourtIndex, Team};

/// Запись об одном сыгранном матче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchRecord {
    /// Порядковый номер в журнале (сквозной по всем кортам).
    pub index: u32,
    pub winner: Team,
    pub loser: Team,
    pub court: CourtIndex,
}

/// Журнал результатов: только добавление, никогда не урезается
/// в течение сессии. Очищается лишь при initialize/reset.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchHistory {
    pub records: Vec<MatchRecord>,
}

impl MatchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, winner: Team, loser: Team, court: CourtIndex) {
        let index = self.records.len() as u32;
        self.records.push(MatchRecord {
            index,
            winner,
            loser,
            court,
        });
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
