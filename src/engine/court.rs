use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::domain::{CourtMatch, PlayerName, Team};
use crate::engine::streak::WinnerStreak;

/// Состояние одного корта.
///
/// `pool` — все игроки, закреплённые за кортом в текущем раунде
/// (сидящие в матче, стоящие в очереди и уже вылетевшие по лимиту серии).
/// Пулы разных кортов не пересекаются — это инвариант движка.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourtState {
    pub pool: Vec<PlayerName>,
    pub current_match: Option<CourtMatch>,
    pub queue: VecDeque<Team>,
    pub streak: WinnerStreak,
    /// Последний посаженный матч — для мягкой защиты от повтора пары.
    pub last_match: Option<CourtMatch>,
}

impl CourtState {
    /// Пустой корт, помнящий свой последний матч.
    pub fn with_last(last_match: Option<CourtMatch>) -> Self {
        Self {
            last_match,
            ..Self::default()
        }
    }

    /// Посадить матч и запомнить его как последний.
    pub fn seat(&mut self, m: CourtMatch) {
        self.last_match = Some(m.clone());
        self.current_match = Some(m);
    }

    pub fn has_live_match(&self) -> bool {
        self.current_match.is_some()
    }
}
