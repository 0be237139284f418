use serde::{Deserialize, Serialize};

use crate::domain::Team;

/// Серия побед текущей команды на корте.
///
/// `first_loser` — команда, проигравшая ПЕРВЫЙ матч серии: именно она
/// возвращается на корт, когда обладатель серии упирается в лимит побед.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WinnerStreak {
    pub team: Option<Team>,
    pub count: u32,
    pub first_loser: Option<Team>,
}

impl WinnerStreak {
    /// Засчитать победу. Если победила та же команда — серия растёт,
    /// иначе начинается новая серия с `first_loser = loser`.
    /// Возвращает длину серии после обновления.
    pub fn register_win(&mut self, winner: &Team, loser: &Team) -> u32 {
        if self.team.as_ref() == Some(winner) {
            self.count += 1;
        } else {
            self.team = Some(winner.clone());
            self.count = 1;
            self.first_loser = Some(loser.clone());
        }
        self.count
    }

    /// Сбросить серию (смена состава на корте).
    pub fn clear(&mut self) {
        *self = WinnerStreak::default();
    }
}
