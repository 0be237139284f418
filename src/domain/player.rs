use serde::{Deserialize, Serialize};

/// Статистика игрока за сессию.
///
/// Инвариант: `played >= win` (поддерживается движком — победа
/// всегда сопровождается инкрементом сыгранных матчей).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerStats {
    /// Сколько матчей сыграно.
    pub played: u32,
    /// Сколько матчей выиграно.
    pub win: u32,
}

impl PlayerStats {
    /// Засчитать один матч.
    pub fn record(&mut self, is_winner: bool) {
        self.played += 1;
        if is_winner {
            self.win += 1;
        }
    }

    /// Процент побед (0.0, если матчей ещё не было).
    pub fn win_rate_percent(&self) -> f32 {
        if self.played == 0 {
            return 0.0;
        }
        let raw = self.win as f32 / self.played as f32 * 100.0;
        (raw * 10.0).round() / 10.0
    }
}
