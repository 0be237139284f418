use serde::{Deserialize, Serialize};

/// Политика выбора отдыхающих, когда число активных игроков нужно выровнять.
///
/// Исторически существовали оба варианта; кто "прав" — вопрос вкуса
/// (отдых как награда или как штраф), поэтому это настройка, а не ветка кода.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RestingPolicy {
    /// Отдыхают те, кто сыграл больше всех (равные — случайно).
    MostPlayedRests,
    /// Отдыхают те, кто сыграл меньше всех (равные — случайно).
    LeastPlayedRests,
}

/// Конфигурация движка ротации.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// Сколько кортов доступно одновременно.
    pub court_count: usize,
    /// Как выбираются отдыхающие игроки.
    pub resting_policy: RestingPolicy,
    /// Сколько раз пережеребьёвывать пары, чтобы не повторить прошлый матч.
    /// Мягкая гарантия: после исчерпания попыток повтор принимается.
    pub anti_repeat_retries: u32,
    /// После скольких побед подряд команда обязана покинуть корт.
    pub win_streak_cap: u32,
}

impl EngineConfig {
    /// Конфиг для одного корта (классический вариант).
    pub fn single_court() -> Self {
        Self::default()
    }

    pub fn with_courts(court_count: usize) -> Self {
        Self {
            court_count,
            ..Self::default()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            court_count: 1,
            resting_policy: RestingPolicy::MostPlayedRests,
            anti_repeat_retries: 20,
            win_streak_cap: 2,
        }
    }
}
