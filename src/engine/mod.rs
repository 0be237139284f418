//! Движок ротации: жеребьёвка, выбор отдыхающих, обработка результатов.
//!
//! Высокоуровневый объект: `RotationEngine`
//! Основные операции:
//!   - `initialize` – задать ростер и обнулить сессию
//!   - `start_round` – глобальная жеребьёвка по всем кортам
//!   - `report_result` – применить результат матча на корте

pub mod court;
pub mod errors;
pub mod history;
pub mod pairing;
pub mod scheduler;
pub mod streak;

pub use court::CourtState;
pub use errors::EngineError;
pub use history::{MatchHistory, MatchRecord};
pub use scheduler::{RotationEngine, RotationOutcome};
pub use streak::WinnerStreak;

/// RNG интерфейс для движка.
/// Реализации живут в `infra::rng` (системная и детерминированная для тестов).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Случайный индекс в диапазоне `0..len`. Требование: `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}
