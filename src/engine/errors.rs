use thiserror::Error;

use crate::domain::CourtIndex;

/// Ошибки движка ротации.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Нужно минимум 4 игрока, получили {0}")]
    RosterTooSmall(usize),

    #[error("Имя игрока повторяется: {0}")]
    DuplicateName(String),

    #[error("Корта с индексом {0} не существует")]
    InvalidCourt(CourtIndex),

    #[error("На корте {0} нет активного матча")]
    NoActiveMatch(CourtIndex),

    #[error("Число кортов должно быть положительным, получили {0}")]
    InvalidCourtCount(usize),

    #[error("Повреждённый матч на корте {0}, запущена новая жеребьёвка")]
    CorruptMatch(CourtIndex),
}
