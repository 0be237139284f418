//! Доменная модель ротации: игроки, команды, матчи, конфигурация.

pub mod config;
pub mod court_match;
pub mod player;
pub mod team;

/// Игрок идентифицируется именем (уникальным в рамках сессии).
pub type PlayerName = String;

/// Индекс корта (0..court_count-1).
pub type CourtIndex = usize;

pub use config::*;
pub use court_match::*;
pub use player::*;
pub use team::*;
