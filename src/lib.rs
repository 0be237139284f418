//! Движок ротации для бадминтона (парные матчи, "победитель остаётся").
//!
//! Правила:
//!   - ростер делится на отдыхающих и активных игроков;
//!   - активные случайно разбиваются на команды по 2;
//!   - победитель остаётся на корте, но после 2 побед подряд обязан уйти;
//!   - команда, проигравшая первой в серии, возвращается против новой команды из очереди;
//!   - когда очередь пуста — запускается новый раунд жеребьёвки.
//!
//! Основной объект: `engine::RotationEngine`.
//! Весь рандом идёт через `engine::RandomSource` (реализации в `infra::rng`).

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use crate::domain::{
    CourtIndex, CourtMatch, EngineConfig, PlayerName, PlayerStats, RestingPolicy, Side, Team,
};
pub use crate::engine::{EngineError, RandomSource, RotationEngine, RotationOutcome};
