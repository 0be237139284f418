use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{EngineConfig, PlayerName, PlayerStats};
use crate::engine::court::CourtState;
use crate::engine::history::MatchHistory;
use crate::engine::RotationEngine;

/// Идентификатор сессии в хранилище.
pub type SessionId = u64;

/// «Замороженная» сессия: всё, что нужно, чтобы восстановить RotationEngine.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineSnapshot {
    pub config: EngineConfig,
    pub players: Vec<PlayerName>,
    pub stats: HashMap<PlayerName, PlayerStats>,
    pub courts: Vec<CourtState>,
    pub resting: Vec<PlayerName>,
    pub history: MatchHistory,
}

impl EngineSnapshot {
    /// Упаковать живой движок в снапшот.
    pub fn from_engine(engine: &RotationEngine) -> Self {
        Self {
            config: engine.config.clone(),
            players: engine.players.clone(),
            stats: engine.stats.clone(),
            courts: engine.courts.clone(),
            resting: engine.resting.clone(),
            history: engine.history.clone(),
        }
    }

    /// Развернуть снапшот обратно в движок (в памяти).
    pub fn into_engine(self) -> RotationEngine {
        RotationEngine {
            config: self.config,
            players: self.players,
            stats: self.stats,
            courts: self.courts,
            resting: self.resting,
            history: self.history,
        }
    }
}

/// Абстракция хранилища сессий.
///
/// Движок живёт в памяти (персистентность между перезапусками — не цель),
/// но абстракция удобна для тестов и оффлайн-сервисов поверх движка.
pub trait RotationStorage {
    fn load_session(&self, id: SessionId) -> Option<EngineSnapshot>;

    fn save_session(&mut self, id: SessionId, snapshot: &EngineSnapshot);

    fn clear_session(&mut self, id: SessionId);
}

/// Простая in-memory реализация для тестов и локального запуска.
#[derive(Debug, Default)]
pub struct InMemoryRotationStorage {
    sessions: HashMap<SessionId, EngineSnapshot>,
}

impl InMemoryRotationStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RotationStorage for InMemoryRotationStorage {
    fn load_session(&self, id: SessionId) -> Option<EngineSnapshot> {
        self.sessions.get(&id).cloned()
    }

    fn save_session(&mut self, id: SessionId, snapshot: &EngineSnapshot) {
        self.sessions.insert(id, snapshot.clone());
    }

    fn clear_session(&mut self, id: SessionId) {
        self.sessions.remove(&id);
    }
}
