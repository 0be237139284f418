use serde::{Deserialize, Serialize};

use crate::domain::{PlayerName, Team};
use crate::engine::history::MatchRecord;
use crate::engine::RotationOutcome;

/// DTO команды: участники плюс готовая подпись "A & B".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamDto {
    pub members: [PlayerName; 2],
    pub label: String,
}

impl From<&Team> for TeamDto {
    fn from(team: &Team) -> Self {
        Self {
            members: team.members.clone(),
            label: team.to_string(),
        }
    }
}

/// DTO живого матча на корте.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchViewDto {
    pub court: usize,
    pub left: TeamDto,
    pub right: TeamDto,
}

/// DTO одного корта: матч, очередь, серия победителя.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourtViewDto {
    pub court: usize,
    pub current_match: Option<MatchViewDto>,
    pub queue: Vec<TeamDto>,
    pub streak_team: Option<TeamDto>,
    pub streak_count: u32,
}

/// Строка таблицы статистики.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlayerStatsDto {
    pub name: PlayerName,
    pub played: u32,
    pub win: u32,
    pub win_rate_percent: f32,
}

/// Запись журнала для фронта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchRecordDto {
    pub index: u32,
    pub court: usize,
    pub winner: TeamDto,
    pub loser: TeamDto,
}

impl From<&MatchRecord> for MatchRecordDto {
    fn from(r: &MatchRecord) -> Self {
        Self {
            index: r.index,
            court: r.court,
            winner: TeamDto::from(&r.winner),
            loser: TeamDto::from(&r.loser),
        }
    }
}

/// Полное состояние движка для отображения.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EngineStateDto {
    pub players: Vec<PlayerName>,
    pub court_count: usize,
    pub courts: Vec<CourtViewDto>,
    pub resting: Vec<PlayerName>,
    /// Отсортирована по (сыграно ↑, побед ↓) — как в таблице на фронте.
    pub stats: Vec<PlayerStatsDto>,
    pub history: Vec<MatchRecordDto>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum CommandResponse {
    /// Успешный результат без доп.данных.
    Ok,

    /// Обновлённое состояние после команды.
    State(EngineStateDto),

    /// Результат матча обработан: что случилось с кортом + новое состояние.
    ResultProcessed {
        outcome: RotationOutcome,
        state: EngineStateDto,
    },
}
