use serde::{Deserialize, Serialize};

use crate::api::dto::{
    CourtViewDto, EngineStateDto, MatchRecordDto, MatchViewDto, PlayerStatsDto, TeamDto,
};
use crate::engine::RotationEngine;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Полное состояние (матчи, очереди, отдыхающие, статистика, журнал).
    GetState,

    /// Только журнал результатов.
    GetHistory,

    /// Только таблица статистики.
    GetStats,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum QueryResponse {
    State(EngineStateDto),
    History(Vec<MatchRecordDto>),
    Stats(Vec<PlayerStatsDto>),
}

pub fn answer_query(engine: &RotationEngine, query: Query) -> QueryResponse {
    match query {
        Query::GetState => QueryResponse::State(build_state_view(engine)),
        Query::GetHistory => QueryResponse::History(build_history_view(engine)),
        Query::GetStats => QueryResponse::Stats(build_stats_view(engine)),
    }
}

/// Сформировать полный DTO состояния движка.
pub fn build_state_view(engine: &RotationEngine) -> EngineStateDto {
    let courts = engine
        .courts
        .iter()
        .enumerate()
        .map(|(i, c)| CourtViewDto {
            court: i,
            current_match: c.current_match.as_ref().map(|m| MatchViewDto {
                court: i,
                left: TeamDto::from(&m.left),
                right: TeamDto::from(&m.right),
            }),
            queue: c.queue.iter().map(TeamDto::from).collect(),
            streak_team: c.streak.team.as_ref().map(TeamDto::from),
            streak_count: c.streak.count,
        })
        .collect();

    EngineStateDto {
        players: engine.players.clone(),
        court_count: engine.config.court_count,
        courts,
        resting: engine.resting.clone(),
        stats: build_stats_view(engine),
        history: build_history_view(engine),
    }
}

/// Таблица статистики, отсортированная как на фронте:
/// меньше сыграно — выше, при равенстве больше побед — выше.
pub fn build_stats_view(engine: &RotationEngine) -> Vec<PlayerStatsDto> {
    let mut rows: Vec<PlayerStatsDto> = engine
        .players
        .iter()
        .map(|name| {
            let stats = engine.stats.get(name).copied().unwrap_or_default();
            PlayerStatsDto {
                name: name.clone(),
                played: stats.played,
                win: stats.win,
                win_rate_percent: stats.win_rate_percent(),
            }
        })
        .collect();
    rows.sort_by(|a, b| a.played.cmp(&b.played).then(b.win.cmp(&a.win)));
    rows
}

pub fn build_history_view(engine: &RotationEngine) -> Vec<MatchRecordDto> {
    engine.history.records.iter().map(MatchRecordDto::from).collect()
}
