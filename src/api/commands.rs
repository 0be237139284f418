use serde::{Deserialize, Serialize};

use crate::api::dto::CommandResponse;
use crate::api::errors::ApiError;
use crate::api::queries::build_state_view;
use crate::domain::{CourtIndex, PlayerName, Side};
use crate::engine::{RandomSource, RotationEngine};

/// Команда верхнего уровня — всё, что меняет состояние сессии.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Задать ростер и обнулить сессию.
    Initialize(InitializeCommand),

    /// Запустить глобальную жеребьёвку по всем кортам.
    StartRound,

    /// Засчитать результат матча на корте.
    ReportResult(ReportResultCommand),

    /// Поменять число кортов (с пережеребьёвкой).
    SetCourtCount(SetCourtCountCommand),

    /// Вернуть отдыхающих в игру прямо сейчас.
    ReturnRestingToPlay,

    /// Полный сброс сессии.
    Reset,
}

/// Ростер сессии: уникальные имена, минимум 4.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InitializeCommand {
    pub players: Vec<PlayerName>,
}

/// Результат: какой корт и какая сторона победила.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReportResultCommand {
    pub court: CourtIndex,
    pub winning_side: Side,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SetCourtCountCommand {
    pub court_count: usize,
}

/// Применить команду к движку.
///
/// Единственная точка входа для мутаций через API: фронт/CLI собирает
/// `Command`, движок и RNG передаются владельцем состояния.
pub fn apply_command<R: RandomSource>(
    engine: &mut RotationEngine,
    rng: &mut R,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::Initialize(cmd) => {
            engine.initialize(cmd.players)?;
            Ok(CommandResponse::Ok)
        }
        Command::StartRound => {
            engine.start_round(rng);
            Ok(CommandResponse::State(build_state_view(engine)))
        }
        Command::ReportResult(cmd) => {
            let outcome = engine.report_result(cmd.court, cmd.winning_side, rng)?;
            Ok(CommandResponse::ResultProcessed {
                outcome,
                state: build_state_view(engine),
            })
        }
        Command::SetCourtCount(cmd) => {
            engine.set_court_count(cmd.court_count, rng)?;
            Ok(CommandResponse::State(build_state_view(engine)))
        }
        Command::ReturnRestingToPlay => {
            engine.return_resting_to_play(rng);
            Ok(CommandResponse::State(build_state_view(engine)))
        }
        Command::Reset => {
            engine.reset();
            Ok(CommandResponse::Ok)
        }
    }
}
