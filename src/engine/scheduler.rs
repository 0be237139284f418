//! Ядро ротации: глобальная жеребьёвка по кортам, локальное
//! перезаполнение корта и обработка результатов матчей.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{
    CourtIndex, CourtMatch, EngineConfig, PlayerName, PlayerStats, Side,
};
use crate::engine::court::CourtState;
use crate::engine::errors::EngineError;
use crate::engine::history::MatchHistory;
use crate::engine::pairing;
use crate::engine::RandomSource;

/// Что произошло с кортом после применения результата.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RotationOutcome {
    /// Победитель остался и встретит следующую команду из очереди.
    WinnerStays,
    /// Победитель упёрся в лимит серии и ушёл; на корт вернулся
    /// первый проигравший серии против команды из очереди.
    WinnerRotatedOut,
    /// Очередь исчерпана — корт пережеребьёван заново.
    NewRoundStarted,
}

/// Движок ротации. Владеет всем состоянием сессии; мутации только
/// через методы, вызывающая сторона сериализует доступ сама.
#[derive(Clone, Debug)]
pub struct RotationEngine {
    pub config: EngineConfig,
    /// Ростер в порядке ввода. Фиксируется на initialize.
    pub players: Vec<PlayerName>,
    pub stats: HashMap<PlayerName, PlayerStats>,
    pub courts: Vec<CourtState>,
    /// Отдыхающие в текущем раунде (глобально по сессии).
    pub resting: Vec<PlayerName>,
    pub history: MatchHistory,
}

impl RotationEngine {
    pub fn new(config: EngineConfig) -> Self {
        let courts = vec![CourtState::default(); config.court_count];
        Self {
            config,
            players: Vec::new(),
            stats: HashMap::new(),
            courts,
            resting: Vec::new(),
            history: MatchHistory::new(),
        }
    }

    /// Задать ростер сессии. Полностью обнуляет статистику, журнал,
    /// очереди и матчи. Состав после этого менять нельзя — только
    /// повторным initialize.
    pub fn initialize(&mut self, names: Vec<PlayerName>) -> Result<(), EngineError> {
        if names.len() < 4 {
            return Err(EngineError::RosterTooSmall(names.len()));
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(EngineError::DuplicateName(name.clone()));
            }
        }

        self.stats = names
            .iter()
            .map(|n| (n.clone(), PlayerStats::default()))
            .collect();
        self.players = names;
        self.courts = vec![CourtState::default(); self.config.court_count];
        self.resting.clear();
        self.history = MatchHistory::new();
        Ok(())
    }

    /// Глобальная жеребьёвка: отдыхающие, команды, рассадка по кортам,
    /// остаток — в очереди кортов.
    pub fn start_round<R: RandomSource>(&mut self, rng: &mut R) {
        self.plan_round(rng, &[]);
    }

    /// Применить результат матча на корте — центральная операция.
    ///
    /// Победитель остаётся, пока серия короче `win_streak_cap`; после
    /// этого уходит, а против свежей команды из очереди играет
    /// `first_loser` серии. Пустая очередь запускает локальный раунд.
    pub fn report_result<R: RandomSource>(
        &mut self,
        court: CourtIndex,
        side: Side,
        rng: &mut R,
    ) -> Result<RotationOutcome, EngineError> {
        if court >= self.courts.len() {
            return Err(EngineError::InvalidCourt(court));
        }
        let current = self.courts[court]
            .current_match
            .clone()
            .ok_or(EngineError::NoActiveMatch(court))?;

        if !current.is_consistent() {
            // Продолжение игры важнее строгого отказа: пересобираем корт.
            log::warn!("повреждённый матч на корте {court}, пересобираем раунд");
            self.refill_court(court, rng);
            return Err(EngineError::CorruptMatch(court));
        }

        let (winner, loser) = current.winner_loser(side);
        let (winner, loser) = (winner.clone(), loser.clone());

        self.history.push(winner.clone(), loser.clone(), court);
        for name in &winner.members {
            self.stats.entry(name.clone()).or_default().record(true);
        }
        for name in &loser.members {
            self.stats.entry(name.clone()).or_default().record(false);
        }

        let cap = self.config.win_streak_cap;
        let count = self.courts[court].streak.register_win(&winner, &loser);

        if count >= cap {
            // Лимит серии: победитель обязан уйти.
            let state = &mut self.courts[court];
            let first_loser = state.streak.first_loser.clone().unwrap_or(loser);
            match state.queue.pop_front() {
                Some(incoming) => {
                    log::debug!(
                        "корт {court}: {winner} уходит после {count} побед, возвращается {first_loser}"
                    );
                    state.seat(CourtMatch::new(first_loser, incoming));
                    state.streak.clear();
                    Ok(RotationOutcome::WinnerRotatedOut)
                }
                None => {
                    self.refill_court(court, rng);
                    Ok(RotationOutcome::NewRoundStarted)
                }
            }
        } else {
            let state = &mut self.courts[court];
            match state.queue.pop_front() {
                Some(incoming) => {
                    state.seat(CourtMatch::new(winner, incoming));
                    Ok(RotationOutcome::WinnerStays)
                }
                None => {
                    self.refill_court(court, rng);
                    Ok(RotationOutcome::NewRoundStarted)
                }
            }
        }
    }

    /// Полный сброс сессии (ростер, статистика, журнал).
    /// Конфигурация (число кортов, политика отдыха) сохраняется.
    pub fn reset(&mut self) {
        self.players.clear();
        self.stats.clear();
        self.courts = vec![CourtState::default(); self.config.court_count];
        self.resting.clear();
        self.history = MatchHistory::new();
    }

    /// Поменять число кортов и пережеребьевать сессию под него.
    /// При нехватке игроков лишние корты просто остаются пустыми.
    pub fn set_court_count<R: RandomSource>(
        &mut self,
        court_count: usize,
        rng: &mut R,
    ) -> Result<(), EngineError> {
        if court_count == 0 {
            return Err(EngineError::InvalidCourtCount(court_count));
        }
        self.config.court_count = court_count;
        if self.players.is_empty() {
            self.courts = vec![CourtState::default(); court_count];
        } else {
            self.plan_round(rng, &[]);
        }
        Ok(())
    }

    /// Ручной возврат отдыхающих в игру: новый глобальный раунд, в котором
    /// вернувшиеся не могут снова попасть в отдых (если чётность требует
    /// отдыхающего — сядет кто-то другой). Без отдыхающих — no-op.
    pub fn return_resting_to_play<R: RandomSource>(&mut self, rng: &mut R) {
        if self.resting.is_empty() {
            return;
        }
        let exempt = std::mem::take(&mut self.resting);
        self.plan_round(rng, &exempt);
    }

    /// Есть ли хоть один живой матч.
    pub fn has_live_match(&self) -> bool {
        self.courts.iter().any(|c| c.has_live_match())
    }

    // --- внутренняя кухня ---

    /// Глобальная жеребьёвка всего ростера по всем кортам.
    ///
    /// Эффективное число кортов — сколько реально можно заполнить
    /// (по 4 игрока на корт); остальные корты остаются пустыми.
    fn plan_round<R: RandomSource>(&mut self, rng: &mut R, exempt: &[PlayerName]) {
        let court_count = self.config.court_count;
        let carried_last: Vec<Option<CourtMatch>> = (0..court_count)
            .map(|i| self.courts.get(i).and_then(|c| c.last_match.clone()))
            .collect();
        self.courts = carried_last
            .iter()
            .map(|last| CourtState::with_last(last.clone()))
            .collect();
        self.resting.clear();

        let mut pool = self.players.clone();
        let effective = (pool.len() / 4).min(court_count);
        if effective == 0 {
            log::debug!("слишком мало игроков ({}), раунд не запущен", pool.len());
            return;
        }

        let needed = pool.len() % (2 * effective);
        let mut rested = pairing::select_resting(
            rng,
            &self.stats,
            &mut pool,
            needed,
            self.config.resting_policy,
            exempt,
        );
        self.resting.append(&mut rested);

        // Мягкая защита от повтора: пережеребьёвываем, пока хоть один корт
        // получает тот же матч, что в прошлый раз, но не дольше лимита попыток.
        let mut attempt = 0;
        let teams = loop {
            let teams = pairing::pair_teams(rng, &pool);
            let repeat = (0..effective).any(|i| {
                pairing::repeats_last(&teams[2 * i], &teams[2 * i + 1], carried_last[i].as_ref())
            });
            if !repeat || attempt >= self.config.anti_repeat_retries {
                break teams;
            }
            attempt += 1;
        };

        for (i, pair) in teams.chunks_exact(2).take(effective).enumerate() {
            let court = &mut self.courts[i];
            court.pool.extend(pair[0].members.iter().cloned());
            court.pool.extend(pair[1].members.iter().cloned());
            court.seat(CourtMatch::new(pair[0].clone(), pair[1].clone()));
        }
        for (k, team) in teams.into_iter().skip(2 * effective).enumerate() {
            let court = &mut self.courts[k % effective];
            court.pool.extend(team.members.iter().cloned());
            court.queue.push_back(team);
        }

        log::debug!(
            "раунд: {} кортов, отдыхают {:?}",
            effective,
            self.resting
        );
    }

    /// Локальный раунд одного корта: пул корта плюс все отдыхающие
    /// пережеребьёвываются заново; отдыхающие выбираются снова по политике.
    /// С одним кортом это в точности глобальный новый раунд.
    fn refill_court<R: RandomSource>(&mut self, court: CourtIndex, rng: &mut R) {
        let mut pool = std::mem::take(&mut self.courts[court].pool);
        pool.append(&mut self.resting);
        let last = self.courts[court].last_match.clone();

        if pool.len() < 4 {
            // Деградация: матч посадить нельзя, игроки ждут пополнения.
            let state = &mut self.courts[court];
            state.pool = pool;
            state.current_match = None;
            state.queue.clear();
            state.streak.clear();
            return;
        }

        let needed = pool.len() % 2;
        let mut rested = pairing::select_resting(
            rng,
            &self.stats,
            &mut pool,
            needed,
            self.config.resting_policy,
            &[],
        );
        self.resting.append(&mut rested);

        let mut attempt = 0;
        let teams = loop {
            let teams = pairing::pair_teams(rng, &pool);
            if !pairing::repeats_last(&teams[0], &teams[1], last.as_ref())
                || attempt >= self.config.anti_repeat_retries
            {
                break teams;
            }
            attempt += 1;
        };

        let state = &mut self.courts[court];
        state.pool = pool;
        state.streak.clear();
        state.seat(CourtMatch::new(teams[0].clone(), teams[1].clone()));
        state.queue = teams.into_iter().skip(2).collect();
    }
}
