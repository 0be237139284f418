//! Инфраструктурный слой вокруг движка ротации:
//! - RNG-реализации для жеребьёвки;
//! - снапшоты состояния и абстракция хранилища (тесты, оффлайн-сервисы).

pub mod persistence;
pub mod rng;

pub use persistence::*;
pub use rng::*;
