#![deny(clippy::pedantic)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc
)]

pub mod assets;
pub mod canvas;
pub mod clock;
pub mod config;
pub mod enemies;
pub mod game;
pub mod hero;
pub mod input;
pub mod starfield;

pub use config::GameConfig;
pub use game::SpaceWars;
