//! Touchpong: a two-paddle ball game whose paddles are steered by drag
//! gestures, played in the terminal with the mouse standing in for a finger.

pub mod cli;
pub mod config;
pub mod control;
pub mod debug;
pub mod frame;
pub mod game;
pub mod session;
pub mod ui;
