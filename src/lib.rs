//! Real-time snake on a walled terminal grid.
//!
//! The simulation core ([`game`], [`snake`], [`collision`], [`food`], [`grid`])
//! is terminal-agnostic; [`renderer`], [`input`] and [`terminal_runtime`] are
//! the thin crossterm/ratatui layer around it.

pub mod collision;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
