//! # Toroidal Life
//!
//! Conway's Game of Life on a finite two-dimensional grid with wrap-around
//! (toroidal) edges.
//!
//! The crate is the pure simulation engine: the cell model, the toroidal
//! neighbor counting and generation transition, and the mutation commands
//! (toggle, seed, resize, advance, speed and play state). Every operation
//! consumes one immutable [`Board`] snapshot and returns the next; the
//! caller holds the current board and decides when to replace it. Rendering
//! is somebody else's job — a terminal frontend ships in `main.rs`, and any
//! other collaborator only needs [`Board::iter_cells`] to paint and
//! [`Board::cell_at_pixel`] to translate clicks.
//!
//! ## Features
//!
//! * Toroidal grid with named size presets and custom dimensions
//! * Interactive cell editing and randomized seeding with injectable RNG
//! * Single-step advancement and scheduled playback at three speeds
//! * The evolved B3/S234 rule, with strict Conway (B3/S23) as a named
//!   variant

pub mod board;
pub mod cell;
pub mod error;
pub mod rule;
pub mod scheduler;

pub use board::{Board, SizePreset, Speed};
pub use cell::Cell;
pub use error::LifeError;
pub use rule::{next_cell_state, RuleVariant};
pub use scheduler::Playback;
