//! Error types for exploration.

use std::io;

use crate::world::Direction;

/// A choice the explorer could not carry out. The player is told and the loop goes on.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MoveError {
    /// The current room has no branch that way.
    #[error("--- ERRO: Não há caminho {} neste cômodo! ---", .0.toward())]
    NoPath(Direction),

    /// Input that is not one of the known keys.
    #[error("--- ESCOLHA INVÁLIDA: Por favor, digite 'e', 'd' ou 's'. ---")]
    InvalidChoice(String),
}

/// Failures that end the program.
#[derive(Debug, thiserror::Error)]
pub enum ExploreError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ExploreError>;
