// error.rs

use thiserror::Error;

/// Recoverable failures of an arithmetic operation. Neither one touches the history.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    #[error("No se puede dividir por cero.")]
    DivisionByZero,

    #[error("El exponente no puede ser negativo.")]
    NegativeExponent,
}

/// Bad console input. The shell reports it and shows the menu again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Opción no válida. Intente de nuevo.")]
    InvalidOption(String),

    #[error("Entrada no válida: '{0}' no es un número entero.")]
    NotAnInteger(String),
}
