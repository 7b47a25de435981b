// menu.rs

use itertools::Itertools;

use crate::calculator::Operation;

pub const TITLE: &str = "=== Calculadora Avanzada ===";
pub const CHOICE_PROMPT: &str = "Seleccione una opción: ";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuOption {
    Calculate(Operation),
    ViewHistory,
    ClearHistory,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 8] = [
        MenuOption::Calculate(Operation::Add),
        MenuOption::Calculate(Operation::Subtract),
        MenuOption::Calculate(Operation::Multiply),
        MenuOption::Calculate(Operation::Divide),
        MenuOption::Calculate(Operation::Power),
        MenuOption::ViewHistory,
        MenuOption::ClearHistory,
        MenuOption::Exit,
    ];

    pub fn number(self) -> i64 {
        match self {
            MenuOption::Calculate(Operation::Add) => 1,
            MenuOption::Calculate(Operation::Subtract) => 2,
            MenuOption::Calculate(Operation::Multiply) => 3,
            MenuOption::Calculate(Operation::Divide) => 4,
            MenuOption::Calculate(Operation::Power) => 5,
            MenuOption::ViewHistory => 6,
            MenuOption::ClearHistory => 7,
            MenuOption::Exit => 8,
        }
    }

    pub fn from_number(n: i64) -> Option<MenuOption> {
        Self::ALL.into_iter().find(|o| o.number() == n)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Calculate(Operation::Add) => "Sumar",
            MenuOption::Calculate(Operation::Subtract) => "Restar",
            MenuOption::Calculate(Operation::Multiply) => "Multiplicar",
            MenuOption::Calculate(Operation::Divide) => "Dividir",
            MenuOption::Calculate(Operation::Power) => "Potencia",
            MenuOption::ViewHistory => "Ver historial",
            MenuOption::ClearHistory => "Limpiar historial",
            MenuOption::Exit => "Salir",
        }
    }

    pub fn entry(self) -> String {
        format!("{}. {}", self.number(), self.label())
    }
}

pub fn operand_prompts(op: Operation) -> (&'static str, &'static str) {
    match op {
        Operation::Power => ("Ingrese la base: ", "Ingrese el exponente: "),
        Operation::Add | Operation::Subtract | Operation::Multiply | Operation::Divide => {
            ("Ingrese el primer número: ", "Ingrese el segundo número: ")
        }
    }
}

/// Title line followed by one line per option.
pub fn render_menu() -> String {
    std::iter::once(TITLE.to_string())
        .chain(MenuOption::ALL.iter().map(|o| o.entry()))
        .join("\n")
}
