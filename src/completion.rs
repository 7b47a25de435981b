// completion.rs

use rustyline::completion::{Completer, Pair};
use rustyline::{Helper, Context};
use rustyline::hint::Hinter;
use rustyline::highlight::Highlighter;
use rustyline::validate::{Validator, ValidationContext, ValidationResult};
use rustyline::error::ReadlineError;

use crate::menu::MenuOption;

/// Completes menu numbers at the option prompt and hints the label of the typed one.
pub struct MenuHelper;

impl MenuHelper {
    pub fn new() -> Self {
        Self
    }

    fn candidates(prefix: &str) -> Vec<Pair> {
        MenuOption::ALL
            .iter()
            .filter(|o| o.number().to_string().starts_with(prefix.trim()))
            .map(|o| Pair {
                display: o.entry(),
                replacement: o.number().to_string(),
            })
            .collect()
    }
}

impl Default for MenuHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Completer for MenuHelper {
    type Candidate = Pair;
    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Result<(usize, Vec<Pair>), ReadlineError> {
        Ok((0, Self::candidates(&line[..pos])))
    }
}

impl Hinter for MenuHelper {
    type Hint = String;
    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let n = line.trim().parse::<i64>().ok()?;
        MenuOption::from_number(n).map(|o| format!("  ({})", o.label()))
    }
}

impl Highlighter for MenuHelper {}

impl Validator for MenuHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> Result<ValidationResult, ReadlineError> {
        Ok(ValidationResult::Valid(None))
    }
}

impl Helper for MenuHelper {}
