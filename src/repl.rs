// repl.rs

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tracing::{info, warn};

use crate::calculator::{Calculator, Operation};
use crate::completion::MenuHelper;
use crate::config::ShellConfig;
use crate::error::InputError;
use crate::menu::{operand_prompts, render_menu, MenuOption, CHOICE_PROMPT};
use crate::parser::{parse_choice, parse_integer};
use crate::util::writeln_ignore_broken_pipe;

const HISTORY_HEADER: &str = "Historial de operaciones:";
const CLEARED: &str = "El historial ha sido limpiado.";
const FAREWELL: &str = "Saliendo...";

/// Source of console lines. Prompt display is the reader's job.
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> rustyline::Result<String>;
}

impl<H: rustyline::Helper> LineReader for Editor<H, DefaultHistory> {
    fn read_line(&mut self, prompt: &str) -> rustyline::Result<String> {
        let line = self.readline(prompt)?;
        let _ = self.add_history_entry(line.as_str());
        Ok(line)
    }
}

enum Prompted<T> {
    Value(T),
    Rejected(InputError),
    Closed,
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Shell<R, W> {
    reader: R,
    out: W,
    calculator: Calculator,
    config: ShellConfig,
}

impl<R: LineReader, W: std::io::Write> Shell<R, W> {
    pub fn new(reader: R, out: W, calculator: Calculator, config: ShellConfig) -> Self {
        Self { reader, out, calculator, config }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Runs the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        info!("session started");
        let mut show_menu = true;
        loop {
            if show_menu {
                say(&mut self.out, render_menu())?;
            }
            show_menu = self.config.show_menu_each_time;
            let token = match self.read_token(CHOICE_PROMPT)? {
                Some(token) => token,
                None => {
                    say(&mut self.out, FAREWELL)?;
                    break;
                }
            };
            let option = match parse_choice(&token) {
                Ok(option) => option,
                Err(err) => {
                    warn!(input = token.as_str(), "invalid menu option");
                    say(&mut self.out, err.to_string())?;
                    show_menu = true;
                    continue;
                }
            };
            if self.dispatch(option)? == Flow::Exit {
                break;
            }
        }
        info!(entries = self.calculator.history_len(), "session ended");
        Ok(())
    }

    fn dispatch(&mut self, option: MenuOption) -> Result<Flow> {
        match option {
            MenuOption::Calculate(op) => return self.calculate(op),
            MenuOption::ViewHistory => {
                say(&mut self.out, HISTORY_HEADER)?;
                for entry in self.calculator.view_history() {
                    say(&mut self.out, entry)?;
                }
            }
            MenuOption::ClearHistory => {
                let cleared = self.calculator.clear_history();
                info!(removed = cleared.removed, "history cleared");
                say(&mut self.out, CLEARED)?;
            }
            MenuOption::Exit => {
                say(&mut self.out, FAREWELL)?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn calculate(&mut self, op: Operation) -> Result<Flow> {
        let (first_prompt, second_prompt) = operand_prompts(op);
        let mut operands = [0i64; 2];
        for (slot, prompt) in operands.iter_mut().zip([first_prompt, second_prompt]) {
            match self.read_integer(prompt)? {
                Prompted::Value(n) => *slot = n,
                Prompted::Rejected(err) => {
                    warn!(error = %err, "operand rejected");
                    say(&mut self.out, err.to_string())?;
                    return Ok(Flow::Continue);
                }
                Prompted::Closed => {
                    say(&mut self.out, FAREWELL)?;
                    return Ok(Flow::Exit);
                }
            }
        }
        let [a, b] = operands;
        match self.calculator.apply(op, a, b) {
            Ok(value) => say(&mut self.out, format!("Resultado: {}", value))?,
            Err(err) => say(&mut self.out, err.to_string())?,
        }
        Ok(Flow::Continue)
    }

    fn read_integer(&mut self, prompt: &str) -> Result<Prompted<i64>> {
        Ok(match self.read_token(prompt)? {
            Some(token) => match parse_integer(&token) {
                Ok(n) => Prompted::Value(n),
                Err(err) => Prompted::Rejected(err),
            },
            None => Prompted::Closed,
        })
    }

    /// Next non-blank line, trimmed. `None` once the input is closed or interrupted.
    fn read_token(&mut self, prompt: &str) -> Result<Option<String>> {
        loop {
            match self.reader.read_line(prompt) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    return Ok(Some(trimmed.to_string()));
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(None),
                Err(err) => return Err(err).context("failed to read from the console"),
            }
        }
    }
}

fn say<W: std::io::Write, S: AsRef<str>>(out: &mut W, s: S) -> Result<()> {
    writeln_ignore_broken_pipe(out, s).context("failed to write to stdout")
}

pub fn start_repl(config: ShellConfig) -> Result<()> {
    let editor_config = config.editor_config().context("invalid line editor settings")?;
    let mut rl: Editor<MenuHelper, DefaultHistory> =
        Editor::with_config(editor_config).context("failed to create line editor")?;
    rl.set_helper(Some(MenuHelper::new()));
    let mut shell = Shell::new(rl, std::io::stdout(), Calculator::new(), config);
    shell.run()
}
