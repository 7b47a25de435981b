use calculadora::config::{LogConfig, ShellConfig};
use calculadora::{logging, repl};

fn main() -> anyhow::Result<()> {
    logging::init(&LogConfig::from_env());
    repl::start_repl(ShellConfig::default())
}
