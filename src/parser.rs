// parser.rs

use crate::error::InputError;
use crate::menu::MenuOption;

/// A leading `+` is accepted, as whole-number readers usually do.
pub fn parse_integer(token: &str) -> Result<i64, InputError> {
    token
        .trim()
        .parse::<i64>()
        .map_err(|_| InputError::NotAnInteger(token.trim().to_string()))
}

pub fn parse_choice(token: &str) -> Result<MenuOption, InputError> {
    let invalid = || InputError::InvalidOption(token.trim().to_string());
    let n = parse_integer(token).map_err(|_| invalid())?;
    MenuOption::from_number(n).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operation;

    #[test]
    fn parses_integers() {
        assert_eq!(parse_integer("42"), Ok(42));
        assert_eq!(parse_integer(" -7 "), Ok(-7));
        assert_eq!(parse_integer("+3"), Ok(3));
        assert_eq!(
            parse_integer("2.5"),
            Err(InputError::NotAnInteger("2.5".to_string()))
        );
        assert_eq!(
            parse_integer("diez"),
            Err(InputError::NotAnInteger("diez".to_string()))
        );
    }

    #[test]
    fn parses_choices() {
        assert_eq!(parse_choice("1"), Ok(MenuOption::Calculate(Operation::Add)));
        assert_eq!(parse_choice(" 5 "), Ok(MenuOption::Calculate(Operation::Power)));
        assert_eq!(parse_choice("8"), Ok(MenuOption::Exit));
        assert_eq!(parse_choice("9"), Err(InputError::InvalidOption("9".to_string())));
        assert_eq!(parse_choice("0"), Err(InputError::InvalidOption("0".to_string())));
        assert_eq!(parse_choice("x"), Err(InputError::InvalidOption("x".to_string())));
    }
}
