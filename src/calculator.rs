// calculator.rs

//! Arithmetic engine. Every successful operation leaves one formatted
//! entry in the session history; failed ones leave none.

use std::fmt;

use tracing::{debug, warn};

use crate::error::CalcError;
use crate::history::History;
use crate::util::format_decimal;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

/// Integer operations give whole numbers; division and power give floats.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Value {
    Int(i64),
    Float(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => f.write_str(&format_decimal(*x)),
        }
    }
}

/// Returned by [`Calculator::clear_history`] so the caller can confirm the clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cleared {
    pub removed: usize,
}

#[derive(Debug, Default)]
pub struct Calculator {
    history: History,
}

impl Calculator {
    pub fn new() -> Self {
        Self { history: History::new() }
    }

    /// Integer operations wrap on overflow instead of failing.
    pub fn add(&mut self, a: i64, b: i64) -> i64 {
        let result = a.wrapping_add(b);
        debug!(a, b, result, "add");
        self.history.add(format!("Suma: {} + {} = {}", a, b, result));
        result
    }

    pub fn subtract(&mut self, a: i64, b: i64) -> i64 {
        let result = a.wrapping_sub(b);
        debug!(a, b, result, "subtract");
        self.history.add(format!("Resta: {} - {} = {}", a, b, result));
        result
    }

    pub fn multiply(&mut self, a: i64, b: i64) -> i64 {
        let result = a.wrapping_mul(b);
        debug!(a, b, result, "multiply");
        self.history.add(format!("Multiplicación: {} * {} = {}", a, b, result));
        result
    }

    pub fn divide(&mut self, a: i64, b: i64) -> Result<f64, CalcError> {
        if b == 0 {
            warn!(a, "division by zero rejected");
            return Err(CalcError::DivisionByZero);
        }
        let result = a as f64 / b as f64;
        debug!(a, b, result, "divide");
        self.history
            .add(format!("División: {} / {} = {}", a, b, format_decimal(result)));
        Ok(result)
    }

    /// `base` raised to `exponent` through `f64::powf`, so `0^0` is `1.0` and overflow is infinite.
    pub fn power(&mut self, base: i64, exponent: i64) -> Result<f64, CalcError> {
        if exponent < 0 {
            warn!(base, exponent, "negative exponent rejected");
            return Err(CalcError::NegativeExponent);
        }
        let result = (base as f64).powf(exponent as f64);
        debug!(base, exponent, result, "power");
        self.history.add(format!(
            "Potencia: {} ^ {} = {}",
            base,
            exponent,
            format_decimal(result)
        ));
        Ok(result)
    }

    pub fn apply(&mut self, op: Operation, a: i64, b: i64) -> Result<Value, CalcError> {
        match op {
            Operation::Add => Ok(Value::Int(self.add(a, b))),
            Operation::Subtract => Ok(Value::Int(self.subtract(a, b))),
            Operation::Multiply => Ok(Value::Int(self.multiply(a, b))),
            Operation::Divide => self.divide(a, b).map(Value::Float),
            Operation::Power => self.power(a, b).map(Value::Float),
        }
    }

    pub fn view_history(&self) -> &[String] {
        self.history.all()
    }

    pub fn history_snapshot(&self) -> Vec<String> {
        self.history.all().to_vec()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn clear_history(&mut self) -> Cleared {
        Cleared { removed: self.history.clear() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_operations_record_entries() {
        let mut calc = Calculator::new();
        assert_eq!(calc.add(3, 4), 7);
        assert_eq!(calc.subtract(3, 10), -7);
        assert_eq!(calc.multiply(-6, 7), -42);
        assert_eq!(
            calc.view_history(),
            ["Suma: 3 + 4 = 7", "Resta: 3 - 10 = -7", "Multiplicación: -6 * 7 = -42"]
        );
    }

    #[test]
    fn integer_operations_wrap() {
        let mut calc = Calculator::new();
        assert_eq!(calc.add(i64::MAX, 1), i64::MIN);
        assert_eq!(calc.subtract(i64::MIN, 1), i64::MAX);
        assert_eq!(calc.multiply(i64::MAX, 2), -2);
        assert_eq!(calc.history_len(), 3);
    }

    #[test]
    fn divide_returns_float() {
        let mut calc = Calculator::new();
        assert_eq!(calc.divide(10, 4), Ok(2.5));
        assert_eq!(calc.divide(-9, 3), Ok(-3.0));
        assert_eq!(calc.view_history(), ["División: 10 / 4 = 2.5", "División: -9 / 3 = -3.0"]);
    }

    #[test]
    fn divide_by_zero_leaves_history_alone() {
        let mut calc = Calculator::new();
        calc.add(1, 1);
        for a in [0, 5, -5, i64::MAX] {
            assert_eq!(calc.divide(a, 0), Err(CalcError::DivisionByZero));
        }
        assert_eq!(calc.history_len(), 1);
    }

    #[test]
    fn power_returns_float() {
        let mut calc = Calculator::new();
        assert_eq!(calc.power(2, 10), Ok(1024.0));
        assert_eq!(calc.view_history(), ["Potencia: 2 ^ 10 = 1024.0"]);
    }

    #[test]
    fn power_follows_powf_edge_cases() {
        let mut calc = Calculator::new();
        assert_eq!(calc.power(0, 0), Ok(1.0));
        assert_eq!(calc.power(-2, 3), Ok(-8.0));
        assert_eq!(calc.power(10, 400), Ok(f64::INFINITY));
        assert_eq!(calc.view_history()[2], "Potencia: 10 ^ 400 = Infinity");
    }

    #[test]
    fn negative_exponent_leaves_history_alone() {
        let mut calc = Calculator::new();
        assert_eq!(calc.power(2, -1), Err(CalcError::NegativeExponent));
        assert!(calc.view_history().is_empty());
    }

    #[test]
    fn history_matches_call_order() {
        let mut calc = Calculator::new();
        calc.add(1, 2);
        calc.subtract(5, 3);
        assert_eq!(calc.view_history(), ["Suma: 1 + 2 = 3", "Resta: 5 - 3 = 2"]);
    }

    #[test]
    fn repeated_views_are_equal() {
        let mut calc = Calculator::new();
        calc.multiply(2, 3);
        let first = calc.history_snapshot();
        let second = calc.history_snapshot();
        assert_eq!(first, second);
        assert_eq!(calc.view_history(), calc.view_history());
    }

    #[test]
    fn snapshot_is_detached() {
        let mut calc = Calculator::new();
        calc.add(1, 1);
        let mut snapshot = calc.history_snapshot();
        snapshot.push("forged".to_string());
        snapshot[0].clear();
        assert_eq!(calc.view_history(), ["Suma: 1 + 1 = 2"]);
    }

    #[test]
    fn apply_dispatches_and_renders() {
        let mut calc = Calculator::new();
        assert_eq!(calc.apply(Operation::Add, 2, 2), Ok(Value::Int(4)));
        assert_eq!(calc.apply(Operation::Divide, 1, 4).unwrap().to_string(), "0.25");
        assert_eq!(calc.apply(Operation::Power, 3, 3).unwrap().to_string(), "27.0");
        assert_eq!(calc.apply(Operation::Subtract, 0, 9).unwrap().to_string(), "-9");
        assert_eq!(calc.apply(Operation::Divide, 1, 0), Err(CalcError::DivisionByZero));
        assert_eq!(calc.history_len(), 4);
    }

    #[test]
    fn clear_empties_history() {
        let mut calc = Calculator::new();
        assert_eq!(calc.clear_history(), Cleared { removed: 0 });
        calc.add(1, 2);
        calc.power(3, 2).unwrap();
        assert_eq!(calc.clear_history(), Cleared { removed: 2 });
        assert!(calc.view_history().is_empty());
        calc.add(4, 4);
        assert_eq!(calc.view_history(), ["Suma: 4 + 4 = 8"]);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn expected_entry(op: u8, a: i64, b: i64) -> String {
            match op {
                0 => format!("Suma: {} + {} = {}", a, b, a.wrapping_add(b)),
                1 => format!("Resta: {} - {} = {}", a, b, a.wrapping_sub(b)),
                _ => format!("Multiplicación: {} * {} = {}", a, b, a.wrapping_mul(b)),
            }
        }

        fn run(calc: &mut Calculator, op: u8, a: i64, b: i64) -> i64 {
            match op {
                0 => calc.add(a, b),
                1 => calc.subtract(a, b),
                _ => calc.multiply(a, b),
            }
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(256))]

            #[test]
            fn integer_ops_append_one_entry(op in 0u8..3, a in any::<i64>(), b in any::<i64>()) {
                let mut calc = Calculator::new();
                let expected = match op {
                    0 => a.wrapping_add(b),
                    1 => a.wrapping_sub(b),
                    _ => a.wrapping_mul(b),
                };
                prop_assert_eq!(run(&mut calc, op, a, b), expected);
                prop_assert_eq!(calc.history_snapshot(), vec![expected_entry(op, a, b)]);
            }

            #[test]
            fn divide_by_zero_never_records(a in any::<i64>(), prior in 0usize..5) {
                let mut calc = Calculator::new();
                for i in 0..prior {
                    calc.add(i as i64, 1);
                }
                prop_assert_eq!(calc.divide(a, 0), Err(CalcError::DivisionByZero));
                prop_assert_eq!(calc.history_len(), prior);
            }

            #[test]
            fn negative_exponent_never_records(base in any::<i64>(), exponent in i64::MIN..0, prior in 0usize..5) {
                let mut calc = Calculator::new();
                for i in 0..prior {
                    calc.multiply(i as i64, 2);
                }
                prop_assert_eq!(calc.power(base, exponent), Err(CalcError::NegativeExponent));
                prop_assert_eq!(calc.history_len(), prior);
            }

            #[test]
            fn history_follows_call_order(calls in prop::collection::vec((0u8..3, any::<i64>(), any::<i64>()), 0..32)) {
                let mut calc = Calculator::new();
                for &(op, a, b) in &calls {
                    run(&mut calc, op, a, b);
                }
                let expected: Vec<String> = calls.iter().map(|&(op, a, b)| expected_entry(op, a, b)).collect();
                prop_assert_eq!(calc.view_history().len(), calls.len());
                prop_assert_eq!(calc.history_snapshot(), expected);
            }
        }
    }
}
