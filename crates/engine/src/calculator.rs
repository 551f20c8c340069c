//! The module contains the calculator engine: a small state machine over an
//! accumulator, a pending operator and the display string.

/// Maximum display length while typing digits.
pub const DISPLAY_LIMIT: usize = 12;

/// The display text shown after a divide by zero.
pub const ERROR_MARKER: &str = "Error";

/// A binary operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }
}

/// One calculator input.
///
/// This is the closed set of symbols the engine understands; the front end
/// maps whatever buttons or key presses it has onto these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    SignChange,
    Percent,
}

/// The calculator engine.
///
/// State is the accumulator (result of the last completed operation), the
/// pending operator (`None` meaning "equals": the next commit passes the
/// operand through), a flag telling whether the next digit starts a fresh
/// operand, and the display text.
///
/// Invariant: the display always parses as a finite decimal number, or is
/// exactly [`ERROR_MARKER`], never both.
#[derive(Debug, Clone)]
pub struct Calculator {
    accumulator: f64,
    pending: Option<Operator>,
    awaiting_operand: bool,
    display: String,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            accumulator: 0.0,
            pending: None,
            awaiting_operand: true,
            display: "0".to_string(),
        }
    }

    /// Dispatches one input to the matching handler.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(digit) => self.handle_digit(digit),
            Key::Decimal => self.handle_decimal(),
            Key::Operator(op) => self.handle_operator(op),
            Key::Equals => self.handle_equals(),
            Key::Clear => self.handle_clear(),
            Key::SignChange => self.handle_sign_change(),
            Key::Percent => self.handle_percent(),
        }
    }

    /// The text currently shown.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns `true` while the display holds the divide-by-zero marker.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_MARKER
    }

    /// The operator queued for the next commit (`None` meaning "equals").
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending
    }

    pub fn handle_digit(&mut self, digit: u8) {
        if digit > 9 {
            return;
        }
        let ch = char::from(b'0' + digit);
        if self.awaiting_operand {
            self.display.clear();
            self.display.push(ch);
            self.awaiting_operand = false;
        } else if self.display.len() < DISPLAY_LIMIT {
            // A lone leading zero is replaced, not extended.
            if self.display == "0" {
                self.display.clear();
            }
            self.display.push(ch);
        }
    }

    pub fn handle_decimal(&mut self) {
        if self.awaiting_operand {
            self.display = "0.".to_string();
            self.awaiting_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Queues `op`, committing the current entry first when one is open.
    ///
    /// Consecutive operator presses without an intervening digit do not
    /// re-apply; the pending operator is simply replaced.
    pub fn handle_operator(&mut self, op: Operator) {
        if (!self.awaiting_operand || self.pending.is_none()) && !self.commit() {
            return;
        }
        self.pending = Some(op);
        self.awaiting_operand = true;
    }

    pub fn handle_equals(&mut self) {
        if !self.commit() {
            return;
        }
        self.pending = None;
        self.awaiting_operand = true;
    }

    pub fn handle_clear(&mut self) {
        self.accumulator = 0.0;
        self.pending = None;
        self.awaiting_operand = true;
        self.display = "0".to_string();
    }

    /// Negates the displayed value. No-op while the error marker is shown;
    /// accumulator, pending operator and operand flag are untouched.
    pub fn handle_sign_change(&mut self) {
        if let Ok(value) = self.display.parse::<f64>() {
            self.display = render(-value);
        }
    }

    /// Divides the displayed value by 100. No-op while the error marker is
    /// shown.
    pub fn handle_percent(&mut self) {
        if let Ok(value) = self.display.parse::<f64>() {
            self.display = render(value / 100.0);
        }
    }

    /// Applies the pending operator between accumulator and operand.
    ///
    /// Returns `false` when the cycle must be abandoned: divide by zero
    /// (which enters the error state) or a display that does not parse
    /// (only the error marker itself, by the display invariant).
    fn commit(&mut self) -> bool {
        let Ok(operand) = self.display.parse::<f64>() else {
            return false;
        };

        match self.pending {
            None => self.accumulator = operand,
            Some(Operator::Add) => self.accumulator += operand,
            Some(Operator::Subtract) => self.accumulator -= operand,
            Some(Operator::Multiply) => self.accumulator *= operand,
            Some(Operator::Divide) => {
                if operand == 0.0 {
                    self.enter_error_state();
                    return false;
                }
                self.accumulator /= operand;
            }
        }

        self.display = render(self.accumulator);
        true
    }

    fn enter_error_state(&mut self) {
        self.display = ERROR_MARKER.to_string();
        self.accumulator = 0.0;
        self.pending = None;
        // Re-armed so the next digit replaces the marker instead of
        // appending to it.
        self.awaiting_operand = true;
    }
}

/// Renders a value for the display.
///
/// Integral values within ±10^12 print with no decimal places; everything
/// else uses the default `f64` representation, so re-parsing the display
/// reproduces the value up to floating-point precision.
fn render(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e12 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(calc: &mut Calculator, keys: &[Key]) {
        for key in keys {
            calc.press(*key);
        }
    }

    #[test]
    fn starts_at_zero() {
        let calc = Calculator::new();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.pending_operator(), None);
        assert!(!calc.is_error());
    }

    #[test]
    fn digit_entry_appends_and_caps_at_limit() {
        let mut calc = Calculator::new();
        for _ in 0..20 {
            calc.press(Key::Digit(7));
        }
        assert_eq!(calc.display().len(), DISPLAY_LIMIT);
        assert_eq!(calc.display(), "7".repeat(DISPLAY_LIMIT));
    }

    #[test]
    fn leading_zero_is_replaced() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &[Key::Digit(0), Key::Digit(0), Key::Digit(5)]);
        assert_eq!(calc.display(), "5");
    }

    #[test]
    fn decimal_on_fresh_operand_yields_zero_dot() {
        let mut calc = Calculator::new();
        calc.press(Key::Decimal);
        assert_eq!(calc.display(), "0.");
        press_all(&mut calc, &[Key::Digit(2), Key::Decimal, Key::Digit(5)]);
        assert_eq!(calc.display(), "0.25");
    }

    #[test]
    fn second_decimal_point_is_ignored() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &[Key::Digit(1), Key::Decimal, Key::Digit(5)]);
        calc.press(Key::Decimal);
        calc.press(Key::Digit(5));
        assert_eq!(calc.display(), "1.55");
    }

    #[test]
    fn five_plus_three_equals_eight() {
        let mut calc = Calculator::new();
        press_all(
            &mut calc,
            &[
                Key::Digit(5),
                Key::Operator(Operator::Add),
                Key::Digit(3),
                Key::Equals,
            ],
        );
        assert_eq!(calc.display(), "8");
    }

    #[test]
    fn fractional_addition() {
        let mut calc = Calculator::new();
        press_all(
            &mut calc,
            &[
                Key::Digit(1),
                Key::Decimal,
                Key::Digit(5),
                Key::Operator(Operator::Add),
                Key::Digit(2),
                Key::Decimal,
                Key::Digit(2),
                Key::Digit(5),
                Key::Equals,
            ],
        );
        assert_eq!(calc.display(), "3.75");
    }

    #[test]
    fn consecutive_operators_replace_pending() {
        let mut calc = Calculator::new();
        press_all(
            &mut calc,
            &[
                Key::Digit(4),
                Key::Operator(Operator::Add),
                Key::Operator(Operator::Multiply),
                Key::Digit(2),
                Key::Equals,
            ],
        );
        assert_eq!(calc.display(), "8");
    }

    #[test]
    fn equals_chains_on_previous_result() {
        let mut calc = Calculator::new();
        press_all(
            &mut calc,
            &[
                Key::Digit(6),
                Key::Operator(Operator::Multiply),
                Key::Digit(7),
                Key::Equals,
                Key::Operator(Operator::Subtract),
                Key::Digit(2),
                Key::Equals,
            ],
        );
        assert_eq!(calc.display(), "40");
    }

    #[test]
    fn non_integral_result_keeps_decimals() {
        let mut calc = Calculator::new();
        press_all(
            &mut calc,
            &[
                Key::Digit(7),
                Key::Operator(Operator::Divide),
                Key::Digit(2),
                Key::Equals,
            ],
        );
        assert_eq!(calc.display(), "3.5");
    }

    #[test]
    fn divide_by_zero_enters_error_state() {
        let mut calc = Calculator::new();
        press_all(
            &mut calc,
            &[
                Key::Digit(6),
                Key::Operator(Operator::Divide),
                Key::Digit(0),
                Key::Equals,
            ],
        );
        assert!(calc.is_error());
        assert_eq!(calc.display(), ERROR_MARKER);
        assert_eq!(calc.accumulator, 0.0);
        assert_eq!(calc.pending_operator(), None);
    }

    #[test]
    fn digit_after_error_starts_fresh() {
        let mut calc = Calculator::new();
        press_all(
            &mut calc,
            &[
                Key::Digit(6),
                Key::Operator(Operator::Divide),
                Key::Digit(0),
                Key::Equals,
                Key::Digit(9),
            ],
        );
        assert_eq!(calc.display(), "9");
        assert!(!calc.is_error());
    }

    #[test]
    fn sign_and_percent_are_noops_on_error() {
        let mut calc = Calculator::new();
        press_all(
            &mut calc,
            &[
                Key::Digit(1),
                Key::Operator(Operator::Divide),
                Key::Digit(0),
                Key::Equals,
            ],
        );
        calc.press(Key::SignChange);
        assert_eq!(calc.display(), ERROR_MARKER);
        calc.press(Key::Percent);
        assert_eq!(calc.display(), ERROR_MARKER);
    }

    #[test]
    fn equals_on_error_is_a_noop() {
        let mut calc = Calculator::new();
        press_all(
            &mut calc,
            &[
                Key::Digit(1),
                Key::Operator(Operator::Divide),
                Key::Digit(0),
                Key::Equals,
            ],
        );
        calc.press(Key::Equals);
        assert_eq!(calc.display(), ERROR_MARKER);
        assert_eq!(calc.pending_operator(), None);
    }

    #[test]
    fn clear_resets_from_any_state() {
        let mut calc = Calculator::new();
        press_all(
            &mut calc,
            &[
                Key::Digit(9),
                Key::Operator(Operator::Divide),
                Key::Digit(0),
                Key::Equals,
                Key::Clear,
            ],
        );
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.pending_operator(), None);
        assert_eq!(calc.accumulator, 0.0);

        press_all(&mut calc, &[Key::Digit(3), Key::Operator(Operator::Add)]);
        calc.press(Key::Clear);
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.pending_operator(), None);
    }

    #[test]
    fn sign_change_negates_display_only() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &[Key::Digit(4), Key::Digit(2)]);
        calc.press(Key::SignChange);
        assert_eq!(calc.display(), "-42");
        calc.press(Key::SignChange);
        assert_eq!(calc.display(), "42");
        assert_eq!(calc.pending_operator(), None);
    }

    #[test]
    fn percent_divides_display_by_hundred() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &[Key::Digit(5), Key::Digit(0)]);
        calc.press(Key::Percent);
        assert_eq!(calc.display(), "0.5");
    }

    #[test]
    fn render_integral_within_bound_has_no_decimals() {
        assert_eq!(render(8.0), "8");
        assert_eq!(render(-3.0), "-3");
        assert_eq!(render(3.5), "3.5");
        assert_eq!(render(999_999_999_999.0), "999999999999");
        assert_eq!(render(1e12), "1000000000000");
    }

    #[test]
    fn first_operator_press_seeds_accumulator() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &[Key::Digit(5), Key::Operator(Operator::Add)]);
        assert_eq!(calc.accumulator, 5.0);
        assert_eq!(calc.display(), "5");
        assert_eq!(calc.pending_operator(), Some(Operator::Add));
    }
}
