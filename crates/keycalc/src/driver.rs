//! Driver boundary between a presentation layer and a session
//!
//! Front ends (and tests) talk to the calculator only through
//! [`CalculatorDriver`]: keypad tokens in, strings out. The `verify_*`
//! scenarios below are written once against the trait and can be run
//! against any implementation.

use crate::core::history::HistoryEntry;
use crate::core::{CalcResult, ERROR_TEXT};
use crate::session::Session;

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Presses a single keypad token (`"0"`-`"9"`, `"+"`, `"-"`, `"*"`, `"/"`, `"C"`, `"="`)
    fn press(&mut self, token: &str) -> CalcResult<()>;

    /// Toggles the light/dark theme
    fn toggle_theme(&mut self);

    /// Gets the current input expression
    fn input(&self) -> String;

    /// Gets the current result display
    fn result(&self) -> String;

    /// Gets history entries (oldest first)
    fn history(&self) -> Vec<HistoryEntry>;

    /// Returns true when the dark theme is active
    fn is_dark(&self) -> bool;

    /// Presses every token in order, stopping at the first rejected one
    fn press_all(&mut self, tokens: &[&str]) -> CalcResult<()> {
        tokens.iter().try_for_each(|token| self.press(token))
    }

    /// Presses each character of `keys` as its own token
    fn type_keys(&mut self, keys: &str) -> CalcResult<()> {
        keys.chars().try_for_each(|ch| self.press(ch.encode_utf8(&mut [0; 4])))
    }
}

impl CalculatorDriver for Session {
    fn press(&mut self, token: &str) -> CalcResult<()> {
        self.on_button_press(token)
    }

    fn toggle_theme(&mut self) {
        self.on_theme_toggle();
    }

    fn input(&self) -> String {
        Session::input(self).to_string()
    }

    fn result(&self) -> String {
        Session::result(self).to_string()
    }

    fn history(&self) -> Vec<HistoryEntry> {
        Session::history(self).all().to_vec()
    }

    fn is_dark(&self) -> bool {
        self.theme().is_dark()
    }
}

// ===== Driver scenarios =====
// These work with ANY CalculatorDriver implementation

/// Verifies the four operations and precedence
#[allow(clippy::unwrap_used)]
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    for (keys, expected) in [
        ("2+3=", "5"),
        ("10-4=", "6"),
        ("6*7=", "42"),
        ("20/8=", "2.5"),
        ("2+3*4=", "14"),
    ] {
        driver.press("C").unwrap();
        driver.type_keys(keys).unwrap();
        assert_eq!(driver.result(), expected, "{keys}");
    }
    driver.press("C").unwrap();
}

/// Verifies that consecutive operators collapse to the last one pressed
#[allow(clippy::unwrap_used)]
pub fn verify_operator_collapse<D: CalculatorDriver>(driver: &mut D) {
    driver.press("C").unwrap();
    driver.type_keys("9+-*").unwrap();
    assert_eq!(driver.input(), "9*");
    driver.type_keys("3=").unwrap();
    assert_eq!(driver.result(), "27");
    driver.press("C").unwrap();
}

/// Verifies that failed evaluations show the error text and record nothing
#[allow(clippy::unwrap_used)]
pub fn verify_error_handling<D: CalculatorDriver>(driver: &mut D) {
    driver.press("C").unwrap();
    let before = driver.history().len();

    driver.type_keys("6/0=").unwrap();
    assert_eq!(driver.result(), ERROR_TEXT);
    assert_eq!(driver.input(), "6/0");

    driver.press("C").unwrap();
    driver.press("=").unwrap();
    assert_eq!(driver.result(), ERROR_TEXT);

    assert_eq!(driver.history().len(), before);
    driver.press("C").unwrap();
}

/// Verifies the keypad walkthrough: a result, a clear, then an error
#[allow(clippy::unwrap_used)]
pub fn verify_history<D: CalculatorDriver>(driver: &mut D) {
    driver.press("C").unwrap();
    let before = driver.history().len();

    driver.press_all(&["7", "+", "8", "="]).unwrap();
    assert_eq!(driver.result(), "15");
    assert_eq!(driver.history().len(), before + 1);
    assert_eq!(
        driver.history().last().map(HistoryEntry::display).as_deref(),
        Some("7+8 = 15")
    );

    driver.press("C").unwrap();
    assert_eq!(driver.input(), "");
    assert_eq!(driver.result(), "");
    assert_eq!(driver.history().len(), before + 1);

    driver.press_all(&["9", "0", "/", "0", "="]).unwrap();
    assert_eq!(driver.result(), ERROR_TEXT);
    assert_eq!(driver.history().len(), before + 1);
    driver.press("C").unwrap();
}

/// Verifies that the theme toggle is pure presentation
#[allow(clippy::unwrap_used)]
pub fn verify_theme_toggle<D: CalculatorDriver>(driver: &mut D) {
    driver.press("C").unwrap();
    driver.type_keys("1+2=").unwrap();
    let (input, result, history) = (driver.input(), driver.result(), driver.history());
    let dark = driver.is_dark();

    driver.toggle_theme();
    assert_eq!(driver.is_dark(), !dark);
    driver.toggle_theme();
    assert_eq!(driver.is_dark(), dark);

    assert_eq!(driver.input(), input);
    assert_eq!(driver.result(), result);
    assert_eq!(driver.history(), history);
    driver.press("C").unwrap();
}

/// Runs every scenario in sequence on one driver
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_operator_collapse(driver);
    verify_error_handling(driver);
    verify_history(driver);
    verify_theme_toggle(driver);
}
