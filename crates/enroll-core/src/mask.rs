//! Input masks.
//!
//! Masks format a value as the user types, independent of validation. The
//! pattern syntax is the one the rendered form uses: `0` is a digit slot,
//! `{…}` is a fixed literal run, any other character is a separator emitted
//! between digits.

use serde::{Deserialize, Serialize};

/// An input formatting constraint attached to a field binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaskSpec {
    /// Fixed pattern, e.g. `+{375}(00)000-00-00`.
    Pattern(String),
    /// Digits only, everything else stripped.
    Digits,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Digit,
    Literal(char),
    Fixed(String),
}

fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        match c {
            '0' => tokens.push(Token::Digit),
            '{' => {
                let mut run = String::new();
                for c in chars.by_ref() {
                    if c == '}' {
                        break;
                    }
                    run.push(c);
                }
                tokens.push(Token::Fixed(run));
            }
            other => tokens.push(Token::Literal(other)),
        }
    }

    tokens
}

impl MaskSpec {
    /// Formats raw input through the mask.
    ///
    /// Non-digits are stripped from the input first. Separators and fixed
    /// runs are only emitted while input digits remain, so a partial input
    /// yields a partial mask rather than a padded one. If the user typed the
    /// digits of a fixed run themselves they are consumed, not doubled, and
    /// digits beyond the last slot are dropped.
    pub fn apply(&self, raw: &str) -> String {
        let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).collect();

        match self {
            Self::Digits => digits.into_iter().collect(),
            Self::Pattern(pattern) => {
                let mut out = String::new();
                let mut next = 0;

                for token in tokenize(pattern) {
                    match token {
                        Token::Digit => {
                            let Some(&digit) = digits.get(next) else {
                                break;
                            };
                            out.push(digit);
                            next += 1;
                        }
                        Token::Literal(c) => {
                            if next >= digits.len() {
                                break;
                            }
                            out.push(c);
                        }
                        Token::Fixed(run) => {
                            if next >= digits.len() {
                                break;
                            }
                            let fixed: Vec<char> =
                                run.chars().filter(char::is_ascii_digit).collect();
                            if digits[next..].starts_with(&fixed) {
                                next += fixed.len();
                            }
                            out.push_str(&run);
                        }
                    }
                }

                out
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHONE: &str = "+{375}(00)000-00-00";

    #[test]
    fn test_full_phone() {
        let mask = MaskSpec::Pattern(PHONE.to_string());
        assert_eq!(mask.apply("291234567"), "+375(29)123-45-67");
    }

    #[test]
    fn test_typed_prefix_not_doubled() {
        let mask = MaskSpec::Pattern(PHONE.to_string());
        assert_eq!(mask.apply("375291234567"), "+375(29)123-45-67");
        assert_eq!(mask.apply("+375 29 123-45-67"), "+375(29)123-45-67");
    }

    #[test]
    fn test_partial_input() {
        let mask = MaskSpec::Pattern(PHONE.to_string());
        assert_eq!(mask.apply(""), "");
        assert_eq!(mask.apply("29"), "+375(29");
        assert_eq!(mask.apply("2912"), "+375(29)12");
    }

    #[test]
    fn test_surplus_digits_dropped() {
        let mask = MaskSpec::Pattern(PHONE.to_string());
        assert_eq!(mask.apply("29123456789999"), "+375(29)123-45-67");
    }

    #[test]
    fn test_digits_mask() {
        let mask = MaskSpec::Digits;
        assert_eq!(mask.apply("12-34 ab 56"), "123456");
        assert_eq!(mask.apply("abc"), "");
    }
}
