//! Formula strings: element symbols with counts and an optional ionic charge.
//!
//! Grammar accepted by [`Formula::parse`]:
//!
//! ```text
//! formula := body charge?
//! body    := (symbol count?)+          symbol = [A-Z][a-z]*, count = [1-9][0-9]*
//! charge  := '/' magnitude? sign       e.g. "PO4/3-", "Fe/3+"
//!          | sign+                     e.g. "HPO4--", "NH4+"
//! ```
//!
//! A bare trailing `digits sign` is read as an element count followed by a
//! single charge (`"A2-"` is A₂ with charge -1), so multi-charged ions must use
//! the `/` form or a repeated sign to be unambiguous. [`Formula::naming_key`]
//! always produces the unambiguous form.

use crate::error::{ChemError, ChemResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Render an ionic charge the way it is written after a formula.
///
/// `0` renders empty, `±1` as a bare sign, anything larger as magnitude
/// followed by sign (`"2-"`, `"3+"`).
pub fn charge_to_string(charge: i32) -> String {
    match charge {
        0 => String::new(),
        1 => "+".to_string(),
        -1 => "-".to_string(),
        c if c > 0 => format!("{}+", c.unsigned_abs()),
        c => format!("{}-", c.unsigned_abs()),
    }
}

/// A parsed chemical formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formula {
    /// Element symbols and their counts, in written order.
    parts: Vec<(String, u32)>,
    /// Net ionic charge.
    charge: i32,
}

impl Formula {
    /// Build a formula from already-validated parts.
    pub fn new(parts: Vec<(String, u32)>, charge: i32) -> ChemResult<Self> {
        if parts.is_empty() {
            return Err(ChemError::InvalidFormula {
                formula: String::new(),
                reason: "empty formula body",
            });
        }
        for (symbol, count) in &parts {
            if !is_symbol(symbol) {
                return Err(ChemError::InvalidFormula {
                    formula: symbol.clone(),
                    reason: "expected element symbol",
                });
            }
            if *count == 0 {
                return Err(ChemError::InvalidFormula {
                    formula: symbol.clone(),
                    reason: "element count must be positive",
                });
            }
        }
        Ok(Self { parts, charge })
    }

    /// Parse a formula string (see module docs for the grammar).
    pub fn parse(formula: &str) -> ChemResult<Self> {
        let text = formula.trim();
        let invalid = |reason| ChemError::InvalidFormula {
            formula: formula.to_string(),
            reason,
        };

        if text.is_empty() {
            return Err(invalid("empty formula"));
        }

        let (body, charge) = match text.split_once('/') {
            Some((body, charge)) => (body, parse_slash_charge(charge).map_err(invalid)?),
            None => split_sign_run(text).map_err(invalid)?,
        };

        let parts = parse_body(body).map_err(invalid)?;
        Ok(Self { parts, charge })
    }

    pub fn parts(&self) -> &[(String, u32)] {
        &self.parts
    }

    pub fn charge(&self) -> i32 {
        self.charge
    }

    /// Formula without its charge, counts of one omitted.
    pub fn body(&self) -> String {
        let mut out = String::new();
        for (symbol, count) in &self.parts {
            out.push_str(symbol);
            if *count > 1 {
                out.push_str(&count.to_string());
            }
        }
        out
    }

    /// Unambiguous string form that parses back to the same formula.
    pub fn naming_key(&self) -> String {
        if self.charge == 0 {
            self.body()
        } else {
            format!("{}/{}", self.body(), charge_to_string(self.charge))
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.body(), charge_to_string(self.charge))
    }
}

impl std::str::FromStr for Formula {
    type Err = ChemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_symbol(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() => chars.all(|c| c.is_ascii_lowercase()),
        _ => false,
    }
}

fn parse_slash_charge(text: &str) -> Result<i32, &'static str> {
    let (digits, sign) = match text.char_indices().last() {
        Some((idx, '+')) => (&text[..idx], 1),
        Some((idx, '-')) => (&text[..idx], -1),
        _ => return Err("charge must end with '+' or '-'"),
    };

    if digits.is_empty() {
        return Ok(sign);
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err("charge magnitude must be digits");
    }
    let magnitude: i32 = digits.parse().map_err(|_| "charge magnitude out of range")?;
    if magnitude == 0 {
        return Err("charge magnitude must be nonzero");
    }
    Ok(sign * magnitude)
}

fn split_sign_run(text: &str) -> Result<(&str, i32), &'static str> {
    let body = text.trim_end_matches(['+', '-']);
    let run = &text[body.len()..];

    if run.is_empty() {
        return Ok((body, 0));
    }
    let plus = run.chars().all(|c| c == '+');
    let minus = run.chars().all(|c| c == '-');
    if !plus && !minus {
        return Err("mixed charge signs");
    }

    let magnitude = i32::try_from(run.len()).map_err(|_| "charge magnitude out of range")?;
    Ok((body, if plus { magnitude } else { -magnitude }))
}

fn parse_body(body: &str) -> Result<Vec<(String, u32)>, &'static str> {
    let mut parts = Vec::new();
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if !c.is_ascii_uppercase() {
            return Err("expected element symbol");
        }
        let mut symbol = c.to_string();
        while let Some(&next) = chars.peek() {
            if !next.is_ascii_lowercase() {
                break;
            }
            symbol.push(next);
            chars.next();
        }

        let mut digits = String::new();
        while let Some(&next) = chars.peek() {
            if !next.is_ascii_digit() {
                break;
            }
            digits.push(next);
            chars.next();
        }
        let count = if digits.is_empty() {
            1
        } else {
            digits.parse::<u32>().map_err(|_| "element count out of range")?
        };
        if count == 0 {
            return Err("element count must be positive");
        }

        parts.push((symbol, count));
    }

    if parts.is_empty() {
        return Err("empty formula body");
    }
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charge_rendering_is_total() {
        assert_eq!(charge_to_string(0), "");
        assert_eq!(charge_to_string(-1), "-");
        assert_eq!(charge_to_string(1), "+");
        assert_eq!(charge_to_string(-2), "2-");
        assert_eq!(charge_to_string(3), "3+");
        assert_eq!(charge_to_string(i32::MIN), "2147483648-");
    }

    #[test]
    fn parse_neutral() {
        let f = Formula::parse("H3PO4").unwrap();
        assert_eq!(
            f.parts(),
            &[("H".to_string(), 3), ("P".to_string(), 1), ("O".to_string(), 4)]
        );
        assert_eq!(f.charge(), 0);
        assert_eq!(f.to_string(), "H3PO4");
    }

    #[test]
    fn parse_charges() {
        assert_eq!(Formula::parse("HB-").unwrap().charge(), -1);
        assert_eq!(Formula::parse("NH4+").unwrap().charge(), 1);
        assert_eq!(Formula::parse("B/2-").unwrap().charge(), -2);
        assert_eq!(Formula::parse("Fe/3+").unwrap().charge(), 3);
        assert_eq!(Formula::parse("HPO4--").unwrap().charge(), -2);
        assert_eq!(Formula::parse("HB/-").unwrap().charge(), -1);
    }

    #[test]
    fn bare_digit_before_sign_is_a_count() {
        let f = Formula::parse("A2-").unwrap();
        assert_eq!(f.parts(), &[("A".to_string(), 2)]);
        assert_eq!(f.charge(), -1);
    }

    #[test]
    fn naming_key_is_unambiguous() {
        let f = Formula::new(vec![("A".to_string(), 1)], -2).unwrap();
        assert_eq!(f.to_string(), "A2-");
        assert_eq!(f.naming_key(), "A/2-");
        assert_eq!(Formula::parse(&f.naming_key()).unwrap(), f);
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["", "h2o", "2H", "H0", "/2-", "--", "H+-", "B/0-", "B/2", "B/x-"] {
            assert!(Formula::parse(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn new_validates_parts() {
        assert!(Formula::new(vec![], 0).is_err());
        assert!(Formula::new(vec![("h".to_string(), 1)], 0).is_err());
        assert!(Formula::new(vec![("H".to_string(), 0)], 0).is_err());
    }
}
