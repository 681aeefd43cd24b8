use regex::Regex;

use super::ast::{Alternative, Atom, Disjunction, Term};
use super::parser::parse_subpattern;
use super::{CaptureResult, CaptureTypeError};

pub const SLASH: u32 = '/' as u32;

/// Whether any alternative of `root` contains an atom able to consume `code`.
///
/// Over-approximates: a term repeated `{0}` still counts.
pub fn matches_code_point(root: &Disjunction, code: u32) -> bool {
    disjunction_matches(root, code)
}

fn disjunction_matches(disjunction: &Disjunction, code: u32) -> bool {
    disjunction
        .alternatives
        .iter()
        .any(|alternative| alternative_matches(alternative, code))
}

fn alternative_matches(alternative: &Alternative, code: u32) -> bool {
    alternative.terms.iter().any(|term| term_matches(term, code))
}

fn term_matches(term: &Term, code: u32) -> bool {
    atom_matches(&term.atom, code)
}

fn atom_matches(atom: &Atom, code: u32) -> bool {
    match atom {
        Atom::Character(value) => *value == code,
        Atom::Class(class) => class.contains(code),
        Atom::Group(inner) => disjunction_matches(inner, code),
        Atom::Assertion => false,
    }
}

/// Validates a capture sub-pattern and returns it compiled and anchored
/// (`^(?:source)$`) for checking serialized values.
#[tracing::instrument(level = "trace", skip(source), fields(subpattern = %source))]
pub fn validate_subpattern(source: &str) -> CaptureResult<Regex> {
    let root = parse_subpattern(source)?;

    if matches_code_point(&root, SLASH) {
        return Err(CaptureTypeError::MatchesSlash {
            subpattern: source.to_string(),
        });
    }

    let anchored = Regex::new(&format!("^(?:{source})$")).map_err(|err| {
        CaptureTypeError::RegexInvalid {
            subpattern: source.to_string(),
            error: err.to_string(),
        }
    })?;

    // group 0 only
    if anchored.captures_len() != 1 {
        return Err(CaptureTypeError::CapturingGroupNotAllowed {
            subpattern: source.to_string(),
            index: 0,
        });
    }

    Ok(anchored)
}
