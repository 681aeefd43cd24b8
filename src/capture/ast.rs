/// Root of a parsed capture sub-pattern: `a|b|c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disjunction {
    pub alternatives: Vec<Alternative>,
}

impl Disjunction {
    pub fn new(alternatives: Vec<Alternative>) -> Self {
        Self { alternatives }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alternative {
    pub terms: Vec<Term>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub atom: Atom,
    pub quantifier: Option<Quantifier>,
}

impl Term {
    pub fn new(atom: Atom, quantifier: Option<Quantifier>) -> Self {
        Self { atom, quantifier }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Atom {
    /// A single code point.
    Character(u32),
    Class(CharacterClass),
    /// `(?:...)`
    Group(Disjunction),
    /// Zero-width: `^`, `$`, `\b`, `\B`, `\A`, `\z`.
    Assertion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterClass {
    pub ranges: Vec<ClassRange>,
    pub negated: bool,
}

impl CharacterClass {
    pub fn new(ranges: Vec<ClassRange>, negated: bool) -> Self {
        Self { ranges, negated }
    }

    /// `.` outside of dot-all mode.
    pub fn any_except_newline() -> Self {
        Self::new(vec![ClassRange::single('\n' as u32)], true)
    }

    pub fn contains(&self, code: u32) -> bool {
        self.ranges.iter().any(|range| range.contains(code)) != self.negated
    }
}

/// Inclusive code point range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassRange {
    pub start: u32,
    pub end: u32,
}

impl ClassRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn single(code: u32) -> Self {
        Self::new(code, code)
    }

    pub fn contains(&self, code: u32) -> bool {
        self.start <= code && code <= self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantifier {
    pub min: u32,
    pub max: Option<u32>,
    pub greedy: bool,
}

impl Quantifier {
    pub fn new(min: u32, max: Option<u32>) -> Self {
        Self {
            min,
            max,
            greedy: true,
        }
    }
}

/// Which class a perl escape (`\d`, `\w`, `\s`) stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerlClass {
    Digit,
    Word,
    Space,
}

impl PerlClass {
    /// ASCII approximation. The Unicode expansions `regex` uses never add `/`.
    pub fn ranges(self) -> Vec<ClassRange> {
        match self {
            PerlClass::Digit => vec![ClassRange::new('0' as u32, '9' as u32)],
            PerlClass::Word => vec![
                ClassRange::new('0' as u32, '9' as u32),
                ClassRange::new('A' as u32, 'Z' as u32),
                ClassRange::single('_' as u32),
                ClassRange::new('a' as u32, 'z' as u32),
            ],
            PerlClass::Space => vec![
                ClassRange::new('\t' as u32, '\r' as u32),
                ClassRange::single(' ' as u32),
            ],
        }
    }
}

pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Complement of a set of ranges over `0..=MAX_CODE_POINT`.
pub fn complement(ranges: &[ClassRange]) -> Vec<ClassRange> {
    let mut sorted = ranges.to_vec();
    sorted.sort_by_key(|range| range.start);

    let mut out = Vec::with_capacity(sorted.len() + 1);
    let mut next = 0u32;
    for range in sorted {
        if range.start > next {
            out.push(ClassRange::new(next, range.start - 1));
        }
        next = next.max(range.end.saturating_add(1));
    }
    if next <= MAX_CODE_POINT {
        out.push(ClassRange::new(next, MAX_CODE_POINT));
    }
    out
}
