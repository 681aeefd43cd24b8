use super::ast::{
    Alternative, Atom, CharacterClass, ClassRange, Disjunction, MAX_CODE_POINT, PerlClass,
    Quantifier, Term, complement,
};
use super::{CaptureResult, CaptureTypeError};

const FLAG_CHARS: &[char] = &['i', 'm', 's', 'U', 'u', 'x', 'R', '-'];

/// Parses a capture sub-pattern written in `regex` syntax into a
/// disjunction tree.
///
/// Only the subset needed to decide which code points a sub-pattern can
/// consume is accepted. Capturing groups and inline flags are rejected
/// outright because they would change the meaning of the combined router
/// expression.
#[tracing::instrument(level = "trace", skip(source), fields(subpattern = %source))]
pub fn parse_subpattern(source: &str) -> CaptureResult<Disjunction> {
    let mut parser = SubpatternParser::new(source);
    parser.parse_disjunction(None)
}

enum Escaped {
    Character(u32),
    Class(Vec<ClassRange>),
    Assertion,
}

struct SubpatternParser<'a> {
    source: &'a str,
    chars: Vec<(usize, char)>,
    index: usize,
}

impl<'a> SubpatternParser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().collect(),
            index: 0,
        }
    }

    fn parse_disjunction(&mut self, group_start: Option<usize>) -> CaptureResult<Disjunction> {
        let mut alternatives = vec![self.parse_alternative()?];
        loop {
            match self.peek() {
                Some('|') => {
                    self.next();
                    alternatives.push(self.parse_alternative()?);
                }
                Some(')') => {
                    if group_start.is_none() {
                        return Err(self.syntax(
                            self.current_byte_index(),
                            "unmatched closing parenthesis",
                        ));
                    }
                    self.next();
                    return Ok(Disjunction::new(alternatives));
                }
                None => {
                    if let Some(start) = group_start {
                        return Err(self.syntax(start, "unterminated group"));
                    }
                    return Ok(Disjunction::new(alternatives));
                }
                Some(_) => {
                    return Err(self.syntax(self.current_byte_index(), "unexpected character"));
                }
            }
        }
    }

    fn parse_alternative(&mut self) -> CaptureResult<Alternative> {
        let mut terms = Vec::new();
        while let Some(ch) = self.peek() {
            if ch == '|' || ch == ')' {
                break;
            }
            terms.push(self.parse_term()?);
        }
        Ok(Alternative { terms })
    }

    fn parse_term(&mut self) -> CaptureResult<Term> {
        let atom = self.parse_atom()?;
        let quantifier = self.parse_quantifier()?;
        Ok(Term::new(atom, quantifier))
    }

    fn parse_atom(&mut self) -> CaptureResult<Atom> {
        let index = self.current_byte_index();
        match self.next() {
            Some('(') => self.parse_group(index),
            Some('[') => self.parse_class(index).map(Atom::Class),
            Some('.') => Ok(Atom::Class(CharacterClass::any_except_newline())),
            Some('^' | '$') => Ok(Atom::Assertion),
            Some('\\') => match self.parse_escape(index, false)? {
                Escaped::Character(code) => Ok(Atom::Character(code)),
                Escaped::Class(ranges) => Ok(Atom::Class(CharacterClass::new(ranges, false))),
                Escaped::Assertion => Ok(Atom::Assertion),
            },
            Some('*' | '+' | '?' | '{') => {
                Err(self.syntax(index, "repetition operator missing expression"))
            }
            Some(ch) => Ok(Atom::Character(ch as u32)),
            None => Err(self.syntax(index, "unexpected end of pattern")),
        }
    }

    fn parse_group(&mut self, start: usize) -> CaptureResult<Atom> {
        if self.peek() != Some('?') {
            return Err(CaptureTypeError::CapturingGroupNotAllowed {
                subpattern: self.source.to_string(),
                index: start,
            });
        }
        self.next();

        match self.peek() {
            Some(':') => {
                self.next();
                let inner = self.parse_disjunction(Some(start))?;
                Ok(Atom::Group(inner))
            }
            Some('P' | '<') => Err(CaptureTypeError::CapturingGroupNotAllowed {
                subpattern: self.source.to_string(),
                index: start,
            }),
            Some(ch) if FLAG_CHARS.contains(&ch) => Err(CaptureTypeError::FlagsNotAllowed {
                subpattern: self.source.to_string(),
                index: start,
            }),
            Some('=' | '!') => Err(self.unsupported(start, "look-around")),
            _ => Err(self.syntax(start, "unrecognized group syntax")),
        }
    }

    fn parse_class(&mut self, start: usize) -> CaptureResult<CharacterClass> {
        let negated = if self.peek() == Some('^') {
            self.next();
            true
        } else {
            false
        };

        let mut ranges = Vec::new();
        let mut first = true;
        loop {
            let index = self.current_byte_index();
            let Some(ch) = self.next() else {
                return Err(self.syntax(start, "unterminated character class"));
            };

            match ch {
                ']' if !first => return Ok(CharacterClass::new(ranges, negated)),
                '[' => return Err(self.unsupported(index, "nested character class")),
                '&' | '~' | '-' if self.peek() == Some(ch) => {
                    return Err(self.unsupported(index, "character class set operation"));
                }
                _ => {
                    let low = if ch == '\\' {
                        match self.parse_escape(index, true)? {
                            Escaped::Character(code) => code,
                            Escaped::Class(items) => {
                                ranges.extend(items);
                                first = false;
                                continue;
                            }
                            Escaped::Assertion => {
                                return Err(self.unsupported(index, "assertion inside class"));
                            }
                        }
                    } else {
                        ch as u32
                    };

                    if self.peek() == Some('-') && self.peek_at(1).is_some_and(|c| c != ']') {
                        self.next();
                        let high = self.parse_range_end(start)?;
                        if high < low {
                            return Err(self.syntax(index, "invalid character class range"));
                        }
                        ranges.push(ClassRange::new(low, high));
                    } else {
                        ranges.push(ClassRange::single(low));
                    }
                }
            }
            first = false;
        }
    }

    fn parse_range_end(&mut self, class_start: usize) -> CaptureResult<u32> {
        let index = self.current_byte_index();
        match self.next() {
            Some('\\') => match self.parse_escape(index, true)? {
                Escaped::Character(code) => Ok(code),
                _ => Err(self.syntax(index, "invalid character class range")),
            },
            Some('[') => Err(self.unsupported(index, "nested character class")),
            Some(ch) => Ok(ch as u32),
            None => Err(self.syntax(class_start, "unterminated character class")),
        }
    }

    /// Called with the backslash already consumed.
    fn parse_escape(&mut self, start: usize, in_class: bool) -> CaptureResult<Escaped> {
        let Some(ch) = self.next() else {
            return Err(self.syntax(start, "incomplete escape sequence"));
        };

        let escaped = match ch {
            'd' => Escaped::Class(PerlClass::Digit.ranges()),
            'D' => Escaped::Class(complement(&PerlClass::Digit.ranges())),
            'w' => Escaped::Class(PerlClass::Word.ranges()),
            'W' => Escaped::Class(complement(&PerlClass::Word.ranges())),
            's' => Escaped::Class(PerlClass::Space.ranges()),
            'S' => Escaped::Class(complement(&PerlClass::Space.ranges())),
            'n' => Escaped::Character('\n' as u32),
            't' => Escaped::Character('\t' as u32),
            'r' => Escaped::Character('\r' as u32),
            'f' => Escaped::Character(0x0C),
            'v' => Escaped::Character(0x0B),
            'a' => Escaped::Character(0x07),
            'x' => Escaped::Character(self.parse_hex(start, 2)?),
            'u' => Escaped::Character(self.parse_hex(start, 4)?),
            'U' => Escaped::Character(self.parse_hex(start, 8)?),
            'b' | 'B' | 'A' | 'z' if !in_class => Escaped::Assertion,
            'p' | 'P' => return Err(self.unsupported(start, "Unicode property class")),
            c if c.is_ascii_alphanumeric() => {
                return Err(self.unsupported(start, "escape sequence"));
            }
            c => Escaped::Character(c as u32),
        };
        Ok(escaped)
    }

    /// `\xHH`, `\uHHHH`, `\UHHHHHHHH` or the braced `\x{H...}` form.
    fn parse_hex(&mut self, start: usize, width: usize) -> CaptureResult<u32> {
        let mut digits = String::new();
        if self.peek() == Some('{') {
            self.next();
            loop {
                match self.next() {
                    Some('}') => break,
                    Some(ch) if ch.is_ascii_hexdigit() && digits.len() < 8 => digits.push(ch),
                    _ => return Err(self.syntax(start, "invalid hexadecimal escape")),
                }
            }
        } else {
            for _ in 0..width {
                match self.next() {
                    Some(ch) if ch.is_ascii_hexdigit() => digits.push(ch),
                    _ => return Err(self.syntax(start, "invalid hexadecimal escape")),
                }
            }
        }

        let code = u32::from_str_radix(&digits, 16)
            .map_err(|_| self.syntax(start, "invalid hexadecimal escape"))?;
        if code > MAX_CODE_POINT || char::from_u32(code).is_none() {
            return Err(self.syntax(start, "escape is not a Unicode scalar value"));
        }
        Ok(code)
    }

    fn parse_quantifier(&mut self) -> CaptureResult<Option<Quantifier>> {
        let index = self.current_byte_index();
        let mut quantifier = match self.peek() {
            Some('?') => {
                self.next();
                Quantifier::new(0, Some(1))
            }
            Some('*') => {
                self.next();
                Quantifier::new(0, None)
            }
            Some('+') => {
                self.next();
                Quantifier::new(1, None)
            }
            Some('{') => {
                self.next();
                self.parse_counted(index)?
            }
            _ => return Ok(None),
        };

        if self.peek() == Some('?') {
            self.next();
            quantifier.greedy = false;
        }
        Ok(Some(quantifier))
    }

    fn parse_counted(&mut self, start: usize) -> CaptureResult<Quantifier> {
        let min = if self.peek() == Some(',') {
            0
        } else {
            self.parse_decimal(start)?
        };

        match self.next() {
            Some('}') => Ok(Quantifier::new(min, Some(min))),
            Some(',') => {
                if self.peek() == Some('}') {
                    self.next();
                    return Ok(Quantifier::new(min, None));
                }
                let max = self.parse_decimal(start)?;
                if self.next() != Some('}') {
                    return Err(self.syntax(start, "unclosed counted repetition"));
                }
                if max < min {
                    return Err(self.syntax(start, "invalid counted repetition range"));
                }
                Ok(Quantifier::new(min, Some(max)))
            }
            _ => Err(self.syntax(start, "unclosed counted repetition")),
        }
    }

    fn parse_decimal(&mut self, start: usize) -> CaptureResult<u32> {
        let mut value: Option<u32> = None;
        while let Some(digit) = self.peek().and_then(|c| c.to_digit(10)) {
            self.next();
            let next = value
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit));
            match next {
                Some(v) => value = Some(v),
                None => return Err(self.syntax(start, "repetition count overflow")),
            }
        }
        value.ok_or_else(|| self.syntax(start, "expected decimal repetition count"))
    }

    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.index + offset).map(|(_, ch)| *ch)
    }

    fn next(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.index += 1;
        }
        ch
    }

    fn current_byte_index(&self) -> usize {
        self.chars
            .get(self.index)
            .map(|(idx, _)| *idx)
            .unwrap_or_else(|| self.source.len())
    }

    fn syntax(&self, index: usize, reason: &'static str) -> CaptureTypeError {
        CaptureTypeError::Syntax {
            subpattern: self.source.to_string(),
            index,
            reason,
        }
    }

    fn unsupported(&self, index: usize, construct: &'static str) -> CaptureTypeError {
        CaptureTypeError::Unsupported {
            subpattern: self.source.to_string(),
            index,
            construct,
        }
    }
}
