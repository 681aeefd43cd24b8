use std::sync::Arc;

use super::{CaptureTypes, DEFAULT_CAPTURE_TYPE, TemplateError, TemplateResult};
use crate::capture::Capture;
use crate::pattern::{Pattern, Segment};

/// Parses a path template such as `/posts/{id:int}/{slug}` into a pattern.
///
/// Placeholders are `{name}` (typed as `text`) or `{name:type}` with `type`
/// looked up in `types`, and each must fill a whole segment. A trailing `/`
/// marks the pattern as preferring the trailing-slash form when reversed.
#[tracing::instrument(level = "trace", skip(types), fields(template = %template))]
pub fn parse_template(template: &str, types: &CaptureTypes) -> TemplateResult<Pattern> {
    if !template.starts_with('/') {
        return Err(TemplateError::MissingLeadingSlash {
            template: template.to_string(),
        });
    }

    let (parts, captures) = split_placeholders(template, types)?;

    if parts.len() == 1 && parts[0] == "/" {
        return Ok(Pattern::new(Vec::<Segment>::new(), false)?);
    }

    let incomplete = || TemplateError::IncompleteSegment {
        template: template.to_string(),
    };

    let mut segments: Vec<Segment> = Vec::new();
    let (last, leading) = parts.split_last().ok_or_else(incomplete)?;

    for (part, capture) in leading.iter().zip(captures) {
        if !part.starts_with('/') || !part.ends_with('/') {
            return Err(incomplete());
        }
        if *part != "/" {
            segments.extend(part[1..part.len() - 1].split('/').map(Segment::from));
        }
        segments.push(Segment::Capture(capture));
    }

    if !last.is_empty() {
        if !last.starts_with('/') {
            return Err(incomplete());
        }
        segments.extend(last[1..].split('/').map(Segment::from));
    }

    let prefer_trailing_slash =
        matches!(segments.last(), Some(Segment::Literal(literal)) if literal.is_empty());
    if prefer_trailing_slash {
        segments.pop();
    }

    Ok(Pattern::new(segments, prefer_trailing_slash)?)
}

/// Splits the template into the literal text around each placeholder and
/// the resolved placeholders themselves; `parts.len() == captures.len() + 1`.
fn split_placeholders<'t>(
    template: &'t str,
    types: &CaptureTypes,
) -> TemplateResult<(Vec<&'t str>, Vec<Capture>)> {
    let mut parts = Vec::new();
    let mut captures = Vec::new();
    let mut literal_start = 0usize;
    let mut cursor = 0usize;
    let bytes = template.as_bytes();

    while let Some(offset) = template[cursor..].find(['{', '}']) {
        let index = cursor + offset;
        if bytes[index] == b'}' {
            return Err(TemplateError::UnexpectedClosingBrace {
                template: template.to_string(),
                index,
            });
        }

        let body_start = index + 1;
        let body_len = template[body_start..]
            .find(['{', '}'])
            .filter(|&len| bytes[body_start + len] == b'}')
            .ok_or_else(|| TemplateError::UnterminatedPlaceholder {
                template: template.to_string(),
                start: index,
            })?;

        parts.push(&template[literal_start..index]);
        captures.push(resolve_placeholder(
            template,
            &template[body_start..body_start + body_len],
            types,
        )?);

        cursor = body_start + body_len + 1;
        literal_start = cursor;
    }

    parts.push(&template[literal_start..]);
    Ok((parts, captures))
}

fn resolve_placeholder(
    template: &str,
    body: &str,
    types: &CaptureTypes,
) -> TemplateResult<Capture> {
    let (name, type_name) = body.split_once(':').unwrap_or((body, DEFAULT_CAPTURE_TYPE));
    let kind = types
        .get(type_name)
        .ok_or_else(|| TemplateError::UnknownCaptureType {
            template: template.to_string(),
            name: name.to_string(),
            type_name: type_name.to_string(),
        })?;
    Ok(Capture::new(name, Arc::clone(kind)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::{integer, text};
    use crate::pattern::PatternError;

    fn parse(template: &str) -> TemplateResult<Pattern> {
        parse_template(template, &CaptureTypes::default())
    }

    #[test]
    fn splits_placeholders_from_literals() {
        let types = CaptureTypes::default();
        let (parts, captures) =
            split_placeholders("/posts/{id:int}/{slug}", &types).expect("should split");
        assert_eq!(parts, ["/posts/", "/", ""]);
        let names: Vec<&str> = captures.iter().map(Capture::name).collect();
        assert_eq!(names, ["id", "slug"]);
    }

    #[test]
    fn root_template_is_empty_pattern() {
        let pattern = parse("/").expect("should parse");
        assert_eq!(pattern, Pattern::new(Vec::<Segment>::new(), false).unwrap());
    }

    #[test]
    fn produces_patterns_equivalent_to_explicit_segments() {
        assert_eq!(
            parse("/about").unwrap(),
            Pattern::new(["about"], false).unwrap()
        );
        assert_eq!(
            parse("/posts/").unwrap(),
            Pattern::new(["posts"], true).unwrap()
        );
        assert_eq!(
            parse("/posts/{id:int}").unwrap(),
            Pattern::new(vec![Segment::from("posts"), integer("id").into()], false).unwrap()
        );
        assert_eq!(
            parse("/posts/{id:id}/{slug:text}").unwrap(),
            Pattern::new(
                vec![
                    Segment::from("posts"),
                    integer("id").into(),
                    text("slug").into()
                ],
                false
            )
            .unwrap()
        );
        assert_eq!(
            parse("/users/{username}").unwrap(),
            Pattern::new(vec![Segment::from("users"), text("username").into()], false).unwrap()
        );
        assert_eq!(
            parse("/items/{username}/").unwrap(),
            Pattern::new(vec![Segment::from("items"), text("username").into()], true).unwrap()
        );
    }

    #[test]
    fn requires_leading_slash() {
        for template in ["posts/{id:int}", "{id:int}", ""] {
            match parse(template) {
                Err(TemplateError::MissingLeadingSlash { .. }) => {}
                other => panic!("expected missing slash error for {template:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn requires_complete_segments() {
        for template in [
            "/posts/post-{id:int}",
            "/posts/{id:int}?",
            "/posts/{id:int}{slug}",
            "/posts/{id:int}.json",
        ] {
            match parse(template) {
                Err(TemplateError::IncompleteSegment { .. }) => {}
                other => panic!("expected incomplete segment for {template:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn reports_brace_errors() {
        match parse("/posts/{id") {
            Err(TemplateError::UnterminatedPlaceholder { start, .. }) => assert_eq!(start, 7),
            other => panic!("expected unterminated placeholder, got {other:?}"),
        }
        match parse("/posts/id}") {
            Err(TemplateError::UnexpectedClosingBrace { index, .. }) => assert_eq!(index, 9),
            other => panic!("expected unexpected brace, got {other:?}"),
        }
    }

    #[test]
    fn reports_unknown_type() {
        match parse("/posts/{id:uuid}") {
            Err(TemplateError::UnknownCaptureType {
                name, type_name, ..
            }) => {
                assert_eq!(name, "id");
                assert_eq!(type_name, "uuid");
            }
            other => panic!("expected unknown type, got {other:?}"),
        }
    }

    #[test]
    fn forwards_pattern_errors() {
        match parse("/{id:int}/{id}") {
            Err(TemplateError::Pattern(PatternError::DuplicateCaptureName { name })) => {
                assert_eq!(name, "id")
            }
            other => panic!("expected duplicate capture error, got {other:?}"),
        }
        match parse("/{:int}") {
            Err(TemplateError::Pattern(PatternError::EmptyCaptureName { position })) => {
                assert_eq!(position, 0)
            }
            other => panic!("expected empty capture name error, got {other:?}"),
        }
    }
}
