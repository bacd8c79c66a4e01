//! Substitution expression parser

use crate::error::SubstitutionError;
use crate::substitution::types::Substitution;

/// Parse an expression like "$(var x)" or "text $(env Y) more"
///
/// A plain string parses to a single text fragment. Nested substitutions
/// are rejected; none of the demo expressions need them.
pub fn parse_substitutions(input: &str) -> Result<Vec<Substitution>, SubstitutionError> {
    let mut result = Vec::new();
    let mut chars = input.char_indices().peekable();
    let mut last_pos = 0;

    while let Some((i, ch)) = chars.next() {
        if ch != '$' || !matches!(chars.peek(), Some((_, '('))) {
            continue;
        }

        // Text preceding the substitution
        if i > last_pos {
            result.push(Substitution::Text(input[last_pos..i].to_string()));
        }

        // Skip the '(' and find the matching ')' by counting parentheses
        chars.next();
        let body_start = i + 2;
        let mut depth = 1;
        let mut body_end = None;
        for (pos, c) in chars.by_ref() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        body_end = Some(pos);
                        break;
                    }
                }
                _ => {}
            }
        }

        let body_end = body_end.ok_or_else(|| {
            SubstitutionError::InvalidSubstitution(
                "unmatched parenthesis in substitution".to_string(),
            )
        })?;

        result.push(parse_substitution_body(&input[body_start..body_end])?);
        last_pos = body_end + 1;
    }

    if last_pos < input.len() {
        result.push(Substitution::Text(input[last_pos..].to_string()));
    }

    // No substitutions found: the entire input is text
    if result.is_empty() {
        result.push(Substitution::Text(input.to_string()));
    }

    Ok(result)
}

/// Parse the content inside a $(...) expression
fn parse_substitution_body(body: &str) -> Result<Substitution, SubstitutionError> {
    let trimmed = body.trim();

    if trimmed.contains("$(") {
        return Err(SubstitutionError::InvalidSubstitution(format!(
            "nested substitutions are not supported: $({})",
            trimmed
        )));
    }

    let (kind, args) = match trimmed.split_once(' ') {
        Some((kind, args)) => (kind, Some(args.trim())),
        None => (trimmed, None),
    };

    match kind {
        "var" => {
            let name = args
                .filter(|a| !a.is_empty())
                .ok_or_else(|| SubstitutionError::InvalidSubstitution("var requires a name".to_string()))?;
            Ok(Substitution::LaunchConfiguration(name.to_string()))
        }
        "env" => {
            let args = args
                .filter(|a| !a.is_empty())
                .ok_or_else(|| SubstitutionError::InvalidSubstitution("env requires a name".to_string()))?;
            let (name, default) = match args.split_once(' ') {
                Some((name, default)) => (name, Some(default.trim().to_string())),
                None => (args, None),
            };
            Ok(Substitution::EnvironmentVariable {
                name: name.to_string(),
                default,
            })
        }
        "find-pkg-share" => {
            let package = args.filter(|a| !a.is_empty()).ok_or_else(|| {
                SubstitutionError::InvalidSubstitution(
                    "find-pkg-share requires a package name".to_string(),
                )
            })?;
            Ok(Substitution::FindPackageShare(package.to_string()))
        }
        other => Err(SubstitutionError::InvalidSubstitution(format!(
            "unknown substitution type '{}'",
            other
        ))),
    }
}
