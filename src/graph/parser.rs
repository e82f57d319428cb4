// src/graph/parser.rs
//! Ingestion of the minimal DOT subset: `digraph ID { A -> B ; ... }`.
//!
//! The grammar is line-oriented. The first non-empty line must be the header;
//! body lines are edges, comments (`#`), or blanks; a bare `}` terminates the
//! parse and anything after it is ignored. Reaching end of input without a
//! closing brace is accepted. The first structural violation aborts the whole
//! parse; there is no skip-and-continue.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{DotRankError, Result};
use crate::graph::DotGraph;

/// Maximum accepted identifier length, in characters. Longer identifiers are
/// rejected outright rather than truncated.
pub const MAX_ID_LENGTH: usize = 255;

// Zero or one space is tolerated before `{`, around `->`, and before `;`.
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*digraph (\S+) ?\{\s*$").unwrap_or_else(|_| panic!("invalid header regex"))
});
static EDGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\S+) ?-> ?(\S+) ?;$").unwrap_or_else(|_| panic!("invalid edge regex"))
});
static ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").unwrap_or_else(|_| panic!("invalid identifier regex"))
});

/// Parses a DOT-subset document into a graph bounded at `capacity` nodes.
///
/// # Errors
/// `MalformedHeader`, `MalformedEdge`, `InvalidIdentifier`,
/// `IdentifierTooLong`, or `CapacityExceeded`, per the rules above.
pub fn parse_dot(input: &str, capacity: usize) -> Result<DotGraph> {
    let mut graph = DotGraph::with_capacity(capacity);
    let mut lines = input.lines();

    let header = loop {
        match lines.next() {
            Some(line) if line.trim().is_empty() => continue,
            Some(line) => break line,
            None => {
                return Err(DotRankError::MalformedHeader {
                    line: String::new(),
                })
            }
        }
    };

    let caps = HEADER_RE
        .captures(header)
        .ok_or_else(|| DotRankError::MalformedHeader {
            line: header.trim().to_string(),
        })?;
    validate_identifier(&caps[1]).map_err(|e| match e {
        DotRankError::InvalidIdentifier { .. } => DotRankError::MalformedHeader {
            line: header.trim().to_string(),
        },
        other => other,
    })?;

    for raw in lines {
        let line = raw.trim();
        if line == "}" {
            break;
        }
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let caps = EDGE_RE
            .captures(line)
            .ok_or_else(|| DotRankError::MalformedEdge {
                line: line.to_string(),
            })?;
        let (source, target) = (&caps[1], &caps[2]);
        validate_identifier(source)?;
        validate_identifier(target)?;
        graph.add_edge(source, target)?;
    }

    Ok(graph)
}

/// Reads and parses a DOT-subset file.
///
/// # Errors
/// `SourceUnavailable` if the file is missing or unreadable, otherwise as
/// [`parse_dot`].
pub fn parse_dot_file(path: &Path, capacity: usize) -> Result<DotGraph> {
    let input = fs::read_to_string(path).map_err(|source| DotRankError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_dot(&input, capacity)
}

fn validate_identifier(ident: &str) -> Result<()> {
    if ident.chars().count() > MAX_ID_LENGTH {
        return Err(DotRankError::IdentifierTooLong {
            ident: ident.to_string(),
            max: MAX_ID_LENGTH,
        });
    }
    if !ID_RE.is_match(ident) {
        return Err(DotRankError::InvalidIdentifier {
            ident: ident.to_string(),
        });
    }
    Ok(())
}
