//! Textual graph description loader.
//!
//! The description format is whitespace-separated tokens, in order:
//! a vertex count, that many distinct vertex names, an edge count, and that
//! many `from to cost` triples. Line breaks carry no meaning.
//!
//! ```text
//! 4
//! A B C D
//! 5
//! A B 2
//! B C 6
//! C D 5
//! D A 7
//! D B 4
//! ```
//!
//! Parsing is strict: truncated input, malformed counts or costs, and
//! trailing tokens all fail the load, as do duplicate vertex names and edge
//! endpoints missing from the vertex table (surfaced from
//! [`DiGraph::build`]). A failed load produces no graph.

use crate::engine::errors::GraphError;
use crate::engine::graph::DiGraph;

/// Cursor over the whitespace-separated tokens of a description.
struct Tokens<'a> {
    iter: std::str::SplitWhitespace<'a>,
    consumed: usize,
}

impl<'a> Tokens<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            iter: source.split_whitespace(),
            consumed: 0,
        }
    }

    fn next(&mut self, expected: &str) -> Result<&'a str, GraphError> {
        match self.iter.next() {
            Some(token) => {
                self.consumed += 1;
                Ok(token)
            }
            None => Err(GraphError::Parse(format!(
                "unexpected end of input after {} tokens, expected {expected}",
                self.consumed
            ))),
        }
    }

    fn next_count(&mut self, expected: &str) -> Result<usize, GraphError> {
        let token = self.next(expected)?;
        token.parse().map_err(|_| {
            GraphError::Parse(format!("expected {expected}, found {token:?}"))
        })
    }

    fn next_cost(&mut self) -> Result<i64, GraphError> {
        let token = self.next("an edge cost")?;
        token.parse().map_err(|_| {
            GraphError::Parse(format!("expected an edge cost, found {token:?}"))
        })
    }
}

/// Parses a textual graph description into a [`DiGraph`].
///
/// # Errors
///
/// * [`GraphError::Parse`] for a structurally malformed description
/// * [`GraphError::DuplicateVertex`] for a repeated vertex name
/// * [`GraphError::UnknownVertex`] for an edge endpoint not in the table
pub fn parse_description(source: &str) -> Result<DiGraph, GraphError> {
    let mut tokens = Tokens::new(source);

    // Counts are untrusted until the promised tokens actually arrive, so
    // nothing is pre-reserved from them; an absurd count fails on the first
    // missing token instead of aborting inside the allocator.
    let vertex_count = tokens.next_count("a vertex count")?;
    let mut names = Vec::new();
    for _ in 0..vertex_count {
        names.push(tokens.next("a vertex name")?);
    }

    let edge_count = tokens.next_count("an edge count")?;
    let mut edges = Vec::new();
    for _ in 0..edge_count {
        let from = tokens.next("an edge source name")?;
        let to = tokens.next("an edge destination name")?;
        let cost = tokens.next_cost()?;
        edges.push((from, to, cost));
    }

    if let Some(extra) = tokens.iter.next() {
        return Err(GraphError::Parse(format!(
            "trailing input after {} edges, starting at {extra:?}",
            edge_count
        )));
    }

    DiGraph::build(names, edges)
}
