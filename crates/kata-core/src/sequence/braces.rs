//! Shell-style brace expansion.
//!
//! A balanced `{...}` group containing at least one top-level comma is an
//! alternation: each comma-separated alternative appears at that position
//! in a separate output. Groups nest, alternatives may be empty, and a
//! group without a comma is kept as literal text.

use std::iter::FusedIterator;

use crate::error::{CoreError, CoreResult};

/// One piece of a parsed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Literal(String),
    Alternation(Vec<Vec<Part>>),
}

/// A partially expanded output string.
#[derive(Debug, Clone)]
struct Partial {
    text: String,
    /// Parts still to be expanded; the last element is expanded next.
    pending: Vec<Part>,
}

/// Lazy sequence of every expansion of a brace pattern.
///
/// Expansions are produced depth-first, alternatives left to right, so
/// only the partial strings on the current frontier are held in memory.
#[derive(Debug, Clone)]
pub struct BraceExpansion {
    stack: Vec<Partial>,
}

/// Parse `pattern` and return a lazy sequence of its expansions.
///
/// # Errors
///
/// `CoreError::InvalidInput` if the pattern contains an unmatched `{` or `}`.
///
/// # Example
///
/// ```
/// use kata_core::sequence::expand_braces;
///
/// let files: Vec<String> = expand_braces("thumbnail.{png,jp{e,}g}").unwrap().collect();
/// assert_eq!(files, vec!["thumbnail.png", "thumbnail.jpeg", "thumbnail.jpg"]);
///
/// let plain: Vec<String> = expand_braces("nothing to do").unwrap().collect();
/// assert_eq!(plain, vec!["nothing to do"]);
/// ```
pub fn expand_braces(pattern: &str) -> CoreResult<BraceExpansion> {
    let chars: Vec<(usize, char)> = pattern.char_indices().collect();
    let closing = match_braces(&chars)?;
    let mut pending = parse_sequence(&chars, &closing, 0, chars.len());

    tracing::trace!(
        pattern,
        alternations = pending
            .iter()
            .filter(|p| matches!(p, Part::Alternation(_)))
            .count(),
        "brace pattern parsed"
    );

    pending.reverse();
    Ok(BraceExpansion {
        stack: vec![Partial {
            text: String::new(),
            pending,
        }],
    })
}

/// For every `{`, the index of its matching `}`.
fn match_braces(chars: &[(usize, char)]) -> CoreResult<Vec<Option<usize>>> {
    let mut closing = vec![None; chars.len()];
    let mut open: Vec<usize> = Vec::new();

    for (i, &(byte, c)) in chars.iter().enumerate() {
        match c {
            '{' => open.push(i),
            '}' => {
                let start = open.pop().ok_or_else(|| {
                    CoreError::InvalidInput(format!("unmatched `}}` at byte {}", byte))
                })?;
                closing[start] = Some(i);
            }
            _ => {}
        }
    }

    if let Some(&i) = open.last() {
        return Err(CoreError::InvalidInput(format!(
            "unmatched `{{` at byte {}",
            chars[i].0
        )));
    }
    Ok(closing)
}

fn parse_sequence(
    chars: &[(usize, char)],
    closing: &[Option<usize>],
    start: usize,
    end: usize,
) -> Vec<Part> {
    let mut parts = Vec::new();
    let mut literal = String::new();
    let mut i = start;

    while i < end {
        let c = chars[i].1;
        let close = match (c, closing[i]) {
            ('{', Some(close)) => close,
            _ => {
                literal.push(c);
                i += 1;
                continue;
            }
        };

        flush_literal(&mut literal, &mut parts);
        let commas = top_level_commas(chars, closing, i + 1, close);

        if commas.is_empty() {
            parts.push(Part::Literal("{".to_string()));
            parts.extend(parse_sequence(chars, closing, i + 1, close));
            parts.push(Part::Literal("}".to_string()));
        } else {
            let mut alternatives = Vec::with_capacity(commas.len() + 1);
            let mut segment_start = i + 1;
            for &comma in commas.iter().chain(std::iter::once(&close)) {
                alternatives.push(parse_sequence(chars, closing, segment_start, comma));
                segment_start = comma + 1;
            }
            parts.push(Part::Alternation(alternatives));
        }

        i = close + 1;
    }

    flush_literal(&mut literal, &mut parts);
    parts
}

fn top_level_commas(
    chars: &[(usize, char)],
    closing: &[Option<usize>],
    start: usize,
    end: usize,
) -> Vec<usize> {
    let mut commas = Vec::new();
    let mut i = start;
    while i < end {
        match (chars[i].1, closing[i]) {
            ('{', Some(close)) => i = close,
            (',', _) => commas.push(i),
            _ => {}
        }
        i += 1;
    }
    commas
}

fn flush_literal(literal: &mut String, parts: &mut Vec<Part>) {
    if !literal.is_empty() {
        parts.push(Part::Literal(std::mem::take(literal)));
    }
}

impl Iterator for BraceExpansion {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(mut partial) = self.stack.pop() {
            loop {
                match partial.pending.pop() {
                    None => return Some(partial.text),
                    Some(Part::Literal(text)) => partial.text.push_str(&text),
                    Some(Part::Alternation(alternatives)) => {
                        // Push in reverse so the first alternative is expanded first.
                        for alternative in alternatives.into_iter().rev() {
                            let mut pending = partial.pending.clone();
                            pending.extend(alternative.into_iter().rev());
                            self.stack.push(Partial {
                                text: partial.text.clone(),
                                pending,
                            });
                        }
                        break;
                    }
                }
            }
        }
        None
    }
}

impl FusedIterator for BraceExpansion {}
