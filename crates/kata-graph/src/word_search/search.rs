//! Backtracking path search.

use kata_core::SearchConfig;

use crate::error::{GraphError, GraphResult};

use super::grid::{Direction, Grid, Position};

/// Parameters for [`Grid::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Compare letters without regard to case.
    pub case_insensitive: bool,

    /// Maximum path extensions to try (None = unbounded). Each placed
    /// cell, start cells included, costs one step.
    pub max_steps: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            max_steps: None,
        }
    }
}

impl SearchParams {
    /// Builder: set case sensitivity.
    #[must_use]
    pub fn case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = enabled;
        self
    }

    /// Builder: set the step budget.
    #[must_use]
    pub fn max_steps(mut self, steps: u64) -> Self {
        self.max_steps = Some(steps);
        self
    }

    /// Compares full uppercase mappings, so `ß` only matches itself.
    fn same_letter(&self, a: char, b: char) -> bool {
        a == b || (self.case_insensitive && a.to_uppercase().eq(b.to_uppercase()))
    }
}

impl From<&SearchConfig> for SearchParams {
    fn from(config: &SearchConfig) -> Self {
        Self {
            case_insensitive: config.case_insensitive,
            max_steps: config.max_steps,
        }
    }
}

/// Frame on the search stack: a placed cell and the index into
/// [`Direction::ALL`] of the next move to try from it.
type Frame = (Position, usize);

/// Counts path extensions against the optional limit.
struct StepBudget {
    limit: Option<u64>,
    used: u64,
}

impl StepBudget {
    fn charge(&mut self) -> GraphResult<()> {
        if let Some(limit) = self.limit {
            if self.used >= limit {
                log::debug!("Word search budget of {limit} steps exhausted");
                return Err(GraphError::SearchBudgetExceeded { limit });
            }
        }
        self.used += 1;
        Ok(())
    }
}

impl Grid {
    /// Find a path of cells spelling `word`.
    ///
    /// Start cells are tried in row-major order and moves in the order
    /// left, right, up, down, so the returned path is the first one in
    /// that order. The empty word is found with an empty path.
    ///
    /// # Errors
    /// `GraphError::SearchBudgetExceeded` if `params.max_steps` runs out
    /// before the search decides.
    pub fn search(&self, word: &str, params: &SearchParams) -> GraphResult<Option<Vec<Position>>> {
        let target: Vec<char> = word.chars().collect();
        if target.is_empty() {
            return Ok(Some(Vec::new()));
        }

        let matches = |pos: Position, index: usize| {
            self.cell(pos)
                .is_some_and(|c| params.same_letter(c, target[index]))
        };

        let mut used = self.blank_marks();
        let mut budget = StepBudget {
            limit: params.max_steps,
            used: 0,
        };

        for start in self.positions() {
            if !matches(start, 0) {
                continue;
            }

            budget.charge()?;
            used[start.row][start.col] = true;
            let mut stack: Vec<Frame> = vec![(start, 0)];

            while let Some(&(pos, next_dir)) = stack.last() {
                let depth = stack.len();
                if depth == target.len() {
                    let path: Vec<Position> = stack.iter().map(|&(pos, _)| pos).collect();
                    log::debug!(
                        "Word search found '{}' in {} steps",
                        word,
                        budget.used
                    );
                    return Ok(Some(path));
                }

                let Some(&dir) = Direction::ALL.get(next_dir) else {
                    // Dead end: release the cell and resume the previous frame
                    used[pos.row][pos.col] = false;
                    stack.pop();
                    continue;
                };
                stack[depth - 1].1 += 1;

                if let Some(next) = self.neighbor(pos, dir) {
                    if !used[next.row][next.col] && matches(next, depth) {
                        budget.charge()?;
                        used[next.row][next.col] = true;
                        stack.push((next, 0));
                    }
                }
            }
        }

        log::debug!(
            "Word search: '{}' not found after {} steps",
            word,
            budget.used
        );
        Ok(None)
    }

    /// Path spelling `word` with default parameters (case-insensitive,
    /// unbounded), or None.
    #[must_use]
    pub fn find_path(&self, word: &str) -> Option<Vec<Position>> {
        // Unbounded search cannot exhaust its budget.
        self.search(word, &SearchParams::default()).ok().flatten()
    }

    /// True if `word` can be traced through the grid.
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        self.find_path(word).is_some()
    }
}

/// True if `word` can be traced through the grid given as `rows`,
/// comparing letters case-insensitively.
#[must_use]
pub fn find_word<S: AsRef<str>>(rows: &[S], word: &str) -> bool {
    Grid::new(rows).contains_word(word)
}
