use std::cmp::min;

/// Maximum number of bytes considered from either input.
///
/// Longer inputs are silently truncated before the computation. The bound
/// caps the working matrix at a fixed worst-case size and sits far above
/// any realistic command name length, so real candidates are never cut.
pub const MAX_INPUT_LEN: usize = 1024;

/// Computes a bounded Damerau–Levenshtein edit distance.
///
/// This is the restricted (optimal string alignment) variant: insertions,
/// deletions, substitutions, and adjacent transpositions each count as one
/// operation. The working matrix is kept between calls to avoid
/// reallocating; an engine belongs to a single caller and must not be
/// shared across threads.
#[derive(Debug, Default)]
pub struct DistanceEngine {
    cells: Vec<u32>,
}

impl DistanceEngine {
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Minimum number of single-byte edits (insert, delete, substitute,
    /// adjacent transpose) needed to transform `a` into `b`. Both inputs
    /// are truncated to [`MAX_INPUT_LEN`] bytes first.
    ///
    /// Arguments play fixed roles: when ranking, the query is always
    /// passed as `a` and the candidate as `b`, so results are
    /// reproducible across an invocation.
    pub fn distance(&mut self, a: &str, b: &str) -> usize {
        let a = truncated(a.as_bytes());
        let b = truncated(b.as_bytes());

        let stride = b.len() + 1;
        let needed = (a.len() + 1) * stride;
        if self.cells.len() < needed {
            self.cells.resize(needed, 0);
        }

        // cells[i * stride + j] is the distance between a[..i] and b[..j].
        // Every cell in the window is written before it is read, so stale
        // values from earlier calls never leak into the result.
        let cells = &mut self.cells;

        for i in 0..=a.len() {
            cells[i * stride] = i as u32;
        }
        for j in 0..=b.len() {
            cells[j] = j as u32;
        }

        for i in 1..=a.len() {
            for j in 1..=b.len() {
                let cost = u32::from(a[i - 1] != b[j - 1]);

                let mut best = min(
                    min(
                        cells[(i - 1) * stride + j] + 1,
                        cells[i * stride + j - 1] + 1,
                    ),
                    cells[(i - 1) * stride + j - 1] + cost,
                );

                if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                    best = min(best, cells[(i - 2) * stride + j - 2] + 1);
                }

                cells[i * stride + j] = best;
            }
        }

        cells[a.len() * stride + b.len()] as usize
    }
}

fn truncated(bytes: &[u8]) -> &[u8] {
    &bytes[..bytes.len().min(MAX_INPUT_LEN)]
}
