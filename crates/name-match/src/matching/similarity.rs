use std::collections::HashMap;

/// Sequences at least this long drop overly frequent elements from the position
/// index before matching.
const AUTOJUNK_MIN_LEN: usize = 200;

/// A block of `size` equal elements starting at `a` in the first sequence and `b`
/// in the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingBlock {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

/// Longest-matching-block sequence matcher over the characters of two strings.
///
/// The ratio is `2 * M / T`, where `M` counts the characters covered by the
/// matching blocks and `T` is the combined length of both strings.
#[derive(Debug, Clone)]
pub struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,
    b_positions: HashMap<char, Vec<usize>>,
}

impl SequenceMatcher {
    pub fn new(a: &str, b: &str) -> Self {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let b_positions = index_positions(&b);
        Self { a, b, b_positions }
    }

    /// Non-overlapping matching blocks ordered by their position in `a`.
    pub fn matching_blocks(&self) -> Vec<MatchingBlock> {
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let block = self.longest_match(alo, ahi, blo, bhi);
            if block.size == 0 {
                continue;
            }
            if alo < block.a && blo < block.b {
                pending.push((alo, block.a, blo, block.b));
            }
            if block.a + block.size < ahi && block.b + block.size < bhi {
                pending.push((block.a + block.size, ahi, block.b + block.size, bhi));
            }
            blocks.push(block);
        }

        blocks.sort_by_key(|block| (block.a, block.b));
        blocks
    }

    pub fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        let matched: usize = self.matching_blocks().iter().map(|block| block.size).sum();
        2.0 * matched as f64 / total as f64
    }

    /// Longest block of equal elements inside `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Ties go to the block starting earliest in `a`, then earliest in `b`. The
    /// winner is then widened over neighbouring equal elements that the index may
    /// have skipped.
    fn longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> MatchingBlock {
        let (mut best_a, mut best_b, mut best_size) = (alo, blo, 0);
        let mut run_lengths: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut next_run_lengths = HashMap::new();
            if let Some(positions) = self.b_positions.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let run = j
                        .checked_sub(1)
                        .and_then(|prev| run_lengths.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_run_lengths.insert(j, run);
                    if run > best_size {
                        best_a = i + 1 - run;
                        best_b = j + 1 - run;
                        best_size = run;
                    }
                }
            }
            run_lengths = next_run_lengths;
        }

        while best_a > alo && best_b > blo && self.a[best_a - 1] == self.b[best_b - 1] {
            best_a -= 1;
            best_b -= 1;
            best_size += 1;
        }
        while best_a + best_size < ahi
            && best_b + best_size < bhi
            && self.a[best_a + best_size] == self.b[best_b + best_size]
        {
            best_size += 1;
        }

        MatchingBlock {
            a: best_a,
            b: best_b,
            size: best_size,
        }
    }
}

fn index_positions(b: &[char]) -> HashMap<char, Vec<usize>> {
    let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, ch) in b.iter().enumerate() {
        positions.entry(*ch).or_default().push(j);
    }

    if b.len() >= AUTOJUNK_MIN_LEN {
        let popular_threshold = b.len() / 100 + 1;
        positions.retain(|_, found| found.len() <= popular_threshold);
    }

    positions
}

/// Similarity ratio in `[0, 1]` between two strings.
///
/// The pair is scored in a fixed order so the result does not depend on argument
/// order, and equal strings (including two empty ones) score exactly 1.0.
pub fn similarity(left: &str, right: &str) -> f64 {
    if left == right {
        return 1.0;
    }
    let (a, b) = if left <= right {
        (left, right)
    } else {
        (right, left)
    };
    SequenceMatcher::new(a, b).ratio()
}
