//! Shared test helpers for `wincmdline_core` integration tests.

#![allow(unreachable_pub)]

// ─── Simple deterministic PRNG (LCG) ────────────────────────────────────────

pub struct SimpleRng(u64);

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    pub fn gen_range(&mut self, max: usize) -> usize {
        ((self.next() >> 33) as usize) % max
    }

    pub fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.gen_range(items.len())]
    }
}

// ─── Argument generators ────────────────────────────────────────────────────

/// Characters weighted towards the ones the grammar cares about.
const INTERESTING: &[char] = &[
    '"', '"', '\\', '\\', '\\', ' ', ' ', '\t', 'a', 'b', 'Z', '0', '\n', '^', '%', '&', 'é', '€',
    '😀',
];

/// A random string over [`INTERESTING`], never containing NUL.
#[allow(dead_code)]
pub fn random_text(rng: &mut SimpleRng, max_len: usize) -> String {
    let len = rng.gen_range(max_len + 1);
    (0..len).map(|_| rng.pick(INTERESTING)).collect()
}

/// A random program: like [`random_text`] but without quotes.
#[allow(dead_code)]
pub fn random_program(rng: &mut SimpleRng, max_len: usize) -> String {
    random_text(rng, max_len).replace('"', "")
}

/// A random command: a program followed by up to `max_args` arguments.
#[allow(dead_code)]
pub fn random_command(rng: &mut SimpleRng, max_args: usize, max_len: usize) -> Vec<String> {
    let mut command = vec![random_program(rng, max_len)];
    for _ in 0..rng.gen_range(max_args + 1) {
        command.push(random_text(rng, max_len));
    }
    command
}

/// Truncate a string for assertion messages (safe for multi-byte UTF-8).
#[allow(dead_code)]
pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        let safe_end = (0..=max)
            .rev()
            .find(|&i| s.is_char_boundary(i))
            .unwrap_or(0);
        format!("{}…({} bytes total)", &s[..safe_end], s.len())
    }
}
