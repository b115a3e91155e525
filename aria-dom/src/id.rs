use std::sync::atomic::{AtomicUsize, Ordering};

/// Monotonic per-process counter for widget instance ids.
///
/// Each widget type owns a `static` counter so ids stay unique without any
/// registry.
#[derive(Debug)]
pub struct IdCounter(AtomicUsize);

impl IdCounter {
    pub const fn new() -> Self {
        Self(AtomicUsize::new(0))
    }

    pub fn next(&self) -> usize {
        self.0.fetch_add(1, Ordering::SeqCst)
    }
}

impl Default for IdCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Join id parts with `--`, skipping empty parts.
///
/// `make_id("tooltip", "3")` is `"tooltip--3"`.
pub fn make_id<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .filter(|p| !p.as_ref().is_empty())
        .map(|p| p.as_ref().to_string())
        .collect::<Vec<_>>()
        .join("--")
}

/// Stable 32-bit string hash (`h * 31 + c`, wrapping) for value-derived ids.
///
/// Stable across processes, unlike `std`'s randomized hasher.
pub fn string_hash(value: &str) -> u32 {
    value
        .chars()
        .fold(0u32, |hash, c| hash.wrapping_mul(31).wrapping_add(c as u32))
}
