use log::{debug, warn};
use rand::Rng;

/// Draws until `accept` holds, at most `attempts` times, then returns `fallback()`.
/// `what` names the draw in the log.
pub fn retry_or_fallback<R, T, D, A, F>(
    rng: &mut R,
    what: &str,
    attempts: usize,
    mut draw: D,
    accept: A,
    fallback: F,
) -> T
where
    R: Rng + ?Sized,
    D: FnMut(&mut R) -> T,
    A: Fn(&T) -> bool,
    F: FnOnce() -> T,
{
    for attempt in 1..=attempts {
        let candidate = draw(rng);
        if accept(&candidate) {
            if attempt > 1 {
                debug!("{}: accepted on attempt {}", what, attempt);
            }
            return candidate;
        }
    }
    warn!("{}: no acceptable draw in {} attempts, using fallback", what, attempts);
    fallback()
}
