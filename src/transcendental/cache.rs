//! Precision-keyed memoisation for the constants every other function in
//! this module eventually needs: `pi`, `ln2`, `ln10`, `e`. Computing any of
//! these to a thousand digits is not cheap, and callers routinely ask for
//! the same precision repeatedly (every `exp` call at a given precision
//! wants the same `ln2`), so each is cached the first time it's computed
//! at a given precision and reused after that.

use crate::decimal::Decimal;
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

#[derive(Default)]
struct Caches {
    pi: HashMap<usize, Decimal>,
    ln2: HashMap<usize, Decimal>,
    ln10: HashMap<usize, Decimal>,
    e: HashMap<usize, Decimal>,
}

fn store() -> &'static Mutex<Caches> {
    static STORE: OnceLock<Mutex<Caches>> = OnceLock::new();
    STORE.get_or_init(|| Mutex::new(Caches::default()))
}

/// Fetches `field(precision)` from the cache, computing and inserting it
/// via `compute` on a miss. `compute` must not itself try to lock the same
/// cache store (it runs with no lock held, so reentrant cache lookups for
/// a different constant are fine, but recursing into the same field would
/// just duplicate work, not deadlock).
fn get_or_compute(
    field: impl Fn(&Caches) -> &HashMap<usize, Decimal>,
    field_mut: impl Fn(&mut Caches) -> &mut HashMap<usize, Decimal>,
    precision: usize,
    compute: impl FnOnce() -> Decimal,
) -> Decimal {
    if let Some(v) = field(&store().lock().unwrap()).get(&precision) {
        return v.clone();
    }
    let value = compute();
    field_mut(&mut store().lock().unwrap()).insert(precision, value.clone());
    value
}

pub(crate) fn get_pi(precision: usize) -> Decimal {
    get_or_compute(|c| &c.pi, |c| &mut c.pi, precision, || crate::transcendental::pi::compute_pi(precision))
}

pub(crate) fn get_ln2(precision: usize) -> Decimal {
    get_or_compute(|c| &c.ln2, |c| &mut c.ln2, precision, || crate::transcendental::ln::bootstrap_ln2(precision))
}

pub(crate) fn get_ln10(precision: usize) -> Decimal {
    get_or_compute(|c| &c.ln10, |c| &mut c.ln10, precision, || crate::transcendental::ln::bootstrap_ln10(precision))
}

pub(crate) fn get_e(precision: usize) -> Decimal {
    get_or_compute(|c| &c.e, |c| &mut c.e, precision, || {
        crate::transcendental::exp::exp(&Decimal::one(), precision, crate::rounding::RoundingMode::HalfEven)
            .expect("exp(1, _) never fails")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pi_cache_returns_the_same_value_on_repeat_lookups() {
        let a = get_pi(20);
        let b = get_pi(20);
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_precisions_cache_independently() {
        let low = get_ln2(10);
        let high = get_ln2(30);
        assert!(low != high || low.digit_count() <= high.digit_count());
    }
}
