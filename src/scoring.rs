// Copyright (C) 2020-2026 Andy Kurnia.

use super::{mode_config, progress};

pub const TIME_BONUS_PER_SECOND: i64 = 5;
pub const MAX_TIME_BONUS: i64 = 200;
pub const HINT_PENALTY: i64 = 50;

// faster than par earns 5 points per second, up to 200.
#[inline(always)]
pub fn time_bonus(par_seconds: u32, time_seconds: u64) -> i64 {
    let under_par = par_seconds as i64 - time_seconds.min(i64::MAX as u64) as i64;
    under_par
        .saturating_mul(TIME_BONUS_PER_SECOND)
        .clamp(0, MAX_TIME_BONUS)
}

// accuracy maps onto 0.5 to 1.0. a par override of zero still counts.
pub fn calculate_score(
    mode: mode_config::Mode,
    time_seconds: u64,
    accuracy: f64,
    hints_used: u32,
    par_override: Option<u32>,
) -> u32 {
    let config = mode.config();
    let par = par_override.unwrap_or_else(|| config.default_par_seconds());
    let accuracy = if accuracy.is_nan() {
        0.0
    } else {
        accuracy.clamp(0.0, 1.0)
    };
    let multiplier = 0.5 + accuracy * 0.5;
    let raw = (config.base_points() as i64 + time_bonus(par, time_seconds)) as f64 * multiplier;
    let score = raw.round() as i64 - hints_used as i64 * HINT_PENALTY;
    score.clamp(0, u32::MAX as i64) as u32
}

// easy is always open.
pub fn is_mode_unlocked(
    puzzle_progress: Option<&progress::PuzzleProgress>,
    mode: mode_config::Mode,
) -> bool {
    match mode.prerequisite() {
        None => true,
        Some(required) => {
            puzzle_progress.is_some_and(|p| p.modes.get(required).completed)
        }
    }
}

#[inline(always)]
pub fn next_mode(mode: mode_config::Mode) -> Option<mode_config::Mode> {
    mode.next()
}

#[inline(always)]
pub fn hint_allowance(mode: mode_config::Mode) -> u32 {
    mode.config().hint_allowance()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mode_config::Mode;

    #[test]
    fn easy_scenario() {
        // 3 of 3 correct, no hints, 20s against par 30.
        assert_eq!(calculate_score(Mode::Easy, 20, 1.0, 0, Some(30)), 550);
        assert_eq!(calculate_score(Mode::Easy, 20, 1.0, 0, None), 550);
    }

    #[test]
    fn formula_pieces() {
        // no bonus at or beyond par.
        assert_eq!(calculate_score(Mode::Hard, 60, 1.0, 0, None), 1000);
        assert_eq!(calculate_score(Mode::Hard, 6000, 1.0, 0, None), 1000);
        // half accuracy: (750 + 0) * 0.75.
        assert_eq!(calculate_score(Mode::Medium, 45, 0.5, 0, None), 563);
        // zero accuracy halves.
        assert_eq!(calculate_score(Mode::Extreme, 500, 0.0, 0, None), 750);
        // hints cost 50 each.
        assert_eq!(calculate_score(Mode::Easy, 30, 1.0, 2, None), 400);
        // floor at zero.
        assert_eq!(calculate_score(Mode::Easy, 30, 0.0, 20, None), 0);
        // explicit zero par means no bonus ever.
        assert_eq!(calculate_score(Mode::Easy, 0, 1.0, 0, Some(0)), 500);
        // out-of-range accuracy is clamped.
        assert_eq!(calculate_score(Mode::Easy, 30, 1.5, 0, None), 500);
        assert_eq!(calculate_score(Mode::Easy, 30, f64::NAN, 0, None), 250);
    }

    #[test]
    fn non_increasing_in_time_and_saturating() {
        for mode in Mode::ALL {
            let par = mode.config().default_par_seconds() as u64;
            let mut prev = u32::MAX;
            for t in 0..=par + 10 {
                let score = calculate_score(mode, t, 0.8, 1, None);
                assert!(score <= prev, "{} at {}", mode, t);
                prev = score;
            }
            let best = calculate_score(mode, 0, 0.8, 1, None);
            for t in 0..=par.saturating_sub(40) {
                assert_eq!(calculate_score(mode, t, 0.8, 1, None), best);
            }
        }
    }

    #[test]
    fn unlock_chain() {
        assert!(is_mode_unlocked(None, Mode::Easy));
        for mode in [Mode::Medium, Mode::Hard, Mode::Extreme] {
            assert!(!is_mode_unlocked(None, mode));
        }
        let mut p = progress::PuzzleProgress::new("dd-001");
        assert!(!is_mode_unlocked(Some(&p), Mode::Extreme));
        p.modes.get_mut(Mode::Hard).completed = true;
        // extreme only cares about hard.
        assert!(is_mode_unlocked(Some(&p), Mode::Extreme));
        assert!(!is_mode_unlocked(Some(&p), Mode::Medium));
        assert!(!is_mode_unlocked(Some(&p), Mode::Hard));
        p.modes.get_mut(Mode::Easy).completed = true;
        assert!(is_mode_unlocked(Some(&p), Mode::Medium));
    }

    #[test]
    fn helpers() {
        assert_eq!(next_mode(Mode::Medium), Some(Mode::Hard));
        assert_eq!(next_mode(Mode::Extreme), None);
        assert_eq!(hint_allowance(Mode::Easy), 2);
        assert_eq!(hint_allowance(Mode::Extreme), 0);
    }
}
