// Copyright (C) 2020-2026 Andy Kurnia.

use super::error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Easy, Mode::Medium, Mode::Hard, Mode::Extreme];

    #[inline(always)]
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Easy => "easy",
            Mode::Medium => "medium",
            Mode::Hard => "hard",
            Mode::Extreme => "extreme",
        }
    }

    #[inline(always)]
    pub fn config(self) -> &'static ModeConfig {
        &MODE_CONFIGS[self as usize]
    }

    // fixed linear progression.
    #[inline(always)]
    pub fn next(self) -> Option<Mode> {
        match self {
            Mode::Easy => Some(Mode::Medium),
            Mode::Medium => Some(Mode::Hard),
            Mode::Hard => Some(Mode::Extreme),
            Mode::Extreme => None,
        }
    }

    // the mode that must be completed first. easy needs nothing.
    #[inline(always)]
    pub fn prerequisite(self) -> Option<Mode> {
        match self {
            Mode::Easy => None,
            Mode::Medium => Some(Mode::Easy),
            Mode::Hard => Some(Mode::Medium),
            Mode::Extreme => Some(Mode::Hard),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = error::MyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| error::new(format!("invalid mode {:?}", s)))
    }
}

// content-side difficulty label, capitalized in json.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    #[inline(always)]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Extreme => "Extreme",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub enum Feedback {
    // every placement is graded at once, wrong words bounce back.
    Instant,
    // nothing is graded until the whole answer is submitted.
    Deferred,
}

pub struct StaticModeConfig {
    base_points: u32,
    default_par_seconds: u32,
    hint_allowance: u32,
    feedback: Feedback,
    blanks_whole_verse: bool,
}

pub enum ModeConfig {
    Static(StaticModeConfig),
}

impl ModeConfig {
    #[inline(always)]
    pub fn base_points(&self) -> u32 {
        match self {
            ModeConfig::Static(x) => x.base_points,
        }
    }

    #[inline(always)]
    pub fn default_par_seconds(&self) -> u32 {
        match self {
            ModeConfig::Static(x) => x.default_par_seconds,
        }
    }

    #[inline(always)]
    pub fn hint_allowance(&self) -> u32 {
        match self {
            ModeConfig::Static(x) => x.hint_allowance,
        }
    }

    #[inline(always)]
    pub fn feedback(&self) -> &Feedback {
        match self {
            ModeConfig::Static(x) => &x.feedback,
        }
    }

    #[inline(always)]
    pub fn has_instant_feedback(&self) -> bool {
        matches!(self.feedback(), Feedback::Instant)
    }

    // extreme mode: every word of the verse is a blank, no distractors.
    #[inline(always)]
    pub fn blanks_whole_verse(&self) -> bool {
        match self {
            ModeConfig::Static(x) => x.blanks_whole_verse,
        }
    }
}

// indexed by Mode as usize.
static MODE_CONFIGS: [ModeConfig; 4] = [
    ModeConfig::Static(StaticModeConfig {
        base_points: 500,
        default_par_seconds: 30,
        hint_allowance: 2,
        feedback: Feedback::Instant,
        blanks_whole_verse: false,
    }),
    ModeConfig::Static(StaticModeConfig {
        base_points: 750,
        default_par_seconds: 45,
        hint_allowance: 1,
        feedback: Feedback::Instant,
        blanks_whole_verse: false,
    }),
    ModeConfig::Static(StaticModeConfig {
        base_points: 1000,
        default_par_seconds: 60,
        hint_allowance: 0,
        feedback: Feedback::Deferred,
        blanks_whole_verse: false,
    }),
    ModeConfig::Static(StaticModeConfig {
        base_points: 1500,
        default_par_seconds: 120,
        hint_allowance: 0,
        feedback: Feedback::Deferred,
        blanks_whole_verse: true,
    }),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_names_round_trip() {
        for mode in Mode::ALL {
            assert_eq!(mode.as_str().parse::<Mode>().unwrap(), mode);
        }
        assert_eq!(" HARD ".parse::<Mode>().unwrap(), Mode::Hard);
        assert!("brutal".parse::<Mode>().is_err());
    }

    #[test]
    fn progression_chain() {
        assert_eq!(Mode::Easy.next(), Some(Mode::Medium));
        assert_eq!(Mode::Hard.next(), Some(Mode::Extreme));
        assert_eq!(Mode::Extreme.next(), None);
        for mode in Mode::ALL {
            if let Some(next) = mode.next() {
                assert_eq!(next.prerequisite(), Some(mode));
            }
        }
        assert_eq!(Mode::Easy.prerequisite(), None);
    }

    #[test]
    fn per_mode_constants() {
        let points = Mode::ALL.map(|m| m.config().base_points());
        assert_eq!(points, [500, 750, 1000, 1500]);
        let pars = Mode::ALL.map(|m| m.config().default_par_seconds());
        assert_eq!(pars, [30, 45, 60, 120]);
        let hints = Mode::ALL.map(|m| m.config().hint_allowance());
        assert_eq!(hints, [2, 1, 0, 0]);
        let instant = Mode::ALL.map(|m| m.config().has_instant_feedback());
        assert_eq!(instant, [true, true, false, false]);
        let whole = Mode::ALL.map(|m| m.config().blanks_whole_verse());
        assert_eq!(whole, [false, false, false, true]);
    }

    #[test]
    fn serde_tags() {
        assert_eq!(serde_json::to_string(&Mode::Extreme).unwrap(), "\"extreme\"");
        assert_eq!(
            serde_json::from_str::<Difficulty>("\"Medium\"").unwrap(),
            Difficulty::Medium
        );
        assert!(serde_json::from_str::<Difficulty>("\"medium\"").is_err());
    }
}
