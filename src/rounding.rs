use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoundingMode {
    Closest,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundingConfig {
    pub increment_minutes: u32,
    pub mode: RoundingMode,
}

impl Default for RoundingConfig {
    fn default() -> Self {
        Self {
            increment_minutes: 30,
            mode: RoundingMode::Up,
        }
    }
}

/// Rounds on the signed value: `Up` is a ceiling and `Down` a floor, so a
/// negative duration rounds toward zero under `Up`. `Closest` breaks ties
/// upward.
pub fn round_seconds(seconds: i64, cfg: &RoundingConfig) -> i64 {
    if cfg.increment_minutes == 0 {
        return seconds;
    }

    let increment_seconds = i64::from(cfg.increment_minutes) * 60;

    let lower = seconds.div_euclid(increment_seconds) * increment_seconds;
    let upper = if seconds.rem_euclid(increment_seconds) == 0 {
        lower
    } else {
        lower.saturating_add(increment_seconds)
    };

    match cfg.mode {
        RoundingMode::Down => lower,
        RoundingMode::Up => upper,
        RoundingMode::Closest => {
            if upper - seconds <= seconds - lower {
                upper
            } else {
                lower
            }
        }
    }
}

/// Renders seconds as hours: `"2"` when whole, otherwise at most two
/// decimals with trailing zeros dropped (`"1.5"`, `"0.25"`).
pub fn format_hours(seconds: i64) -> String {
    if seconds % 3600 == 0 {
        return format!("{}", seconds / 3600);
    }

    let hours = format!("{:.2}", seconds as f64 / 3600.0);
    hours
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
