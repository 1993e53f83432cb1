use std::env;

use vozmapa_common::VozmapaError;

/// Generation knobs for the seed pass. Env overrides exist so a staging
/// build can thin out or widen the dataset without a recompile.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Stories generated per roster district.
    pub stories_per_district: usize,
    /// Share of stories drawn from the daily-life pool instead of a health
    /// theme.
    pub daily_life_ratio: f64,
    /// Closed range of days that back-dated timestamps reach into the past.
    pub min_days_ago: i64,
    pub max_days_ago: i64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            stories_per_district: 35,
            daily_life_ratio: 0.15,
            min_days_ago: 1,
            max_days_ago: 120,
        }
    }
}

impl SeedConfig {
    /// Load the defaults with `SEED_*` environment overrides applied.
    pub fn from_env() -> Result<Self, VozmapaError> {
        let defaults = Self::default();
        let config = Self {
            stories_per_district: env_parse(
                "SEED_STORIES_PER_DISTRICT",
                defaults.stories_per_district,
            )?,
            daily_life_ratio: env_parse("SEED_DAILY_LIFE_RATIO", defaults.daily_life_ratio)?,
            min_days_ago: env_parse("SEED_MIN_DAYS_AGO", defaults.min_days_ago)?,
            max_days_ago: env_parse("SEED_MAX_DAYS_AGO", defaults.max_days_ago)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject knob combinations the generator cannot honor.
    pub fn validate(&self) -> Result<(), VozmapaError> {
        if !(0.0..=1.0).contains(&self.daily_life_ratio) {
            return Err(VozmapaError::Config(format!(
                "daily_life_ratio must be within [0, 1], got {}",
                self.daily_life_ratio
            )));
        }
        if self.min_days_ago < 1 || self.max_days_ago < self.min_days_ago {
            return Err(VozmapaError::Config(format!(
                "day window must satisfy 1 <= min <= max, got {}..{}",
                self.min_days_ago, self.max_days_ago
            )));
        }
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> Result<T, VozmapaError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| VozmapaError::Config(format!("{name} must be a number, got '{raw}'"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_dataset() {
        let config = SeedConfig::default();
        assert_eq!(config.stories_per_district, 35);
        assert_eq!(config.daily_life_ratio, 0.15);
        assert_eq!(config.min_days_ago, 1);
        assert_eq!(config.max_days_ago, 120);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_knobs() {
        let mut config = SeedConfig::default();
        config.daily_life_ratio = 1.5;
        assert!(config.validate().is_err());

        let mut config = SeedConfig::default();
        config.min_days_ago = 30;
        config.max_days_ago = 7;
        assert!(config.validate().is_err());
    }

    #[test]
    fn same_day_backdating_is_rejected() {
        let mut config = SeedConfig::default();
        config.min_days_ago = 0;
        assert!(config.validate().is_err());

        config.max_days_ago = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn env_overrides_and_malformed_values() {
        env::set_var("SEED_STORIES_PER_DISTRICT", "5");
        let config = SeedConfig::from_env().unwrap();
        assert_eq!(config.stories_per_district, 5);
        env::remove_var("SEED_STORIES_PER_DISTRICT");

        env::set_var("SEED_DAILY_LIFE_RATIO", "plenty");
        assert!(SeedConfig::from_env().is_err());
        env::remove_var("SEED_DAILY_LIFE_RATIO");
    }
}
