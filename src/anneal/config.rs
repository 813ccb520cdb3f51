//! Annealing schedule configuration.
//!
//! The schedule itself is [`SaConfig`]; this module supplies the defaults for
//! the mTSP driver, validation, and the temperature update.

use u_metaheur::sa::{CoolingSchedule, SaConfig};

use crate::error::MtspError;

/// Starting temperature of the default schedule.
pub const DEFAULT_INITIAL_TEMPERATURE: f64 = 1000.0;

/// Geometric cooling factor of the default schedule.
pub const DEFAULT_COOLING_RATE: f64 = 0.995;

/// Trials per temperature level in the default schedule.
pub const DEFAULT_TRIALS_PER_TEMPERATURE: usize = 5_000;

/// The run stops once the temperature is at or below this floor.
pub const DEFAULT_TEMPERATURE_FLOOR: f64 = 1e-10;

/// Levels used by linear cooling when no iteration budget is set.
const DEFAULT_LINEAR_LEVELS: usize = 1000;

/// The classic mTSP schedule: T₀ = 1000, geometric α = 0.995, 5000 trials
/// per level, floor 1e-10, unseeded.
///
/// # Examples
///
/// ```
/// use u_mtsp::anneal::default_config;
///
/// let config = default_config().with_seed(7);
/// assert_eq!(config.iterations_per_temperature, 5000);
/// assert!(config.validate().is_ok());
/// ```
pub fn default_config() -> SaConfig {
    SaConfig::default()
        .with_initial_temperature(DEFAULT_INITIAL_TEMPERATURE)
        .with_min_temperature(DEFAULT_TEMPERATURE_FLOOR)
        .with_cooling(CoolingSchedule::Geometric {
            alpha: DEFAULT_COOLING_RATE,
        })
        .with_iterations_per_temperature(DEFAULT_TRIALS_PER_TEMPERATURE)
}

/// Number of geometric cooling levels run before `initial · alphaᵏ ≤ floor`.
///
/// Returns `None` unless `alpha` lies in (0, 1) and both temperatures are
/// finite and positive. A start at or below the floor needs no levels.
///
/// # Examples
///
/// ```
/// use u_mtsp::anneal::geometric_levels;
///
/// assert_eq!(geometric_levels(100.0, 0.5, 0.1), Some(10));
/// assert_eq!(geometric_levels(1.0, 0.5, 2.0), Some(0));
/// assert_eq!(geometric_levels(100.0, 1.0, 0.1), None);
/// ```
pub fn geometric_levels(initial: f64, alpha: f64, floor: f64) -> Option<usize> {
    let positive = |t: f64| t.is_finite() && t > 0.0;
    if !(alpha > 0.0 && alpha < 1.0) || !positive(initial) || !positive(floor) {
        return None;
    }
    if initial <= floor {
        return Some(0);
    }
    Some(((floor / initial).ln() / alpha.ln()).ceil() as usize)
}

/// Rejects schedules the driver cannot run.
///
/// On top of [`SaConfig::validate`] (which also requires the floor to sit
/// strictly below the start), every temperature and cooling parameter must
/// be finite.
pub(crate) fn validate(config: &SaConfig) -> Result<(), MtspError> {
    let finite = |value: f64, name: &str| {
        if value.is_finite() {
            Ok(())
        } else {
            Err(MtspError::InvalidConfig(format!(
                "{name} must be finite, got {value}"
            )))
        }
    };
    finite(config.initial_temperature, "initial_temperature")?;
    finite(config.min_temperature, "min_temperature")?;
    match config.cooling {
        CoolingSchedule::Geometric { alpha } => finite(alpha, "geometric alpha")?,
        CoolingSchedule::LundyMees { beta } => finite(beta, "lundy-mees beta")?,
        CoolingSchedule::Linear => {}
    }
    config.validate().map_err(MtspError::InvalidConfig)?;
    let needs_trials = !matches!(config.cooling, CoolingSchedule::LundyMees { .. });
    if needs_trials && config.iterations_per_temperature == 0 {
        return Err(MtspError::InvalidConfig(
            "iterations_per_temperature must be positive".into(),
        ));
    }
    Ok(())
}

/// Trials run at each temperature level.
pub(crate) fn trials_per_level(config: &SaConfig) -> usize {
    match config.cooling {
        CoolingSchedule::LundyMees { .. } => 1,
        _ => config.iterations_per_temperature,
    }
}

/// Number of levels linear cooling spreads the temperature drop over.
pub(crate) fn linear_levels(config: &SaConfig) -> usize {
    match config.cooling {
        CoolingSchedule::Linear if config.max_iterations > 0 => {
            (config.max_iterations / config.iterations_per_temperature).max(1)
        }
        CoolingSchedule::Linear => DEFAULT_LINEAR_LEVELS,
        _ => 0,
    }
}

/// Temperature after completing level `level` (zero-based).
pub(crate) fn next_temperature(
    temperature: f64,
    config: &SaConfig,
    level: usize,
    linear_levels: usize,
) -> f64 {
    match config.cooling {
        CoolingSchedule::Geometric { alpha } => temperature * alpha,
        CoolingSchedule::Linear => {
            let span = config.initial_temperature - config.min_temperature;
            let t = config.initial_temperature - (level + 1) as f64 * span / linear_levels as f64;
            t.max(config.min_temperature)
        }
        CoolingSchedule::LundyMees { beta } => temperature / (1.0 + beta * temperature),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert_eq!(config.initial_temperature, 1000.0);
        assert_eq!(config.min_temperature, 1e-10);
        assert_eq!(config.iterations_per_temperature, 5000);
        assert!(matches!(
            config.cooling,
            CoolingSchedule::Geometric { alpha } if alpha == 0.995
        ));
        assert!(config.seed.is_none());
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_schedules() {
        let negative = default_config().with_initial_temperature(-1.0);
        assert!(matches!(
            validate(&negative),
            Err(MtspError::InvalidConfig(_))
        ));

        let bad_alpha = default_config().with_cooling(CoolingSchedule::Geometric { alpha: 1.0 });
        assert!(validate(&bad_alpha).is_err());

        let no_trials = default_config().with_iterations_per_temperature(0);
        assert!(validate(&no_trials).is_err());

        let infinite = default_config().with_initial_temperature(f64::INFINITY);
        assert!(validate(&infinite).is_err());
    }

    #[test]
    fn test_validate_rejects_nan_parameters() {
        let configs = [
            default_config().with_cooling(CoolingSchedule::Geometric { alpha: f64::NAN }),
            default_config().with_min_temperature(f64::NAN),
            default_config().with_initial_temperature(f64::NAN),
            default_config().with_cooling(CoolingSchedule::LundyMees { beta: f64::NAN }),
            default_config().with_cooling(CoolingSchedule::LundyMees { beta: f64::INFINITY }),
        ];
        for config in &configs {
            assert!(
                matches!(validate(config), Err(MtspError::InvalidConfig(_))),
                "{config:?}"
            );
        }
    }

    #[test]
    fn test_validate_rejects_start_at_or_below_floor() {
        let below = default_config().with_initial_temperature(1e-11);
        assert!(matches!(
            validate(&below),
            Err(MtspError::InvalidConfig(msg)) if msg.contains("min_temperature")
        ));
        let equal = default_config().with_initial_temperature(DEFAULT_TEMPERATURE_FLOOR);
        assert!(validate(&equal).is_err());
    }

    #[test]
    fn test_geometric_levels_classic_schedule() {
        let expected = ((1e-10f64 / 1000.0).ln() / 0.995f64.ln()).ceil() as usize;
        assert_eq!(geometric_levels(1000.0, 0.995, 1e-10), Some(expected));
        assert_eq!(expected, 5972);
    }

    #[test]
    fn test_geometric_levels_rejects_bad_inputs() {
        assert_eq!(geometric_levels(100.0, 1.0, 0.1), None);
        assert_eq!(geometric_levels(100.0, 1.5, 0.1), None);
        assert_eq!(geometric_levels(100.0, 0.0, 0.1), None);
        assert_eq!(geometric_levels(100.0, f64::NAN, 0.1), None);
        assert_eq!(geometric_levels(f64::INFINITY, 0.9, 0.1), None);
        assert_eq!(geometric_levels(100.0, 0.9, 0.0), None);
        assert_eq!(geometric_levels(1e-11, 0.9, 1e-10), Some(0));
    }

    #[test]
    fn test_next_temperature_geometric() {
        let config = default_config();
        let t = next_temperature(1000.0, &config, 0, 0);
        assert!((t - 995.0).abs() < 1e-9);
    }

    #[test]
    fn test_linear_reaches_floor() {
        let config = default_config()
            .with_cooling(CoolingSchedule::Linear)
            .with_initial_temperature(10.0)
            .with_min_temperature(1.0)
            .with_iterations_per_temperature(10)
            .with_max_iterations(30);
        let levels = linear_levels(&config);
        assert_eq!(levels, 3);
        let mut t = config.initial_temperature;
        for level in 0..levels {
            t = next_temperature(t, &config, level, levels);
        }
        assert_eq!(t, 1.0);
    }

    #[test]
    fn test_lundy_mees_one_trial_per_level() {
        let config = default_config().with_cooling(CoolingSchedule::LundyMees { beta: 0.01 });
        assert_eq!(trials_per_level(&config), 1);
        let t = next_temperature(100.0, &config, 0, 0);
        assert!((t - 50.0).abs() < 1e-12);
    }
}
