// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Wall-clock timing of every strategy against a short and a long fixture.
//!
//! This is the harness behind the `power-set-bench` binary. It runs each
//! selected strategy on the short fixture first, then on the long one, and
//! reports one [`Measurement`] per pair. For statistically careful numbers
//! use the criterion benches instead.

use crate::error::{PowerSetError, Result};
use crate::strategies::{subset_count, Strategy, MAX_ELEMENTS};
use std::fmt::Write;
use std::hint::black_box;
use std::time::{Duration, Instant};
use tracing::info;

/// Length of the long fixture when none is configured.
pub const DEFAULT_LONG_LEN: usize = 20;

/// A named input sequence `1..=len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub name: &'static str,
    pub elements: Vec<u32>,
}

impl Fixture {
    /// `[1, 2, 3]`.
    pub fn short() -> Self {
        Self {
            name: "short",
            elements: vec![1, 2, 3],
        }
    }

    /// `[1, 2, ..., len]`.
    ///
    /// Fails with [`PowerSetError::TooManyElements`] before allocating
    /// anything if no strategy could take `len` elements.
    pub fn long(len: usize) -> Result<Self> {
        subset_count(len)?;
        let last = u32::try_from(len).map_err(|_| PowerSetError::TooManyElements {
            len,
            max: MAX_ELEMENTS,
        })?;
        Ok(Self {
            name: "long",
            elements: (1..=last).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// What to run and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Strategies to time, in order. Empty means every strategy.
    pub strategies: Vec<Strategy>,
    /// Length of the long fixture.
    pub long_len: usize,
    /// Runs per measurement; the fastest is reported.
    pub repeat: usize,
    /// Fail if any run returns the wrong number of subsets.
    pub verify: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            strategies: Vec::new(),
            long_len: DEFAULT_LONG_LEN,
            repeat: 1,
            verify: false,
        }
    }
}

impl BenchConfig {
    /// The strategies this configuration selects.
    pub fn selected(&self) -> Vec<Strategy> {
        if self.strategies.is_empty() {
            Strategy::all().collect()
        } else {
            self.strategies.clone()
        }
    }

    /// The short fixture, then the long one.
    pub fn fixtures(&self) -> Result<[Fixture; 2]> {
        Ok([Fixture::short(), Fixture::long(self.long_len)?])
    }
}

/// Timing of one strategy on one fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub strategy: Strategy,
    pub fixture: &'static str,
    pub len: usize,
    pub subsets: usize,
    pub elapsed: Duration,
}

/// Time `strategy` on `fixture`, keeping the fastest of `repeat` runs.
///
/// The subset count reported is that of the last run.
pub fn measure(strategy: Strategy, fixture: &Fixture, repeat: usize) -> Result<Measurement> {
    let mut fastest = Duration::MAX;
    let mut subsets = 0;
    for _ in 0..repeat.max(1) {
        let start = Instant::now();
        let result = strategy.power_set(black_box(&fixture.elements))?;
        let elapsed = start.elapsed();
        subsets = black_box(result).len();
        fastest = fastest.min(elapsed);
    }
    Ok(Measurement {
        strategy,
        fixture: fixture.name,
        len: fixture.len(),
        subsets,
        elapsed: fastest,
    })
}

/// Run every selected strategy on the short fixture, then on the long one.
pub fn run(config: &BenchConfig) -> Result<Vec<Measurement>> {
    let fixtures = config.fixtures()?;
    let strategies = config.selected();
    let mut measurements = Vec::with_capacity(2 * strategies.len());

    for fixture in fixtures {
        let expected = subset_count(fixture.len())?;
        for &strategy in &strategies {
            let measurement = measure(strategy, &fixture, config.repeat)?;
            info!(
                strategy = strategy.name(),
                fixture = fixture.name,
                len = measurement.len,
                subsets = measurement.subsets,
                elapsed = ?measurement.elapsed,
                "{}---{}",
                strategy,
                fixture.name
            );
            if config.verify && measurement.subsets != expected {
                return Err(PowerSetError::CountMismatch {
                    strategy: strategy.to_string(),
                    len: fixture.len(),
                    expected,
                    actual: measurement.subsets,
                });
            }
            measurements.push(measurement);
        }
    }
    Ok(measurements)
}

/// Render measurements as a fixed-width table.
pub fn render_table(measurements: &[Measurement]) -> String {
    let width = measurements
        .iter()
        .map(|m| m.strategy.name().len())
        .max()
        .unwrap_or(0)
        .max("strategy".len());

    let mut table = String::new();
    let _ = writeln!(
        table,
        "{:<width$}  {:<7} {:>4} {:>10} {:>14}",
        "strategy", "fixture", "n", "subsets", "elapsed"
    );
    for m in measurements {
        let _ = writeln!(
            table,
            "{:<width$}  {:<7} {:>4} {:>10} {:>14}",
            m.strategy.name(),
            m.fixture,
            m.len,
            m.subsets,
            format!("{:.3?}", m.elapsed)
        );
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures() {
        assert_eq!(Fixture::short().elements, vec![1, 2, 3]);
        let long = Fixture::long(20).unwrap();
        assert_eq!(long.len(), 20);
        assert_eq!(long.elements.first(), Some(&1));
        assert_eq!(long.elements.last(), Some(&20));
        assert!(Fixture::long(0).unwrap().is_empty());
    }

    #[test]
    fn test_default_config_selects_everything() {
        let config = BenchConfig::default();
        assert_eq!(config.selected().len(), 9);
        assert_eq!(config.long_len, DEFAULT_LONG_LEN);
        let [short, long] = config.fixtures().unwrap();
        assert_eq!(short.name, "short");
        assert_eq!(long.len(), 20);
    }

    #[test]
    fn test_run_orders_short_before_long() {
        let config = BenchConfig {
            strategies: vec![Strategy::DoublingFold, Strategy::BreadthFirstQueue],
            long_len: 6,
            repeat: 2,
            verify: true,
        };
        let measurements = run(&config).unwrap();
        let summary: Vec<_> = measurements
            .iter()
            .map(|m| (m.strategy, m.fixture, m.subsets))
            .collect();
        assert_eq!(
            summary,
            vec![
                (Strategy::DoublingFold, "short", 8),
                (Strategy::BreadthFirstQueue, "short", 8),
                (Strategy::DoublingFold, "long", 64),
                (Strategy::BreadthFirstQueue, "long", 64),
            ]
        );
    }

    #[test]
    fn test_zero_repeat_still_measures_once() {
        let m = measure(Strategy::BinaryCounterShift, &Fixture::short(), 0).unwrap();
        assert_eq!(m.subsets, 8);
        assert!(m.elapsed < Duration::MAX);
    }

    #[test]
    fn test_long_fixture_beyond_limit_is_an_error() {
        let config = BenchConfig {
            strategies: vec![Strategy::DoublingLoop],
            long_len: MAX_ELEMENTS + 1,
            ..BenchConfig::default()
        };
        assert!(matches!(
            run(&config),
            Err(PowerSetError::TooManyElements { .. })
        ));
    }

    #[test]
    fn test_long_fixture_wider_than_u32_is_an_error() {
        let len = u32::MAX as usize + 4;
        assert_eq!(
            Fixture::long(len),
            Err(PowerSetError::TooManyElements {
                len,
                max: MAX_ELEMENTS
            })
        );

        let config = BenchConfig {
            strategies: vec![Strategy::DoublingLoop],
            long_len: len,
            ..BenchConfig::default()
        };
        assert_eq!(
            run(&config),
            Err(PowerSetError::TooManyElements {
                len,
                max: MAX_ELEMENTS
            })
        );
    }

    #[test]
    fn test_render_table() {
        let table = render_table(&[Measurement {
            strategy: Strategy::DoublingLoop,
            fixture: "short",
            len: 3,
            subsets: 8,
            elapsed: Duration::from_micros(12),
        }]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("strategy"));
        assert!(lines[1].starts_with("doubling-loop"));
        assert!(lines[1].contains("12.000µs"));
    }
}
