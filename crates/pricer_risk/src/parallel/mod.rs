//! Rayon-based parallelisation across portfolios.
//!
//! Portfolios are independent, so each VaR runs on its own task with no
//! shared state. Results are identical to the sequential engine.

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::error::RiskError;
use crate::portfolio::Portfolio;
use crate::var::VarEngine;

/// Configuration for parallel execution.
#[derive(Clone, Debug)]
pub struct ParallelConfig {
    /// Minimum portfolios before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 2,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        n_items >= self.parallel_threshold
    }
}

/// Parallel map with early exit on the first error.
pub fn try_parallel_map<T, R, E, F>(items: &[T], mapper: F) -> Result<Vec<R>, E>
where
    T: Sync,
    R: Send,
    E: Send,
    F: Fn(&T) -> Result<R, E> + Sync + Send,
{
    items.par_iter().map(mapper).collect()
}

/// [`VarEngine::calculate_for_portfolios`] fanned out over the rayon pool.
///
/// Falls back to the sequential path below `config.parallel_threshold`.
///
/// # Errors
/// Same as the sequential engine.
pub fn calculate_for_portfolios(
    engine: &VarEngine,
    portfolios: &[Portfolio],
    config: &ParallelConfig,
) -> Result<BTreeMap<String, f64>, RiskError> {
    if !config.should_parallelize(portfolios.len()) {
        return engine.calculate_for_portfolios(portfolios);
    }

    let mut seen = std::collections::BTreeSet::new();
    for portfolio in portfolios {
        if !seen.insert(portfolio.name()) {
            return Err(RiskError::DuplicatePortfolio {
                name: portfolio.name().to_string(),
            });
        }
    }

    let results = try_parallel_map(portfolios, |portfolio| {
        engine
            .portfolio_var(portfolio)
            .map(|var| (portfolio.name().to_string(), var))
    })?;
    Ok(results.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_parallel_map_ok() {
        let items: Vec<i32> = (0..100).collect();
        let doubled: Result<Vec<i32>, String> = try_parallel_map(&items, |&x| Ok(x * 2));
        let doubled = doubled.unwrap();
        assert_eq!(doubled.len(), 100);
        assert_eq!(doubled[50], 100);
    }

    #[test]
    fn test_try_parallel_map_err() {
        let items: Vec<i32> = (0..100).collect();
        let result: Result<Vec<i32>, String> = try_parallel_map(&items, |&x| {
            if x == 42 {
                Err("bad".to_string())
            } else {
                Ok(x)
            }
        });
        assert_eq!(result, Err("bad".to_string()));
    }

    #[test]
    fn test_should_parallelize() {
        let config = ParallelConfig::new(4);
        assert!(!config.should_parallelize(3));
        assert!(config.should_parallelize(4));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let portfolios = vec![Portfolio::new("A", vec![]), Portfolio::new("A", vec![])];
        let err = calculate_for_portfolios(
            &VarEngine::default(),
            &portfolios,
            &ParallelConfig::new(1),
        )
        .unwrap_err();
        assert_eq!(
            err,
            RiskError::DuplicatePortfolio {
                name: "A".to_string()
            }
        );
    }
}
