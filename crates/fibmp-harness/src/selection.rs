//! Strategy selection from a command-line style name.

use std::sync::Arc;

use fibmp_core::{FibError, FibonacciStrategy, StrategyFactory};

/// Resolve `algo` to the strategies to run; `"all"` means every engine
/// strategy the factory lists.
pub fn select_strategies(
    algo: &str,
    factory: &dyn StrategyFactory,
) -> Result<Vec<Arc<dyn FibonacciStrategy>>, FibError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}
