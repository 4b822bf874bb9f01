//! Strategy factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::doubling::FastDoubling;
use crate::linear::LinearAccumulator;
use crate::matrix_pair::PairMatrix;
use crate::matrix_triple::TripleMatrix;
use crate::naive::NaiveRecursive;
use crate::strategy::{FibError, FibonacciStrategy};

/// Factory trait for looking up strategies by name.
pub trait StrategyFactory: Send + Sync {
    /// Get or create a strategy by name or alias.
    fn get(&self, name: &str) -> Result<Arc<dyn FibonacciStrategy>, FibError>;

    /// Names of the engine strategies, in registry order.
    fn available(&self) -> Vec<&'static str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn FibonacciStrategy>>>,
}

impl DefaultFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_strategy(name: &str) -> Result<Arc<dyn FibonacciStrategy>, FibError> {
        match name {
            "linear" => Ok(Arc::new(LinearAccumulator::new())),
            "doubling" | "fast" => Ok(Arc::new(FastDoubling::new())),
            "matrix3" | "matrix" => Ok(Arc::new(TripleMatrix::new())),
            "matrix2" => Ok(Arc::new(PairMatrix::new())),
            "naive" => Ok(Arc::new(NaiveRecursive::new())),
            _ => Err(FibError::UnknownStrategy(name.to_string())),
        }
    }

    /// Resolve every engine strategy, in [`StrategyFactory::available`] order.
    pub fn all(&self) -> Vec<Arc<dyn FibonacciStrategy>> {
        self.available()
            .into_iter()
            .filter_map(|name| self.get(name).ok())
            .collect()
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl StrategyFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn FibonacciStrategy>, FibError> {
        if let Some(strategy) = self.cache.read().get(name) {
            return Ok(Arc::clone(strategy));
        }

        let strategy = Self::create_strategy(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&strategy));
        Ok(strategy)
    }

    fn available(&self) -> Vec<&'static str> {
        vec!["linear", "doubling", "matrix3", "matrix2"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_resolves_names() {
        let factory = DefaultFactory::new();
        for name in ["linear", "doubling", "matrix3", "matrix2", "naive"] {
            assert_eq!(factory.get(name).unwrap().name(), name);
        }
    }

    #[test]
    fn factory_resolves_aliases() {
        let factory = DefaultFactory::new();
        assert_eq!(factory.get("fast").unwrap().name(), "doubling");
        assert_eq!(factory.get("matrix").unwrap().name(), "matrix3");
    }

    #[test]
    fn factory_caches() {
        let factory = DefaultFactory::new();
        let first = factory.get("doubling").unwrap();
        let second = factory.get("doubling").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn factory_unknown_name() {
        let factory = DefaultFactory::new();
        assert_eq!(
            factory.get("fft").err(),
            Some(FibError::UnknownStrategy("fft".into()))
        );
    }

    #[test]
    fn all_excludes_naive() {
        let names: Vec<_> = DefaultFactory::new()
            .all()
            .iter()
            .map(|s| s.name())
            .collect();
        assert_eq!(names, ["linear", "doubling", "matrix3", "matrix2"]);
    }
}
