//! The `StrategyTable`: independently owned policies shared by subjects.

use cs_core::StrategyId;

use crate::{MovementError, MovementResult, MovementStrategy};

/// Policies addressed by [`StrategyId`].
///
/// Handles are plain indices: the table only grows, so a handle returned by
/// [`register`][Self::register] stays valid for the table's lifetime.
#[derive(Clone, Debug, Default)]
pub struct StrategyTable {
    strategies: Vec<MovementStrategy>,
}

impl StrategyTable {
    /// An empty table.  Every lookup fails until something is registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// `Regular` at [`StrategyId::REGULAR`], `Lockdown` at
    /// [`StrategyId::LOCKDOWN`].
    pub fn standard() -> Self {
        Self {
            strategies: vec![MovementStrategy::Regular, MovementStrategy::Lockdown],
        }
    }

    /// Append `strategy` and return its handle.
    pub fn register(&mut self, strategy: MovementStrategy) -> MovementResult<StrategyId> {
        let id = StrategyId::try_from(self.strategies.len())
            .ok()
            .filter(|id| *id != StrategyId::INVALID)
            .ok_or(MovementError::TableFull(self.strategies.len()))?;
        self.strategies.push(strategy);
        Ok(id)
    }

    #[inline]
    pub fn get(&self, id: StrategyId) -> Option<MovementStrategy> {
        self.strategies.get(id.index()).copied()
    }

    #[inline]
    pub fn contains(&self, id: StrategyId) -> bool {
        id.index() < self.strategies.len()
    }

    /// Apply the strategy behind `id` to one axis.
    ///
    /// # Errors
    ///
    /// [`MovementError::UnknownStrategy`] if `id` was never registered
    /// (including the `StrategyId::INVALID` "unassigned" sentinel).
    #[inline]
    pub fn movement(&self, id: StrategyId, point: f64, speed: f64, dt: f64) -> MovementResult<f64> {
        self.get(id)
            .map(|s| s.movement(point, speed, dt))
            .ok_or(MovementError::UnknownStrategy(id))
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}
