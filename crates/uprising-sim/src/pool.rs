//! Fixed-capacity slot pools.
//!
//! Slots are never removed or reordered: an inactive slot is free for reuse
//! and allocation takes the first free slot in index order. A full pool
//! drops the request.

use serde::{Deserialize, Serialize};

use uprising_core::components::{Projectile, TearGasCloud};
use uprising_core::constants::{MAX_GAS_CLOUDS, MAX_PROJECTILES};

/// Anything that can sit in a [`SlotPool`].
pub trait PoolSlot: Default + Clone {
    fn is_active(&self) -> bool;
}

impl PoolSlot for Projectile {
    fn is_active(&self) -> bool {
        self.active
    }
}

impl PoolSlot for TearGasCloud {
    fn is_active(&self) -> bool {
        self.active
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotPool<T> {
    slots: Vec<T>,
}

pub type ProjectilePool = SlotPool<Projectile>;
pub type TearGasField = SlotPool<TearGasCloud>;

impl<T: PoolSlot> SlotPool<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![T::default(); capacity],
        }
    }

    /// Store `item` in the first free slot. Returns the slot index, or
    /// `None` when every slot is in use.
    pub fn acquire(&mut self, item: T) -> Option<usize> {
        let index = self.slots.iter().position(|s| !s.is_active())?;
        self.slots[index] = item;
        Some(index)
    }

    pub fn has_free_slot(&self) -> bool {
        self.slots.iter().any(|s| !s.is_active())
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_active()).count()
    }

    pub fn slots_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }

    pub fn active(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter(|s| s.is_active())
    }
}

impl Default for ProjectilePool {
    fn default() -> Self {
        Self::with_capacity(MAX_PROJECTILES)
    }
}

impl Default for TearGasField {
    fn default() -> Self {
        Self::with_capacity(MAX_GAS_CLOUDS)
    }
}
