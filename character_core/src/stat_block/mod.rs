//! StatBlock - Bounded base stats with change notification

mod stat_name;

pub use stat_name::{StatName, STAT_COUNT};

use crate::error::{CoreError, Result};
use crate::types::Value;
use std::fmt;
use std::str::FromStr;

/// The maximum value any base stat can take
pub const MAX_STAT: i32 = 50;

/// The value every base stat starts at
pub const DEFAULT_STAT: i32 = 20;

/// A stat value that actually changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatChange {
    pub stat: StatName,
    pub old: i32,
    pub new: i32,
}

/// Handle returned by [`StatBlock::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Callback invoked after a stat changes
pub type StatCallback = Box<dyn FnMut(&StatChange)>;

/// Six named integer stats, each clamped to `[0, MAX_STAT]`
///
/// Subscribers are called, in subscription order, after a `set` actually
/// changes a stored value. Cloning copies the values only; subscribers stay
/// with the original block.
pub struct StatBlock {
    values: [i32; STAT_COUNT],
    subscribers: Vec<(SubscriptionId, StatCallback)>,
    next_subscription: u64,
}

impl Default for StatBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl StatBlock {
    /// Create a StatBlock with every stat at `DEFAULT_STAT`
    pub fn new() -> Self {
        Self::from_values([DEFAULT_STAT; STAT_COUNT])
    }

    /// Create a StatBlock with every stat at zero (used for modifier bonuses)
    pub fn zeroed() -> Self {
        Self::from_values([0; STAT_COUNT])
    }

    /// Create a StatBlock from raw values in `StatName::ALL` order. Values are
    /// clamped.
    pub fn from_values(values: [i32; STAT_COUNT]) -> Self {
        StatBlock {
            values: values.map(clamp_stat),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Builder-style setter
    pub fn with(mut self, stat: StatName, value: i32) -> Self {
        self.set(stat, value);
        self
    }

    /// Get a stat's current value
    pub fn get(&self, stat: StatName) -> i32 {
        self.values[stat.index()]
    }

    /// Get a stat by its string name
    pub fn get_by_name(&self, name: &str) -> Result<i32> {
        let stat = StatName::from_str(name).map_err(|_| CoreError::unknown_stat(name))?;
        Ok(self.get(stat))
    }

    /// Set a stat, clamping it to `[0, MAX_STAT]`
    ///
    /// Subscribers are notified only if the stored value changed. Returns the
    /// stored value.
    pub fn set(&mut self, stat: StatName, value: i32) -> i32 {
        let new = clamp_stat(value);
        let old = self.values[stat.index()];
        if new != old {
            self.values[stat.index()] = new;
            self.notify(&StatChange { stat, old, new });
        }
        new
    }

    /// Set a stat by its string name
    ///
    /// Fails with `UnknownName` for unrecognized names and `InvalidArgument`
    /// for non-integer values. Nothing is mutated on failure.
    pub fn set_by_name(&mut self, name: &str, value: Value) -> Result<i32> {
        let stat = StatName::from_str(name).map_err(|_| CoreError::unknown_stat(name))?;
        let raw = value.as_int().ok_or_else(|| {
            CoreError::InvalidArgument(format!(
                "integer expected for stat `{}` but got {}",
                name,
                value.kind()
            ))
        })?;
        let narrowed = raw.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        Ok(self.set(stat, narrowed))
    }

    /// Add `other`'s values onto this block, stat by stat
    pub fn merge(&mut self, other: &StatBlock) {
        for stat in StatName::ALL {
            let sum = self.get(stat).saturating_add(other.get(stat));
            self.set(stat, sum);
        }
    }

    /// Return a new, independent block holding `self + other` (or a plain copy
    /// when `other` is `None`). The receiver is left untouched.
    pub fn derive(&self, other: Option<&StatBlock>) -> StatBlock {
        let mut derived = self.clone();
        if let Some(other) = other {
            derived.merge(other);
        }
        derived
    }

    /// Register a callback invoked after every effective change
    pub fn subscribe(&mut self, callback: StatCallback) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, callback));
        id
    }

    /// Remove a callback. Returns false if the handle was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Number of registered callbacks
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Iterate stats in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (StatName, i32)> + '_ {
        StatName::ALL.iter().map(move |stat| (*stat, self.get(*stat)))
    }

    /// Raw values in `StatName::ALL` order
    pub fn values(&self) -> [i32; STAT_COUNT] {
        self.values
    }

    fn notify(&mut self, change: &StatChange) {
        for (_, callback) in self.subscribers.iter_mut() {
            callback(change);
        }
    }
}

fn clamp_stat(value: i32) -> i32 {
    value.clamp(0, MAX_STAT)
}

impl Clone for StatBlock {
    fn clone(&self) -> Self {
        StatBlock::from_values(self.values)
    }
}

impl PartialEq for StatBlock {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl Eq for StatBlock {}

impl fmt::Debug for StatBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (stat, value) in self.iter() {
            map.entry(&stat.as_ref(), &value);
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording(block: &mut StatBlock) -> Rc<RefCell<Vec<StatChange>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        block.subscribe(Box::new(move |change| sink.borrow_mut().push(*change)));
        log
    }

    #[test]
    fn test_defaults() {
        let block = StatBlock::new();
        for stat in StatName::ALL {
            assert_eq!(block.get(stat), DEFAULT_STAT);
        }
        assert!(StatBlock::zeroed().iter().all(|(_, v)| v == 0));
    }

    #[test]
    fn test_set_clamps() {
        let mut block = StatBlock::new();
        assert_eq!(block.set(StatName::Str, 80), MAX_STAT);
        assert_eq!(block.set(StatName::Dex, -5), 0);
        assert_eq!(block.get(StatName::Str), 50);
        assert_eq!(block.get(StatName::Dex), 0);
    }

    #[test]
    fn test_subscribers_see_applied_value() {
        let mut block = StatBlock::new();
        let log = recording(&mut block);

        block.set(StatName::Wit, 25);
        assert_eq!(
            log.borrow().as_slice(),
            &[StatChange {
                stat: StatName::Wit,
                old: 20,
                new: 25
            }]
        );
    }

    #[test]
    fn test_noop_set_does_not_notify() {
        let mut block = StatBlock::new();
        block.set(StatName::Con, 50);
        let log = recording(&mut block);

        block.set(StatName::Con, 50);
        // Clamps back to the stored value
        block.set(StatName::Con, 99);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_merge_notifies_per_changed_stat() {
        let mut block = StatBlock::new();
        let log = recording(&mut block);
        let bonus = StatBlock::zeroed().with(StatName::Con, 5).with(StatName::Int, 3);

        block.merge(&bonus);
        assert_eq!(block.get(StatName::Con), 25);
        assert_eq!(block.get(StatName::Int), 23);
        assert_eq!(block.get(StatName::Str), 20);
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_derive_leaves_receiver_untouched() {
        let mut base = StatBlock::new();
        let log = recording(&mut base);
        let bonus = StatBlock::zeroed().with(StatName::Dex, 45);

        let derived = base.derive(Some(&bonus));
        assert_eq!(derived.get(StatName::Dex), MAX_STAT);
        assert_eq!(base.get(StatName::Dex), 20);
        assert_eq!(derived.subscriber_count(), 0);
        assert!(log.borrow().is_empty());

        let copy = base.derive(None);
        assert_eq!(copy, base);
    }

    #[test]
    fn test_string_boundary() {
        let mut block = StatBlock::new();
        assert_eq!(block.get_by_name("men").unwrap(), 20);
        assert_eq!(block.set_by_name("men", Value::Int(31)).unwrap(), 31);

        let err = block.get_by_name("luck").unwrap_err();
        assert!(matches!(err, CoreError::UnknownName { .. }));

        let err = block.set_by_name("men", Value::Float(3.5)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)));
        assert_eq!(block.get(StatName::Men), 31);
    }

    #[test]
    fn test_unsubscribe() {
        let mut block = StatBlock::new();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let id = block.subscribe(Box::new(move |_| *sink.borrow_mut() += 1));

        block.set(StatName::Str, 1);
        assert!(block.unsubscribe(id));
        assert!(!block.unsubscribe(id));
        block.set(StatName::Str, 2);
        assert_eq!(*count.borrow(), 1);
    }
}
