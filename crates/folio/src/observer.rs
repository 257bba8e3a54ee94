//! Viewport intersection watching.
//!
//! An [`IntersectionWatcher`] tracks a set of element ids and reports when
//! an element's visible ratio crosses the watcher's threshold. Watchers are
//! registered in a [`WatcherSet`] owned by the host document; registering
//! returns a [`Subscription`] that removes the watcher when dropped.
//!
//! # Invariants
//!
//! - An entry is intersecting iff its ratio is at least the threshold.
//! - The first observation of a target is always reported; afterwards a
//!   target is reported only when its intersecting state changes.
//! - Entries are delivered in the order the host reports ratios.
//! - Callbacks run on the thread that delivers ratios and must not call
//!   back into the host document.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

/// One observation delivered to a watcher callback.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    /// Id of the observed element.
    pub target: String,
    /// Visible fraction of the element, `0.0..=1.0`.
    pub intersection_ratio: f64,
    /// Whether the ratio is at or above the watcher's threshold.
    pub is_intersecting: bool,
}

/// Callback invoked with the entries of one observation round.
pub type IntersectionCallback = Box<dyn FnMut(&[IntersectionEntry])>;

/// Tracks threshold crossings for a fixed set of targets.
pub struct IntersectionWatcher {
    targets: Vec<String>,
    threshold: f64,
    last: HashMap<String, bool>,
    callback: IntersectionCallback,
}

impl IntersectionWatcher {
    /// Creates a watcher over `targets`. The threshold is clamped to `0.0..=1.0`.
    pub fn new(targets: Vec<String>, threshold: f64, callback: IntersectionCallback) -> Self {
        Self {
            targets,
            threshold: threshold.clamp(0.0, 1.0),
            last: HashMap::new(),
            callback,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// Computes the entries to report for a round of ratios and records the
    /// new state. Ratios for ids this watcher does not observe are ignored.
    pub fn crossings(&mut self, ratios: &[(String, f64)]) -> Vec<IntersectionEntry> {
        let mut entries = Vec::new();
        for (target, ratio) in ratios {
            let Some(entry) = self.entry(target, *ratio) else {
                continue;
            };
            let previous = self.last.insert(entry.target.clone(), entry.is_intersecting);
            if previous != Some(entry.is_intersecting) {
                entries.push(entry);
            }
        }
        entries
    }

    /// Builds the entry for one ratio against this watcher's threshold.
    ///
    /// Returns `None` for targets this watcher does not observe.
    pub fn entry(&self, target: &str, ratio: f64) -> Option<IntersectionEntry> {
        if !self.observes(target) {
            return None;
        }
        let ratio = ratio.clamp(0.0, 1.0);
        Some(IntersectionEntry {
            target: target.to_string(),
            intersection_ratio: ratio,
            is_intersecting: ratio >= self.threshold,
        })
    }

    fn observes(&self, target: &str) -> bool {
        self.targets.iter().any(|t| t == target)
    }

    /// Delivers `entries` to the callback verbatim, without crossing checks.
    fn deliver(&mut self, entries: &[IntersectionEntry]) {
        if !entries.is_empty() {
            (self.callback)(entries);
        }
    }

    /// Runs [`crossings`](Self::crossings) and delivers the result.
    pub fn observe(&mut self, ratios: &[(String, f64)]) {
        let entries = self.crossings(ratios);
        self.deliver(&entries);
    }
}

impl fmt::Debug for IntersectionWatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntersectionWatcher")
            .field("targets", &self.targets)
            .field("threshold", &self.threshold)
            .field("last", &self.last)
            .finish()
    }
}

#[derive(Debug, Default)]
struct WatcherSetInner {
    next_id: u64,
    watchers: Vec<(u64, Rc<RefCell<IntersectionWatcher>>)>,
}

/// The watchers registered with one host document.
///
/// Cloning shares the same set.
#[derive(Debug, Clone, Default)]
pub struct WatcherSet {
    inner: Rc<RefCell<WatcherSetInner>>,
}

impl WatcherSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a watcher; it stays registered until the subscription is dropped.
    pub fn register(&self, watcher: IntersectionWatcher) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.watchers.push((id, Rc::new(RefCell::new(watcher))));
        tracing::trace!(subscription = id, "intersection watcher registered");
        Subscription {
            id,
            set: Rc::downgrade(&self.inner),
        }
    }

    /// Reports a round of ratios to every watcher.
    pub fn observe(&self, ratios: &[(String, f64)]) {
        for watcher in self.snapshot() {
            watcher.borrow_mut().observe(ratios);
        }
    }

    /// Reports ratios to the watcher behind `subscription` only.
    pub fn observe_one(&self, subscription: &Subscription, ratios: &[(String, f64)]) {
        if let Some(watcher) = self.get(subscription.id) {
            watcher.borrow_mut().observe(ratios);
        }
    }

    /// Delivers every ratio to the watchers observing its target, crossing
    /// or not.
    ///
    /// Each watcher judges the ratios against its own threshold, and its
    /// crossing state is updated so later rounds stay consistent with what
    /// was delivered.
    pub fn deliver(&self, ratios: &[(String, f64)]) {
        for watcher in self.snapshot() {
            let mut watcher = watcher.borrow_mut();
            let relevant: Vec<IntersectionEntry> = ratios
                .iter()
                .filter_map(|(target, ratio)| watcher.entry(target, *ratio))
                .collect();
            for entry in &relevant {
                watcher
                    .last
                    .insert(entry.target.clone(), entry.is_intersecting);
            }
            watcher.deliver(&relevant);
        }
    }

    /// Number of registered watchers.
    pub fn len(&self) -> usize {
        self.inner.borrow().watchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, id: u64) -> Option<Rc<RefCell<IntersectionWatcher>>> {
        self.inner
            .borrow()
            .watchers
            .iter()
            .find(|(wid, _)| *wid == id)
            .map(|(_, w)| Rc::clone(w))
    }

    // Callbacks run without the set borrowed, so a callback may drop its
    // own subscription.
    fn snapshot(&self) -> Vec<Rc<RefCell<IntersectionWatcher>>> {
        self.inner
            .borrow()
            .watchers
            .iter()
            .map(|(_, w)| Rc::clone(w))
            .collect()
    }
}

/// Keeps a watcher registered. Dropping it disconnects the watcher.
#[must_use = "dropping a Subscription disconnects the watcher immediately"]
pub struct Subscription {
    id: u64,
    set: Weak<RefCell<WatcherSetInner>>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// True while the watcher is still registered with a live host.
    pub fn is_active(&self) -> bool {
        self.set
            .upgrade()
            .map(|set| set.borrow().watchers.iter().any(|(id, _)| *id == self.id))
            .unwrap_or(false)
    }

    /// Disconnects the watcher now.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(set) = self.set.upgrade() {
            set.borrow_mut().watchers.retain(|(id, _)| *id != self.id);
            tracing::trace!(subscription = self.id, "intersection watcher disconnected");
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Seen = Rc<RefCell<Vec<IntersectionEntry>>>;

    fn recording(targets: &[&str], threshold: f64) -> (IntersectionWatcher, Seen) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let watcher = IntersectionWatcher::new(
            targets.iter().map(|t| t.to_string()).collect(),
            threshold,
            Box::new(move |entries: &[IntersectionEntry]| {
                sink.borrow_mut().extend_from_slice(entries)
            }),
        );
        (watcher, seen)
    }

    fn ratios(pairs: &[(&str, f64)]) -> Vec<(String, f64)> {
        pairs.iter().map(|(id, r)| (id.to_string(), *r)).collect()
    }

    #[test]
    fn test_first_observation_reports_every_target() {
        let (mut watcher, _) = recording(&["about", "projects"], 0.5);
        let entries = watcher.crossings(&ratios(&[("about", 0.9), ("projects", 0.0)]));
        assert_eq!(entries.len(), 2);
        assert!(entries[0].is_intersecting);
        assert!(!entries[1].is_intersecting);
    }

    #[test]
    fn test_only_crossings_are_reported_afterwards() {
        let (mut watcher, _) = recording(&["about"], 0.5);
        watcher.crossings(&ratios(&[("about", 0.6)]));
        assert!(watcher.crossings(&ratios(&[("about", 0.8)])).is_empty());
        let entries = watcher.crossings(&ratios(&[("about", 0.2)]));
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].is_intersecting);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let (mut watcher, _) = recording(&["about"], 0.5);
        assert!(watcher.crossings(&ratios(&[("about", 0.5)]))[0].is_intersecting);
    }

    #[test]
    fn test_unobserved_targets_ignored() {
        let (mut watcher, seen) = recording(&["about"], 0.5);
        watcher.observe(&ratios(&[("footer", 1.0)]));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_subscription_drop_disconnects() {
        let set = WatcherSet::new();
        let (watcher, seen) = recording(&["about"], 0.5);
        let sub = set.register(watcher);
        assert!(sub.is_active());
        assert_eq!(set.len(), 1);

        drop(sub);
        assert!(set.is_empty());
        set.observe(&ratios(&[("about", 1.0)]));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_subscription_outliving_set_is_inactive() {
        let set = WatcherSet::new();
        let (watcher, _) = recording(&["about"], 0.5);
        let sub = set.register(watcher);
        drop(set);
        assert!(!sub.is_active());
        sub.unsubscribe();
    }

    #[test]
    fn test_deliver_filters_by_target_and_updates_state() {
        let set = WatcherSet::new();
        let (watcher, seen) = recording(&["about"], 0.5);
        let _sub = set.register(watcher);

        set.deliver(&ratios(&[("about", 0.6), ("elsewhere", 1.0)]));
        assert_eq!(seen.borrow().len(), 1);
        assert!(seen.borrow()[0].is_intersecting);

        // Same state again: no crossing, nothing new.
        set.observe(&ratios(&[("about", 0.7)]));
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_deliver_judges_ratio_against_threshold() {
        let set = WatcherSet::new();
        let (watcher, seen) = recording(&["contact"], 0.5);
        let _sub = set.register(watcher);

        set.deliver(&ratios(&[("contact", 0.3)]));
        set.deliver(&ratios(&[("contact", 0.3)]));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert!(seen.iter().all(|e| !e.is_intersecting));
        assert_eq!(seen[0].intersection_ratio, 0.3);
    }

    #[test]
    fn test_threshold_clamped() {
        let (watcher, _) = recording(&["about"], 4.0);
        assert_eq!(watcher.threshold(), 1.0);
    }
}
