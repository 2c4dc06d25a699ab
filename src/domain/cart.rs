//! Session cart with an explicit subscribe/notify contract.
//!
//! The cart is the only piece of shared mutable state in the storefront. It
//! has exactly one writer (the store's own mutation methods) and arbitrarily
//! many readers; every mutation synchronously notifies subscribers before the
//! next interaction is processed.

use crate::domain::catalog::Track;

/// One distinct catalog item plus its quantity.
///
/// A cart never holds two lines for the same track id; adding an item that is
/// already present increments the existing line's quantity instead.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub track: Track,
    pub quantity: u32,
}

impl CartLine {
    /// Line subtotal: unit price times quantity.
    pub fn subtotal(&self) -> u64 {
        u64::from(self.track.price) * u64::from(self.quantity)
    }
}

/// Handle returned by [`CartStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&[CartLine]) + Send>;

/// Observable cart store.
///
/// Lines are kept in insertion order (first added, first listed). State is
/// ephemeral: it lives for one browsing session and is never persisted.
#[derive(Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback invoked after every mutation.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&[CartLine]) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Removes a subscriber; no-op for an unknown id.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    /// Adds a track: increments the existing line's quantity, or appends a
    /// new line with quantity 1. Always succeeds.
    pub fn add(&mut self, track: Track) {
        match self.lines.iter_mut().find(|line| line.track.id == track.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine { track, quantity: 1 }),
        }
        self.notify();
    }

    /// Removes the line for `track_id`; no-op (not an error) if absent.
    pub fn remove(&mut self, track_id: u32) {
        self.lines.retain(|line| line.track.id != track_id);
        self.notify();
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.notify();
    }

    /// Sum of `price × quantity` over all lines; 0 for an empty cart.
    pub fn total(&self) -> u64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Current lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether a track is already in the cart.
    pub fn contains(&self, track_id: u32) -> bool {
        self.lines.iter().any(|line| line.track.id == track_id)
    }

    /// Snapshot of the tracks in the cart, one copy per line regardless of
    /// quantity, for checkout submission.
    pub fn snapshot(&self) -> Vec<Track> {
        self.lines.iter().map(|line| line.track.clone()).collect()
    }

    fn notify(&mut self) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.lines);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::PreviewSource;
    use chrono::NaiveDate;
    use std::sync::{Arc, Mutex};

    fn track(id: u32, price: u32) -> Track {
        Track {
            id,
            title: format!("Track {id}"),
            genre: "Hip Hop".to_string(),
            bpm: 120,
            key: "C min".to_string(),
            preview: PreviewSource::Direct("https://example.com/a.mp3".to_string()),
            category: "Beats".to_string(),
            producer: "R_JXY".to_string(),
            published: NaiveDate::from_ymd_opt(2023, 10, 10).unwrap(),
            plays: 100,
            artwork: "/poster/p.png".to_string(),
            price,
            discount: None,
        }
    }

    #[test]
    fn test_add_same_track_twice_increments_quantity() {
        let mut cart = CartStore::new();
        cart.add(track(1, 1000));
        cart.add(track(1, 1000));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total(), 2000);
    }

    #[test]
    fn test_at_most_one_line_per_id_across_mixed_sequences() {
        let mut cart = CartStore::new();
        cart.add(track(1, 100));
        cart.add(track(2, 200));
        cart.add(track(1, 100));
        cart.remove(2);
        cart.add(track(2, 200));
        cart.add(track(2, 200));

        let ids: Vec<u32> = cart.lines().iter().map(|l| l.track.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(cart.total(), 100 * 2 + 200 * 2);
    }

    #[test]
    fn test_total_for_mixed_quantities() {
        let mut cart = CartStore::new();
        cart.add(track(1, 1000));
        cart.add(track(2, 500));
        cart.add(track(2, 500));

        assert_eq!(cart.total(), 2000);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = CartStore::new();
        cart.add(track(1, 100));
        cart.remove(99);

        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_clear_then_total_is_zero() {
        let mut cart = CartStore::new();
        cart.add(track(1, 100));
        cart.add(track(2, 200));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = CartStore::new();
        cart.add(track(3, 100));
        cart.add(track(1, 100));
        cart.add(track(2, 100));

        let ids: Vec<u32> = cart.lines().iter().map(|l| l.track.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_subscribers_see_every_mutation_synchronously() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut cart = CartStore::new();

        let sink = seen.clone();
        cart.subscribe(move |lines| sink.lock().unwrap().push(lines.len()));

        cart.add(track(1, 100));
        cart.add(track(2, 100));
        cart.remove(1);
        cart.clear();

        assert_eq!(*seen.lock().unwrap(), vec![1, 2, 1, 0]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let seen = Arc::new(Mutex::new(0u32));
        let mut cart = CartStore::new();

        let sink = seen.clone();
        let id = cart.subscribe(move |_| *sink.lock().unwrap() += 1);

        cart.add(track(1, 100));
        cart.unsubscribe(id);
        cart.add(track(2, 100));

        assert_eq!(*seen.lock().unwrap(), 1);
    }

    #[test]
    fn test_snapshot_copies_one_track_per_line() {
        let mut cart = CartStore::new();
        cart.add(track(1, 100));
        cart.add(track(1, 100));
        cart.add(track(2, 200));

        let snapshot = cart.snapshot();
        assert_eq!(snapshot.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);
    }
}
