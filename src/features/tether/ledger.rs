//! Pairing ledger linking the two delivered copies of a reminder event.
//!
//! Every live event has exactly one entry, reachable from either of its two
//! message references. Entries are consumed by the first successful claim,
//! so a replayed acknowledgement resolves to nothing.

use dashmap::DashMap;
use log::warn;

use crate::channel::MessageRef;

/// The two message references of one reminder event.
///
/// `anchor` is the key a claim must win; removing it is the single atomic
/// decision point between racing claims.
#[derive(Debug, Clone, Copy)]
struct MessagePair {
    anchor: MessageRef,
    other: MessageRef,
}

impl MessagePair {
    fn counterpart(&self, of: MessageRef) -> MessageRef {
        if of == self.anchor {
            self.other
        } else {
            self.anchor
        }
    }
}

/// Bidirectional in-memory mapping between the two message references of
/// each live reminder event.
pub struct PairingLedger {
    entries: DashMap<MessageRef, MessagePair>,
}

impl PairingLedger {
    pub fn new() -> Self {
        PairingLedger {
            entries: DashMap::new(),
        }
    }

    /// Record the symmetric pair for a freshly delivered event.
    ///
    /// Returns `false` without touching the map if either reference is
    /// already tracked; one live event per reference is assumed.
    pub fn record(&self, ref_a: MessageRef, ref_b: MessageRef) -> bool {
        if self.entries.contains_key(&ref_a) || self.entries.contains_key(&ref_b) {
            warn!("pairing {ref_a:?} <-> {ref_b:?} already recorded; ignoring");
            return false;
        }
        let pair = MessagePair {
            anchor: ref_a,
            other: ref_b,
        };
        self.entries.insert(ref_a, pair);
        self.entries.insert(ref_b, pair);
        true
    }

    /// Look up the counterpart of `reference` without consuming the entry.
    pub fn resolve(&self, reference: MessageRef) -> Option<MessageRef> {
        self.entries
            .get(&reference)
            .map(|entry| entry.counterpart(reference))
    }

    /// Consume the entry for `reference` and return its counterpart.
    ///
    /// The winner is whoever removes the pair's anchor key; near-simultaneous
    /// claims from both sides therefore resolve to exactly one winner, and
    /// every later claim returns `None`.
    pub fn claim(&self, reference: MessageRef) -> Option<MessageRef> {
        let pair = self.entries.get(&reference).map(|entry| *entry.value())?;
        if self.entries.remove(&pair.anchor).is_none() {
            return None;
        }
        self.entries.remove(&pair.other);
        Some(pair.counterpart(reference))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PairingLedger {
    fn default() -> Self {
        Self::new()
    }
}
