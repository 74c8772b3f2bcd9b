//! Pending entries, grouped by stream.
//!
//! In immediate mode nothing is kept: every entry goes straight to the
//! dispatcher. In deferred mode entries wait here until [`LogStore::flush_all`],
//! which replays streams in the order they were first written to.

use crate::entry::LogEntry;
use crate::internal;
use crate::output::Dispatcher;
use std::collections::HashMap;

#[derive(Debug)]
struct StreamBuffer {
    name: String,
    entries: Vec<LogEntry>,
}

/// Per-stream buffer with first-write ordering across streams.
#[derive(Debug, Default)]
pub struct LogStore {
    save_now: bool,
    streams: Vec<StreamBuffer>,
    index: HashMap<String, usize>,
}

impl LogStore {
    /// `save_now` selects immediate mode; it can't change afterwards.
    #[must_use]
    pub fn new(save_now: bool) -> Self {
        Self {
            save_now,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn is_immediate(&self) -> bool {
        self.save_now
    }

    /// Writes through (immediate) or queues under the entry's stream (deferred).
    pub fn append(&mut self, entry: LogEntry, dispatcher: &mut Dispatcher) {
        if self.save_now {
            dispatcher.dispatch(&entry);
            return;
        }

        let slot = match self.index.get(entry.stream()) {
            Some(&slot) => slot,
            None => {
                let name = entry.stream().to_string();
                self.streams.push(StreamBuffer {
                    name: name.clone(),
                    entries: Vec::new(),
                });
                self.index.insert(name, self.streams.len() - 1);
                self.streams.len() - 1
            }
        };
        self.streams[slot].entries.push(entry);
    }

    /// Dispatches every pending entry and empties the store. Returns the
    /// number of entries drained.
    pub fn flush_all(&mut self, dispatcher: &mut Dispatcher) -> usize {
        self.index.clear();
        let mut drained = 0;
        for stream in std::mem::take(&mut self.streams) {
            internal::debug(
                "STORE",
                &format!(
                    "Flushing {} entries of '{}'",
                    stream.entries.len(),
                    stream.name
                ),
            );
            for entry in &stream.entries {
                dispatcher.dispatch(entry);
            }
            drained += stream.entries.len();
        }
        drained
    }

    /// Entries waiting across all streams.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.streams.iter().map(|s| s.entries.len()).sum()
    }

    /// Entries waiting for one stream.
    #[must_use]
    pub fn pending_for(&self, stream: &str) -> usize {
        self.index
            .get(stream)
            .map_or(0, |&slot| self.streams[slot].entries.len())
    }

    /// Stream names with pending entries, in first-write order.
    pub fn streams(&self) -> impl Iterator<Item = &str> {
        self.streams.iter().map(|s| s.name.as_str())
    }
}
