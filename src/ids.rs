//! Identity allocation for nodes and connections

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use log::warn;

use crate::template::{Template, ROOT_KEY};

/// Role of an allocated id, used as its prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Node,
    Connection,
}

impl IdKind {
    pub fn prefix(self) -> &'static str {
        match self {
            IdKind::Node => "node",
            IdKind::Connection => "conn",
        }
    }
}

/// Counter shared by every default allocator in the process
static PROCESS_COUNTER: OnceLock<AtomicU64> = OnceLock::new();

fn process_counter() -> &'static AtomicU64 {
    PROCESS_COUNTER.get_or_init(|| {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        AtomicU64::new(seed)
    })
}

#[derive(Debug)]
enum Counter {
    Process,
    Owned(AtomicU64),
}

/// Hands out node and connection ids
///
/// Allocators from [`IdAllocator::new`] all draw from one process-wide
/// counter, seeded once from the wall clock, so their ids never repeat
/// within the process. [`IdAllocator::starting_at`] owns a private counter
/// for deterministic output.
#[derive(Debug)]
pub struct IdAllocator {
    counter: Counter,
}

impl IdAllocator {
    /// Allocator backed by the process-wide counter
    pub fn new() -> Self {
        Self {
            counter: Counter::Process,
        }
    }

    /// Allocator with its own counter, whose first id uses `first`
    pub fn starting_at(first: u64) -> Self {
        Self {
            counter: Counter::Owned(AtomicU64::new(first)),
        }
    }

    fn counter(&self) -> &AtomicU64 {
        match &self.counter {
            Counter::Process => process_counter(),
            Counter::Owned(counter) => counter,
        }
    }

    /// Allocate the next id, e.g. `node-1700000000000`
    pub fn next_id(&self, kind: IdKind) -> String {
        let n = self.counter().fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", kind.prefix(), n)
    }

    pub fn next_node_id(&self) -> String {
        self.next_id(IdKind::Node)
    }

    pub fn next_connection_id(&self) -> String {
        self.next_id(IdKind::Connection)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Symbolic key to fresh node id, for one instantiation
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    ids: Vec<String>,
    by_key: HashMap<String, usize>,
}

impl KeyMap {
    /// Allocate one node id per template node and index them by key
    ///
    /// Every id is allocated before the map is returned, so edges can be
    /// rewritten regardless of declaration order.
    pub fn build(template: &Template, ids: &IdAllocator) -> Self {
        let mut map = KeyMap {
            ids: Vec::with_capacity(template.nodes.len()),
            by_key: HashMap::with_capacity(template.nodes.len() + 1),
        };

        for index in 0..template.nodes.len() {
            map.ids.push(ids.next_node_id());
            let key = template.node_key(index).into_owned();
            if index > 0 && key == ROOT_KEY {
                warn!(
                    template = template.id.as_str(), index;
                    "Node key \"root\" is reserved for the first node, ignoring it"
                );
                continue;
            }
            if let Some(previous) = map.by_key.insert(key.clone(), index) {
                warn!(
                    template = template.id.as_str(), key = key.as_str(), previous, index;
                    "Duplicate node key in template, later node wins"
                );
            }
        }
        if !template.nodes.is_empty() {
            map.by_key.insert(ROOT_KEY.to_string(), 0);
        }

        map
    }

    /// Id assigned to the node answering to `key`
    pub fn resolve(&self, key: &str) -> Option<&str> {
        self.by_key.get(key).map(|&i| self.ids[i].as_str())
    }

    /// Id assigned to the node at `index` in template order
    pub fn id_at(&self, index: usize) -> Option<&str> {
        self.ids.get(index).map(String::as_str)
    }

    pub fn root_id(&self) -> Option<&str> {
        self.id_at(0)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
