use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use surveyor::path::{Environment, Path};
use tracing::trace;

/// Synthetic environment: every node forks into `fanout` children.
///
/// - Node ids are handed out in creation order, so tests can check the
///   order paths were produced and scheduled in.
/// - `with_max_depth` makes nodes at that depth terminal.
/// - `with_error_at` makes nodes record one error when stepped at a depth.
/// - `with_fanout_for_entry` overrides the fanout of a whole subtree.
#[derive(Debug)]
pub struct FanTree {
    fanout: usize,
    max_depth: u32,
    error_depths: Vec<u32>,
    entry_fanout: HashMap<u64, usize>,
    next_id: AtomicU64,
}

impl FanTree {
    pub fn new(fanout: usize) -> Self {
        Self {
            fanout,
            max_depth: u32::MAX,
            error_depths: Vec::new(),
            entry_fanout: HashMap::new(),
            next_id: AtomicU64::new(0),
        }
    }

    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_error_at(mut self, depth: u32) -> Self {
        self.error_depths.push(depth);
        self
    }

    pub fn with_fanout_for_entry(mut self, entry: u64, fanout: usize) -> Self {
        self.entry_fanout.insert(entry, fanout);
        self
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    fn fresh_id(&self) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        trace!(id, "fan tree node created");
        id
    }

    fn fanout_for(&self, entry: u64) -> usize {
        self.entry_fanout.get(&entry).copied().unwrap_or(self.fanout)
    }
}

impl Environment for FanTree {
    type Entry = u64;

    fn initial_entry(&self) -> u64 {
        0
    }
}

/// A node of a [`FanTree`].
#[derive(Clone)]
pub struct Node {
    tree: Arc<FanTree>,
    pub id: u64,
    /// Entry the node's root was seeded from.
    pub entry: u64,
    pub depth: u32,
    errors: Vec<String>,
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("entry", &self.entry)
            .field("depth", &self.depth)
            .field("errors", &self.errors)
            .finish()
    }
}

impl Path for Node {
    type Env = FanTree;
    type Error = String;

    fn from_entry(env: &Arc<FanTree>, entry: u64) -> Self {
        Node {
            tree: Arc::clone(env),
            id: env.fresh_id(),
            entry,
            depth: 0,
            errors: Vec::new(),
        }
    }

    fn step(&mut self) -> Vec<Self> {
        if self.tree.error_depths.contains(&self.depth) {
            self.errors.push(format!("error at depth {}", self.depth));
        }

        if self.depth >= self.tree.max_depth {
            return Vec::new();
        }

        (0..self.tree.fanout_for(self.entry))
            .map(|_| Node {
                tree: Arc::clone(&self.tree),
                id: self.tree.fresh_id(),
                entry: self.entry,
                depth: self.depth + 1,
                errors: Vec::new(),
            })
            .collect()
    }

    fn errors(&self) -> &[String] {
        &self.errors
    }
}

/// Ids of a slice of nodes, in order.
pub fn ids(nodes: &[Node]) -> Vec<u64> {
    nodes.iter().map(|n| n.id).collect()
}
