//! Frontier: discovered-but-unexpanded nodes.
//!
//! One interface, three removal disciplines. BFS and DFS share a `VecDeque`
//! and differ only in which end they pop. UCS and Dijkstra use a min-heap
//! keyed by `(cost, insertion_seq)`; a reprioritized node gets a fresh heap
//! entry and the stale one is discarded when it surfaces.
//!
//! Insertion order is tracked for every discipline so that [`Frontier::ids`]
//! can present the frontier as an ordered sequence, and so that cost ties
//! resolve to the earliest-inserted node.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, VecDeque};

use pathlab_kernel::graph::scenario::NodeId;

use crate::strategy::Strategy;

/// Removal discipline backing a [`Frontier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    /// Pop the oldest entry.
    Fifo,
    /// Pop the newest entry.
    Lifo,
    /// Pop the cheapest entry; earliest insertion wins ties.
    CostOrdered,
}

impl Discipline {
    #[must_use]
    pub const fn for_strategy(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Bfs => Self::Fifo,
            Strategy::Dfs => Self::Lifo,
            Strategy::Ucs | Strategy::Dijkstra => Self::CostOrdered,
        }
    }
}

/// Heap ordering key: lower cost first, then older insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierKey {
    cost: u64,
    seq: u64,
}

/// `BinaryHeap` is a max-heap, so keys are wrapped in `Reverse`.
#[derive(Debug)]
struct HeapEntry {
    key: Reverse<FrontierKey>,
    id: NodeId,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

#[derive(Debug)]
enum Backing {
    Sequence(VecDeque<NodeId>),
    Heap(BinaryHeap<HeapEntry>),
}

#[derive(Debug, Clone, Copy)]
struct Member {
    seq: u64,
    cost: u64,
}

/// The frontier of one search.
///
/// Invariant: an id is present at most once.
#[derive(Debug)]
pub struct Frontier {
    discipline: Discipline,
    backing: Backing,
    members: BTreeMap<NodeId, Member>,
    next_seq: u64,
    high_water: usize,
}

impl Frontier {
    #[must_use]
    pub fn new(discipline: Discipline) -> Self {
        let backing = match discipline {
            Discipline::Fifo | Discipline::Lifo => Backing::Sequence(VecDeque::new()),
            Discipline::CostOrdered => Backing::Heap(BinaryHeap::new()),
        };
        Self {
            discipline,
            backing,
            members: BTreeMap::new(),
            next_seq: 0,
            high_water: 0,
        }
    }

    #[must_use]
    pub fn for_strategy(strategy: Strategy) -> Self {
        Self::new(Discipline::for_strategy(strategy))
    }

    #[must_use]
    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    /// Append `id` with path cost `cost`.
    ///
    /// Returns `false` (and changes nothing) if `id` is already present.
    pub fn push(&mut self, id: NodeId, cost: u64) -> bool {
        if self.members.contains_key(&id) {
            return false;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.members.insert(id.clone(), Member { seq, cost });
        match &mut self.backing {
            Backing::Sequence(queue) => queue.push_back(id),
            Backing::Heap(heap) => heap.push(HeapEntry {
                key: Reverse(FrontierKey { cost, seq }),
                id,
            }),
        }
        self.high_water = self.high_water.max(self.members.len());
        true
    }

    /// Record a new cost for an id already on the frontier. Its insertion
    /// position is kept.
    ///
    /// Returns `false` if `id` is not present.
    pub fn reprioritize(&mut self, id: &NodeId, cost: u64) -> bool {
        let Some(member) = self.members.get_mut(id) else {
            return false;
        };
        member.cost = cost;
        let seq = member.seq;
        if let Backing::Heap(heap) = &mut self.backing {
            heap.push(HeapEntry {
                key: Reverse(FrontierKey { cost, seq }),
                id: id.clone(),
            });
        }
        true
    }

    /// Remove the next id according to the discipline.
    pub fn pop(&mut self) -> Option<NodeId> {
        match &mut self.backing {
            Backing::Sequence(queue) => {
                let id = match self.discipline {
                    Discipline::Lifo => queue.pop_back(),
                    Discipline::Fifo | Discipline::CostOrdered => queue.pop_front(),
                }?;
                self.members.remove(&id);
                Some(id)
            }
            Backing::Heap(heap) => {
                while let Some(HeapEntry { key: Reverse(key), id }) = heap.pop() {
                    let live = self
                        .members
                        .get(&id)
                        .is_some_and(|m| m.seq == key.seq && m.cost == key.cost);
                    if live {
                        self.members.remove(&id);
                        return Some(id);
                    }
                }
                None
            }
        }
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.members.contains_key(id)
    }

    /// Cost recorded for `id` while it is on the frontier.
    #[must_use]
    pub fn cost_of(&self, id: &str) -> Option<u64> {
        self.members.get(id).map(|m| m.cost)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Frontier contents in insertion order.
    #[must_use]
    pub fn ids(&self) -> Vec<NodeId> {
        let mut entries: Vec<(u64, &NodeId)> =
            self.members.iter().map(|(id, m)| (m.seq, id)).collect();
        entries.sort_unstable_by_key(|(seq, _)| *seq);
        entries.into_iter().map(|(_, id)| id.clone()).collect()
    }

    /// Largest size the frontier has reached.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
