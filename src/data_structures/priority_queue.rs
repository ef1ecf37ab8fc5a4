use std::cmp::Ordering;
use std::fmt::Debug;

/// An addressable binary min-heap for Dijkstra's and Prim's algorithms.
///
/// Items are identified by a dense `usize` id (a vertex id). A position map from
/// id to heap slot makes `contains`, `priority` and `decrease_key` cheap, so a
/// priority update costs O(log n) instead of a linear scan plus full reheapify.
///
/// Entries are ordered by `(priority, tie)`: equal priorities come out in
/// ascending `tie` order, which keeps extraction deterministic.
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<P, T>
where
    P: Ord + Copy + Debug,
    T: Ord + Clone + Debug,
{
    /// Heap-ordered entries
    heap: Vec<Entry<P, T>>,

    /// id -> slot in `heap`, `None` when the id is not queued
    positions: Vec<Option<usize>>,
}

#[derive(Debug, Clone)]
struct Entry<P, T> {
    priority: P,
    tie: T,
    id: usize,
}

impl<P: Ord, T: Ord> Entry<P, T> {
    fn cmp_key(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.tie.cmp(&other.tie))
    }
}

impl<P, T> Default for IndexedPriorityQueue<P, T>
where
    P: Ord + Copy + Debug,
    T: Ord + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P, T> IndexedPriorityQueue<P, T>
where
    P: Ord + Copy + Debug,
    T: Ord + Clone + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        IndexedPriorityQueue {
            heap: Vec::new(),
            positions: Vec::new(),
        }
    }

    /// Creates a queue sized for ids in `0..ids`
    pub fn with_capacity(ids: usize) -> Self {
        IndexedPriorityQueue {
            heap: Vec::with_capacity(ids),
            positions: vec![None; ids],
        }
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of queued entries
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether `id` is currently queued
    pub fn contains(&self, id: usize) -> bool {
        self.slot(id).is_some()
    }

    /// Current priority of a queued id
    pub fn priority(&self, id: usize) -> Option<P> {
        self.slot(id).map(|slot| self.heap[slot].priority)
    }

    /// Inserts `id`, or updates its priority if it is already queued.
    ///
    /// Raising an existing priority is allowed and sifts the entry down.
    pub fn push(&mut self, id: usize, tie: T, priority: P) {
        if let Some(slot) = self.slot(id) {
            let old = self.heap[slot].priority;
            self.heap[slot].priority = priority;
            match priority.cmp(&old) {
                Ordering::Less => self.sift_up(slot),
                Ordering::Greater => self.sift_down(slot),
                Ordering::Equal => {}
            }
            return;
        }

        if id >= self.positions.len() {
            self.positions.resize(id + 1, None);
        }
        let slot = self.heap.len();
        self.heap.push(Entry { priority, tie, id });
        self.positions[id] = Some(slot);
        self.sift_up(slot);
    }

    /// Lowers the priority of a queued id. Returns false if the id is absent or
    /// `priority` is not smaller than the current one.
    pub fn decrease_key(&mut self, id: usize, priority: P) -> bool {
        match self.slot(id) {
            Some(slot) if priority < self.heap[slot].priority => {
                self.heap[slot].priority = priority;
                self.sift_up(slot);
                true
            }
            _ => false,
        }
    }

    /// Removes and returns the entry with the smallest `(priority, tie)`
    pub fn pop(&mut self) -> Option<(usize, P)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop()?;
        self.positions[entry.id] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((entry.id, entry.priority))
    }

    /// Returns the smallest entry without removing it
    pub fn peek(&self) -> Option<(usize, P)> {
        self.heap.first().map(|entry| (entry.id, entry.priority))
    }

    /// Empties the queue
    pub fn clear(&mut self) {
        for entry in self.heap.drain(..) {
            self.positions[entry.id] = None;
        }
    }

    fn slot(&self, id: usize) -> Option<usize> {
        self.positions.get(id).copied().flatten()
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].id] = Some(a);
        self.positions[self.heap[b].id] = Some(b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot].cmp_key(&self.heap[parent]) == Ordering::Less {
                self.swap(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < len && self.heap[left].cmp_key(&self.heap[smallest]) == Ordering::Less {
                smallest = left;
            }
            if right < len && self.heap[right].cmp_key(&self.heap[smallest]) == Ordering::Less {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }
}
