use std::fmt;
use std::ops::{Index, IndexMut};

/// Index of a node inside an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    /// The head sentinel always occupies the first slot.
    pub(crate) const HEAD: NodeId = NodeId(0);
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Record<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

impl<K, V> Record<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        Record { key, value }
    }
}

pub(crate) struct Node<K, V> {
    /// `None` only for the head sentinel.
    pub(crate) record: Option<Record<K, V>>,
    /// `forward[i]` is the next node on level `i`.
    pub(crate) forward: Vec<Option<NodeId>>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(record: Record<K, V>, forward: Vec<Option<NodeId>>) -> Self {
        Node {
            record: Some(record),
            forward,
        }
    }

    pub(crate) fn head(capacity: usize) -> Self {
        let mut forward = Vec::with_capacity(capacity);
        forward.push(None);
        Node {
            record: None,
            forward,
        }
    }

    pub(crate) fn level(&self) -> usize {
        self.forward.len() - 1
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Node<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("record", &self.record)
            .field("level", &self.level())
            .finish()
    }
}

/// Slot storage for the nodes of one list.
///
/// Forward references are plain indices into `slots`, so nodes never own
/// each other. Removing a node vacates its slot and puts the index on the
/// free list for the next allocation.
pub(crate) struct Arena<K, V> {
    slots: Vec<Option<Node<K, V>>>,
    free: Vec<usize>,
}

impl<K, V> Arena<K, V> {
    pub(crate) fn with_head(head: Node<K, V>) -> Self {
        Arena {
            slots: vec![Some(head)],
            free: Vec::new(),
        }
    }

    pub(crate) fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                NodeId(index)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Vacates `id` and returns the node that lived there.
    pub(crate) fn release(&mut self, id: NodeId) -> Option<Node<K, V>> {
        if id == NodeId::HEAD {
            return None;
        }
        let node = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        Some(node)
    }

    /// Number of occupied slots, head sentinel included.
    #[cfg(test)]
    pub(crate) fn occupied(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl<K, V> Index<NodeId> for Arena<K, V> {
    type Output = Node<K, V>;

    fn index(&self, id: NodeId) -> &Self::Output {
        match &self.slots[id.0] {
            Some(node) => node,
            None => panic!("node {} has been released", id.0),
        }
    }
}

impl<K, V> IndexMut<NodeId> for Arena<K, V> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        match &mut self.slots[id.0] {
            Some(node) => node,
            None => panic!("node {} has been released", id.0),
        }
    }
}
