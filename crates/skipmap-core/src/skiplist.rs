use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::config::Config;
use crate::level::{GeometricLevelGenerator, LevelGenerator, MAX_LEVEL};
use crate::node::{Arena, Node, NodeId, Record};
use crate::Result;

/// Ordered map backed by a skip list.
///
/// Every operation starts at the head sentinel on the highest level in use,
/// moves right while the next key is smaller than the target and steps down
/// a level when it is not. Nodes live in an arena owned by the list and link
/// to each other by index.
///
/// The list does no locking. Share it between threads only behind an
/// external lock that serializes readers as well as writers.
pub struct SkipList<K, V, G = GeometricLevelGenerator> {
    arena: Arena<K, V>,
    /// Highest level in use; the head has `level + 1` forward slots.
    level: usize,
    len: usize,
    generator: G,
}

impl<K: Ord, V> SkipList<K, V> {
    pub fn new() -> Self {
        Self::from_parts(0, GeometricLevelGenerator::default())
    }

    /// Builds a list whose levels come from a geometric generator clamped at
    /// `config.max_level`, seeded from `config.seed` when present.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        debug!(
            max_level = config.max_level,
            seeded = config.seed.is_some(),
            "building geometric level generator"
        );
        let generator = match config.seed {
            Some(seed) => GeometricLevelGenerator::seeded(config.max_level, seed),
            None => GeometricLevelGenerator::new(config.max_level),
        };
        Ok(Self::with_generator(config, generator))
    }
}

impl<K: Ord, V> Default for SkipList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V, G: LevelGenerator> SkipList<K, V, G> {
    /// Builds a list that draws node levels from `generator`.
    ///
    /// Only `config.initial_level_hint` is read here, clamped to the highest
    /// level `generator` can produce; the clamp and seed belong to the
    /// generator.
    pub fn with_generator(config: Config, generator: G) -> Self {
        debug!(
            initial_level_hint = config.initial_level_hint,
            max_level = generator.max_level(),
            "building skip list"
        );
        Self::from_parts(config.initial_level_hint, generator)
    }

    fn from_parts(level_hint: usize, generator: G) -> Self {
        let level_hint = level_hint.min(generator.max_level()).min(MAX_LEVEL);
        SkipList {
            arena: Arena::with_head(Node::head(level_hint + 1)),
            level: 0,
            len: 0,
            generator,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Highest level currently in use. Never decreases.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Next node after `at` on `level`, with its record.
    fn successor(&self, at: NodeId, level: usize) -> Option<(NodeId, &Record<K, V>)> {
        let next = self.arena[at].forward[level]?;
        let record = self.arena[next].record.as_ref()?;
        Some((next, record))
    }

    /// For each level, the rightmost node whose key is below `key`.
    fn predecessors(&self, key: &K) -> Vec<NodeId> {
        let mut update = vec![NodeId::HEAD; self.level + 1];
        let mut current = NodeId::HEAD;

        for level in (0..=self.level).rev() {
            while let Some((next, record)) = self.successor(current, level) {
                if record.key < *key {
                    current = next;
                } else {
                    break;
                }
            }
            update[level] = current;
        }

        update
    }

    pub fn find(&self, key: &K) -> Option<&V> {
        let mut current = NodeId::HEAD;

        for level in (0..=self.level).rev() {
            while let Some((next, record)) = self.successor(current, level) {
                match record.key.cmp(key) {
                    Ordering::Less => current = next,
                    Ordering::Equal => return Some(&record.value),
                    Ordering::Greater => break,
                }
            }
        }

        None
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Inserts `key`, replacing the value in place if it is already present.
    pub fn insert(&mut self, key: K, value: V) {
        let mut update = self.predecessors(&key);

        let candidate = self.arena[update[0]].forward[0];
        if let Some(next) = candidate {
            if let Some(record) = self.arena[next].record.as_mut() {
                if record.key == key {
                    record.value = value;
                    return;
                }
            }
        }

        let new_level = self.generator.next_level().min(MAX_LEVEL);
        if new_level > self.level {
            trace!(from = self.level, to = new_level, "raising skip list level");
            self.arena[NodeId::HEAD].forward.resize(new_level + 1, None);
            update.resize(new_level + 1, NodeId::HEAD);
            self.level = new_level;
        }

        let forward = update[..=new_level]
            .iter()
            .enumerate()
            .map(|(level, &pred)| self.arena[pred].forward[level])
            .collect();
        let id = self.arena.alloc(Node::new(Record::new(key, value), forward));

        for (level, &pred) in update[..=new_level].iter().enumerate() {
            self.arena[pred].forward[level] = Some(id);
        }

        self.len += 1;
    }

    /// Removes `key` and returns its value. Absent keys are a no-op.
    pub fn delete(&mut self, key: &K) -> Option<V> {
        let mut current = NodeId::HEAD;
        let mut removed = None;

        for level in (0..=self.level).rev() {
            while let Some((next, record)) = self.successor(current, level) {
                match record.key.cmp(key) {
                    Ordering::Less => current = next,
                    Ordering::Equal => {
                        let after = self.arena[next].forward[level];
                        self.arena[current].forward[level] = after;
                        removed = Some(next);
                    }
                    Ordering::Greater => break,
                }
            }
        }

        let node = self.arena.release(removed?)?;
        self.len -= 1;
        node.record.map(|record| record.value)
    }

    /// Records on `level`, in key order.
    pub(crate) fn chain(&self, level: usize) -> Chain<'_, K, V> {
        Chain {
            arena: &self.arena,
            cursor: self.arena[NodeId::HEAD].forward.get(level).copied().flatten(),
            level,
        }
    }

    /// Renders every level from the top down, one `level: L - node: key, value`
    /// line per node. For diagnostics only; the format is not stable.
    pub fn debug_dump(&self) -> String
    where
        K: fmt::Debug,
        V: fmt::Debug,
    {
        let mut out = String::new();
        for level in (0..=self.level).rev() {
            for record in self.chain(level) {
                out.push_str(&format!(
                    "level: {} - node: {:?}, {:?}\n",
                    level, record.key, record.value
                ));
            }
        }
        out
    }
}

impl<K, V, G> fmt::Debug for SkipList<K, V, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkipList")
            .field("len", &self.len)
            .field("level", &self.level)
            .finish()
    }
}

pub(crate) struct Chain<'a, K, V> {
    arena: &'a Arena<K, V>,
    cursor: Option<NodeId>,
    level: usize,
}

impl<'a, K, V> Iterator for Chain<'a, K, V> {
    type Item = &'a Record<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.arena[self.cursor?];
        self.cursor = node.forward[self.level];
        node.record.as_ref()
    }
}
