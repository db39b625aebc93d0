//! # canontrie
//!
//! A persistent map from strictly positive arbitrary-precision integers to
//! values, stored as an uncompressed binary trie keyed by the binary digits of
//! the key.
//!
//! The trie is kept in **canonical form**: among all tree shapes that encode
//! the same key/value associations, exactly one is ever constructed. Two maps
//! therefore compare equal with plain structural `==` exactly when they hold
//! the same entries, which makes [`TrieMap`] usable as a hashable, comparable
//! value in its own right.
//!
//! Updates never mutate in place. Every operation returns a new map that
//! shares unchanged subtrees with its inputs, so older versions stay valid and
//! any number of threads can read any number of versions concurrently.
//!
//! ## Example
//!
//! ```rust
//! use canontrie::{Key, TrieMap};
//!
//! let k3 = Key::try_from(3u64).unwrap();
//! let k5 = Key::try_from(5u64).unwrap();
//!
//! let m: TrieMap<&str> = TrieMap::new().insert(&k5, "five");
//! assert_eq!(m.get(&k5), Some(&"five"));
//! assert_eq!(m.get(&k3), None);
//!
//! // Removal collapses the vacated branch: the result is structurally
//! // identical to a map that never contained the key.
//! assert_eq!(m.insert(&k3, "three").remove(&k3), m);
//! ```

#![forbid(unsafe_code)]

use std::fmt;
use std::num::NonZeroU64;
use std::sync::Arc;

use num_bigint::BigUint;
use thiserror::Error;

// =============================================================================
// Keys
// =============================================================================

/// Error returned when constructing a [`Key`] from zero.
///
/// Keys must be strictly positive: the trie walks the binary digits of the key
/// below its most significant one-bit, and that implicit leading one is what
/// terminates the walk. Zero has no leading one and no position in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("trie keys must be strictly positive integers")]
pub struct ZeroKeyError;

/// A strictly positive arbitrary-precision integer key.
///
/// Viewed by the trie as a non-empty bit string: the bits below the most
/// significant one are consumed least-significant-first while descending (0
/// goes left, 1 goes right), and the leading one marks the node that owns the
/// key's value.
///
/// `Ord` is numeric order. Map iteration is *not* in numeric order; see
/// [`TrieMap::iter`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(BigUint);

impl Key {
    /// Creates a key from an arbitrary-precision integer.
    ///
    /// Fails with [`ZeroKeyError`] if `n` is zero.
    pub fn new(n: BigUint) -> Result<Self, ZeroKeyError> {
        if n.bits() == 0 {
            Err(ZeroKeyError)
        } else {
            Ok(Key(n))
        }
    }

    /// The numeric value of this key.
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Consumes the key, returning its numeric value.
    pub fn into_biguint(self) -> BigUint {
        self.0
    }

    /// Number of branch bits below the implicit leading one; the depth of the
    /// node owning this key.
    fn depth(&self) -> u64 {
        self.0.bits() - 1
    }

    /// Branch bit taken at depth `i` while descending: `false` is left, `true`
    /// is right.
    fn branch_bit(&self, i: u64) -> bool {
        self.0.bit(i)
    }

    /// Rebuilds a key from a root-to-node path of branch bits.
    ///
    /// The path accumulates root-first, but the root bit must end up least
    /// significant, so the path is folded in reverse under the leading one.
    fn from_path(path: &[bool]) -> Self {
        let mut n = BigUint::from(1u8);
        for &bit in path.iter().rev() {
            n <<= 1u8;
            if bit {
                n.set_bit(0, true);
            }
        }
        Key(n)
    }
}

impl From<NonZeroU64> for Key {
    fn from(n: NonZeroU64) -> Self {
        Key(BigUint::from(n.get()))
    }
}

impl TryFrom<u64> for Key {
    type Error = ZeroKeyError;

    fn try_from(n: u64) -> Result<Self, ZeroKeyError> {
        Key::new(BigUint::from(n))
    }
}

impl TryFrom<u128> for Key {
    type Error = ZeroKeyError;

    fn try_from(n: u128) -> Result<Self, ZeroKeyError> {
        Key::new(BigUint::from(n))
    }
}

impl TryFrom<BigUint> for Key {
    type Error = ZeroKeyError;

    fn try_from(n: BigUint) -> Result<Self, ZeroKeyError> {
        Key::new(n)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// =============================================================================
// Raw tree and the pruning constructor
// =============================================================================

/// The raw binary trie.
///
/// Canonical-form invariant: `Node { value: None, left: Empty, right: Empty }`
/// never occurs; every reachable node either carries a value or has a
/// non-empty child. The invariant is established exclusively by [`node`] and
/// never re-checked afterwards, which is what lets `PartialEq` stand in for
/// extensional map equality.
#[derive(Debug, Clone, Eq, Hash)]
enum Tree<V> {
    Empty,
    Node {
        value: Option<V>,
        left: Arc<Tree<V>>,
        right: Arc<Tree<V>>,
    },
}

impl<V> Tree<V> {
    fn is_empty(&self) -> bool {
        matches!(self, Tree::Empty)
    }
}

impl<V: PartialEq> PartialEq for Tree<V> {
    fn eq(&self, other: &Self) -> bool {
        // Worklist walk: comparison depth equals the longest key's bit
        // length, which can dwarf the call stack.
        let mut pending: Vec<(&Tree<V>, &Tree<V>)> = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (Tree::Empty, Tree::Empty) => {}
                (
                    Tree::Node {
                        value: va,
                        left: la,
                        right: ra,
                    },
                    Tree::Node {
                        value: vb,
                        left: lb,
                        right: rb,
                    },
                ) => {
                    if va != vb {
                        return false;
                    }
                    // Structurally shared subtrees are equal without
                    // descending.
                    if !Arc::ptr_eq(la, lb) {
                        pending.push((la.as_ref(), lb.as_ref()));
                    }
                    if !Arc::ptr_eq(ra, rb) {
                        pending.push((ra.as_ref(), rb.as_ref()));
                    }
                }
                _ => return false,
            }
        }
        true
    }
}

impl<V> Default for Tree<V> {
    fn default() -> Self {
        Tree::Empty
    }
}

/// Dropping hands subtrees to a worklist instead of recursing, so discarding
/// a map keyed by very long integers cannot overflow the stack. Subtrees
/// still referenced by other versions are released by reference count only.
impl<V> Drop for Tree<V> {
    fn drop(&mut self) {
        if let Tree::Node { left, right, .. } = self {
            let mut pending = vec![std::mem::take(left), std::mem::take(right)];
            while let Some(arc) = pending.pop() {
                if let Ok(mut t) = Arc::try_unwrap(arc) {
                    if let Tree::Node { left, right, .. } = &mut t {
                        pending.push(std::mem::take(left));
                        pending.push(std::mem::take(right));
                    }
                }
            }
        }
    }
}

/// The only place a `Node` is ever built. Collapses the value-absent,
/// both-children-empty configuration to `Empty`; every operation rebuilds its
/// result bottom-up through this constructor, so the invariant is
/// re-established at every level even when an intermediate shape would
/// momentarily violate it.
fn node<V>(value: Option<V>, left: Arc<Tree<V>>, right: Arc<Tree<V>>) -> Tree<V> {
    if value.is_none() && left.is_empty() && right.is_empty() {
        Tree::Empty
    } else {
        Tree::Node { value, left, right }
    }
}

fn empty_arc<V>() -> Arc<Tree<V>> {
    Arc::new(Tree::Empty)
}

/// Builds the unique canonical tree holding exactly one entry: `value` at the
/// position addressed by `key`'s branch bits from depth `from` downwards.
/// Wraps bottom-up so the outermost shell corresponds to bit `from`.
fn build_path<V>(key: &Key, from: u64, value: V) -> Tree<V> {
    let mut t = node(Some(value), empty_arc(), empty_arc());
    let mut j = key.depth();
    while j > from {
        j -= 1;
        t = if key.branch_bit(j) {
            node(None, empty_arc(), Arc::new(t))
        } else {
            node(None, Arc::new(t), empty_arc())
        };
    }
    t
}

// The whole-tree transforms below recurse structurally; their depth is the
// trie depth, i.e. the longest key's bit length. The key-driven walks (`get`,
// `alter`), equality, and drop are iterative and have no such bound.

/// Structural mirror transforming node values. Presence and shape are
/// untouched, so no pruning is needed and `Node` is built directly.
fn map_tree<V, W>(t: &Tree<V>, f: &impl Fn(&V) -> W) -> Tree<W> {
    match t {
        Tree::Empty => Tree::Empty,
        Tree::Node { value, left, right } => Tree::Node {
            value: value.as_ref().map(f),
            left: Arc::new(map_tree(left, f)),
            right: Arc::new(map_tree(right, f)),
        },
    }
}

/// Like [`map_tree`], but `f` may drop values, so the result goes through
/// [`node`] at every level and vacated subtrees collapse.
fn filter_map_tree<V, W>(t: &Tree<V>, f: &impl Fn(&V) -> Option<W>) -> Tree<W> {
    match t {
        Tree::Empty => Tree::Empty,
        Tree::Node { value, left, right } => node(
            value.as_ref().and_then(f),
            Arc::new(filter_map_tree(left, f)),
            Arc::new(filter_map_tree(right, f)),
        ),
    }
}

/// Pairwise merge. An empty side degenerates to a one-sided filter-map of the
/// other; two nodes combine their own values and merge children pairwise,
/// pruning at every level since an entire subtree can become uniformly absent.
fn merge_tree<A, B, C>(
    a: &Tree<A>,
    b: &Tree<B>,
    f: &impl Fn(Option<&A>, Option<&B>) -> Option<C>,
) -> Tree<C> {
    match (a, b) {
        (Tree::Empty, Tree::Empty) => Tree::Empty,
        (Tree::Empty, _) => filter_map_tree(b, &|v| f(None, Some(v))),
        (_, Tree::Empty) => filter_map_tree(a, &|v| f(Some(v), None)),
        (
            Tree::Node {
                value: va,
                left: la,
                right: ra,
            },
            Tree::Node {
                value: vb,
                left: lb,
                right: rb,
            },
        ) => node(
            f(va.as_ref(), vb.as_ref()),
            Arc::new(merge_tree(la, lb, f)),
            Arc::new(merge_tree(ra, rb, f)),
        ),
    }
}

// =============================================================================
// TrieMap
// =============================================================================

/// A persistent map from [`Key`]s to values, in canonical form.
///
/// Structural equality (`==`, and the matching `Hash`) coincides with
/// extensional equality: two maps are `==` iff they associate the same values
/// to the same keys, regardless of the operation history that produced them.
///
/// All updating operations take `&self` and return a new map; unchanged
/// subtrees are shared between versions, so a point update costs O(bit-length
/// of the key) in time and fresh allocation.
#[derive(Clone, Eq, Hash)]
pub struct TrieMap<V> {
    root: Tree<V>,
}

impl<V> Default for TrieMap<V> {
    fn default() -> Self {
        TrieMap { root: Tree::Empty }
    }
}

impl<V: PartialEq> PartialEq for TrieMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl<V> TrieMap<V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the map holds no entries.
    ///
    /// O(1): canonical form guarantees the empty map is the `Empty` tree,
    /// never a skeleton of valueless nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns the number of entries. O(n).
    pub fn len(&self) -> usize {
        let mut n = 0;
        let mut stack: Vec<&Tree<V>> = vec![&self.root];
        while let Some(t) = stack.pop() {
            if let Tree::Node { value, left, right } = t {
                n += usize::from(value.is_some());
                stack.push(left);
                stack.push(right);
            }
        }
        n
    }

    /// Looks up the value stored for `key`.
    ///
    /// Walks one child per branch bit; the node reached when the bits run out
    /// owns the answer. Iterative, so arbitrarily long keys cannot overflow
    /// the call stack.
    ///
    /// Complexity: O(bit-length of `key`).
    pub fn get(&self, key: &Key) -> Option<&V> {
        let depth = key.depth();
        let mut t = &self.root;
        let mut i = 0;
        loop {
            match t {
                Tree::Empty => return None,
                Tree::Node { value, left, right } => {
                    if i == depth {
                        return value.as_ref();
                    }
                    t = if key.branch_bit(i) {
                        right.as_ref()
                    } else {
                        left.as_ref()
                    };
                    i += 1;
                }
            }
        }
    }

    /// Returns true if `key` has an entry.
    pub fn contains_key(&self, key: &Key) -> bool {
        self.get(key).is_some()
    }

    /// Transforms every stored value, preserving keys and shape.
    pub fn map_values<W>(&self, f: impl Fn(&V) -> W) -> TrieMap<W> {
        TrieMap {
            root: map_tree(&self.root, &f),
        }
    }

    /// Transforms every stored value, dropping entries for which `f` returns
    /// `None`. Branches left without values collapse, so the result is again
    /// canonical.
    pub fn filter_map_values<W>(&self, f: impl Fn(&V) -> Option<W>) -> TrieMap<W> {
        TrieMap {
            root: filter_map_tree(&self.root, &f),
        }
    }

    /// Merges two maps with a per-key combinator.
    ///
    /// For every key `i`, the result holds `f(a.get(i), b.get(i))`, with the
    /// entry absent when that is `None`.
    ///
    /// `f(None, None)` must return `None`: keys absent from both inputs are
    /// never visited, so a combinator conjuring a value out of two absences
    /// has no representable result. This is a caller contract, asserted in
    /// debug builds only.
    ///
    /// Complexity: O(|a| + |b|).
    pub fn merge<A, B>(
        f: impl Fn(Option<&A>, Option<&B>) -> Option<V>,
        a: &TrieMap<A>,
        b: &TrieMap<B>,
    ) -> TrieMap<V> {
        debug_assert!(
            f(None, None).is_none(),
            "merge combinator must map two absences to absence"
        );
        TrieMap {
            root: merge_tree(&a.root, &b.root, &f),
        }
    }

    /// Iterates over entries in canonical trie order: a node's own entry
    /// first, then its left subtree, then its right subtree.
    ///
    /// The order is deterministic and identical for equal maps, but it is
    /// *not* numeric key order (branch bits are consumed least-significant
    /// first).
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            stack: vec![(Vec::new(), &self.root)],
        }
    }
}

impl<V: Clone> TrieMap<V> {
    /// The generalized update: rewrites the entry for `key` through `f`,
    /// which receives the current value (if any) and decides the new one.
    ///
    /// `insert` and `remove` are the constant specializations; a
    /// value-transforming `f` updates in place. Every other key is untouched.
    ///
    /// The walk down and the rebuild back up are both iterative: the descent
    /// records, per level, the bit taken, the node's own value, and the
    /// sibling that stays shared; the result is then rebuilt bottom-up through
    /// the pruning constructor so a deletion collapses the whole vacated
    /// branch.
    ///
    /// Complexity: O(bit-length of `key`).
    pub fn alter(&self, key: &Key, f: impl FnOnce(Option<&V>) -> Option<V>) -> Self {
        let depth = key.depth();
        let mut spine: Vec<(bool, Option<V>, Arc<Tree<V>>)> = Vec::new();
        let mut t = &self.root;
        let mut i = 0;
        let mut result = loop {
            match t {
                Tree::Empty => {
                    // No entry to consult: a fresh value grows a new path for
                    // the remaining bits, absence stays absent.
                    break match f(None) {
                        Some(v) => build_path(key, i, v),
                        None => Tree::Empty,
                    };
                }
                Tree::Node { value, left, right } => {
                    if i == depth {
                        break node(f(value.as_ref()), Arc::clone(left), Arc::clone(right));
                    }
                    let bit = key.branch_bit(i);
                    let (child, sibling) = if bit { (right, left) } else { (left, right) };
                    spine.push((bit, value.clone(), Arc::clone(sibling)));
                    t = child.as_ref();
                    i += 1;
                }
            }
        };
        while let Some((bit, value, sibling)) = spine.pop() {
            result = if bit {
                node(value, sibling, Arc::new(result))
            } else {
                node(value, Arc::new(result), sibling)
            };
        }
        TrieMap { root: result }
    }

    /// Returns a map with `value` stored for `key`, replacing any previous
    /// entry.
    pub fn insert(&self, key: &Key, value: V) -> Self {
        self.alter(key, |_| Some(value))
    }

    /// Returns a map without an entry for `key`.
    pub fn remove(&self, key: &Key) -> Self {
        self.alter(key, |_| None)
    }

    /// Collects entries into a vector, in iteration order.
    pub fn to_vec(&self) -> Vec<(Key, V)> {
        self.iter().map(|(k, v)| (k, v.clone())).collect()
    }
}

impl<V: Clone> FromIterator<(Key, V)> for TrieMap<V> {
    /// Folds `insert` over the pairs: later pairs win on duplicate keys, and
    /// canonical form makes the result independent of input order.
    fn from_iter<I: IntoIterator<Item = (Key, V)>>(iter: I) -> Self {
        let mut m = Self::new();
        for (k, v) in iter {
            m = m.insert(&k, v);
        }
        m
    }
}

impl<V: fmt::Debug> fmt::Debug for TrieMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// =============================================================================
// Iteration
// =============================================================================

/// Iterator over a [`TrieMap`] in canonical trie order.
///
/// Carries the root-to-node branch path alongside each pending subtree; the
/// key of an emitted entry is rebuilt from that path (reversed, since the
/// root bit is the least significant) at emission time.
pub struct Iter<'a, V> {
    stack: Vec<(Vec<bool>, &'a Tree<V>)>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (Key, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((path, t)) = self.stack.pop() {
            if let Tree::Node { value, left, right } = t {
                // Right below left so the left subtree pops first.
                if !right.is_empty() {
                    let mut p = path.clone();
                    p.push(true);
                    self.stack.push((p, right.as_ref()));
                }
                if !left.is_empty() {
                    let mut p = path.clone();
                    p.push(false);
                    self.stack.push((p, left.as_ref()));
                }
                if let Some(v) = value {
                    return Some((Key::from_path(&path), v));
                }
            }
        }
        None
    }
}

impl<'a, V> IntoIterator for &'a TrieMap<V> {
    type Item = (Key, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}

// =============================================================================
// TrieSet
// =============================================================================

/// A persistent set of [`Key`]s: a [`TrieMap`] with a unit payload, where
/// presence of the entry is membership.
///
/// Inherits canonical form from the map, so `==` is extensional set equality.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct TrieSet {
    map: TrieMap<()>,
}

impl TrieSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `key` is a member.
    pub fn contains(&self, key: &Key) -> bool {
        self.map.contains_key(key)
    }

    /// Returns a set with `key` added.
    pub fn insert(&self, key: &Key) -> Self {
        TrieSet {
            map: self.map.insert(key, ()),
        }
    }

    /// Returns a set with `key` removed.
    pub fn remove(&self, key: &Key) -> Self {
        TrieSet {
            map: self.map.remove(key),
        }
    }

    /// Keys present in either set.
    pub fn union(&self, other: &Self) -> Self {
        TrieSet {
            map: TrieMap::merge(|a, b| a.or(b).copied(), &self.map, &other.map),
        }
    }

    /// Keys present in both sets.
    pub fn intersection(&self, other: &Self) -> Self {
        TrieSet {
            map: TrieMap::merge(|a, b| a.and(b).copied(), &self.map, &other.map),
        }
    }

    /// Keys present in `self` but not in `other`.
    pub fn difference(&self, other: &Self) -> Self {
        TrieSet {
            map: TrieMap::merge(
                |a, b: Option<&()>| if b.is_none() { a.copied() } else { None },
                &self.map,
                &other.map,
            ),
        }
    }

    /// Iterates over members in canonical trie order.
    pub fn iter(&self) -> SetIter<'_> {
        SetIter {
            inner: self.map.iter(),
        }
    }

    /// Returns the number of members. O(n).
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the set has no members. O(1).
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl FromIterator<Key> for TrieSet {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut s = Self::new();
        for k in iter {
            s = s.insert(&k);
        }
        s
    }
}

impl fmt::Debug for TrieSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over a [`TrieSet`]'s members.
pub struct SetIter<'a> {
    inner: Iter<'a, ()>,
}

impl Iterator for SetIter<'_> {
    type Item = Key;

    fn next(&mut self) -> Option<Key> {
        self.inner.next().map(|(k, _)| k)
    }
}

impl<'a> IntoIterator for &'a TrieSet {
    type Item = Key;
    type IntoIter = SetIter<'a>;

    fn into_iter(self) -> SetIter<'a> {
        self.iter()
    }
}

// =============================================================================
// Serde
// =============================================================================

/// The wire format carries the logical content only, never the tree shape: a
/// map is a sequence of `(key, value)` pairs in iteration order, rebuilt on
/// deserialization by the `FromIterator` fold (which restores canonical form
/// for any pair order). A set is a sequence of keys. Keys travel as decimal
/// strings, independent of the big-integer backend's internal digit layout,
/// and deserialization re-validates positivity.
#[cfg(feature = "serde")]
mod serde_impls {
    use super::{Key, TrieMap, TrieSet};
    use num_bigint::BigUint;
    use serde::de::Error as _;
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Key {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self.as_biguint())
        }
    }

    impl<'de> Deserialize<'de> for Key {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            let n: BigUint = s.parse().map_err(D::Error::custom)?;
            Key::new(n).map_err(D::Error::custom)
        }
    }

    impl<V: Serialize> Serialize for TrieMap<V> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for entry in self.iter() {
                seq.serialize_element(&entry)?;
            }
            seq.end()
        }
    }

    impl<'de, V: Deserialize<'de> + Clone> Deserialize<'de> for TrieMap<V> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let pairs = Vec::<(Key, V)>::deserialize(deserializer)?;
            Ok(pairs.into_iter().collect())
        }
    }

    impl Serialize for TrieSet {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for key in self.iter() {
                seq.serialize_element(&key)?;
            }
            seq.end()
        }
    }

    impl<'de> Deserialize<'de> for TrieSet {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let keys = Vec::<Key>::deserialize(deserializer)?;
            Ok(keys.into_iter().collect())
        }
    }
}

// =============================================================================
// Tests
// =============================================================================


#[cfg(test)]
mod proptests;
