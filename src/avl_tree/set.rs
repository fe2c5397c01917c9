use crate::avl_tree::tree::{self, Insertion, Tree};
use crate::error::InvariantError;
use crate::traits::Set;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::FromIterator;
use std::mem;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Balancing is chosen once, at
/// construction. A set built with balancing disabled runs the same insertion code without
/// rotations and degenerates into a chain when fed sorted input.
///
/// The element type must be totally ordered, with `Ord` consistent with `Eq`. Any other ordering
/// leaves the shape of the tree and the results of queries unspecified.
///
/// # Examples
/// ```
/// use avl_set::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.height(), 1);
///
/// assert_eq!(set.min(), Some(&0));
/// assert!(set.contains(&3));
/// assert!(!set.contains(&1));
/// ```
#[derive(Clone)]
pub struct AvlSet<T> {
    root: Tree<T>,
    len: usize,
    balanced: bool,
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlSet<T>` that keeps itself balanced.
    ///
    /// # Examples
    /// ```
    /// use avl_set::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// assert!(set.is_balanced());
    /// ```
    pub fn new() -> Self {
        Self::with_balancing(true)
    }

    /// Constructs a new, empty `AvlSet<T>`, with or without balancing.
    ///
    /// # Examples
    /// ```
    /// use avl_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::with_balancing(false);
    /// for i in 0..4 {
    ///     set.insert(i);
    /// }
    /// assert_eq!(set.height(), 3);
    /// ```
    pub fn with_balancing(balanced: bool) -> Self {
        AvlSet {
            root: None,
            len: 0,
            balanced,
        }
    }

    /// Inserts a value into the set. Returns `true` if the value was not already present. A value
    /// that is already present is dropped and the set is left untouched.
    ///
    /// # Examples
    /// ```
    /// use avl_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        match tree::insert(&mut self.root, value, self.balanced) {
            Insertion::Added { .. } => {
                self.len += 1;
                true
            },
            Insertion::Exists => {
                trace!("ignoring duplicate insertion into set of {} elements", self.len);
                false
            },
        }
    }

    /// Checks if a value exists in the set.
    ///
    /// # Examples
    /// ```
    /// use avl_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        tree::contains(&self.root, value)
    }

    /// Returns the minimum value of the set. Returns `None` if the set is empty.
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.root)
    }

    /// Returns the maximum value of the set. Returns `None` if the set is empty.
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.root)
    }

    /// Moves the contents out of the set, leaving it empty. The returned set owns the original
    /// tree and keeps its balancing mode; `self` keeps its mode too.
    ///
    /// Assigning the result over an existing set drops that set's previous contents.
    ///
    /// # Examples
    /// ```
    /// use avl_set::avl_tree::AvlSet;
    ///
    /// let mut source: AvlSet<u32> = (0..10).collect();
    /// let mut dest = AvlSet::new();
    /// dest.insert(100);
    ///
    /// dest = source.take();
    /// assert_eq!(dest.len(), 10);
    /// assert!(!dest.contains(&100));
    /// assert_eq!(source.len(), 0);
    /// assert_eq!(source.height(), -1);
    /// ```
    pub fn take(&mut self) -> Self {
        debug!("moving out set of {} elements", self.len);
        let empty = Self::with_balancing(self.balanced);
        mem::replace(self, empty)
    }

    /// Checks every structural invariant of the set: strict ordering, cached heights, the avl
    /// property when balancing is enabled, and the element count.
    ///
    /// # Examples
    /// ```
    /// use avl_set::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = (0..100).collect();
    /// assert_eq!(set.validate(), Ok(()));
    /// ```
    pub fn validate(&self) -> Result<(), InvariantError> {
        let expected = tree::validate(&self.root, self.balanced)?;
        if expected != self.len {
            return Err(InvariantError::SizeMismatch { expected, found: self.len });
        }
        Ok(())
    }
}

impl<T> AvlSet<T> {
    /// Returns `true` if the set rebalances itself after insertions.
    pub fn is_balanced(&self) -> bool {
        self.balanced
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the height of the underlying tree. A single element has height `0` and an empty set
    /// has height `-1`.
    ///
    /// # Examples
    /// ```
    /// use avl_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.height(), -1);
    /// set.insert(1);
    /// assert_eq!(set.height(), 0);
    /// ```
    pub fn height(&self) -> isize {
        tree::height(&self.root)
    }

    /// Calls `visit` on every value, visiting each node before its subtrees.
    ///
    /// # Examples
    /// ```
    /// use avl_set::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = vec![1, 2, 3].into_iter().collect();
    /// let mut values = Vec::new();
    /// set.preorder(|value| values.push(*value));
    /// assert_eq!(values, vec![2, 1, 3]);
    /// ```
    pub fn preorder<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        tree::preorder(&self.root, &mut visit);
    }

    /// Calls `visit` on every value in increasing order.
    ///
    /// # Examples
    /// ```
    /// use avl_set::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = vec![3, 1, 2].into_iter().collect();
    /// let mut values = Vec::new();
    /// set.inorder(|value| values.push(*value));
    /// assert_eq!(values, vec![1, 2, 3]);
    /// ```
    pub fn inorder<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        tree::inorder(&self.root, &mut visit);
    }

    /// Calls `visit` on every value, visiting each node after its subtrees.
    pub fn postorder<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        tree::postorder(&self.root, &mut visit);
    }

    fn elements(&self) -> Vec<&T> {
        let mut elements = Vec::with_capacity(self.len);
        self.inorder(|value| elements.push(value));
        elements
    }
}

impl<T> Drop for AvlSet<T> {
    fn drop(&mut self) {
        let freed = tree::destroy(&mut self.root);
        if freed > 0 {
            debug!("tore down {} nodes", freed);
        }
    }
}

impl<T> Set<T> for AvlSet<T>
where
    T: Ord,
{
    fn add(&mut self, element: T) {
        self.insert(element);
    }

    fn contains(&self, element: &T) -> bool {
        AvlSet::contains(self, element)
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Default for AvlSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for AvlSet<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for AvlSet<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> PartialEq for AvlSet<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.elements() == other.elements()
    }
}

impl<T> Eq for AvlSet<T> where T: Eq {}

impl<T> fmt::Debug for AvlSet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.elements()).finish()
    }
}

#[derive(Serialize)]
#[serde(rename = "AvlSet")]
struct SerializedSet<'a, T: 'a> {
    balanced: bool,
    elements: Vec<&'a T>,
}

#[derive(Deserialize)]
#[serde(rename = "AvlSet")]
struct DeserializedSet<T> {
    balanced: bool,
    elements: Vec<T>,
}

impl<T> Serialize for AvlSet<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut elements = Vec::with_capacity(self.len);
        self.preorder(|value| elements.push(value));
        SerializedSet { balanced: self.balanced, elements }.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for AvlSet<T>
where
    T: Ord + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let DeserializedSet { balanced, elements } = DeserializedSet::<T>::deserialize(deserializer)?;
        let mut set = AvlSet::with_balancing(balanced);
        set.extend(elements);
        Ok(set)
    }
}
