/// The abstract set contract: a collection of distinct elements.
pub trait Set<T> {
    /// Adds `element` to the set. Adding an element that is already present has no effect.
    fn add(&mut self, element: T);

    /// Returns `true` if `element` is in the set.
    fn contains(&self, element: &T) -> bool;

    /// Returns the number of elements in the set.
    fn size(&self) -> usize;
}
