use std::{collections::HashSet, hash::Hash};

pub trait SliceUtil {
    /// Returns `true` if no value appears twice
    fn is_unique<T>(&self) -> bool
    where
        Self: AsRef<[T]>,
        T: Eq + Hash,
    {
        is_unique(self.as_ref())
    }
}

impl<T> SliceUtil for [T] {}

impl<T> SliceUtil for Vec<T> {}

pub fn is_unique<T: Eq + Hash>(slice: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(slice.len());
    slice.iter().all(|el| seen.insert(el))
}
