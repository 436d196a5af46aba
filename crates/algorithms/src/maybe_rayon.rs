/// Row-parallel execution shim.
///
/// With the `parallel` feature the row loops of every filter run on rayon's
/// thread pool. Without it (single-threaded or wasm targets) the same
/// `into_par_iter()` call sites fall back to ordinary iterators, so the
/// filter code is written once.
#[cfg(feature = "parallel")]
pub use rayon::prelude::*;

#[cfg(not(feature = "parallel"))]
mod sequential {
    /// Sequential stand-in for `rayon::prelude::IntoParallelIterator`.
    ///
    /// `into_par_iter()` forwards to `into_iter()`, so `.flat_map()` and
    /// `.collect()` resolve to the standard `Iterator` adaptors.
    pub trait IntoParallelIterator {
        type Iter;
        type Item;
        fn into_par_iter(self) -> Self::Iter;
    }

    impl<I: IntoIterator> IntoParallelIterator for I {
        type Iter = I::IntoIter;
        type Item = I::Item;
        fn into_par_iter(self) -> Self::Iter {
            self.into_iter()
        }
    }
}

#[cfg(not(feature = "parallel"))]
pub use sequential::*;
