//! Chromosome-name canonicalization.
//!
//! A sorted pairs file repeats a small vocabulary of chromosome names across
//! tens of millions of lines. Allocating each occurrence separately would
//! waste memory proportional to the line count, so the parser routes every
//! name token through a [`StringPool`] that hands back one shared [`Arc<str>`]
//! per distinct name.
//!
//! The pool copies the token into a fresh allocation on first sight. This
//! matters because tokens are slices of a reused line buffer: storing a view
//! into that buffer would pin it (or read stale bytes) for the pool's
//! lifetime.

use std::collections::HashSet;
use std::sync::Arc;

/// Intern pool mapping name text to one canonical shared instance.
///
/// Owned by exactly one stream; grows monotonically as new names are seen
/// and is discarded when the stream closes. Equal text always yields a
/// pointer-identical `Arc<str>` for the life of the pool.
///
/// # Examples
///
/// ```
/// use hicpairs::StringPool;
/// use std::sync::Arc;
///
/// let mut pool = StringPool::new();
/// let a = pool.intern("chr7");
/// let b = pool.intern("chr7");
/// assert!(Arc::ptr_eq(&a, &b));
/// assert_eq!(pool.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct StringPool {
    entries: HashSet<Arc<str>>,
}

impl StringPool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self {
            entries: HashSet::new(),
        }
    }

    /// Return the canonical instance for `name`, storing a detached copy if
    /// the name has not been seen before.
    pub fn intern(&mut self, name: &str) -> Arc<str> {
        if let Some(existing) = self.entries.get(name) {
            return Arc::clone(existing);
        }
        // Arc::from copies the bytes, so the canonical instance is
        // independent of the caller's line buffer.
        let canonical: Arc<str> = Arc::from(name);
        self.entries.insert(Arc::clone(&canonical));
        canonical
    }

    /// Number of distinct names interned so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no name has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every canonical instance held by the pool.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
