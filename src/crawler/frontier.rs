//! Crawl frontier
//!
//! This module owns the two pieces of traversal state for one crawl:
//! - The pending queue, drained first-in first-out so pages are visited in
//!   breadth-first discovery order
//! - The visited set, which only ever grows
//!
//! Both live for one crawl invocation and are never shared.

use std::collections::{HashSet, VecDeque};

/// Pending queue plus visited set for one crawl
///
/// URLs are compared as exact strings. The visited check happens when a URL is
/// dequeued, so the same URL may sit in the queue more than once; only its first
/// dequeue leads to a fetch.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<String>,
    visited: HashSet<String>,
}

impl Frontier {
    /// Creates a frontier holding only the seed URL
    pub fn with_seed(seed: impl Into<String>) -> Self {
        let mut frontier = Self::default();
        frontier.push(seed);
        frontier
    }

    /// Appends a URL to the tail of the queue
    pub fn push(&mut self, url: impl Into<String>) {
        self.queue.push_back(url.into());
    }

    /// Removes and returns the head of the queue
    pub fn pop(&mut self) -> Option<String> {
        self.queue.pop_front()
    }

    /// Returns true if the URL has already been marked visited
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Marks a URL visited
    ///
    /// Returns false if it already was.
    pub fn mark_visited(&mut self, url: &str) -> bool {
        self.visited.insert(url.to_string())
    }

    /// Number of entries waiting in the queue, duplicates included
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Number of distinct URLs marked visited
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
