/*!
# Utilities

Helper data structures shared by several algorithms:
- [`UnionFind`]: disjoint sets used by Kruskal's algorithm.
*/

pub mod union_find;

pub use union_find::UnionFind;
