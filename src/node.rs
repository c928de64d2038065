/*!
# Node Representation

We choose `Node = u32` as the graphs handled here are small enough that `2^32` vertices always suffice.
A node is the *positional index* of a vertex in the current vertex sequence of a graph: the vertex
inserted first is `0`, the next one `1`, and so on. Removing a vertex shifts all higher indices down
by one, hence indices must never be cached across a removal.
*/

use bitvec::vec::BitVec;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitVec;

/// Creates an empty [`NodeBitSet`] with one entry per node
pub fn node_bitset(n: NumNodes) -> NodeBitSet {
    BitVec::repeat(false, n as usize)
}
