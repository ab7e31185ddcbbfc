use crate::core::float::AggloFloat;
use std::collections::BTreeSet;

/// A node of the dendrogram: either a single original vector (leaf) or the
/// merge of two clusters (internal).
///
/// Children are exclusively owned, so the tree is acyclic by construction.
/// Nodes are immutable once built; a tree over n inputs has exactly n leaves
/// and 2n−1 nodes in total. Leaf-label sets are derived by traversal rather
/// than stored per node.
#[derive(Debug, Clone, PartialEq)]
pub enum DendrogramNode<F: AggloFloat> {
    Leaf {
        label: String,
    },
    Internal {
        left: Box<DendrogramNode<F>>,
        right: Box<DendrogramNode<F>>,
        distance: F,
    },
}

impl<F: AggloFloat> DendrogramNode<F> {
    pub fn leaf(label: impl Into<String>) -> Self {
        DendrogramNode::Leaf {
            label: label.into(),
        }
    }

    pub fn internal(left: DendrogramNode<F>, right: DendrogramNode<F>, distance: F) -> Self {
        DendrogramNode::Internal {
            left: Box::new(left),
            right: Box::new(right),
            distance,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, DendrogramNode::Leaf { .. })
    }

    /// The distance at which this node's children were merged; zero for a leaf.
    pub fn merge_distance(&self) -> F {
        match self {
            DendrogramNode::Leaf { .. } => F::zero(),
            DendrogramNode::Internal { distance, .. } => *distance,
        }
    }

    pub fn children(&self) -> Option<(&DendrogramNode<F>, &DendrogramNode<F>)> {
        match self {
            DendrogramNode::Leaf { .. } => None,
            DendrogramNode::Internal { left, right, .. } => Some((left, right)),
        }
    }

    /// 0 for a leaf, else one more than the taller child.
    pub fn height(&self) -> usize {
        match self.children() {
            None => 0,
            Some((left, right)) => 1 + left.height().max(right.height()),
        }
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_labels().count()
    }

    pub fn node_count(&self) -> usize {
        match self.children() {
            None => 1,
            Some((left, right)) => 1 + left.node_count() + right.node_count(),
        }
    }

    /// Lazy left-to-right traversal over the leaf labels only. The iterator
    /// is finite and can be restarted by calling this again.
    pub fn leaf_labels(&self) -> LeafLabels<'_, F> {
        LeafLabels { stack: vec![self] }
    }

    /// Leaf labels deduplicated and in canonical sorted order.
    pub fn sorted_labels(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self.leaf_labels().collect();
        set.into_iter().collect()
    }

    /// A leaf's name is its label; an internal node is named by its sorted
    /// unique leaf labels, e.g. `(A;B;C)`.
    pub fn canonical_name(&self) -> String {
        match self {
            DendrogramNode::Leaf { label } => label.clone(),
            DendrogramNode::Internal { .. } => format!("({})", self.sorted_labels().join(";")),
        }
    }
}

/// Depth-first leaf iterator with an explicit stack, so deep trees do not
/// grow the call stack.
pub struct LeafLabels<'a, F: AggloFloat> {
    stack: Vec<&'a DendrogramNode<F>>,
}

impl<'a, F: AggloFloat> Iterator for LeafLabels<'a, F> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                DendrogramNode::Leaf { label } => return Some(label),
                DendrogramNode::Internal { left, right, .. } => {
                    // Right first so the left subtree is visited first.
                    self.stack.push(right);
                    self.stack.push(left);
                }
            }
        }
        None
    }
}
