use crate::data::dataset::{ClassLabel, Number};

/// Decision tree node
///
/// A tree owns all of its nodes. Nodes are only created while building and
/// never change afterwards, so a finished tree can be shared between threads
/// for prediction.
#[derive(Clone, Debug, PartialEq)]
pub enum TreeNode<XT: Number, YT: ClassLabel> {
    /// Rows with `row[feature_index] < threshold` go left, all others go right.
    Internal {
        feature_index: usize,
        threshold: XT,
        left: Box<TreeNode<XT, YT>>,
        right: Box<TreeNode<XT, YT>>,
    },
    /// Leaf holding the predicted class.
    Terminal { value: YT },
}

impl<XT: Number, YT: ClassLabel> TreeNode<XT, YT> {
    pub fn terminal(value: YT) -> Self {
        TreeNode::Terminal { value }
    }

    pub fn internal(feature_index: usize, threshold: XT, left: Self, right: Self) -> Self {
        TreeNode::Internal {
            feature_index,
            threshold,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Terminal { .. })
    }

    /// Walks from this node down to a leaf and returns its class.
    ///
    /// `features` must have at least as many entries as the tree was trained on;
    /// a shorter row panics on the out-of-range index.
    pub fn predict(&self, features: &[XT]) -> YT {
        let mut node = self;
        loop {
            match node {
                TreeNode::Terminal { value } => return *value,
                TreeNode::Internal {
                    feature_index,
                    threshold,
                    left,
                    right,
                } => {
                    node = if features[*feature_index] < *threshold {
                        left.as_ref()
                    } else {
                        right.as_ref()
                    };
                }
            }
        }
    }

    /// Number of edges on the longest path from this node to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Terminal { .. } => 0,
            TreeNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    pub fn n_leaves(&self) -> usize {
        self.iter().filter(|node| node.is_leaf()).count()
    }

    /// Pre-order (node, left subtree, right subtree) traversal.
    pub fn iter(&self) -> NodeIter<'_, XT, YT> {
        NodeIter { stack: vec![self] }
    }
}

pub struct NodeIter<'a, XT: Number, YT: ClassLabel> {
    stack: Vec<&'a TreeNode<XT, YT>>,
}

impl<'a, XT: Number, YT: ClassLabel> Iterator for NodeIter<'a, XT, YT> {
    type Item = &'a TreeNode<XT, YT>;

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop().map(|node| {
            if let TreeNode::Internal { left, right, .. } = node {
                self.stack.push(right);
                self.stack.push(left);
            }
            node
        })
    }
}
