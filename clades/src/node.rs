use serde::{Deserialize, Serialize};

/// One clade in the nested tree document.
///
/// Leaves are written without a `children` key, and a missing key reads back as
/// an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CladeNode {
    pub name: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CladeNode>,
}

impl CladeNode {
    pub fn new(name: String, color: String) -> Self {
        CladeNode {
            name,
            color,
            children: Vec::new(),
        }
    }

    /// Nodes of this subtree, parents before their children
    pub fn preorder(&self) -> Vec<&CladeNode> {
        let mut visited = Vec::new();
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            visited.push(node);
            stack.extend(node.children.iter().rev());
        }

        visited
    }

    pub fn node_count(&self) -> usize {
        self.preorder().len()
    }
}
