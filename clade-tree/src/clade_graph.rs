use std::collections::{HashMap, HashSet};

use clades::CladeNode;

use crate::error::TreeError;
use crate::hierarchy::HierarchyRow;
use crate::husl::husl_palette;

#[derive(Debug)]
struct Clade {
    id: String,
    label: String,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// Directed parent -> clade graph. Nodes and children keep the order in which
/// the rows first mention them.
#[derive(Debug, Default)]
pub struct CladeGraph {
    entries: Vec<Clade>,
    index: HashMap<String, usize>,
}

impl CladeGraph {
    pub fn from_rows(rows: &[HierarchyRow]) -> Result<Self, TreeError> {
        let mut graph = CladeGraph::default();

        for row in rows {
            let parent = graph.node(&row.parent);
            let clade = graph.node(&row.clade);

            match graph.entries[clade].parent {
                Some(p) if p == parent => {}
                Some(p) => {
                    return Err(TreeError::MultipleParents {
                        clade: row.clade.clone(),
                        first: graph.entries[p].id.clone(),
                        second: row.parent.clone(),
                    });
                }
                None => {
                    graph.entries[clade].parent = Some(parent);
                    graph.entries[parent].children.push(clade);
                }
            }
        }

        // The last row naming a clade decides its label, even when its WHO is empty
        for row in rows {
            let clade = graph.index[&row.clade];
            graph.entries[clade].label = if row.who.is_empty() {
                row.clade.clone()
            } else {
                format!("{} ({})", row.clade, row.who)
            };
        }

        Ok(graph)
    }

    fn node(&mut self, id: &str) -> usize {
        if let Some(&i) = self.index.get(id) {
            return i;
        }

        let i = self.entries.len();
        self.entries.push(Clade {
            id: id.to_string(),
            label: id.to_string(),
            parent: None,
            children: Vec::new(),
        });
        self.index.insert(id.to_string(), i);
        i
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The single clade without a parent
    pub fn root(&self) -> Result<usize, TreeError> {
        let roots: Vec<usize> = (0..self.len())
            .filter(|&i| self.entries[i].parent.is_none())
            .collect();

        match roots.as_slice() {
            [] => Err(TreeError::NoRoot),
            [root] => Ok(*root),
            _ => Err(TreeError::MultipleRoots(
                roots.iter().map(|&i| self.entries[i].id.clone()).collect(),
            )),
        }
    }

    /// Depth-first preorder from `start`, children in insertion order
    pub fn preorder(&self, start: usize) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.len());
        let mut stack = vec![start];

        while let Some(i) = stack.pop() {
            order.push(i);
            stack.extend(self.entries[i].children.iter().rev());
        }

        order
    }

    /// Identifier of a node, before relabeling
    pub fn id(&self, i: usize) -> &str {
        &self.entries[i].id
    }

    /// Color every clade in preorder from one HUSL palette and nest the result
    pub fn build(&self) -> Result<CladeNode, TreeError> {
        if self.is_empty() {
            return Err(TreeError::NoRoot);
        }

        let root = self.root()?;
        let order = self.preorder(root);

        if order.len() != self.len() {
            let seen: HashSet<usize> = order.iter().copied().collect();
            let unreachable = (0..self.len())
                .filter(|i| !seen.contains(i))
                .map(|i| self.entries[i].id.clone())
                .collect();
            return Err(TreeError::Unreachable(unreachable));
        }

        let mut labels = HashSet::with_capacity(self.len());
        for clade in &self.entries {
            if !labels.insert(clade.label.as_str()) {
                return Err(TreeError::DuplicateLabel(clade.label.clone()));
            }
        }

        let mut colors = vec![String::new(); self.len()];
        for (i, color) in order.iter().zip(husl_palette(self.len())) {
            colors[*i] = color;
        }

        Ok(self.expand(root, &colors))
    }

    fn expand(&self, i: usize, colors: &[String]) -> CladeNode {
        let clade = &self.entries[i];
        let mut node = CladeNode::new(clade.label.clone(), colors[i].clone());
        node.children = clade
            .children
            .iter()
            .map(|&child| self.expand(child, colors))
            .collect();
        node
    }
}
