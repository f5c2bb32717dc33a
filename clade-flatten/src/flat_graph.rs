use std::collections::HashSet;

use clades::{CladeNode, NameError, NameParser};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Graph is invalid: the target node '{0}' is the same as the source node")]
    SelfEdge(String),

    #[error("Graph is invalid: the target node '{0}' does not exist")]
    MissingTarget(String),

    #[error("Graph is invalid: the source node '{0}' does not exist")]
    MissingSource(String),

    #[error(transparent)]
    Name(#[from] NameError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatNode {
    pub id: String,
    pub color: String,
    pub clade: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lineages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub who: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_names: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// Node and edge lists of a clade tree
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FlatGraph {
    pub nodes: Vec<FlatNode>,
    pub edges: Vec<FlatEdge>,
}

impl FlatGraph {
    /// Flatten the tree in preorder, then sort the nodes by clade
    pub fn from_tree(tree: &CladeNode, parser: &NameParser) -> Result<Self, GraphError> {
        let mut graph = FlatGraph::default();
        graph.push(tree, parser)?;
        graph.nodes.sort_by(|a, b| a.clade.cmp(&b.clade));
        Ok(graph)
    }

    fn push(&mut self, node: &CladeNode, parser: &NameParser) -> Result<(), GraphError> {
        let name = parser.parse(&node.name)?;

        self.nodes.push(FlatNode {
            id: node.name.clone(),
            color: node.color.clone(),
            clade: name.clade,
            lineages: name.lineages,
            who: name.who.map(|w| w.to_string()),
            version: name.version,
            other_names: name.other_names,
        });

        for child in &node.children {
            self.edges.push(FlatEdge {
                id: self.edges.len().to_string(),
                source: node.name.clone(),
                target: child.name.clone(),
            });
            self.push(child, parser)?;
        }

        Ok(())
    }

    /// Every edge joins two distinct, existing nodes
    pub fn verify(&self) -> Result<(), GraphError> {
        let ids: HashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();

        for edge in &self.edges {
            if edge.target == edge.source {
                return Err(GraphError::SelfEdge(edge.target.clone()));
            }
            if !ids.contains(edge.target.as_str()) {
                return Err(GraphError::MissingTarget(edge.target.clone()));
            }
            if !ids.contains(edge.source.as_str()) {
                return Err(GraphError::MissingSource(edge.source.clone()));
            }
        }

        Ok(())
    }
}
