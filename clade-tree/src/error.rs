use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TreeError {
    #[error("Hierarchy header has no \"{0}\" column")]
    MissingColumn(&'static str),

    #[error("Hierarchy is empty")]
    Empty,

    #[error("Hierarchy has no root: every clade has a parent")]
    NoRoot,

    #[error("Hierarchy has more than one root: {0:?}")]
    MultipleRoots(Vec<String>),

    #[error("Clade \"{clade}\" has two parents: \"{first}\" and \"{second}\"")]
    MultipleParents {
        clade: String,
        first: String,
        second: String,
    },

    #[error("Clades not reachable from the root: {0:?}")]
    Unreachable(Vec<String>),

    #[error("Two clades are both labelled \"{0}\"")]
    DuplicateLabel(String),
}
