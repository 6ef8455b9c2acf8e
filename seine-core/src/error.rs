//! Error types for the seine core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by structural [`crate::Graph`] mutations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The referenced node is not live in the graph.
    #[error("node {node} is not present in the graph")]
    NodeNotFound {
        /// Identifier of the missing node.
        node: usize,
    },
    /// An edge would connect a node to itself.
    #[error("cannot add a self-loop on node {node}")]
    SelfLoop {
        /// Identifier of the offending node.
        node: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The referenced node is not live in the graph.
        NodeNotFound => NodeNotFound { .. } => "GRAPH_NODE_NOT_FOUND",
        /// An edge would connect a node to itself.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
    }
}

/// Error type produced when configuring generators or running the analyzer.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum NetworkError {
    /// A generator needs at least one node.
    #[error("node count must be at least 1 (got {got})")]
    InvalidNodeCount {
        /// The invalid node count supplied by the caller.
        got: usize,
    },
    /// The edge probability must be a finite value within `[0, 1]`.
    #[error("edge probability must lie within [0, 1] (got {got})")]
    InvalidEdgeProbability {
        /// The invalid probability supplied by the caller.
        got: f64,
    },
    /// Each new node must attach to at least one existing node.
    #[error("attachments per node must be at least 1 (got {got})")]
    InvalidAttachmentCount {
        /// The invalid attachment count supplied by the caller.
        got: usize,
    },
    /// The seed graph must be able to absorb every attachment.
    #[error("attachments per node ({attachments}) must not exceed seed size ({seed_nodes})")]
    AttachmentExceedsSeed {
        /// Attachments requested per new node.
        attachments: usize,
        /// Number of nodes in the seed graph.
        seed_nodes: usize,
    },
    /// The seed graph cannot be larger than the final network.
    #[error("seed size ({seed_nodes}) must not exceed the target node count ({node_count})")]
    SeedExceedsTarget {
        /// Number of nodes in the seed graph.
        seed_nodes: usize,
        /// Final node count of the network.
        node_count: usize,
    },
    /// The analyzer removes at least one node per step.
    #[error("step size must be at least 1 (got {got})")]
    InvalidStepSize {
        /// The invalid step size supplied by the caller.
        got: usize,
    },
    /// The analyzer was handed a graph with no live nodes.
    #[error("cannot analyse a graph with no live nodes")]
    EmptyGraph,
    /// A structural graph mutation failed while running the algorithm.
    #[error("graph mutation failed: {error}")]
    Graph {
        #[source]
        /// Underlying graph error bubbled up by the algorithm.
        error: GraphError,
    },
}

define_error_codes! {
    /// Stable codes describing [`NetworkError`] variants.
    enum NetworkErrorCode for NetworkError {
        /// A generator needs at least one node.
        InvalidNodeCount => InvalidNodeCount { .. } => "SEINE_INVALID_NODE_COUNT",
        /// The edge probability must be a finite value within `[0, 1]`.
        InvalidEdgeProbability => InvalidEdgeProbability { .. } => "SEINE_INVALID_EDGE_PROBABILITY",
        /// Each new node must attach to at least one existing node.
        InvalidAttachmentCount => InvalidAttachmentCount { .. } => "SEINE_INVALID_ATTACHMENT_COUNT",
        /// The seed graph must be able to absorb every attachment.
        AttachmentExceedsSeed => AttachmentExceedsSeed { .. } => "SEINE_ATTACHMENT_EXCEEDS_SEED",
        /// The seed graph cannot be larger than the final network.
        SeedExceedsTarget => SeedExceedsTarget { .. } => "SEINE_SEED_EXCEEDS_TARGET",
        /// The analyzer removes at least one node per step.
        InvalidStepSize => InvalidStepSize { .. } => "SEINE_INVALID_STEP_SIZE",
        /// The analyzer was handed a graph with no live nodes.
        EmptyGraph => EmptyGraph => "SEINE_EMPTY_GRAPH",
        /// A structural graph mutation failed while running the algorithm.
        GraphFailure => Graph { .. } => "SEINE_GRAPH_FAILURE",
    }
}

impl NetworkError {
    /// Retrieve the inner [`GraphErrorCode`] when the error originated in a
    /// [`crate::Graph`] mutation.
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph { error } => Some(error.code()),
            _ => None,
        }
    }
}

impl From<GraphError> for NetworkError {
    fn from(error: GraphError) -> Self {
        Self::Graph { error }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, NetworkError>;
