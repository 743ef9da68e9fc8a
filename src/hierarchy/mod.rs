// hierarchy/mod.rs

pub mod builder;
mod debug;
mod edit;
mod global;

pub use builder::NodeBuilder;

use crate::constraint::Constraint;
use crate::error::{HierarchyError, Result};
use crate::math::{Transform, Transform2D, Transform3D};
use crate::settings::{HierarchySettings, ParseMode};
use std::fmt;

/// Dense index of a node, stable for the lifetime of its hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Parent link and ordered child list of one node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relation {
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl Relation {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) local: T,
    pub(crate) relation: Relation,
}

/// Constraint type matching the dimensions of transform `T`.
pub type NodeConstraint<T> = Constraint<<T as Transform>::Position, <T as Transform>::Rotation>;

/// Append-only arena of transforms linked into a parent/child forest.
///
/// Every parent has a smaller index than its children, which lets a single
/// forward pass resolve world-space poses. World matrices are cached for the
/// whole hierarchy and dropped by any local change.
#[derive(Debug, Clone)]
pub struct Hierarchy<T: Transform> {
    nodes: Vec<Node<T>>,
    global: Vec<T::World>,
    constraints: Vec<NodeConstraint<T>>,
    cache_valid: bool,
    parse_mode: ParseMode,
}

pub type Hierarchy2D = Hierarchy<Transform2D>;
pub type Hierarchy3D = Hierarchy<Transform3D>;

impl<T: Transform> Hierarchy<T> {
    pub fn new() -> Self {
        Self::with_settings(&HierarchySettings::default())
    }

    pub fn with_settings(settings: &HierarchySettings) -> Self {
        Self {
            nodes: Vec::with_capacity(settings.initial_capacity),
            global: Vec::with_capacity(settings.initial_capacity),
            constraints: Vec::new(),
            cache_valid: false,
            parse_mode: settings.constraint_parsing,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn is_cached(&self) -> bool {
        self.cache_valid
    }

    pub fn parse_mode(&self) -> ParseMode {
        self.parse_mode
    }

    pub(crate) fn invalidate(&mut self) {
        self.cache_valid = false;
    }

    pub(crate) fn check(&self, id: NodeId) -> Result<usize> {
        let index = id.index();
        if index < self.nodes.len() {
            Ok(index)
        } else {
            Err(HierarchyError::IndexOutOfRange {
                index,
                len: self.nodes.len(),
            })
        }
    }

    /// Appends a node and links it under `parent`.
    pub fn push(&mut self, parent: Option<NodeId>, local: T) -> Result<NodeId> {
        if let Some(parent) = parent {
            self.check(parent)?;
        }

        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node {
            local,
            relation: Relation {
                parent,
                children: Vec::new(),
            },
        });

        if let Some(parent) = parent {
            self.nodes[parent.index()].relation.children.push(id);
        }

        log::debug!("Pushed node {} (parent {:?})", id, parent);
        self.invalidate();
        Ok(id)
    }

    pub fn node(&mut self) -> NodeBuilder<'_, T> {
        NodeBuilder::new(self)
    }

    pub fn set_local(&mut self, id: NodeId, local: T) -> Result<()> {
        let index = self.check(id)?;
        self.nodes[index].local = local;
        self.invalidate();
        Ok(())
    }

    pub fn local(&self, id: NodeId) -> Result<&T> {
        let index = self.check(id)?;
        Ok(&self.nodes[index].local)
    }

    /// Mutable access to a local transform. Drops the world cache up front.
    pub fn local_mut(&mut self, id: NodeId) -> Result<&mut T> {
        let index = self.check(id)?;
        self.invalidate();
        Ok(&mut self.nodes[index].local)
    }

    pub fn locals(&self) -> impl Iterator<Item = &T> + '_ {
        self.nodes.iter().map(|node| &node.local)
    }

    pub fn relation(&self, id: NodeId) -> Result<&Relation> {
        let index = self.check(id)?;
        Ok(&self.nodes[index].relation)
    }

    /// Moves `id` under `parent`, or makes it a root when `parent` is `None`.
    ///
    /// The parent must have a smaller index than the node.
    pub fn set_parent(&mut self, id: NodeId, parent: Option<NodeId>) -> Result<()> {
        let index = self.check(id)?;
        if let Some(parent) = parent {
            let parent_index = self.check(parent)?;
            if parent_index >= index {
                return Err(HierarchyError::ParentOrder {
                    node: index,
                    parent: parent_index,
                });
            }
        }

        if let Some(old) = self.nodes[index].relation.parent {
            self.nodes[old.index()]
                .relation
                .children
                .retain(|child| *child != id);
        }

        self.nodes[index].relation.parent = parent;

        if let Some(parent) = parent {
            let children = &mut self.nodes[parent.index()].relation.children;
            if !children.contains(&id) {
                children.push(id);
            }
        }

        log::debug!("Re-linked node {} under {:?}", id, parent);
        self.invalidate();
        Ok(())
    }

    /// Depth-first walk of the subtree below `id`, children in insertion order.
    pub fn descendants(&self, id: NodeId) -> Result<Vec<NodeId>> {
        let index = self.check(id)?;
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[index]
            .relation
            .children
            .iter()
            .rev()
            .copied()
            .collect();

        while let Some(node) = stack.pop() {
            out.push(node);
            for &child in self.nodes[node.index()].relation.children.iter().rev() {
                stack.push(child);
            }
        }

        Ok(out)
    }

    /// Attaches clamp ranges to a node.
    pub fn set_constraint(&mut self, id: NodeId, constraint: NodeConstraint<T>) -> Result<()> {
        let index = self.check(id)?;
        if self.constraints.len() < self.nodes.len() {
            self.constraints.resize(self.nodes.len(), Constraint::default());
        }
        self.constraints[index] = constraint;
        self.invalidate();
        Ok(())
    }

    /// Parses `text` with the configured [`ParseMode`] and attaches the result.
    pub fn set_constraint_str(&mut self, id: NodeId, text: &str) -> Result<()> {
        self.check(id)?;
        let constraint = match self.parse_mode {
            ParseMode::Strict => NodeConstraint::<T>::parse(text)?,
            ParseMode::Lenient => NodeConstraint::<T>::parse_lenient(text),
        };
        self.set_constraint(id, constraint)
    }

    /// Clamp ranges of a node; nodes never constrained are unbounded.
    pub fn constraint(&self, id: NodeId) -> Result<NodeConstraint<T>> {
        let index = self.check(id)?;
        Ok(self.constraints.get(index).copied().unwrap_or_default())
    }
}

impl<T: Transform> Default for Hierarchy<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl Hierarchy<Transform2D> {
    /// Pushes a node whose local transform is given as `"x y w h rot"`.
    pub fn push_str(&mut self, parent: Option<NodeId>, text: &str) -> Result<NodeId> {
        let local: Transform2D = text.parse()?;
        self.push(parent, local)
    }
}
