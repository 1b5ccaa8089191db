//! The layout tree.
//!
//! [`LayoutTree`] owns every [`Node`] in an arena ([`Tree`]) together with
//! the viewport and the [`LayoutConfig`]. Children are owned through their
//! parent's ordered child list; a node's parent link is a plain [`NodeId`]
//! consulted only to resolve percentages.

use std::ops::{Index, IndexMut};

use tessera_tree::{NodeId, Tree, TreeError};

use crate::config::{LayoutConfig, Viewport};
use crate::layout::{Arrangement, BoxModel, Point, Size, arrange};
use crate::node::Node;
use crate::style::Style;
use crate::units::{Axis, ParentSize, ResolveContext, resolve};

/// Arena of layout nodes plus the state unit resolution depends on.
#[derive(Debug, Clone, Default)]
pub struct LayoutTree {
    nodes: Tree<Node>,
    viewport: Viewport,
    config: LayoutConfig,
}

impl LayoutTree {
    /// Empty tree for a surface of the given size.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self::with_config(viewport, LayoutConfig::default())
    }

    /// Empty tree with explicit configuration.
    #[must_use]
    pub const fn with_config(viewport: Viewport, config: LayoutConfig) -> Self {
        Self {
            nodes: Tree::new(),
            viewport,
            config,
        }
    }

    // ===== Structure =====

    /// Allocate a detached node.
    pub fn create_node(&mut self, style: Style, arrangement: Arrangement) -> NodeId {
        self.nodes.alloc(Node::new(style, arrangement))
    }

    /// Append `child` as the last child of `parent`, moving it out of any
    /// previous parent.
    ///
    /// # Errors
    ///
    /// [`TreeError::UnknownNode`] for foreign ids, [`TreeError::Cycle`] if
    /// `child` is `parent` or one of its ancestors.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        self.nodes.append_child(parent, child)
    }

    /// Insert `child` before `reference` among `parent`'s children, or last
    /// if `reference` is not one of them.
    ///
    /// # Errors
    ///
    /// Same as [`LayoutTree::add_child`].
    pub fn insert_child_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> Result<(), TreeError> {
        self.nodes.insert_before(parent, child, reference)
    }

    /// Detach every child of `parent` whose style id is `id`.
    ///
    /// The remaining children keep their order. Returns the detached nodes;
    /// an unknown id detaches nothing.
    pub fn remove_child(&mut self, parent: NodeId, id: &str) -> Vec<NodeId> {
        self.nodes
            .remove_children_where(parent, |_, node| node.style.id == id)
    }

    /// Detach `child` from `parent`.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotAChild`] if `child` is not a child of `parent`.
    pub fn remove_child_node(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        self.nodes.remove_child(parent, child)
    }

    /// Detach all children of `parent`.
    pub fn clear_children(&mut self, parent: NodeId) -> Vec<NodeId> {
        self.nodes.clear_children(parent)
    }

    /// First node in `root`'s subtree (pre-order, `root` included) whose
    /// style id is `id`.
    #[must_use]
    pub fn find_by_id(&self, root: NodeId, id: &str) -> Option<NodeId> {
        self.nodes
            .descendants(root)
            .find(|&node| self.nodes[node].style.id == id)
    }

    /// Children of `id` in insertion order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.children(id)
    }

    /// Parent of `id`.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.parent(id)
    }

    /// The underlying arena.
    #[must_use]
    pub const fn nodes(&self) -> &Tree<Node> {
        &self.nodes
    }

    /// Node by id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Mutable node by id.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Mutable style by id.
    pub fn style_mut(&mut self, id: NodeId) -> Option<&mut Style> {
        self.nodes.get_mut(id).map(|node| &mut node.style)
    }

    /// Override the margin-box position of `id`.
    ///
    /// Arranged children are repositioned on every layout pass; this is
    /// for roots and children of unarranged containers.
    pub fn set_position(&mut self, id: NodeId, position: Point) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.position = position;
        }
    }

    // ===== Configuration =====

    /// Current surface size.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Record a new surface size; later resolutions of `vw` and `vh` use it.
    pub const fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Layout configuration.
    #[must_use]
    pub const fn config(&self) -> LayoutConfig {
        self.config
    }

    /// Replace the layout configuration.
    pub const fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
    }

    // ===== Resolution =====

    /// Context for resolving the lengths of `id`.
    ///
    /// The parent's content size is resolved from its own style on its
    /// natural axes, recursively up to the root.
    #[must_use]
    pub fn resolve_context(&self, id: NodeId) -> ResolveContext {
        let ctx = ResolveContext::root(self.viewport).with_percent_basis(self.config.percent_basis);
        match self.nodes.parent(id) {
            Some(parent) => {
                let size = self.content_size(parent);
                ctx.with_parent(ParentSize {
                    width: size.width,
                    height: size.height,
                })
            }
            None => ctx,
        }
    }

    /// Resolve `text` along `axis` as a length of `id`.
    #[must_use]
    pub fn resolve(&self, id: NodeId, text: &str, axis: Axis) -> f32 {
        resolve(text, axis, &self.resolve_context(id))
    }

    /// Content size of `id` resolved from its style, clamped to zero.
    #[must_use]
    pub fn content_size(&self, id: NodeId) -> Size {
        let Some(node) = self.nodes.get(id) else {
            return Size::default();
        };
        let ctx = self.resolve_context(id);
        Size::new(
            resolve(&node.style.width, Axis::Horizontal, &ctx).max(0.0),
            resolve(&node.style.height, Axis::Vertical, &ctx).max(0.0),
        )
    }

    /// Recompute and store the box model of `id`.
    pub fn compute_box_model(&mut self, id: NodeId) -> BoxModel {
        let Some(node) = self.nodes.get(id) else {
            return BoxModel::default();
        };
        let box_model = BoxModel::compute(&node.style, &self.resolve_context(id));
        self.nodes[id].box_model = box_model;
        box_model
    }

    /// Compute the box model of every child of `id`, then position them
    /// according to `id`'s arrangement.
    ///
    /// `id`'s own box model and position must be current. Children of a
    /// node without an arrangement keep their positions.
    pub fn arrange_children(&mut self, id: NodeId) {
        let children = self.nodes.children(id).to_vec();
        let items: Vec<Size> = children
            .iter()
            .map(|&child| self.compute_box_model(child).outer_size())
            .collect();

        let Some(node) = self.nodes.get(id) else {
            return;
        };
        let Arrangement::MainAxis(layout) = node.arrangement else {
            return;
        };
        let positions = arrange(&layout, node.content_position(), node.content_size(), &items);

        for (child, position) in children.into_iter().zip(positions) {
            self.nodes[child].position = position;
        }
    }
}

/// # Panics
///
/// Panics if `id` was not created by this tree.
impl Index<NodeId> for LayoutTree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }
}

/// # Panics
///
/// Panics if `id` was not created by this tree.
impl IndexMut<NodeId> for LayoutTree {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }
}
