//! Layout and paint passes and the frame driver.
//!
//! Every frame runs exactly two passes over the tree, in this order:
//!
//! 1. [`layout_pass`] computes every box model and position and hands
//!    absolute nodes to the [`Compositor`].
//! 2. [`paint_pass`] paints in-flow nodes in local stack order, then
//!    [`Compositor::flush`] paints the absolute ones in global order.
//!
//! Layout always finishes for the whole tree before anything is painted.

use serde::Serialize;
use tessera_tree::NodeId;

use crate::compositor::Compositor;
use crate::paint::{RenderBackend, paint_box};
use crate::tree::LayoutTree;

/// Lay out the tree rooted at `root`.
///
/// The root's box model is computed from its style; its position is left
/// as set. For every in-flow node the children are box-modeled, arranged,
/// and visited in order. An absolute node is submitted to `compositor`
/// and the walk does not descend into it. Its subtree is laid out
/// afterwards, still within this call, with nested absolute nodes
/// submitted the same way.
///
/// Returns the number of nodes laid out.
pub fn layout_pass(tree: &mut LayoutTree, root: NodeId, compositor: &mut Compositor) -> usize {
    if tree.node(root).is_none() {
        return 0;
    }
    let _ = tree.compute_box_model(root);

    let mut deferred = Vec::new();
    let mut laid_out = visit(tree, root, compositor, &mut deferred);

    // Absolute subtrees, in submission order. Visiting one may defer more.
    let mut next = 0;
    while let Some(&id) = deferred.get(next) {
        next += 1;
        laid_out += layout_children(tree, id, compositor, &mut deferred);
    }

    #[cfg(feature = "layout-trace")]
    eprintln!(
        "[LAYOUT] {laid_out} nodes, {} absolute subtrees deferred",
        deferred.len()
    );

    laid_out
}

/// One node whose box model and position are already current.
fn visit(
    tree: &mut LayoutTree,
    id: NodeId,
    compositor: &mut Compositor,
    deferred: &mut Vec<NodeId>,
) -> usize {
    if tree[id].is_absolute() {
        compositor.submit(id);
        deferred.push(id);
        return 1;
    }
    1 + layout_children(tree, id, compositor, deferred)
}

/// Arrange the children of `id` and visit them; returns how many
/// descendants were laid out.
fn layout_children(
    tree: &mut LayoutTree,
    id: NodeId,
    compositor: &mut Compositor,
    deferred: &mut Vec<NodeId>,
) -> usize {
    tree.arrange_children(id);
    let mut laid_out = 0;
    for child in tree.children(id).to_vec() {
        laid_out += visit(tree, child, compositor, deferred);
    }
    laid_out
}

/// Paint `id` and its in-flow descendants.
///
/// [CSS 2.1 Appendix E.2](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
///
/// An invisible node paints nothing, and neither does its subtree.
/// Otherwise the node paints itself, then its children sorted by local
/// stack order (stable, so ties keep insertion order). Absolute children
/// are skipped; the compositor paints them. The stored child order is left
/// untouched.
///
/// Returns the number of nodes painted.
pub fn paint_pass(tree: &LayoutTree, id: NodeId, backend: &mut dyn RenderBackend) -> usize {
    let Some(node) = tree.node(id) else {
        return 0;
    };
    if !node.style.visible {
        return 0;
    }

    paint_box(node, backend);

    let mut children = tree.children(id).to_vec();
    children.sort_by_key(|&child| tree[child].style.local_stack_order);

    let mut painted = 1;
    for child in children {
        if !tree[child].is_absolute() {
            painted += paint_pass(tree, child, backend);
        }
    }
    painted
}

/// What one frame did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FrameStats {
    /// Nodes laid out.
    pub laid_out: usize,
    /// Nodes painted by the in-flow paint pass.
    pub painted: usize,
    /// Absolute nodes painted by the compositor.
    pub composited: usize,
}

/// Drives frames for a host loop and owns the frame's [`Compositor`].
#[derive(Debug, Clone, Default)]
pub struct FrameDriver {
    compositor: Compositor,
    frames: u64,
}

impl FrameDriver {
    /// A driver that has not run any frame.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            compositor: Compositor::new(),
            frames: 0,
        }
    }

    /// Run one frame: pick up the backend's viewport size, lay out, paint,
    /// flush.
    ///
    /// An absolute root is painted only by the compositor.
    pub fn run_frame(
        &mut self,
        tree: &mut LayoutTree,
        root: NodeId,
        backend: &mut dyn RenderBackend,
    ) -> FrameStats {
        tree.set_viewport(backend.viewport_size());

        let laid_out = layout_pass(tree, root, &mut self.compositor);
        let painted = if tree.node(root).is_some_and(|node| !node.is_absolute()) {
            paint_pass(tree, root, backend)
        } else {
            0
        };
        let composited = self.compositor.flush(tree, backend);

        self.frames += 1;
        FrameStats {
            laid_out,
            painted,
            composited,
        }
    }

    /// Frames run so far.
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frames
    }

    /// The compositor; empty between frames.
    #[must_use]
    pub const fn compositor(&self) -> &Compositor {
        &self.compositor
    }
}
