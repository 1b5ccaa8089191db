//! Frame-scoped global stacking.
//!
//! [§ 9.9.1 Specifying the stack level](https://www.w3.org/TR/CSS2/visuren.html#z-index)
//!
//! Nodes with a non-negative global stack order leave their parent's paint
//! recursion. The layout pass hands them to a [`Compositor`], which paints
//! them all in one pass ordered across the whole tree. The compositor is
//! owned by whoever drives frames, never by a node, and its list is drained
//! on every flush.

use tessera_tree::NodeId;

use crate::frame::paint_pass;
use crate::paint::RenderBackend;
use crate::tree::LayoutTree;

/// Nodes submitted for global painting during the current frame.
#[derive(Debug, Clone, Default)]
pub struct Compositor {
    pending: Vec<NodeId>,
}

impl Compositor {
    /// An empty compositor.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Queue `id` for this frame's flush.
    ///
    /// There is no de-duplication: a node submitted twice paints twice.
    pub fn submit(&mut self, id: NodeId) {
        self.pending.push(id);
    }

    /// Nodes queued so far, in submission order.
    #[must_use]
    pub fn pending(&self) -> &[NodeId] {
        &self.pending
    }

    /// Number of queued nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Paint every queued node in ascending global stack order, then empty
    /// the queue.
    ///
    /// "Boxes with the same stack level in a stacking context are stacked
    /// back-to-front according to document tree order." Here ties keep
    /// submission order, so the sort must be stable. Each node is painted
    /// with [`paint_pass`], which covers its in-flow subtree but not its
    /// own absolute descendants; those were queued separately. Nodes that
    /// no longer exist or are invisible are skipped.
    ///
    /// Returns the number of queued nodes that were painted.
    pub fn flush(&mut self, tree: &LayoutTree, backend: &mut dyn RenderBackend) -> usize {
        if self.pending.is_empty() {
            return 0;
        }

        let mut queue = std::mem::take(&mut self.pending);
        queue.sort_by_key(|&id| tree.node(id).map(|node| node.style.global_stack_order));

        let mut painted = 0;
        for id in queue {
            if tree.node(id).is_some_and(|node| node.style.visible) {
                let _ = paint_pass(tree, id, backend);
                painted += 1;
            }
        }
        painted
    }

    /// Drop everything queued without painting.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
