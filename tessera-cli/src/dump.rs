//! Geometry output: a JSON dump and a colored tree print.

use owo_colors::OwoColorize;
use serde::Serialize;
use tessera_layout::{BoxModel, EdgeSizes, LayoutTree, NodeId, Point, Rect};

/// Geometry of one laid-out node and its subtree.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDump {
    /// Arena index.
    pub node: usize,
    /// Style identifier.
    pub id: String,
    /// Whether the compositor paints it.
    pub absolute: bool,
    /// Whether it is painted at all.
    pub visible: bool,
    /// Margin-box origin.
    pub position: Point,
    /// Resolved box model.
    pub box_model: BoxModel,
    /// Content area.
    pub content_rect: Rect,
    /// Painted area.
    pub border_rect: Rect,
    /// Children in order.
    pub children: Vec<NodeDump>,
}

impl NodeDump {
    /// Snapshot `id` and its subtree.
    #[must_use]
    pub fn capture(tree: &LayoutTree, id: NodeId) -> Self {
        let node = &tree[id];
        Self {
            node: id.index(),
            id: node.style.id.clone(),
            absolute: node.is_absolute(),
            visible: node.style.visible,
            position: node.position,
            box_model: node.box_model,
            content_rect: node.content_rect(),
            border_rect: node.border_rect(),
            children: tree
                .children(id)
                .iter()
                .map(|&child| Self::capture(tree, child))
                .collect(),
        }
    }
}

/// Recursively print a node with its geometry.
pub fn print_tree(tree: &LayoutTree, id: NodeId, depth: usize) {
    let indent = "  ".repeat(depth);
    let node = &tree[id];
    let style = &node.style;

    let name = if style.id.is_empty() {
        id.to_string()
    } else {
        format!("{} ({id})", style.id)
    };
    let mut tags = Vec::new();
    if node.is_absolute() {
        tags.push(format!("global={}", style.global_stack_order).magenta().to_string());
    }
    if style.local_stack_order != 0 {
        tags.push(format!("local={}", style.local_stack_order));
    }
    if !style.visible {
        tags.push("hidden".dimmed().to_string());
    }

    println!("{indent}[{}] {}", name.cyan().bold(), tags.join(" "));

    let border = node.border_rect();
    println!(
        "{indent}  border: x={:.1} y={:.1} w={:.1} h={:.1}",
        border.x, border.y, border.width, border.height
    );
    let content = node.content_rect();
    println!(
        "{indent}  content: x={:.1} y={:.1} w={:.1} h={:.1}",
        content.x, content.y, content.width, content.height
    );

    let margin = node.box_model.margin;
    if margin != EdgeSizes::default() {
        println!(
            "{indent}  margin: t={:.1} r={:.1} b={:.1} l={:.1}",
            margin.top, margin.right, margin.bottom, margin.left
        );
    }

    for &child in tree.children(id) {
        print_tree(tree, child, depth + 1);
    }
}
