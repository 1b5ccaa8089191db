//! Scene construction: the built-in demo or a JSON scene file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tessera_layout::{
    AlignItems, Arrangement, ColorValue, FlexLayout, JustifyContent, LayoutConfig, LayoutTree,
    NodeId, Point, Style, Viewport,
};

/// A scene file.
///
/// ```json
/// {
///   "viewport": { "width": 512, "height": 512 },
///   "config": { "percent-basis": "same-axis" },
///   "root": {
///     "style": { "width": "256px", "height": "256px", "backgroundColor": "#e6e6e6" },
///     "arrangement": { "kind": "main-axis", "justify": "space-around" },
///     "children": [{ "style": { "width": "100px", "height": "100px" } }]
///   }
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    /// Surface size; the command line may override it.
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    /// Layout configuration.
    #[serde(default)]
    pub config: LayoutConfig,
    /// The root node.
    pub root: SceneNode,
}

/// One node of a scene file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneNode {
    /// Node style.
    pub style: Style,
    /// How the node places its children.
    pub arrangement: Arrangement,
    /// Initial position, for roots and children of unarranged nodes.
    pub position: Option<Point>,
    /// Children in order.
    pub children: Vec<SceneNode>,
}

const fn default_viewport() -> Viewport {
    Viewport::new(512.0, 512.0)
}

impl Scene {
    /// Read and parse a scene file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not a valid scene.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read scene '{}'", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse scene '{}'", path.display()))
    }

    /// The demo scene: a light gray 256x256 row holding three 100x100
    /// boxes, spread with `space-around` and centered vertically, plus a
    /// green bordered column that floats above everything at global order
    /// 10.
    #[must_use]
    pub fn demo() -> Self {
        let boxes = (0..3u8).map(|i| SceneNode {
            style: Style::sized("100px", "100px")
                .with_id(&format!("box-{i}"))
                .with_border("2px")
                .with_border_color(ColorValue::BLACK)
                .with_background(ColorValue::rgb(100 + i * 40, 0, 250 - i * 50)),
            ..SceneNode::default()
        });

        let overlay = SceneNode {
            style: Style::sized("200px", "400px")
                .with_id("overlay")
                .with_border("10px")
                .with_border_color(ColorValue::BLACK)
                .with_background(ColorValue::rgb(0, 255, 0))
                .with_global_order(10),
            arrangement: Arrangement::MainAxis(FlexLayout::column()),
            ..SceneNode::default()
        };

        Self {
            viewport: default_viewport(),
            config: LayoutConfig::default(),
            root: SceneNode {
                style: Style::sized("256px", "256px")
                    .with_id("root")
                    .with_background(ColorValue::rgb(230, 230, 230)),
                arrangement: Arrangement::MainAxis(
                    FlexLayout::row()
                        .justify(JustifyContent::SpaceAround)
                        .align(AlignItems::Center),
                ),
                position: None,
                children: boxes.chain(std::iter::once(overlay)).collect(),
            },
        }
    }

    /// Build the layout tree; returns it with the root id.
    ///
    /// # Errors
    ///
    /// Propagates tree errors, which a freshly built scene never produces.
    pub fn build(&self) -> Result<(LayoutTree, NodeId)> {
        let mut tree = LayoutTree::with_config(self.viewport, self.config);
        let root = add_node(&mut tree, &self.root)?;
        Ok((tree, root))
    }
}

fn add_node(tree: &mut LayoutTree, node: &SceneNode) -> Result<NodeId> {
    let id = tree.create_node(node.style.clone(), node.arrangement);
    if let Some(position) = node.position {
        tree.set_position(id, position);
    }
    for child in &node.children {
        let child_id = add_node(tree, child)?;
        tree.add_child(id, child_id)?;
    }
    Ok(id)
}
