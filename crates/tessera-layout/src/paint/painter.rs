//! Painting a single node.

use super::backend::{CornerRadii, RenderBackend};
use crate::node::Node;

/// Paint one node's own appearance: background, then border.
///
/// [CSS 2.1 Appendix E.2](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
///
/// Both cover the border box. The border is a single uniform stroke as
/// wide as the top border; transparent colors and zero-width borders draw
/// nothing. Children are the caller's business.
pub fn paint_box(node: &Node, backend: &mut dyn RenderBackend) {
    let style = &node.style;
    let rect = node.border_rect();
    let radii = CornerRadii::from(style.border_radius);

    if !style.background_color.is_transparent() {
        backend.fill_rect(rect, &style.background_color, &radii);
    }

    let thickness = node.box_model.border.top;
    if thickness > 0.0 && !style.border_color.is_transparent() {
        backend.stroke_rect(rect, &style.border_color, thickness, &radii);
    }
}
