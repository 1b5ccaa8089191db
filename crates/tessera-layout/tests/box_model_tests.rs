//! Tests for box model computation and geometry queries.

use quickcheck_macros::quickcheck;
use tessera_layout::{
    Arrangement, Axis, BoxModel, Edge, EdgeSizes, LayoutTree, Node, ParentSize, Point, Rect,
    ResolveContext, Size, Style, Viewport,
};

fn px(value: u8) -> String {
    format!("{value}px")
}

/// Style with distinct values on every edge so mix-ups show.
fn asymmetric_style() -> Style {
    Style {
        width: "100px".into(),
        height: "50px".into(),
        margin: ["1", "2", "3", "4"].map(String::from),
        border: ["5", "6", "7", "8"].map(String::from),
        padding: ["9", "10", "11", "12"].map(String::from),
        ..Style::default()
    }
}

#[quickcheck]
fn prop_outer_size_is_content_plus_padding_plus_border(
    content: (u8, u8),
    padding: (u8, u8, u8, u8),
    border: (u8, u8, u8, u8),
    margin: (u8, u8),
) -> bool {
    let style = Style {
        width: px(content.0),
        height: px(content.1),
        padding: [px(padding.0), px(padding.1), px(padding.2), px(padding.3)],
        border: [px(border.0), px(border.1), px(border.2), px(border.3)],
        margin: [px(margin.0), px(margin.1), px(margin.0), px(margin.1)],
        ..Style::default()
    };
    let model = BoxModel::compute(&style, &ResolveContext::default());
    let outer = model.outer_size();

    let width = f32::from(content.0)
        + f32::from(padding.1)
        + f32::from(padding.3)
        + f32::from(border.1)
        + f32::from(border.3);
    let height = f32::from(content.1)
        + f32::from(padding.0)
        + f32::from(padding.2)
        + f32::from(border.0)
        + f32::from(border.2);
    outer == Size::new(width, height)
}

#[test]
fn test_edges_follow_trbl_order() {
    let model = BoxModel::compute(&asymmetric_style(), &ResolveContext::default());
    assert_eq!(
        model.margin,
        EdgeSizes {
            top: 1.0,
            right: 2.0,
            bottom: 3.0,
            left: 4.0
        }
    );
    assert!((model.border.get(Edge::Left) - 8.0).abs() < f32::EPSILON);
    assert!((model.padding.get(Edge::Bottom) - 11.0).abs() < f32::EPSILON);
    assert_eq!(model.content, Size::new(100.0, 50.0));
}

#[test]
fn test_edge_axes() {
    assert_eq!(Edge::Top.axis(), Axis::Vertical);
    assert_eq!(Edge::Bottom.axis(), Axis::Vertical);
    assert_eq!(Edge::Left.axis(), Axis::Horizontal);
    assert_eq!(Edge::Right.axis(), Axis::Horizontal);
}

#[test]
fn test_negative_and_malformed_edges_clamp_to_zero() {
    let style = Style {
        width: "-20px".into(),
        height: "junk".into(),
        margin: ["-5px", "x", "3px", "-0.5"].map(String::from),
        ..Style::default()
    };
    let model = BoxModel::compute(&style, &ResolveContext::default());
    assert_eq!(model.content, Size::default());
    assert_eq!(
        model.margin,
        EdgeSizes {
            top: 0.0,
            right: 0.0,
            bottom: 3.0,
            left: 0.0
        }
    );
}

#[test]
fn test_percent_edges_use_their_own_axis_rule() {
    // Parent content 200 x 100, cross-axis basis: left/right (horizontal)
    // read the parent height, top/bottom (vertical) read the parent width.
    let ctx = ResolveContext::default().with_parent(ParentSize {
        width: 200.0,
        height: 100.0,
    });
    let style = Style::default().with_padding("10%");
    let model = BoxModel::compute(&style, &ctx);
    assert!((model.padding.left - 10.0).abs() < f32::EPSILON);
    assert!((model.padding.right - 10.0).abs() < f32::EPSILON);
    assert!((model.padding.top - 20.0).abs() < f32::EPSILON);
    assert!((model.padding.bottom - 20.0).abs() < f32::EPSILON);
}

#[test]
fn test_rects_expand_outward_from_content() {
    let model = BoxModel::compute(&asymmetric_style(), &ResolveContext::default());
    let position = Point::new(100.0, 200.0);

    // Content origin = position + margin + border + padding.
    assert_eq!(
        model.content_rect(position),
        Rect::new(100.0 + 4.0 + 8.0 + 12.0, 200.0 + 1.0 + 5.0 + 9.0, 100.0, 50.0)
    );
    assert_eq!(
        model.padding_rect(position),
        Rect::new(112.0, 206.0, 100.0 + 12.0 + 10.0, 50.0 + 9.0 + 11.0)
    );
    assert_eq!(
        model.border_rect(position),
        Rect::new(104.0, 201.0, 122.0 + 8.0 + 6.0, 70.0 + 5.0 + 7.0)
    );
    // The margin box starts exactly at the position.
    assert_eq!(
        model.margin_rect(position),
        Rect::new(100.0, 200.0, 136.0 + 4.0 + 2.0, 82.0 + 1.0 + 3.0)
    );
    assert_eq!(model.border_rect(position).size(), model.outer_size());
}

#[test]
fn test_node_queries_use_current_position() {
    let mut node = Node::new(asymmetric_style(), Arrangement::None);
    node.box_model = BoxModel::compute(&node.style, &ResolveContext::default());
    node.position = Point::new(10.0, 10.0);
    assert_eq!(node.content_position(), Point::new(34.0, 25.0));

    node.position = Point::new(0.0, 0.0);
    assert_eq!(node.content_position(), Point::new(24.0, 15.0));
    assert_eq!(node.content_size(), Size::new(100.0, 50.0));
    assert_eq!(node.outer_size(), node.border_rect().size());
}

#[test]
fn test_box_model_recomputed_every_call() {
    let mut tree = LayoutTree::new(Viewport::default());
    let id = tree.create_node(Style::sized("10px", "10px"), Arrangement::None);
    assert_eq!(tree.compute_box_model(id).content, Size::new(10.0, 10.0));

    if let Some(style) = tree.style_mut(id) {
        style.width = "30px".into();
    }
    assert_eq!(tree.compute_box_model(id).content, Size::new(30.0, 10.0));
    assert_eq!(tree[id].box_model.content, Size::new(30.0, 10.0));
}
