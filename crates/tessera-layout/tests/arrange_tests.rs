//! Tests for main-axis arrangement: justify, align, wrap, gap.

use tessera_layout::{
    AlignItems, Arrangement, Compositor, FlexLayout, JustifyContent, LayoutTree, Point, Size,
    Style, Viewport, WrapMode, arrange, layout_pass,
};

fn squares(count: usize, side: f32) -> Vec<Size> {
    vec![Size::new(side, side); count]
}

fn main_offsets(positions: &[Point]) -> Vec<f32> {
    positions.iter().map(|p| p.x).collect()
}

fn row(justify: JustifyContent) -> FlexLayout {
    FlexLayout::row().justify(justify)
}

// ========== justify-content ==========

#[test]
fn test_space_between_without_slack() {
    let positions = arrange(
        &row(JustifyContent::SpaceBetween),
        Point::default(),
        Size::new(300.0, 100.0),
        &squares(3, 100.0),
    );
    assert_eq!(main_offsets(&positions), vec![0.0, 100.0, 200.0]);
}

#[test]
fn test_space_around_degenerates_without_slack() {
    let positions = arrange(
        &row(JustifyContent::SpaceAround),
        Point::default(),
        Size::new(300.0, 100.0),
        &squares(3, 100.0),
    );
    assert_eq!(main_offsets(&positions), vec![0.0, 100.0, 200.0]);
}

#[test]
fn test_space_evenly_distributes_slack() {
    let positions = arrange(
        &row(JustifyContent::SpaceEvenly),
        Point::default(),
        Size::new(210.0, 50.0),
        &squares(3, 50.0),
    );
    assert_eq!(main_offsets(&positions), vec![15.0, 80.0, 145.0]);
}

#[test]
fn test_space_around_with_slack() {
    // free = 120, gap = 40, lead = 20
    let positions = arrange(
        &row(JustifyContent::SpaceAround),
        Point::default(),
        Size::new(300.0, 60.0),
        &squares(3, 60.0),
    );
    assert_eq!(main_offsets(&positions), vec![20.0, 120.0, 220.0]);
}

#[test]
fn test_start_center_end() {
    let items = squares(2, 100.0);
    let extent = Size::new(300.0, 100.0);
    let origin = Point::new(10.0, 20.0);

    let start = arrange(&row(JustifyContent::Start), origin, extent, &items);
    assert_eq!(main_offsets(&start), vec![10.0, 110.0]);

    let center = arrange(&row(JustifyContent::Center), origin, extent, &items);
    assert_eq!(main_offsets(&center), vec![60.0, 160.0]);

    let end = arrange(&row(JustifyContent::End), origin, extent, &items);
    assert_eq!(main_offsets(&end), vec![110.0, 210.0]);

    assert!(start.iter().all(|p| (p.y - 20.0).abs() < f32::EPSILON));
}

#[test]
fn test_gap_between_items() {
    let positions = arrange(
        &FlexLayout::row().gap(10.0),
        Point::default(),
        Size::new(500.0, 100.0),
        &squares(3, 100.0),
    );
    assert_eq!(main_offsets(&positions), vec![0.0, 110.0, 220.0]);
}

#[test]
fn test_center_overflow_never_leads_before_origin() {
    let positions = arrange(
        &row(JustifyContent::Center),
        Point::new(5.0, 0.0),
        Size::new(100.0, 100.0),
        &squares(2, 100.0),
    );
    assert_eq!(main_offsets(&positions), vec![5.0, 105.0]);
}

#[test]
fn test_overflow_produces_negative_gaps() {
    // free = 240 - 300 = -60, gap = -30
    let positions = arrange(
        &row(JustifyContent::SpaceBetween),
        Point::default(),
        Size::new(240.0, 100.0),
        &squares(3, 100.0),
    );
    assert_eq!(main_offsets(&positions), vec![0.0, 70.0, 140.0]);
}

#[test]
fn test_space_between_single_item_uses_configured_gap() {
    let positions = arrange(
        &row(JustifyContent::SpaceBetween).gap(12.0),
        Point::default(),
        Size::new(300.0, 100.0),
        &squares(1, 100.0),
    );
    assert_eq!(main_offsets(&positions), vec![0.0]);
}

#[test]
fn test_no_items_is_a_no_op() {
    for justify in [
        JustifyContent::SpaceBetween,
        JustifyContent::SpaceAround,
        JustifyContent::SpaceEvenly,
    ] {
        assert!(arrange(&row(justify), Point::default(), Size::new(1.0, 1.0), &[]).is_empty());
    }
}

// ========== align-items ==========

#[test]
fn test_cross_alignment() {
    let items = [Size::new(10.0, 40.0), Size::new(10.0, 100.0)];
    let extent = Size::new(100.0, 100.0);

    let center = arrange(
        &FlexLayout::row().align(AlignItems::Center),
        Point::default(),
        extent,
        &items,
    );
    assert_eq!(center[0].y, 30.0);
    assert_eq!(center[1].y, 0.0);

    let end = arrange(
        &FlexLayout::row().align(AlignItems::End),
        Point::new(0.0, 50.0),
        extent,
        &items,
    );
    assert_eq!(end[0].y, 110.0);
    assert_eq!(end[1].y, 50.0);
}

// ========== orientation ==========

#[test]
fn test_column_swaps_axes() {
    let items = [Size::new(20.0, 50.0), Size::new(60.0, 50.0)];
    let positions = arrange(
        &FlexLayout::column()
            .justify(JustifyContent::SpaceBetween)
            .align(AlignItems::Center),
        Point::new(100.0, 0.0),
        Size::new(80.0, 300.0),
        &items,
    );
    assert_eq!(positions, vec![Point::new(130.0, 0.0), Point::new(110.0, 250.0)]);
}

// ========== wrap ==========

#[test]
fn test_wrap_starts_new_line_below_tallest_item() {
    let items = [
        Size::new(100.0, 20.0),
        Size::new(100.0, 40.0),
        Size::new(100.0, 30.0),
    ];
    let positions = arrange(
        &FlexLayout::row().wrap(WrapMode::Wrap).gap(10.0),
        Point::default(),
        Size::new(250.0, 200.0),
        &items,
    );
    assert_eq!(
        positions,
        vec![
            Point::new(0.0, 0.0),
            Point::new(110.0, 0.0),
            Point::new(0.0, 50.0),
        ]
    );
}

#[test]
fn test_no_wrap_overflows_on_one_line() {
    let positions = arrange(
        &FlexLayout::row(),
        Point::default(),
        Size::new(150.0, 100.0),
        &squares(3, 100.0),
    );
    assert_eq!(main_offsets(&positions), vec![0.0, 100.0, 200.0]);
    assert!(positions.iter().all(|p| p.y == 0.0));
}

#[test]
fn test_wrap_oversized_first_item_opens_empty_line() {
    // The first item already overflows, so it wraps onto a line one gap
    // below an empty one.
    let positions = arrange(
        &FlexLayout::row().wrap(WrapMode::Wrap).gap(10.0),
        Point::default(),
        Size::new(100.0, 100.0),
        &[Size::new(150.0, 20.0), Size::new(50.0, 20.0)],
    );
    assert_eq!(positions, vec![Point::new(0.0, 10.0), Point::new(0.0, 40.0)]);
}

#[test]
fn test_wrap_every_oversized_item_gets_its_own_line() {
    let positions = arrange(
        &FlexLayout::row().wrap(WrapMode::Wrap),
        Point::default(),
        Size::new(50.0, 100.0),
        &[Size::new(80.0, 10.0), Size::new(80.0, 10.0)],
    );
    assert_eq!(positions, vec![Point::new(0.0, 0.0), Point::new(0.0, 10.0)]);
}

#[test]
fn test_column_wrap_moves_right() {
    let positions = arrange(
        &FlexLayout::column().wrap(WrapMode::Wrap),
        Point::default(),
        Size::new(100.0, 100.0),
        &[Size::new(30.0, 60.0), Size::new(45.0, 60.0)],
    );
    assert_eq!(positions, vec![Point::new(0.0, 0.0), Point::new(30.0, 0.0)]);
}

// ========== inside a tree ==========

#[test]
fn test_children_start_at_container_content_origin() {
    let mut tree = LayoutTree::new(Viewport::default());
    let root = tree.create_node(
        Style::sized("200px", "100px")
            .with_margin("5px")
            .with_border("2px")
            .with_padding("3px"),
        Arrangement::MainAxis(FlexLayout::row()),
    );
    tree.set_position(root, Point::new(10.0, 20.0));
    let child = tree.create_node(Style::sized("10px", "10px"), Arrangement::None);
    tree.add_child(root, child).unwrap();

    let _ = layout_pass(&mut tree, root, &mut Compositor::new());
    assert_eq!(tree[child].position, Point::new(20.0, 30.0));
}

#[test]
fn test_child_outer_size_drives_spacing() {
    let mut tree = LayoutTree::new(Viewport::default());
    let root = tree.create_node(
        Style::sized("300px", "100px"),
        Arrangement::MainAxis(FlexLayout::row()),
    );
    let first = tree.create_node(
        Style::sized("50px", "50px").with_padding("5px").with_border("1px"),
        Arrangement::None,
    );
    let second = tree.create_node(Style::sized("50px", "50px"), Arrangement::None);
    tree.add_child(root, first).unwrap();
    tree.add_child(root, second).unwrap();

    let _ = layout_pass(&mut tree, root, &mut Compositor::new());
    assert_eq!(tree[second].position.x, 62.0);
}

#[test]
fn test_child_margin_does_not_drive_spacing() {
    let mut tree = LayoutTree::new(Viewport::default());
    let root = tree.create_node(
        Style::sized("300px", "100px"),
        Arrangement::MainAxis(FlexLayout::row()),
    );
    let first = tree.create_node(
        Style::sized("50px", "50px").with_margin("20px"),
        Arrangement::None,
    );
    let second = tree.create_node(Style::sized("50px", "50px"), Arrangement::None);
    tree.add_child(root, first).unwrap();
    tree.add_child(root, second).unwrap();

    let _ = layout_pass(&mut tree, root, &mut Compositor::new());
    assert_eq!(tree[first].outer_size(), Size::new(50.0, 50.0));
    assert_eq!(tree[second].position.x, 50.0);
}

#[test]
fn test_justified_gap_is_not_written_back() {
    let layout = FlexLayout::row().justify(JustifyContent::SpaceEvenly).gap(4.0);
    let mut tree = LayoutTree::new(Viewport::default());
    let root = tree.create_node(Style::sized("210px", "50px"), Arrangement::MainAxis(layout));
    for _ in 0..3 {
        let child = tree.create_node(Style::sized("50px", "50px"), Arrangement::None);
        tree.add_child(root, child).unwrap();
    }

    let mut compositor = Compositor::new();
    for _ in 0..3 {
        let _ = layout_pass(&mut tree, root, &mut compositor);
    }
    assert_eq!(tree[root].arrangement, Arrangement::MainAxis(layout));
    let xs: Vec<f32> = tree.children(root).iter().map(|&c| tree[c].position.x).collect();
    // free = 210 - (150 + 8) = 52, gap = 13
    assert_eq!(xs, vec![13.0, 76.0, 139.0]);
}

#[test]
fn test_absolute_children_still_take_space() {
    let mut tree = LayoutTree::new(Viewport::default());
    let root = tree.create_node(
        Style::sized("300px", "100px"),
        Arrangement::MainAxis(FlexLayout::row()),
    );
    let floating = tree.create_node(
        Style::sized("40px", "40px").with_global_order(3),
        Arrangement::None,
    );
    let after = tree.create_node(Style::sized("40px", "40px"), Arrangement::None);
    tree.add_child(root, floating).unwrap();
    tree.add_child(root, after).unwrap();

    let _ = layout_pass(&mut tree, root, &mut Compositor::new());
    assert_eq!(tree[floating].position.x, 0.0);
    assert_eq!(tree[after].position.x, 40.0);
}
