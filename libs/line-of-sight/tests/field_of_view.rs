//! End-to-end tests: host scene → node → display mesh.

use std::sync::Arc;

use approx::assert_relative_eq;
use glam::{DVec2, DVec3};
use line_of_sight::{
    LineOfSight2D, LineOfSight3D, LineOfSightConfig, MeshSlot, MetricRecorder, Pose2D, Pose3D,
    SegmentScene2D, SightError, Topology, WallScene3D,
};

fn corridor() -> SegmentScene2D {
    let mut scene = SegmentScene2D::new();
    scene
        .add_segment(DVec2::new(0.0, 15.0), DVec2::new(200.0, 15.0))
        .add_segment(DVec2::new(0.0, -15.0), DVec2::new(200.0, -15.0))
        .add_rect(DVec2::new(40.0, -5.0), DVec2::new(45.0, 5.0));
    scene
}

#[test]
fn planar_fan_covers_the_visible_area() {
    let scene = corridor();
    let recorder = Arc::new(MetricRecorder::new());
    let mut node = LineOfSight2D::with_defaults(recorder.clone());
    let mut display = MeshSlot::new();
    let pose = Pose2D::default();

    node.activate(&pose, &scene, &mut display).unwrap();
    let report = node.process(&pose, &scene, &mut display).unwrap();
    let mesh = display.mesh().unwrap();

    assert_eq!(mesh.topology(), Topology::TriangleList);
    assert_eq!(mesh.vertex_count(), report.vertex_count);
    assert_eq!(mesh.triangle_count(), mesh.vertex_count() - 2);
    assert!(mesh.validate().is_ok());
    assert!(report.discontinuities >= 2);
    assert_eq!(recorder.latest("draw_time"), Some(node.last_sweep_seconds()));

    // Nothing in the corridor is visible past the side walls or the block.
    let (min, max) = mesh.bounding_box();
    assert!(min.y >= -15.0 - 1e-9 && max.y <= 15.0 + 1e-9);
    assert!(max.x < 100.0);
    assert!(mesh.normals().is_some());
    assert!(mesh.colors().is_some());
}

#[test]
fn planar_mesh_is_in_local_frame() {
    let scene = SegmentScene2D::new();
    let node = LineOfSight2D::default();
    let at_origin = node.draw(&Pose2D::default(), &scene).unwrap();
    let moved = node
        .draw(&Pose2D::new(DVec2::new(-300.0, 75.0), 130.0), &scene)
        .unwrap();

    assert_eq!(at_origin.vertex_count(), moved.vertex_count());
    for (a, b) in at_origin.vertices().iter().zip(moved.vertices()) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
    }
}

#[test]
fn spatial_strip_pairs_every_outline_point() {
    let mut scene = WallScene3D::new();
    scene
        .add_wall(DVec3::new(6.0, 0.0, -10.0), DVec3::new(6.0, 0.0, 1.0))
        .add_wall(DVec3::new(3.0, 0.0, 2.0), DVec3::new(3.0, 0.0, 8.0));

    let mut node = LineOfSight3D::default();
    let mut display = MeshSlot::new();
    let pose = Pose3D::new(DVec3::new(0.0, 2.0, 0.0), 0.0);

    node.activate(&pose, &scene, &mut display).unwrap();
    let report = node.process(&pose, &scene, &mut display).unwrap();
    let mesh = display.mesh().unwrap();

    assert_eq!(mesh.topology(), Topology::TriangleStrip);
    assert_eq!(mesh.vertex_count() % 2, 0);
    assert_eq!(mesh.triangle_count(), mesh.vertex_count() - 2);
    assert!(report.discontinuities >= 2);

    // Even vertices are ray origins one unit out; odd ones are boundary points.
    for pair in mesh.vertices().chunks(2) {
        assert_relative_eq!(pair[0].length(), 1.0, epsilon = 1e-9);
        assert!(pair[1].length() <= 10.0 + 1e-9);
        assert_relative_eq!(pair[1].y, 0.0, epsilon = 1e-12);
    }
    assert_eq!(display.position(), Some(pose.position));
}

#[test]
fn degenerate_configuration_keeps_previous_mesh() {
    let scene = corridor();
    let mut node = LineOfSight2D::default();
    let mut display = MeshSlot::new();
    let pose = Pose2D::default();
    node.activate(&pose, &scene, &mut display).unwrap();

    node.set_config(LineOfSightConfig {
        resolution: 0.0,
        ..*node.config()
    });
    let err = node.process(&pose, &scene, &mut display).unwrap_err();

    assert!(matches!(err, SightError::Config(_)));
    assert_eq!(display.replacements(), 1);
    assert!(display.mesh().is_some());
}

#[test]
fn deactivated_node_rejects_ticks() {
    let scene = corridor();
    let mut node = LineOfSight2D::default();
    let mut display = MeshSlot::new();
    let pose = Pose2D::default();

    node.activate(&pose, &scene, &mut display).unwrap();
    node.deactivate(&mut display);
    assert!(display.mesh().is_none());
    assert_eq!(
        node.process(&pose, &scene, &mut display).unwrap_err(),
        SightError::Inactive
    );
}

#[test]
fn ray_budget_is_bounded_by_configuration() {
    let scene = corridor();
    for iterations in [1, 5, 12] {
        let mut node = LineOfSight2D::default();
        node.set_edge_resolve_iterations(iterations);
        let mut display = MeshSlot::new();
        let pose = Pose2D::new(DVec2::ZERO, 10.0);

        node.activate(&pose, &scene, &mut display).unwrap();
        let report = node.process(&pose, &scene, &mut display).unwrap();
        let expected =
            report.step_count + 1 + report.discontinuities * iterations as usize;
        assert_eq!(report.ray_queries, expected);
        assert!(report.ray_queries <= node.config().max_ray_queries().unwrap());
    }
}
