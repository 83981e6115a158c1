use glam::Vec3;
use ipnviz_core::composer::Component;
use ipnviz_core::connections::{ConnectionMarkers, CONNECTING_COLOR, SENDING_COLOR};
use ipnviz_core::marker::MarkerContext;
use ipnviz_core::markers::NodeMarkers;
use ipnviz_core::scene::{BarTone, Label, Polyline};
use ipnviz_core::{DrawCommand, Scene, SceneConfig, SceneDriver, Viewport};
use ipnviz_data::{BodySetup, BodyState, NodePair, NodeSetup, Point3, SetupSnapshot, TickSnapshot};

/// Two scene units away from the origin with the default scale.
const NEAR_ORBIT: f64 = 2.0 * 1.496e11 / 1e5;

fn line_positions() -> [Point3; 3] {
    [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
    ]
}

fn three_nodes() -> SetupSnapshot {
    SetupSnapshot {
        nodes: line_positions()
            .into_iter()
            .enumerate()
            .map(|(i, position)| NodeSetup {
                id: i as u32,
                name: format!("node-{i}"),
                position,
            })
            .collect(),
        bodies: Vec::new(),
    }
}

fn tick_with(connectable: &[(usize, usize)], sending: &[(usize, usize)]) -> TickSnapshot {
    let mut tick = TickSnapshot::at_positions(line_positions());
    tick.connectable_node_indices = connectable.iter().map(|&(a, b)| NodePair::new(a, b)).collect();
    tick.sending_node_indices = sending.iter().map(|&(a, b)| NodePair::new(a, b)).collect();
    tick
}

#[test]
fn test_single_link_end_to_end() {
    let mut scene = Scene::new();
    let ctx = MarkerContext::default();
    let mut connections = ConnectionMarkers::new();

    connections.update(&mut scene, &ctx, &tick_with(&[(0, 1)], &[]));

    let matrix = connections.matrix();
    assert_eq!(matrix.len(), 1);
    assert!(matrix.get(0, 2).is_none());
    assert!(matrix.get(1, 2).is_none());

    let link = matrix.get(1, 0).expect("link 0-1 exists");
    assert!(link.is_visible(&scene));
    let line = scene.get::<Polyline>(link.line()).unwrap();
    assert_eq!(
        line.points,
        vec![ctx.scale.to_scene(line_positions()[0]), ctx.scale.to_scene(line_positions()[1])]
    );
    assert_eq!(line.color, CONNECTING_COLOR);
}

#[test]
fn test_links_absent_from_tick_are_hidden() {
    let mut scene = Scene::new();
    let ctx = MarkerContext::default();
    let mut connections = ConnectionMarkers::new();

    connections.update(&mut scene, &ctx, &tick_with(&[(0, 1), (0, 2)], &[]));
    assert_eq!(connections.visible_count(&scene), 2);

    connections.update(&mut scene, &ctx, &tick_with(&[(2, 1)], &[]));
    let matrix = connections.matrix();
    assert_eq!(matrix.len(), 3);
    assert!(matrix.get(1, 2).unwrap().is_visible(&scene));
    assert!(!matrix.get(0, 1).unwrap().is_visible(&scene));
    assert!(!matrix.get(0, 2).unwrap().is_visible(&scene));
    assert_eq!(connections.visible_count(&scene), 1);
}

#[test]
fn test_sending_link_flashes_then_fades() {
    let mut scene = Scene::new();
    let ctx = MarkerContext::default();
    let mut connections = ConnectionMarkers::new();

    connections.update(&mut scene, &ctx, &tick_with(&[(0, 1)], &[(1, 0)]));
    let line = connections.matrix().get(0, 1).unwrap().line();
    assert_eq!(scene.get::<Polyline>(line).unwrap().color, SENDING_COLOR);

    let mut previous = 1.0;
    for _ in 0..10 {
        connections.update(&mut scene, &ctx, &tick_with(&[(0, 1)], &[]));
        let sending = connections.matrix().get(0, 1).unwrap().sending();
        assert!(sending < previous);
        previous = sending;
    }
    assert!((previous - 0.9f32.powi(10)).abs() < 1e-5);
}

#[test]
fn test_occlusion_is_reset_every_tick() {
    let mut scene = Scene::new();
    let ctx = MarkerContext::default();
    let mut nodes = NodeMarkers::spawn(&mut scene, &ctx, &three_nodes().nodes);

    let mut first = tick_with(&[], &[]);
    first.occluded_node_indices = vec![0];
    nodes.update(&mut scene, &ctx, &first);

    let label = nodes.markers()[0].label();
    {
        let dimmed = scene.get::<Label>(label).unwrap();
        assert_eq!(dimmed.opacity, 0.5);
        assert_eq!(dimmed.bar.unwrap().tone, BarTone::Secondary);
    }
    assert!(nodes.markers()[0].is_occluded());
    assert!(!nodes.markers()[1].is_occluded());

    nodes.update(&mut scene, &ctx, &tick_with(&[], &[]));
    let restored = scene.get::<Label>(label).unwrap();
    assert_eq!(restored.opacity, 1.0);
    assert_eq!(restored.bar.unwrap().tone, BarTone::Primary);
    assert!(!nodes.markers()[0].is_occluded());
}

#[test]
fn test_driver_runs_full_pipeline() {
    let mut setup = three_nodes();
    setup.bodies.push(BodySetup {
        name: "Earth".into(),
        kind: None,
        radius: 6.371e6,
        position: Point3::new(NEAR_ORBIT, 0.0, 0.0),
    });
    let mut driver = SceneDriver::setup(&setup, SceneConfig::default());
    let objects_after_setup = driver.scene().len();

    for i in 0..30u64 {
        let mut tick = tick_with(&[(0, 1)], if i == 0 { &[(0, 1)] } else { &[] });
        tick.time = i * 1_000_000;
        tick.bodies = vec![BodyState {
            position: Point3::new(NEAR_ORBIT, 0.0, i as f64 * 1e6),
        }];
        if i == 0 {
            tick.creating_node_indices = vec![2];
        }
        driver.tick(&tick);
    }

    let stats = driver.stats();
    assert_eq!(stats.ticks, 30);
    assert_eq!(stats.nodes, 3);
    assert_eq!(stats.bodies, 1);
    assert_eq!(stats.connections, 1);
    assert_eq!(stats.visible_connections, 1);
    assert_eq!(stats.active_splashes, 1);
    assert_eq!(stats.time, 29_000_000);
    // one link line and one splash ring on top of the setup objects
    assert_eq!(driver.scene().len(), objects_after_setup + 2);

    let frame = driver.draw_list(Viewport::new(800.0, 600.0));
    let labels: Vec<&str> = frame.labels().collect();
    for name in ["node-0", "node-1", "node-2", "Earth"] {
        assert!(labels.contains(&name), "missing label {name}");
    }
    assert!(frame
        .iter()
        .any(|command| matches!(command, DrawCommand::Ring { .. })));
}

#[test]
fn test_camera_query_inverts_scale() {
    let mut driver = SceneDriver::setup(&three_nodes(), SceneConfig::default());
    driver.camera_mut().zoom(3);
    let scene_position = driver.camera().position();
    let sim = driver.camera_position();
    let scale = driver.config().scene.master_scale;
    assert!(((sim.y * scale) as f32 - scene_position.y).abs() < 1e-4);
    assert!(Vec3::new((sim.x * scale) as f32, (sim.y * scale) as f32, (sim.z * scale) as f32)
        .abs_diff_eq(scene_position, 1e-4));
}
