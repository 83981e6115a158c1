use std::fs;

use ipnviz_data::{BodySetup, BodyState, NodePair, NodeSetup, NodeState, Point3, SetupSnapshot, TickSnapshot};
use ipnviz_io::{FeedError, Recording, RecordingWriter};

fn sample() -> Recording {
    let setup = SetupSnapshot {
        nodes: vec![
            NodeSetup {
                id: 0,
                name: "earth-gs".into(),
                position: Point3::new(1.496e11, 0.0, 0.0),
            },
            NodeSetup {
                id: 1,
                name: "mars-relay".into(),
                position: Point3::new(2.279e11, 0.0, 0.0),
            },
        ],
        bodies: vec![BodySetup {
            name: "Saturn".into(),
            kind: None,
            radius: 5.8232e7,
            position: Point3::new(1.433e12, 0.0, 0.0),
        }],
    };
    let ticks = (0..25u64)
        .map(|i| TickSnapshot {
            time: i * 60_000_000_000,
            final_tick: i == 24,
            nodes: vec![
                NodeState {
                    position: Point3::new(1.496e11, i as f64 * 1e8, 0.0),
                    occupancy: 0.1,
                },
                NodeState {
                    position: Point3::new(2.279e11, 0.0, i as f64 * 1e8),
                    occupancy: 0.9,
                },
            ],
            bodies: vec![BodyState {
                position: Point3::new(1.433e12, 0.0, 0.0),
            }],
            connectable_node_indices: vec![NodePair::new(1, 0)],
            sending_node_indices: if i % 5 == 0 { vec![NodePair::new(0, 1)] } else { Vec::new() },
            creating_node_indices: vec![],
            delivering_node_indices: vec![],
            highlighted_node_index: (i % 2 == 0).then_some(1),
            occluded_node_indices: vec![],
        })
        .collect();
    Recording { setup, ticks }
}

#[test]
fn test_plain_recording_round_trip() {
    let path = std::env::temp_dir().join("ipnviz_test_plain.jsonl");
    let recording = sample();
    recording.save(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 26);
    assert!(text.starts_with(r#"{"type":"setup""#));

    let loaded = Recording::load(&path).unwrap();
    assert_eq!(loaded, recording);
    assert!(loaded.ticks.last().unwrap().final_tick);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_gzip_recording_round_trip() {
    let path = std::env::temp_dir().join("ipnviz_test_gzip.jsonl.gz");
    let recording = sample();
    let mut writer = RecordingWriter::create(&path, &recording.setup).unwrap();
    for tick in &recording.ticks {
        writer.push(tick).unwrap();
    }
    assert_eq!(writer.ticks(), 25);
    writer.finish().unwrap();

    let raw = fs::read(&path).unwrap();
    assert_eq!(&raw[..2], &[0x1f, 0x8b]);

    let loaded = Recording::load(&path).unwrap();
    assert_eq!(loaded.len(), 25);
    assert_eq!(loaded.duration(), 24 * 60_000_000_000);
    assert_eq!(loaded.setup.bodies[0].kind(), ipnviz_data::BodyKind::Saturn);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = Recording::load("does/not/exist.jsonl").unwrap_err();
    assert!(matches!(err, FeedError::FileSystem(_)));
}
