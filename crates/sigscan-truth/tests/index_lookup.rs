use sigscan_core::{ParticleRecord, ScanError, Vec3};
use sigscan_truth::ParticleIndex;

fn particle(track_id: i32, pdg_code: i32, parent_track_id: i32) -> ParticleRecord {
    ParticleRecord {
        track_id,
        pdg_code,
        creation_process: "primary".to_string(),
        end_process: "Decay".to_string(),
        start_position: Vec3::default(),
        end_position: Vec3::default(),
        momentum: Vec3::new(0.0, 0.0, 0.5),
        end_momentum: Vec3::default(),
        parent_track_id,
    }
}

#[test]
fn lookup_by_track_id() {
    let index = ParticleIndex::build(vec![particle(1, 321, 0), particle(2, -13, 1)]);
    assert_eq!(index.len(), 2);
    assert_eq!(index.get(2).unwrap().pdg_code, -13);
}

#[test]
fn missing_track_reports_not_found() {
    let index = ParticleIndex::build(vec![particle(1, 321, 0)]);
    let err = index.get(99).unwrap_err();
    match err {
        ScanError::Index(info) => {
            assert_eq!(info.code, "track-not-found");
            assert_eq!(info.context.get("track_id"), Some(&"99".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn daughters_preserve_collection_order() {
    let index = ParticleIndex::build(vec![
        particle(1, 3122, 0),
        particle(5, 2212, 1),
        particle(3, -211, 1),
        particle(4, 22, 2),
    ]);
    let daughters: Vec<i32> = index.daughters_of(1).iter().map(|d| d.track_id).collect();
    assert_eq!(daughters, vec![5, 3]);
}

#[test]
fn no_daughters_is_empty_not_error() {
    let index = ParticleIndex::build(vec![particle(1, 321, 0)]);
    assert!(index.daughters_of(1).is_empty());
    assert!(index.daughters_of(42).is_empty());
}

#[test]
fn records_iterate_in_input_order() {
    let index = ParticleIndex::build(vec![
        particle(9, 2212, 0),
        particle(2, 321, 0),
        particle(7, -211, 2),
    ]);
    let order: Vec<i32> = index.records().map(|r| r.track_id).collect();
    assert_eq!(order, vec![9, 2, 7]);
}

#[test]
fn empty_collection_builds_empty_index() {
    let index = ParticleIndex::build(Vec::new());
    assert!(index.is_empty());
    assert!(index.get(1).is_err());
}
