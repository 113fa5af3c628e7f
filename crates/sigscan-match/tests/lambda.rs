use sigscan_core::{ParticleRecord, SignatureKind, ThresholdTable, Vec3};
use sigscan_match::LambdaMatcher;
use sigscan_truth::{DecayVertexProvider, ParticleIndex, SignatureMatcher};

fn particle(
    track_id: i32,
    pdg_code: i32,
    parent_track_id: i32,
    creation_process: &str,
    end_process: &str,
    momentum: f64,
) -> ParticleRecord {
    ParticleRecord {
        track_id,
        pdg_code,
        creation_process: creation_process.to_string(),
        end_process: end_process.to_string(),
        start_position: Vec3::default(),
        end_position: Vec3::default(),
        momentum: Vec3::new(0.0, 0.0, momentum),
        end_momentum: Vec3::default(),
        parent_track_id,
    }
}

fn lambda_event() -> Vec<ParticleRecord> {
    let mut lambda = particle(1, 3122, 0, "primary", "Decay", 1.2);
    lambda.end_position = Vec3::new(30.0, -2.0, 150.0);
    vec![
        lambda,
        particle(2, -211, 1, "Decay", "pi-Inelastic", 0.2),
        particle(3, 2212, 1, "Decay", "protonInelastic", 0.15),
    ]
}

fn matcher() -> LambdaMatcher {
    LambdaMatcher::new(ThresholdTable::default())
}

#[test]
fn lambda_decay_matches() {
    let index = ParticleIndex::build(lambda_event());
    let signature = matcher().find_signature(&index).expect("signature");

    assert_eq!(signature.kind, SignatureKind::Lambda);
    let entries: Vec<(i32, i32)> = signature
        .entries()
        .iter()
        .map(|e| (e.pdg_code, e.track_id))
        .collect();
    assert_eq!(entries, vec![(-211, 2), (2212, 3)]);
}

#[test]
fn secondary_proton_joins_the_signature() {
    let mut event = lambda_event();
    event.push(particle(4, 2212, 3, "protonInelastic", "protonInelastic", 0.12));
    let index = ParticleIndex::build(event);
    let signature = matcher().find_signature(&index).expect("signature");

    let entries: Vec<(i32, i32)> = signature
        .entries()
        .iter()
        .map(|e| (e.pdg_code, e.track_id))
        .collect();
    assert_eq!(entries, vec![(-211, 2), (2212, 3), (2212, 4)]);
}

#[test]
fn rescatter_walk_is_depth_first() {
    let mut event = lambda_event();
    // Proton 3 knocks out protons 4 and 6; proton 4 knocks out proton 5.
    event.push(particle(4, 2212, 3, "protonInelastic", "protonInelastic", 0.3));
    event.push(particle(6, 2212, 3, "protonInelastic", "protonInelastic", 0.25));
    event.push(particle(5, 2212, 4, "protonInelastic", "protonInelastic", 0.2));
    let index = ParticleIndex::build(event);
    let signature = matcher().find_signature(&index).expect("signature");

    let tracks: Vec<i32> = signature.entries().iter().map(|e| e.track_id).collect();
    assert_eq!(tracks, vec![2, 3, 4, 5, 6]);
}

#[test]
fn rescatter_branch_stops_below_threshold() {
    let mut event = lambda_event();
    event.push(particle(4, 2212, 3, "protonInelastic", "protonInelastic", 0.05));
    event.push(particle(5, 2212, 4, "protonInelastic", "protonInelastic", 0.5));
    let index = ParticleIndex::build(event);
    let signature = matcher().find_signature(&index).expect("signature");
    // Proton 4 fails the gate, so neither it nor its passing child enter.
    assert_eq!(signature.len(), 2);
}

#[test]
fn rescatter_walk_requires_the_exact_species() {
    let mut event = lambda_event();
    event.push(particle(4, 211, 3, "protonInelastic", "pi+Inelastic", 0.5));
    let index = ParticleIndex::build(event);
    let signature = matcher().find_signature(&index).expect("signature");
    assert_eq!(signature.len(), 2);
}

#[test]
fn daughter_order_does_not_affect_the_topology() {
    let mut event = lambda_event();
    event.swap(1, 2);
    let index = ParticleIndex::build(event);
    let signature = matcher().find_signature(&index).expect("signature");
    let entries: Vec<i32> = signature.entries().iter().map(|e| e.track_id).collect();
    assert_eq!(entries, vec![3, 2]);
}

#[test]
fn wrong_decay_products_fail() {
    let mut event = lambda_event();
    event[1].pdg_code = 211;
    let index = ParticleIndex::build(event);
    assert!(matcher().find_signature(&index).is_none());
}

#[test]
fn non_decay_daughters_are_excluded_from_the_count() {
    let mut event = lambda_event();
    event.push(particle(4, 22, 1, "eBrem", "phot", 0.01));
    let index = ParticleIndex::build(event);
    assert!(matcher().find_signature(&index).is_some());
}

#[test]
fn daughter_below_threshold_fails_the_match() {
    let mut event = lambda_event();
    event[2].momentum = Vec3::new(0.0, 0.0, 0.09);
    let index = ParticleIndex::build(event);
    assert!(matcher().find_signature(&index).is_none());
}

#[test]
fn decay_vertex_is_the_lambda_end_position() {
    let index = ParticleIndex::build(lambda_event());
    let vertex = matcher().decay_vertex(&index).expect("vertex");
    assert_eq!(vertex, Vec3::new(30.0, -2.0, 150.0));
}

#[test]
fn matching_is_idempotent() {
    let index = ParticleIndex::build(lambda_event());
    let matcher = matcher();
    assert_eq!(matcher.find_signature(&index), matcher.find_signature(&index));
}
