use sigscan_core::serde::{from_json_slice, from_yaml_slice, to_yaml_string};
use sigscan_core::{
    ParticleRecord, ScanConfig, Signature, SignatureKind, Vec3,
};

fn sample_record() -> ParticleRecord {
    ParticleRecord {
        track_id: 3,
        pdg_code: 321,
        creation_process: "primary".to_string(),
        end_process: "Decay".to_string(),
        start_position: Vec3::new(10.0, -5.0, 120.0),
        end_position: Vec3::new(14.0, -4.5, 131.0),
        momentum: Vec3::new(0.0, 0.0, 0.8),
        end_momentum: Vec3::new(0.0, 0.0, 0.1),
        parent_track_id: 0,
    }
}

#[test]
fn particle_record_json_roundtrip() {
    let record = sample_record();
    let bytes = serde_json::to_vec(&record).expect("serialize");
    let back: ParticleRecord = from_json_slice(&bytes).expect("deserialize");
    assert_eq!(record, back);
}

#[test]
fn signature_yaml_roundtrip() {
    let mut signature = Signature::new(SignatureKind::ChargedKaon);
    signature.push_particle(&sample_record());
    let text = to_yaml_string(&signature).expect("serialize");
    let back: Signature = from_yaml_slice(text.as_bytes()).expect("deserialize");
    assert_eq!(signature, back);
}

#[test]
fn config_yaml_roundtrip() {
    let config = ScanConfig::default();
    let text = to_yaml_string(&config).expect("serialize");
    let back: ScanConfig = from_yaml_slice(text.as_bytes()).expect("deserialize");
    assert_eq!(config, back);
}

#[test]
fn malformed_yaml_reports_serde_family() {
    let err = from_yaml_slice::<ScanConfig>(b"thresholds: [not, a, map]").unwrap_err();
    assert_eq!(err.info().code, "yaml_deserialize");
}
