use serde::{Deserialize, Serialize};

use crate::pdg;

/// YAML-configurable parameters governing one scanning pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Per-species momentum thresholds.
    #[serde(default)]
    pub thresholds: ThresholdTable,
    /// Fiducial-volume half-widths.
    #[serde(default)]
    pub fiducial: FiducialConfig,
    /// Charged-kaon matcher options.
    #[serde(default)]
    pub kaon: KaonConfig,
    /// Clarity filter options.
    #[serde(default)]
    pub clarity: ClarityConfig,
}

/// Minimum momentum magnitude required of each decay daughter, per species.
///
/// Thresholds are keyed by the absolute PDG code; a species without an
/// entry fails the threshold gate outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdTable {
    /// Charged pion threshold.
    #[serde(default = "default_threshold")]
    pub pion: f64,
    /// Muon threshold.
    #[serde(default = "default_threshold")]
    pub muon: f64,
    /// Proton threshold.
    #[serde(default = "default_threshold")]
    pub proton: f64,
    /// Charged kaon threshold.
    #[serde(default = "default_threshold")]
    pub kaon: f64,
    /// Electron threshold.
    #[serde(default = "default_threshold")]
    pub electron: f64,
    /// Sigma plus threshold.
    #[serde(default = "default_threshold")]
    pub sigma_plus: f64,
    /// Sigma minus threshold.
    #[serde(default = "default_threshold")]
    pub sigma_minus: f64,
    /// Muon neutrino threshold.
    #[serde(default = "default_threshold")]
    pub muon_neutrino: f64,
    /// Neutron threshold.
    #[serde(default = "default_threshold")]
    pub neutron: f64,
}

fn default_threshold() -> f64 {
    0.1
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self {
            pion: default_threshold(),
            muon: default_threshold(),
            proton: default_threshold(),
            kaon: default_threshold(),
            electron: default_threshold(),
            sigma_plus: default_threshold(),
            sigma_minus: default_threshold(),
            muon_neutrino: default_threshold(),
            neutron: default_threshold(),
        }
    }
}

impl ThresholdTable {
    /// Returns the threshold for a species, matching on the absolute code.
    ///
    /// `None` means the species is not covered by the table; callers must
    /// treat that as a failed threshold requirement.
    pub fn threshold_for(&self, pdg_code: i32) -> Option<f64> {
        match pdg_code.abs() {
            pdg::CHARGED_PION => Some(self.pion),
            pdg::MUON => Some(self.muon),
            pdg::PROTON => Some(self.proton),
            pdg::CHARGED_KAON => Some(self.kaon),
            pdg::ELECTRON => Some(self.electron),
            pdg::SIGMA_PLUS => Some(self.sigma_plus),
            pdg::SIGMA_MINUS => Some(self.sigma_minus),
            pdg::MUON_NEUTRINO => Some(self.muon_neutrino),
            pdg::NEUTRON => Some(self.neutron),
            _ => None,
        }
    }
}

/// Margins shrinking the instrumented volume on each of the six box faces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiducialConfig {
    /// Margin inward from the low-x face.
    #[serde(default = "default_fv_x_start")]
    pub x_start: f64,
    /// Margin inward from the low-y face.
    #[serde(default = "default_fv_y_start")]
    pub y_start: f64,
    /// Margin inward from the low-z face.
    #[serde(default = "default_fv_z_start")]
    pub z_start: f64,
    /// Margin inward from the high-x face.
    #[serde(default = "default_fv_x_end")]
    pub x_end: f64,
    /// Margin inward from the high-y face.
    #[serde(default = "default_fv_y_end")]
    pub y_end: f64,
    /// Margin inward from the high-z face.
    #[serde(default = "default_fv_z_end")]
    pub z_end: f64,
}

fn default_fv_x_start() -> f64 {
    10.0
}

fn default_fv_y_start() -> f64 {
    15.0
}

fn default_fv_z_start() -> f64 {
    10.0
}

fn default_fv_x_end() -> f64 {
    10.0
}

fn default_fv_y_end() -> f64 {
    15.0
}

fn default_fv_z_end() -> f64 {
    50.0
}

impl Default for FiducialConfig {
    fn default() -> Self {
        Self {
            x_start: default_fv_x_start(),
            y_start: default_fv_y_start(),
            z_start: default_fv_z_start(),
            x_end: default_fv_x_end(),
            y_end: default_fv_y_end(),
            z_end: default_fv_z_end(),
        }
    }
}

/// Decay final state targeted by the charged-kaon matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecayMode {
    /// Kaon to muon plus muon neutrino.
    Muonic,
    /// Kaon to charged pion plus neutral pion.
    Pionic,
}

impl Default for DecayMode {
    fn default() -> Self {
        DecayMode::Muonic
    }
}

/// Options for the charged-kaon matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KaonConfig {
    /// Targeted decay final state.
    #[serde(default)]
    pub decay_mode: DecayMode,
    /// Whether to also emit the electron from a subsequent muon decay.
    #[serde(default)]
    pub grab_electron: bool,
    /// Upper bound on the kaon momentum magnitude at its end point.
    #[serde(default = "default_max_end_momentum")]
    pub max_end_momentum: f64,
}

fn default_max_end_momentum() -> f64 {
    10.0
}

impl Default for KaonConfig {
    fn default() -> Self {
        Self {
            decay_mode: DecayMode::default(),
            grab_electron: false,
            max_end_momentum: default_max_end_momentum(),
        }
    }
}

/// Options for the clarity filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClarityConfig {
    /// Half-width of the channel window required active around a mapped channel.
    #[serde(default = "default_channel_active_region")]
    pub channel_active_region: u32,
    /// Minimum total number of hits attributed to signature particles.
    #[serde(default = "default_signature_hit_threshold")]
    pub signature_hit_threshold: usize,
    /// Minimum fraction of the event's hits attributable to the signature.
    #[serde(default = "default_signature_completeness_threshold")]
    pub signature_completeness_threshold: f64,
}

fn default_channel_active_region() -> u32 {
    2
}

fn default_signature_hit_threshold() -> usize {
    10
}

fn default_signature_completeness_threshold() -> f64 {
    0.05
}

impl Default for ClarityConfig {
    fn default() -> Self {
        Self {
            channel_active_region: default_channel_active_region(),
            signature_hit_threshold: default_signature_hit_threshold(),
            signature_completeness_threshold: default_signature_completeness_threshold(),
        }
    }
}
