//! PDG species codes and charge lookup.
//!
//! Only the species the matchers and filters actually reason about are
//! listed; unknown codes are treated as neutral by [`charge`].

/// Electron.
pub const ELECTRON: i32 = 11;
/// Muon.
pub const MUON: i32 = 13;
/// Muon neutrino.
pub const MUON_NEUTRINO: i32 = 14;
/// Neutral pion.
pub const NEUTRAL_PION: i32 = 111;
/// Charged pion.
pub const CHARGED_PION: i32 = 211;
/// Short-lived neutral kaon.
pub const KAON_SHORT: i32 = 310;
/// Neutral kaon.
pub const NEUTRAL_KAON: i32 = 311;
/// Charged kaon.
pub const CHARGED_KAON: i32 = 321;
/// Neutron.
pub const NEUTRON: i32 = 2112;
/// Proton.
pub const PROTON: i32 = 2212;
/// Lambda baryon.
pub const LAMBDA: i32 = 3122;
/// Sigma minus baryon.
pub const SIGMA_MINUS: i32 = 3112;
/// Sigma plus baryon.
pub const SIGMA_PLUS: i32 = 3222;

/// Returns the electric charge in units of e, `None` for unknown codes.
///
/// The sign convention follows the PDG numbering: a negative code names
/// the antiparticle and flips the charge of the positive-code entry.
pub fn charge(pdg_code: i32) -> Option<f64> {
    let base = match pdg_code.abs() {
        ELECTRON | MUON => -1.0,
        CHARGED_PION | CHARGED_KAON | PROTON | SIGMA_PLUS => 1.0,
        SIGMA_MINUS => -1.0,
        MUON_NEUTRINO | NEUTRAL_PION | KAON_SHORT | NEUTRAL_KAON | NEUTRON | LAMBDA => 0.0,
        _ => return None,
    };
    if pdg_code < 0 {
        Some(-base)
    } else {
        Some(base)
    }
}

/// Returns whether the species carries nonzero electric charge.
///
/// Unknown codes are treated as neutral.
pub fn is_charged(pdg_code: i32) -> bool {
    match charge(pdg_code) {
        Some(q) => q != 0.0,
        None => {
            tracing::debug!(pdg_code, "species has no charge entry, treating as neutral");
            false
        }
    }
}
