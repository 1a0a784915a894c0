//! Compatibility rules
//!
//! Pure checks over pairs of parts and over complete builds. No I/O.

use std::fmt;

use crate::core::error::BuildError;
use crate::core::models::{Computer, Part, PartSpec};

/// Outcome of a pairwise compatibility check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairCheck {
    /// The parts can be used together
    Compatible,
    /// A motherboard and CPU with different sockets
    SocketMismatch {
        /// Motherboard socket
        motherboard: String,
        /// CPU socket
        cpu: String,
    },
    /// Two different RAM modules
    MixedRam {
        /// First RAM id
        first: String,
        /// Second RAM id
        second: String,
    },
}

impl PairCheck {
    /// Whether the parts are compatible
    #[must_use]
    pub const fn is_compatible(&self) -> bool {
        matches!(self, Self::Compatible)
    }
}

impl fmt::Display for PairCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compatible => write!(f, "Parts are compatible."),
            Self::SocketMismatch { motherboard, cpu } => write!(
                f,
                "Motherboard and CPU must have the same socket type ({motherboard} vs {cpu})."
            ),
            Self::MixedRam { first, second } => {
                write!(f, "All instances of RAM must be the same id ({first} vs {second}).")
            },
        }
    }
}

/// Check two parts against the pairwise rules
///
/// Rules:
/// 1. A motherboard and a CPU (either order) must share a socket
/// 2. Two RAM modules must be the same part id
///
/// Every other pairing is compatible.
#[must_use]
pub fn check_pair(a: &Part, b: &Part) -> PairCheck {
    match (&a.spec, &b.spec) {
        (PartSpec::Motherboard { socket: mb, .. }, PartSpec::Cpu { socket: cpu, .. })
        | (PartSpec::Cpu { socket: cpu, .. }, PartSpec::Motherboard { socket: mb, .. })
            if mb != cpu =>
        {
            PairCheck::SocketMismatch {
                motherboard: mb.clone(),
                cpu: cpu.clone(),
            }
        },
        (PartSpec::Ram { .. }, PartSpec::Ram { .. }) if a.id != b.id => PairCheck::MixedRam {
            first: a.id.clone(),
            second: b.id.clone(),
        },
        _ => PairCheck::Compatible,
    }
}

/// Whether two parts are compatible
///
/// The explanation of the verdict goes to the log; use [`check_pair`] to get it
/// as a value.
#[must_use]
pub fn compatible(a: &Part, b: &Part) -> bool {
    let verdict = check_pair(a, b);
    log::info!("{} / {}: {}", a.id, b.id, verdict);
    verdict.is_compatible()
}

/// Validate a complete build
///
/// Checks run in order and stop at the first failure:
/// 1. Every RAM module has the same id
/// 2. RAM count is at least one and fits the motherboard's slots
/// 3. Motherboard and CPU sockets match
/// 4. Total power draw does not exceed what the PSU supplies
pub fn validate_build(computer: &Computer<'_>) -> Result<(), BuildError> {
    let parts = computer.components();

    let mut ram_ids: Vec<String> = Vec::new();
    for ram in &parts.rams {
        if !ram_ids.contains(&ram.id) {
            ram_ids.push(ram.id.clone());
        }
    }
    if ram_ids.len() > 1 {
        return Err(BuildError::MixedRam { ids: ram_ids });
    }

    let slots = parts.motherboard.ram_slots().unwrap_or(0);
    let count = parts.rams.len();
    if count == 0 || u32::try_from(count).map_or(true, |c| c > slots) {
        return Err(BuildError::RamCount { count, slots });
    }

    let motherboard_socket = parts.motherboard.socket().unwrap_or_default();
    let cpu_socket = parts.cpu.socket().unwrap_or_default();
    if motherboard_socket != cpu_socket {
        return Err(BuildError::SocketMismatch {
            motherboard: parts.motherboard.id.clone(),
            motherboard_socket: motherboard_socket.to_string(),
            cpu: parts.cpu.id.clone(),
            cpu_socket: cpu_socket.to_string(),
        });
    }

    let supplied = parts.psu.power_supplied().unwrap_or(0);
    let draw = computer.total_power_draw();
    if draw > u64::from(supplied) {
        return Err(BuildError::InsufficientPower { draw, supplied });
    }

    log::info!("the parts in the build configuration of {} are compatible", computer.id());
    Ok(())
}
