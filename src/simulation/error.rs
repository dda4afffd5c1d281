//! Construction errors for bodies and simulation configuration.
//!
//! A running simulation never fails: numerical edge cases are handled by
//! policy inside the stages. Only building a body or a config can be rejected.

use thiserror::Error;

use crate::simulation::locale::Locale;
use crate::simulation::states::BodyId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("mass {mass:e} kg is below the minimum of {min:e} kg")]
    MassBelowMinimum { mass: f64, min: f64 },

    #[error("density must be positive, got {0}")]
    NonPositiveDensity(f64),

    #[error("distance unit must be positive, got {0}")]
    NonPositiveDistanceUnit(f64),

    #[error("display scale must be positive, got {0}")]
    NonPositiveDisplayScale(f64),

    #[error("interaction radius must be positive, got {0}")]
    NonPositiveInteractionRadius(f64),

    #[error("base timestep {step} s exceeds the stability ceiling of {max} s")]
    TimestepTooLarge { step: f64, max: f64 },

    #[error("locale {locale} is already occupied by body {occupant}")]
    LocaleOccupied { locale: Locale, occupant: BodyId },
}
