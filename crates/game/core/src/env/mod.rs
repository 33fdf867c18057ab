//! Collaborators the tactical core reads from but does not own.
//!
//! Rule tables come from a [`SchemeOracle`], randomness from a [`Dice`].
//! Both are injected so a sector can be driven by real content and seeded
//! dice, or by fixtures and scripted rolls in tests.
mod rng;
mod schemes;

pub use rng::{Dice, PcgDice};
pub use schemes::{SchemeCatalog, SchemeKind, SchemeOracle, get_scheme};
