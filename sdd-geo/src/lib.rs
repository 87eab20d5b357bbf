//! Geographic support for the choropleth map.
//!
//! The map fetches the us-atlas `states-10m.json` topology at render time.
//! That file is pre-projected to a 975x610 viewport, so no map projection
//! is needed here: decoding the quantized arcs yields screen-space
//! coordinates directly. State-level degree data has no public per-state
//! breakdown, so a seeded generator synthesizes it deterministically.

pub mod states;
pub mod synth;
pub mod topology;

pub use states::state_name;
pub use synth::{synthesize, GeoRecord, DEFAULT_SEED};
pub use topology::{decode_states, StateShape, Topology};

/// Width/height of the pre-projected us-atlas viewport.
pub const ATLAS_WIDTH: f64 = 975.0;
pub const ATLAS_HEIGHT: f64 = 610.0;
