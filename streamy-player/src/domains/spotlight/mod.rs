//! Rotating hero spotlight.

pub mod rotator;

pub use rotator::{
    CycleMark, CycleRecord, RotatorCommand, SpotlightRotator, SpotlightView,
    TransitionPhase,
};
