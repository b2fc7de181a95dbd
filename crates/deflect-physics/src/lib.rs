//! Electron kinematics in the gap of a coaxial cylindrical deflector.
//!
//! The gap is treated as locally planar: the transverse field is E = V/d,
//! not the exact radial field of a cylindrical capacitor.

pub mod kinematics;
pub mod trajectory;
