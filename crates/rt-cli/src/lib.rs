//! VRF route-target CLI library

pub mod commands;
