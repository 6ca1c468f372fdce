// Copyright @yucwang 2021

pub mod config;
pub mod integrator;
pub mod progress;
pub mod sampler;
pub mod sensor;
