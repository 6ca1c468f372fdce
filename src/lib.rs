// Copyright @yucwang 2021

#![allow(dead_code)]

pub mod core;
pub mod math;
pub mod io;
pub mod sensors;
pub mod integrators;
pub mod renderers;
