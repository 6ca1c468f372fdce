// Copyright @yucwang 2021

pub mod band;
pub mod renderer;
