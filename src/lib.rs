//
// Copyright (c) 2026 Nathan Fiedler
//
extern crate thiserror;

pub mod data;
pub mod domain;
pub mod preso;
