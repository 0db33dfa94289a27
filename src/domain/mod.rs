//
// Copyright (c) 2026 Nathan Fiedler
//
pub mod entities;
pub mod repositories;
pub mod sources;
pub mod usecases;
