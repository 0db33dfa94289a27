//
// Copyright (c) 2026 Nathan Fiedler
//
pub mod repositories;
pub mod sources;
