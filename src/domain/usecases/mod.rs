//
// Copyright (c) 2026 Nathan Fiedler
//
use anyhow::Error;
use std::fmt;

pub mod get_catalog;

/// `UseCase` is the interface by which all use cases are invoked.
pub trait UseCase<Type, Params> {
    fn call(&self, params: Params) -> Result<Type, Error>;
}

/// `NoParams` is the type for use cases that do not take arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoParams {}

impl fmt::Display for NoParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoParams()")
    }
}
