//! CLI command implementations.

pub(crate) mod activities;
pub(crate) mod compare;
pub(crate) mod convert;
pub(crate) mod destinations;
pub(crate) mod estimate;
pub(crate) mod history;
pub(crate) mod info;
pub(crate) mod settings;
pub(crate) mod trips;
