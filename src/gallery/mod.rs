//! Gallery data model and images-manifest hydration.

pub(crate) mod manifest;
pub(crate) mod model;
