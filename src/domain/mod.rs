// Domain layer: levels, selectors and the ports the launcher talks through.

pub mod model;
pub mod ports;
