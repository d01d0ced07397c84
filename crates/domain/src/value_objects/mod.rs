//! Value Objects - Immutable, identity-less domain primitives

mod city;
mod humidity;

pub use city::City;
pub use humidity::Humidity;
