// Domain types. No I/O here.

pub mod postcode;

pub use postcode::Postcode;
