// Type definitions for AcroForm field records

pub mod field;

pub use field::*;
