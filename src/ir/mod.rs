//! Intermediate representation for table-to-TypeScript generation.
//!
//! - `types`: TypeScript IR (TsType, TsProp, TsInterface)
//! - `emit`: IR to code strings via the `Emit` trait

pub mod emit;
pub mod types;

pub use emit::Emit;
pub use types::{TsInterface, TsPrimitive, TsProp, TsType};
