//! Shared type definitions for the Hora Roman hour clock.
//!
//! This crate holds the data model that flows from the time-partition
//! computer to every renderer. Types defined here flow downstream to
//! `TypeScript` via `ts-rs` for browser-side renderers.
//!
//! # Modules
//!
//! - [`enums`] -- Ring identifiers and label vocabularies
//! - [`structs`] -- Arc segments and the complete time partition

pub mod enums;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{LabelStyle, Ring};
pub use structs::{ArcSegment, TimePartition};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs writes the bindings to `bindings/` relative to the crate
        // root when `export_all` is called.
        use ts_rs::TS;

        let _ = crate::enums::Ring::export_all();
        let _ = crate::enums::LabelStyle::export_all();
        let _ = crate::structs::ArcSegment::export_all();
        let _ = crate::structs::TimePartition::export_all();
    }
}
