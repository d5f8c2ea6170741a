//! Feature-Handler für LineCommand-Verarbeitung.
//!
//! Einzige Stelle, an der der Host verändert wird.

pub mod line;
