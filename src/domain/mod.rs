//! Domain logic and core data structures
//!
//! This module contains pure teaching logic that is independent
//! of Win32 APIs: area formulas and the ontology subclass query.

pub mod area;
pub mod ontology;
pub mod report;
