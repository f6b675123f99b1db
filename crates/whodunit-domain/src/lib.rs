//! Whodunit Domain Layer
//!
//! This crate contains the domain model for Whodunit, the murder mystery
//! character guide toolkit. It depends on nothing but `uuid` and defines the
//! value objects and trait interfaces that the other layers build on.
//!
//! ## Key Concepts
//!
//! - **Character record**: the structured result of parsing one character's
//!   raw guide text (name, prose sections, relationships, secrets,
//!   questioning options)
//! - **Package**: one generated mystery; every stored character belongs to
//!   exactly one package
//! - **Character**: a character record that has been persisted under a package
//!
//! ## Architecture
//!
//! - No infrastructure code here
//! - Extraction lives in `whodunit-extractor`
//! - Persistence lives in `whodunit-store`
//! - Trait definitions for all boundaries

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod character;
pub mod ids;
pub mod traits;

// Re-exports for convenience
pub use character::{Character, CharacterRecord, QuestioningOption, Relationship};
pub use ids::{CharacterId, PackageId};
