//! Core data types: value objects, entities, snapshots, versioning.

pub mod application;
pub mod module;
pub mod plan;
pub mod predicate;
pub mod requirement;
pub mod tag;
pub mod versioned;

pub use application::Application;
pub use module::{Code, Credits, Module, ModuleName};
pub use plan::{PlannerSlot, Semester, Year};
pub use predicate::ModulePredicate;
pub use requirement::RequirementCategory;
pub use tag::Tag;
pub use versioned::VersionedModel;
