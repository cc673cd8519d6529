//! Perspective domain
//!
//! An [`AgentPerspective`](entities::AgentPerspective) is one analytical
//! viewpoint; a [`PerspectiveRegistry`](registry::PerspectiveRegistry) is the
//! active cohort of perspectives for a run. Cohorts are data, not type
//! hierarchies: swapping the philosophical cohort for the
//! scientific-methodology one changes no code paths.

pub mod entities;
pub mod registry;

pub use entities::AgentPerspective;
pub use registry::PerspectiveRegistry;
