//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data mutated through methods; pages wrap it in `RwSignal`
//! and components read it reactively.

pub mod toasts;
pub mod voyages;
