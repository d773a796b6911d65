//! Foreign-language bindings. A host app holds one [`WorkoutTracker`] and
//! calls into it from its UI handlers.

pub mod errors;
pub mod logging;
pub mod objects;
pub mod session;

pub use errors::SetlogError;
pub use session::WorkoutTracker;
