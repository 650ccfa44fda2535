//! Registros auxiliares en archivos planos: calificaciones, suscripciones y feedback.

pub mod feedback;
pub mod ratings;
pub mod subscriptions;

pub use feedback::store_feedback;
pub use ratings::{RatingBook, RatingTally};
pub use subscriptions::subscribe_email;
