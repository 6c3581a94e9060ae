//! Data models for the portfolio collector

pub mod blog;
pub mod contact;
pub mod visit;

// Re-export commonly used types
pub use blog::BlogPost;
pub use contact::{ContactMessage, ContactRequest, MessageResponse, NewContactMessage};
pub use visit::{NewVisit, VisitRecord, VisitRequest};
