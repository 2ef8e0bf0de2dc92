//! Record types handled by the tool.

mod prescription;
mod user;

pub use prescription::{EyeParams, Prescription};
pub use user::{NewUser, Role};
