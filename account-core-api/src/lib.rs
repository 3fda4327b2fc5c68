pub mod clock;
pub mod domain;
pub mod error;
pub mod id_generator;
pub mod validation;

pub use clock::*;
pub use domain::*;
pub use error::*;
pub use id_generator::*;
