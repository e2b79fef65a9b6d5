pub mod adder;
pub mod batch;
pub mod canonical;
pub mod expand;
pub mod rules;

pub use crate::domain::model::{Addition, Symbol};
pub use crate::domain::ports::{Canonicalize, ConfigProvider};
pub use crate::utils::error::Result;
