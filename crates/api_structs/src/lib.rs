mod invoice;
mod reminder;
mod status;

pub mod dtos {
    pub use crate::invoice::dtos::*;
}

pub use crate::invoice::api::*;
pub use crate::reminder::api::*;
pub use crate::status::api::*;
