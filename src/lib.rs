pub mod brasil_api;
pub mod cep;
pub mod config;
pub mod controller;
pub mod error;
pub mod render;

pub use brasil_api::{AddressLookup, BrasilApiClient};
pub use brasil_api::model::Address;
pub use cep::InputCode;
pub use config::Config;
pub use controller::{LookupController, LookupState, Phase};
pub use error::{FailureCause, LookupError};
pub use render::{Render, TerminalRenderer};
