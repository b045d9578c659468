//! Restaurant login form

pub mod component;
pub mod flow;
pub mod state;

pub use component::LoginForm;
pub use flow::{LoginFlow, LoginFlowHandle};
pub use state::{Credentials, Field, LoginAction, LoginState, LoginStatus};
