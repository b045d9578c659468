//! Login form state and its reducer

use crate::config::LoginConfig;
use bistro_http::types::RestaurantLoginRequest;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use yew::prelude::*;

/// An input of the login form, keyed by its HTML `name`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Password,
}

impl Field {
    /// Value of the input's `name` attribute
    pub const fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            other => Err(format!("unknown login field: {other}")),
        }
    }
}

/// Values typed into the form
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }

    /// First empty required field, if any
    pub fn missing_field(&self) -> Option<Field> {
        [Field::Email, Field::Password]
            .into_iter()
            .find(|field| self.get(*field).is_empty())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl From<Credentials> for RestaurantLoginRequest {
    fn from(credentials: Credentials) -> Self {
        Self {
            email: credentials.email,
            password: credentials.password,
        }
    }
}

/// Where the form is in a login attempt
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoginStatus {
    #[default]
    Idle,
    Submitting,
    Success(String),
    Error(String),
}

impl LoginStatus {
    /// Text of the visible notification, if any
    pub fn notification(&self) -> Option<&str> {
        match self {
            Self::Success(message) | Self::Error(message) => Some(message),
            Self::Idle | Self::Submitting => None,
        }
    }
}

/// Login form state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginState {
    pub credentials: Credentials,
    pub status: LoginStatus,
}

/// Login form actions
pub enum LoginAction {
    Input(Field, String),
    Submit,
    Succeeded,
    Failed(String),
    Dismiss,
}

impl Reducible for LoginState {
    type Action = LoginAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            LoginAction::Input(field, value) => {
                let mut credentials = self.credentials.clone();
                credentials.set(field, value);
                Rc::new(Self {
                    credentials,
                    status: self.status.clone(),
                })
            }
            // Credentials are kept so a failed attempt can be corrected and resent
            LoginAction::Submit => Rc::new(Self {
                status: LoginStatus::Submitting,
                ..(*self).clone()
            }),
            LoginAction::Succeeded => Rc::new(Self {
                status: LoginStatus::Success(LoginConfig::SUCCESS_MESSAGE.to_string()),
                ..(*self).clone()
            }),
            LoginAction::Failed(message) => Rc::new(Self {
                status: LoginStatus::Error(message),
                ..(*self).clone()
            }),
            LoginAction::Dismiss => {
                if self.status.notification().is_none() {
                    return self;
                }
                Rc::new(Self {
                    status: LoginStatus::Idle,
                    ..(*self).clone()
                })
            }
        }
    }
}
