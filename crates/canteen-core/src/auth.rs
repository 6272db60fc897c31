//! Login for the two canteen roles.
//!
//! Credentials come from a [`CredentialSource`], so the console can load
//! them from configuration and tests can inject their own.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Who is using the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Employee,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Employee => write!(f, "employee"),
        }
    }
}

/// What the user typed at the login prompt.
#[derive(Debug, Clone)]
pub enum Credential {
    Admin {
        username: String,
        password: String,
    },
    Employee {
        employee_id: i64,
        name: String,
        password: String,
    },
}

/// A successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub role: Role,
    pub display_name: String,
    /// Set for employee sessions; orders are recorded under this ID.
    pub employee_id: Option<i64>,
}

/// Supplies the secrets a login is checked against.
pub trait CredentialSource {
    /// Returns true if `username`/`password` is a valid admin login.
    fn check_admin(&self, username: &str, password: &str) -> bool;

    /// Returns true if `password` is valid for the given employee.
    fn check_employee(&self, employee_id: i64, name: &str, password: &str) -> bool;
}

/// Fixed credentials, typically read from the `[auth]` config section.
///
/// Every employee shares one password, as the canteen has always done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticCredentials {
    #[serde(default = "default_admin_username")]
    pub admin_username: String,

    #[serde(default = "default_admin_password")]
    pub admin_password: String,

    #[serde(default = "default_employee_password")]
    pub employee_password: String,
}

fn default_admin_username() -> String {
    "admin".to_string()
}

fn default_admin_password() -> String {
    "admin123".to_string()
}

fn default_employee_password() -> String {
    "emp123".to_string()
}

impl Default for StaticCredentials {
    fn default() -> Self {
        StaticCredentials {
            admin_username: default_admin_username(),
            admin_password: default_admin_password(),
            employee_password: default_employee_password(),
        }
    }
}

impl CredentialSource for StaticCredentials {
    fn check_admin(&self, username: &str, password: &str) -> bool {
        username == self.admin_username && password == self.admin_password
    }

    fn check_employee(&self, _employee_id: i64, _name: &str, password: &str) -> bool {
        password == self.employee_password
    }
}

/// Turns credentials into a role-tagged [`Session`].
pub struct Authenticator<S> {
    source: S,
}

impl<S: CredentialSource> Authenticator<S> {
    pub fn new(source: S) -> Self {
        Authenticator { source }
    }

    pub fn login(&self, credential: &Credential) -> CoreResult<Session> {
        match credential {
            Credential::Admin { username, password } => {
                if !self.source.check_admin(username, password) {
                    return Err(CoreError::AuthFailed(format!("admin '{}'", username)));
                }
                Ok(Session {
                    role: Role::Admin,
                    display_name: username.clone(),
                    employee_id: None,
                })
            }
            Credential::Employee {
                employee_id,
                name,
                password,
            } => {
                if !self.source.check_employee(*employee_id, name, password) {
                    return Err(CoreError::AuthFailed(format!("employee {}", employee_id)));
                }
                Ok(Session {
                    role: Role::Employee,
                    display_name: name.clone(),
                    employee_id: Some(*employee_id),
                })
            }
        }
    }
}
