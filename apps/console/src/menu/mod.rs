//! # Menus
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Console Flow                                     │
//! │                                                                         │
//! │  Role select ──1──► admin login ──► Admin menu                         │
//! │      │                              add / delete / edit / view staff   │
//! │      │                              add item / view inventory          │
//! │      │                              view order log / logout            │
//! │      │                                                                  │
//! │      ├─────2──► employee login ──► Employee menu                       │
//! │      │                              order items / logout               │
//! │      │                                                                  │
//! │      └─────3──► exit                                                   │
//! │                                                                         │
//! │  Any error inside an action is printed; the current menu continues.   │
//! │  End of input leaves every menu and ends the run.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod admin;
mod employee;
pub mod format;
pub mod prompt;

use std::io::{BufRead, Write};

use canteen_core::{names_match, Authenticator, CoreError, Credential, Session, StaticCredentials};
use canteen_store::Store;
use tracing::{info, warn};

use crate::config::AuthSettings;
use crate::error::{AppError, AppResult};
use prompt::Terminal;

/// The interactive console over one store.
pub struct Console<R, W> {
    term: Terminal<R, W>,
    store: Store,
    auth: Authenticator<StaticCredentials>,
    require_registered_employee: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, store: Store, auth: &AuthSettings) -> Self {
        Console {
            term: Terminal::new(input, output),
            store,
            auth: Authenticator::new(auth.credentials.clone()),
            require_registered_employee: auth.require_registered_employee,
        }
    }

    /// Runs the role-select loop until the user exits or input ends.
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            self.term.say("")?;
            self.term.say("===== Canteen =====")?;
            self.term.say("1. Admin")?;
            self.term.say("2. Employee")?;
            self.term.say("3. Exit")?;

            let choice = match self.term.read_text("Select role: ") {
                Ok(choice) => choice,
                Err(e) if e.is_input_closed() => return Ok(()),
                Err(e) => return Err(e),
            };

            let result = match choice.as_str() {
                "1" => self.admin_login().and_then(|session| self.admin_menu(&session)),
                "2" => self
                    .employee_login()
                    .and_then(|session| self.employee_menu(&session)),
                "3" => {
                    self.term.say("Goodbye.")?;
                    return Ok(());
                }
                other => {
                    self.term.say(format!("Invalid choice '{}'", other))?;
                    Ok(())
                }
            };

            match result {
                Ok(()) => {}
                Err(e) if e.is_input_closed() => return Ok(()),
                Err(e) => self.report(&e)?,
            }
        }
    }

    /// Prints an error for the operator; the caller's loop goes on.
    fn report(&mut self, err: &AppError) -> AppResult<()> {
        warn!(code = %err.code, message = %err.message, "Action failed");
        self.term.say(format!("Error: {}", err.message))
    }

    /// Runs one menu action, printing any error other than end of input.
    fn attempt(&mut self, action: impl FnOnce(&mut Self) -> AppResult<()>) -> AppResult<()> {
        match action(self) {
            Ok(()) => Ok(()),
            Err(e) if e.is_input_closed() => Err(e),
            Err(e) => self.report(&e),
        }
    }

    fn admin_login(&mut self) -> AppResult<Session> {
        let username = self.term.read_text("Username: ")?;
        let password = self.term.read_line("Password: ")?;

        let session = self.auth.login(&Credential::Admin { username, password })?;
        info!(user = %session.display_name, "Admin logged in");
        Ok(session)
    }

    fn employee_login(&mut self) -> AppResult<Session> {
        let employee_id: i64 = self.term.read_number("Employee ID: ")?;
        let name = self.term.read_text("Name: ")?;
        let password = self.term.read_line("Password: ")?;

        if self.require_registered_employee {
            let registered = self.store.employees().find_by_id(employee_id)?;
            if !registered.is_some_and(|e| names_match(&e.name, &name)) {
                return Err(CoreError::AuthFailed(format!("employee {}", employee_id)).into());
            }
        }

        let session = self.auth.login(&Credential::Employee {
            employee_id,
            name,
            password,
        })?;
        info!(employee_id, "Employee logged in");
        Ok(session)
    }

    pub fn into_output(self) -> W {
        self.term.into_output()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canteen_core::{EmployeeRecord, InventoryItem, Money};
    use canteen_store::StoreConfig;
    use std::io::Cursor;

    pub(super) fn run_script(store: &Store, settings: &AuthSettings, script: &str) -> String {
        let mut console = Console::new(
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            store.clone(),
            settings,
        );
        console.run().unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    pub(super) fn memory_store() -> Store {
        Store::open(StoreConfig::in_memory()).unwrap()
    }

    #[test]
    fn test_exit_and_end_of_input() {
        let store = memory_store();
        let out = run_script(&store, &AuthSettings::default(), "3\n");
        assert!(out.contains("Goodbye."));

        let out = run_script(&store, &AuthSettings::default(), "");
        assert!(out.contains("Select role: "));
    }

    #[test]
    fn test_undecodable_input_keeps_menu_running() {
        let store = memory_store();
        let mut console = Console::new(
            Cursor::new(b"\xff\xfe\n3\n".to_vec()),
            Vec::new(),
            store,
            &AuthSettings::default(),
        );
        console.run().unwrap();

        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains("Invalid choice '\u{fffd}\u{fffd}'"));
        assert!(out.contains("Goodbye."));
    }

    #[test]
    fn test_wrong_password_returns_to_role_menu() {
        let store = memory_store();
        let out = run_script(&store, &AuthSettings::default(), "1\nadmin\nwrong\n3\n");
        assert!(out.contains("Error: Invalid credentials for admin 'admin'"));
        assert!(out.contains("Goodbye."));
    }

    #[test]
    fn test_registered_employee_required() {
        let store = memory_store();
        store
            .employees()
            .add(EmployeeRecord::new("Ann", 30, 7, Money::zero()))
            .unwrap();
        store
            .inventory()
            .add_item(InventoryItem::new("Rice", 10, Money::from_cents(250)))
            .unwrap();

        let settings = AuthSettings {
            require_registered_employee: true,
            ..AuthSettings::default()
        };

        let out = run_script(&store, &settings, "2\n8\nAnn\nemp123\n3\n");
        assert!(out.contains("Error: Invalid credentials for employee 8"));

        let out = run_script(&store, &settings, "2\n7\nann\nemp123\n2\n3\n");
        assert!(out.contains("Welcome, ann"));
    }
}
