use serenity::all::{CommandInteraction, ResolvedValue, Role, User};

use crate::server::error::AppError;

/// Named options of one slash command invocation.
pub struct CommandOptions<'a> {
    values: Vec<(&'a str, ResolvedValue<'a>)>,
}

impl<'a> CommandOptions<'a> {
    pub fn new(command: &'a CommandInteraction) -> Self {
        Self::from_values(
            command
                .data
                .options()
                .into_iter()
                .map(|option| (option.name, option.value))
                .collect(),
        )
    }

    pub fn from_values(values: Vec<(&'a str, ResolvedValue<'a>)>) -> Self {
        Self { values }
    }

    fn value(&self, name: &str) -> Option<&ResolvedValue<'a>> {
        self.values
            .iter()
            .find(|(option, _)| *option == name)
            .map(|(_, value)| value)
    }

    /// String option, with blank values treated as absent.
    pub fn string(&self, name: &str) -> Option<&'a str> {
        match self.value(name)? {
            ResolvedValue::String(value) if !value.trim().is_empty() => Some(*value),
            _ => None,
        }
    }

    pub fn string_or(&self, name: &str, default: &str) -> String {
        self.string(name).unwrap_or(default).to_string()
    }

    /// # Returns
    /// - `Ok(&User)` - The resolved user
    /// - `Err(AppError::BadRequest)` - The option is missing or not a user
    pub fn user(&self, name: &str) -> Result<&'a User, AppError> {
        match self.value(name) {
            Some(ResolvedValue::User(user, _)) => Ok(*user),
            _ => Err(missing(name)),
        }
    }

    /// # Returns
    /// - `Ok(&Role)` - The resolved role
    /// - `Err(AppError::BadRequest)` - The option is missing or not a role
    pub fn role(&self, name: &str) -> Result<&'a Role, AppError> {
        match self.value(name) {
            Some(ResolvedValue::Role(role)) => Ok(*role),
            _ => Err(missing(name)),
        }
    }
}

fn missing(name: &str) -> AppError {
    AppError::BadRequest(format!("Missing required option `{name}`."))
}
