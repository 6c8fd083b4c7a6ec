use serenity::all::Member;

use crate::server::{
    config::Config,
    error::{auth::AuthError, config::ConfigError, AppError},
    model::permission::Capability,
};

/// Anything whose roles can be checked against a capability.
///
/// Implemented for guild members; handlers that only hold role ids can use the slice
/// implementation.
pub trait CapabilityCheck {
    /// Discord ID of the actor, used in rejection logs.
    fn actor_id(&self) -> u64;

    /// Whether the actor holds `role_id`.
    fn holds_role(&self, role_id: u64) -> bool;
}

impl CapabilityCheck for Member {
    fn actor_id(&self) -> u64 {
        self.user.id.get()
    }

    fn holds_role(&self, role_id: u64) -> bool {
        self.roles.iter().any(|role| role.get() == role_id)
    }
}

impl CapabilityCheck for (u64, &[u64]) {
    fn actor_id(&self) -> u64 {
        self.0
    }

    fn holds_role(&self, role_id: u64) -> bool {
        self.1.contains(&role_id)
    }
}

pub struct CapabilityGuard<'a> {
    config: &'a Config,
}

impl<'a> CapabilityGuard<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Checks that `actor` holds every capability in `capabilities`.
    ///
    /// No state is touched before this check passes. An unset role is reported as a
    /// configuration problem rather than a permission problem, since nobody could pass.
    ///
    /// # Arguments
    /// - `actor` - Member (or role list) performing the action; `None` outside a guild
    /// - `capabilities` - Capabilities the action requires
    ///
    /// # Returns
    /// - `Ok(())` - All capabilities held
    /// - `Err(ConfigError::RoleNotConfigured)` - A required role id is not configured
    /// - `Err(AuthError::MissingCapability)` - The actor lacks a required role
    pub fn require<C>(&self, actor: Option<&C>, capabilities: &[Capability]) -> Result<(), AppError>
    where
        C: CapabilityCheck + ?Sized,
    {
        for capability in capabilities {
            let Some(role_id) = self.config.role(*capability) else {
                return Err(ConfigError::RoleNotConfigured(*capability).into());
            };

            let Some(actor) = actor else {
                return Err(AuthError::MissingCapability(0, *capability).into());
            };

            if !actor.holds_role(role_id) {
                return Err(AuthError::MissingCapability(actor.actor_id(), *capability).into());
            }
        }

        Ok(())
    }
}
