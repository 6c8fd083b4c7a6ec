//! Slash command surface registered with Discord.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

use crate::server::model::permission::Capability;

/// Every slash command the bot answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashCommand {
    SessionVote,
    SessionStart,
    SessionShutdown,
    Suggestion,
    FiftyFiftyRequest,
    LoaRequest,
    Infraction,
    Promotion,
    Punishment,
    Feedback,
    PartnershipsRequirements,
}

impl SlashCommand {
    pub const ALL: [SlashCommand; 11] = [
        SlashCommand::SessionVote,
        SlashCommand::SessionStart,
        SlashCommand::SessionShutdown,
        SlashCommand::Suggestion,
        SlashCommand::FiftyFiftyRequest,
        SlashCommand::LoaRequest,
        SlashCommand::Infraction,
        SlashCommand::Promotion,
        SlashCommand::Punishment,
        SlashCommand::Feedback,
        SlashCommand::PartnershipsRequirements,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::SessionVote => "session_vote",
            Self::SessionStart => "session_start",
            Self::SessionShutdown => "session_shutdown",
            Self::Suggestion => "suggestion",
            Self::FiftyFiftyRequest => "50_50_request",
            Self::LoaRequest => "loa_request",
            Self::Infraction => "infraction",
            Self::Promotion => "promotion",
            Self::Punishment => "punishment",
            Self::Feedback => "feedback",
            Self::PartnershipsRequirements => "partnerships_requirements",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    /// Capability an actor must hold to run the command; `None` means open to all.
    pub fn capability(&self) -> Option<Capability> {
        match self {
            Self::SessionVote | Self::SessionStart | Self::SessionShutdown => {
                Some(Capability::SessionHost)
            }
            Self::FiftyFiftyRequest | Self::LoaRequest => Some(Capability::Staff),
            Self::Infraction | Self::Promotion | Self::Punishment => Some(Capability::Management),
            Self::Suggestion | Self::Feedback | Self::PartnershipsRequirements => None,
        }
    }

    /// Builds the registration payload of the command.
    pub fn definition(&self) -> CreateCommand {
        let command = CreateCommand::new(self.name());

        match self {
            Self::SessionVote => command.description("Start a session vote"),
            Self::SessionStart => command.description("Start the session and ping voters"),
            Self::SessionShutdown => command.description("Announce the session shutdown"),
            Self::Suggestion => command
                .description("Submit a suggestion")
                .add_option(string("suggestion", "Your suggestion", true)),
            Self::FiftyFiftyRequest => command
                .description("Request a 50/50")
                .add_option(string("reason", "Reason for the request", true)),
            Self::LoaRequest => command
                .description("Request a leave of absence")
                .add_option(string("starts_at", "First day of the leave", true))
                .add_option(string("ends_at", "Last day of the leave", true))
                .add_option(string("reason", "Reason for the leave", true)),
            Self::Infraction => command
                .description("Issue an infraction to a staff member")
                .add_option(user("target", "Staff member receiving the infraction"))
                .add_option(string("reason", "Reason for the infraction", true))
                .add_option(string("type", "Infraction type, e.g. Warning or Strike", true))
                .add_option(string("revokable", "Whether the infraction can be revoked", false)),
            Self::Promotion => command
                .description("Announce a promotion")
                .add_option(user("user", "Member being promoted"))
                .add_option(
                    CreateCommandOption::new(CommandOptionType::Role, "new_rank", "New rank")
                        .required(true),
                )
                .add_option(string("reason", "Reason for the promotion", true)),
            Self::Punishment => command
                .description("Log an in-game punishment")
                .add_option(user("user", "Member being punished"))
                .add_option(string("roblox_user", "Roblox username", true))
                .add_option(string("reason", "Reason for the punishment", true))
                .add_option(string("proof", "Link to proof", false)),
            Self::Feedback => command
                .description("Leave feedback for a staff member")
                .add_option(user("user", "Staff member"))
                .add_option(string("rating", "Rating, e.g. 5/5", true))
                .add_option(string("feedback", "Your feedback", true)),
            Self::PartnershipsRequirements => {
                command.description("Show the partnership requirements")
            }
        }
    }

    /// Registration payloads of every command.
    pub fn definitions() -> Vec<CreateCommand> {
        Self::ALL.iter().map(SlashCommand::definition).collect()
    }
}

fn string(name: &str, description: &str, required: bool) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, name, description).required(required)
}

fn user(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::User, name, description).required(true)
}
