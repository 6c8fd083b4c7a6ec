use std::{num::NonZeroU64, path::PathBuf};
use url::Url;

use crate::server::{
    error::{config::ConfigError, AppError},
    model::permission::Capability,
    util::parse::parse_u64_list,
};

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_PORT: u16 = 10000;
const DEFAULT_UPSTREAM_API_URL: &str = "https://api.policeroleplay.community";

/// Guild channels the bot posts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Session,
    SessionShutdown,
    Suggestion,
    FiftyFifty,
    Loa,
    Infraction,
    Promotion,
    Punishment,
    Feedback,
    Welcome,
}

impl Channel {
    pub const ALL: [Channel; 10] = [
        Channel::Session,
        Channel::SessionShutdown,
        Channel::Suggestion,
        Channel::FiftyFifty,
        Channel::Loa,
        Channel::Infraction,
        Channel::Promotion,
        Channel::Punishment,
        Channel::Feedback,
        Channel::Welcome,
    ];

    /// Name of the environment variable holding the channel id.
    pub fn env_var(&self) -> &'static str {
        match self {
            Self::Session => "SESSION_CHANNEL_ID",
            Self::SessionShutdown => "SESSION_SHUTDOWN_ID",
            Self::Suggestion => "SUGGESTION_CHANNEL_ID",
            Self::FiftyFifty => "FIFTY_FIFTY_CHANNEL_ID",
            Self::Loa => "LOA_CHANNEL_ID",
            Self::Infraction => "INFRACTION_CHANNEL_ID",
            Self::Promotion => "PROMOTION_CHANNEL_ID",
            Self::Punishment => "PUNISHMENT_CHANNEL_ID",
            Self::Feedback => "FEEDBACK_CHANNEL_ID",
            Self::Welcome => "WELCOME_CHANNEL_ID",
        }
    }
}

const CAPABILITIES: [Capability; 4] = [
    Capability::SessionHost,
    Capability::Staff,
    Capability::Management,
    Capability::Echo,
];

/// Settings of the HTTP status API and its upstream.
#[derive(Debug, Clone)]
pub struct StatusApiConfig {
    /// Static credential expected in the `Authorization` header; `None` disables the API.
    pub api_key: Option<String>,
    pub port: u16,
    /// Where the `!sessions` command fetches the status from.
    pub api_base_url: Url,
    pub upstream_url: Url,
    pub upstream_server_token: Option<String>,
    pub upstream_global_token: Option<String>,
}

pub struct Config {
    pub discord_token: String,
    /// Guild to register slash commands in; global registration when unset.
    pub discord_guild_id: Option<u64>,

    pub data_dir: PathBuf,

    roles: Vec<(Capability, u64)>,
    channels: Vec<(Channel, u64)>,
    /// Roles mentioned on session vote and session start announcements.
    pub session_ping_role_ids: Vec<u64>,

    pub image_first: Option<String>,
    pub image_second: Option<String>,

    pub status_api: StatusApiConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and well-formed
    /// - `Err(ConfigError::MissingEnvVar)` - `DISCORD_TOKEN` is unset
    /// - `Err(ConfigError::InvalidEnvVar)` - An id or port is not numeric
    /// - `Err(ConfigError::InvalidUrl)` - A URL variable cannot be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let discord_token = get("DISCORD_TOKEN")
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?;

        // Discord ids are never zero and serenity's id constructors panic on it.
        let id = |name: &str| -> Result<Option<u64>, ConfigError> {
            match get(name) {
                Some(value) => value
                    .trim()
                    .parse::<NonZeroU64>()
                    .map(|id| Some(id.get()))
                    .map_err(|_| ConfigError::InvalidEnvVar {
                        name: name.to_string(),
                        value,
                    }),
                None => Ok(None),
            }
        };

        let url = |name: &str, default: String| -> Result<Url, ConfigError> {
            let value = get(name).unwrap_or(default);
            Url::parse(&value).map_err(|source| ConfigError::InvalidUrl {
                name: name.to_string(),
                source,
            })
        };

        let mut roles = Vec::new();
        for capability in CAPABILITIES {
            if let Some(role_id) = id(capability.env_var())? {
                roles.push((capability, role_id));
            }
        }

        let mut channels = Vec::new();
        for channel in Channel::ALL {
            if let Some(channel_id) = id(channel.env_var())? {
                channels.push((channel, channel_id));
            }
        }

        let session_ping_role_ids = match get("SESSION_PING_ROLE_IDS") {
            Some(value) => match parse_u64_list(&value) {
                Ok(ids) if !ids.contains(&0) => ids,
                _ => {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "SESSION_PING_ROLE_IDS".to_string(),
                        value,
                    }
                    .into())
                }
            },
            None => Vec::new(),
        };

        let port = match get("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        let status_api = StatusApiConfig {
            api_key: get("API_KEY"),
            port,
            api_base_url: url("API_BASE_URL", format!("http://127.0.0.1:{port}"))?,
            upstream_url: url("ERLC_API_URL", DEFAULT_UPSTREAM_API_URL.to_string())?,
            upstream_server_token: get("ERLC_SERVER_TOKEN"),
            upstream_global_token: get("ERLC_GLOBAL_TOKEN"),
        };

        Ok(Self {
            discord_token,
            discord_guild_id: id("DISCORD_GUILD_ID")?,
            data_dir: PathBuf::from(get("DATA_DIR").unwrap_or_else(|| DEFAULT_DATA_DIR.to_string())),
            roles,
            channels,
            session_ping_role_ids,
            image_first: get("IMAGE_FIRST"),
            image_second: get("IMAGE_SECOND"),
            status_api,
        })
    }

    /// Role backing `capability`, if configured.
    pub fn role(&self, capability: Capability) -> Option<u64> {
        self.roles
            .iter()
            .find(|(configured, _)| *configured == capability)
            .map(|(_, role_id)| *role_id)
    }

    /// Channel id for `channel`, if configured.
    pub fn channel(&self, channel: Channel) -> Option<u64> {
        self.channels
            .iter()
            .find(|(configured, _)| *configured == channel)
            .map(|(_, channel_id)| *channel_id)
    }

    /// Channel id for `channel`, reporting an unset channel as a configuration error.
    pub fn require_channel(&self, channel: Channel) -> Result<u64, AppError> {
        self.channel(channel)
            .ok_or_else(|| ConfigError::ChannelNotConfigured(channel.env_var()).into())
    }
}
