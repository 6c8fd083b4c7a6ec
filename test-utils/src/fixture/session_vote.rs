use serde_json::Value;

pub const DEFAULT_ID: &str = "1700000000000";
pub const DEFAULT_HOST_ID: u64 = 111111111111111111;
pub const DEFAULT_DESCRIPTION: &str = "Vote below to start a session.";

/// Creates a session vote value with default values.
///
/// # Returns
/// - `Value` - Open vote with no voters and no message
pub fn json() -> Value {
    builder().build()
}

/// Creates a session vote builder for customization.
///
/// # Returns
/// - `SessionVoteBuilder` - Builder with default values
pub fn builder() -> SessionVoteBuilder {
    SessionVoteBuilder::default()
}

/// Builder for session vote values with customizable fields.
pub struct SessionVoteBuilder {
    id: String,
    host_id: u64,
    started: bool,
    voters: Vec<u64>,
    description: String,
    message_id: Option<u64>,
}

impl Default for SessionVoteBuilder {
    fn default() -> Self {
        Self {
            id: DEFAULT_ID.to_string(),
            host_id: DEFAULT_HOST_ID,
            started: false,
            voters: Vec::new(),
            description: DEFAULT_DESCRIPTION.to_string(),
            message_id: None,
        }
    }
}

impl SessionVoteBuilder {
    /// Sets the vote id carried by the button.
    ///
    /// # Arguments
    /// - `id` - Opaque vote id
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn host_id(mut self, host_id: u64) -> Self {
        self.host_id = host_id;
        self
    }

    /// Marks the vote as already converted into a session.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn started(mut self) -> Self {
        self.started = true;
        self
    }

    /// Sets the voters in voting order.
    ///
    /// # Arguments
    /// - `voters` - Discord user ids
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn voters(mut self, voters: &[u64]) -> Self {
        self.voters = voters.to_vec();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn message_id(mut self, message_id: u64) -> Self {
        self.message_id = Some(message_id);
        self
    }

    /// Builds the value with ids written as decimal strings.
    ///
    /// # Returns
    /// - `Value` - Session vote in the persisted layout
    pub fn build(self) -> Value {
        let mut value = serde_json::json!({
            "id": self.id,
            "hostId": self.host_id.to_string(),
            "started": self.started,
            "voters": self.voters.iter().map(u64::to_string).collect::<Vec<_>>(),
            "description": self.description,
        });

        if let (Some(message_id), Some(object)) = (self.message_id, value.as_object_mut()) {
            object.insert("messageId".to_string(), Value::String(message_id.to_string()));
        }

        value
    }
}
