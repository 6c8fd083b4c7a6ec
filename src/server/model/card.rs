//! Display payload produced by the embed renderer.
//!
//! Every bot message uses the same two-part layout: a banner embed holding only an image,
//! followed by a content embed with title, description, fields and a second image. A
//! [`Card`] describes that layout as plain data so rendering stays deterministic and
//! testable; it is converted into Serenity embeds only when sent.

use serenity::all::{CreateEmbed, CreateEmbedFooter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    pub banner: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub fields: Vec<CardField>,
    pub image: Option<String>,
    pub footer: Option<String>,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn banner(mut self, url: Option<&str>) -> Self {
        self.banner = url.map(str::to_string);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(CardField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn image(mut self, url: Option<&str>) -> Self {
        self.image = url.map(str::to_string);
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Value of the first field named `name`, compared case-insensitively.
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
            .map(|field| field.value.as_str())
    }

    /// Converts the card into the embeds of one message.
    ///
    /// The banner embed is omitted when no banner image is configured, since Discord
    /// rejects empty embeds.
    pub fn into_embeds(self) -> Vec<CreateEmbed> {
        let mut embeds = Vec::with_capacity(2);

        if let Some(banner) = self.banner {
            embeds.push(CreateEmbed::new().image(banner));
        }

        let mut content = CreateEmbed::new();
        if let Some(title) = self.title {
            content = content.title(title);
        }
        if let Some(description) = self.description {
            content = content.description(description);
        }
        content = content.fields(
            self.fields
                .into_iter()
                .map(|field| (field.name, field.value, field.inline)),
        );
        if let Some(image) = self.image {
            content = content.image(image);
        }
        if let Some(footer) = self.footer {
            content = content.footer(CreateEmbedFooter::new(footer));
        }
        embeds.push(content);

        embeds
    }
}
