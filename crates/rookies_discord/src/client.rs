//! Discord REST client.

use crate::MemberDirectory;
use crate::messages::briefing_event_name;
use chrono::{DateTime, TimeZone};
use rookies_config::{BotConfig, Round};
use rookies_error::{DiscordError, DiscordErrorKind};
use serenity::builder::{CreateMessage, CreateScheduledEvent};
use serenity::http::Http;
use serenity::model::channel::{ChannelType, Message, MessageFlags};
use serenity::model::guild::{Role, ScheduledEventType};
use serenity::model::id::{ChannelId, GuildId, UserId};
use serenity::model::timestamp::Timestamp;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Longest message Discord accepts, in characters.
pub const DISCORD_MESSAGE_LIMIT: usize = 2000;

/// Page size when listing guild members.
const MEMBER_PAGE_SIZE: u64 = 1000;

fn serenity_error(action: &'static str) -> impl FnOnce(serenity::Error) -> DiscordError {
    move |e| {
        error!(error = %e, action, "Discord API call failed");
        DiscordError::new(DiscordErrorKind::SerenityError(format!("{}: {}", action, e)))
    }
}

/// Discord client for the league's announcement channel.
///
/// Guild, bot user and member list are fetched lazily and cached for the
/// lifetime of the client.
pub struct DiscordClient {
    http: Arc<Http>,
    channel_id: ChannelId,
    briefing_channel_id: ChannelId,
    league_name: String,
    guild: Option<GuildId>,
    bot_user: Option<UserId>,
    directory: Option<MemberDirectory>,
}

impl DiscordClient {
    /// Create a client from the bot settings.
    #[instrument(skip(config), fields(channel_id = config.discord_channel_id))]
    pub fn new(config: &BotConfig) -> Self {
        info!("Creating Discord REST client");
        Self {
            http: Arc::new(Http::new(&config.discord_token)),
            channel_id: ChannelId::new(config.discord_channel_id),
            briefing_channel_id: ChannelId::new(config.discord_briefing_channel_id),
            league_name: config.league_name.clone(),
            guild: None,
            bot_user: None,
            directory: None,
        }
    }

    /// Announcement channel.
    pub fn channel_id(&self) -> ChannelId {
        self.channel_id
    }

    /// Post `content` to the announcement channel with link embeds suppressed.
    #[instrument(skip(self, content), fields(channel_id = %self.channel_id, len = content.chars().count()))]
    pub async fn send_message(&self, content: &str) -> Result<Message, DiscordError> {
        let length = content.chars().count();
        if length > DISCORD_MESSAGE_LIMIT {
            error!(length, "Message exceeds Discord limit");
            return Err(DiscordError::new(DiscordErrorKind::MessageSendFailed(format!(
                "Text exceeds Discord limit of {} characters ({})",
                DISCORD_MESSAGE_LIMIT, length
            ))));
        }

        let builder = CreateMessage::new()
            .content(content)
            .flags(MessageFlags::SUPPRESS_EMBEDS);
        let message = self
            .channel_id
            .send_message(&self.http, builder)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to send message");
                DiscordError::new(DiscordErrorKind::MessageSendFailed(e.to_string()))
            })?;

        info!(message_id = %message.id, "Message sent");
        Ok(message)
    }

    /// Unpin everything the bot pinned in the channel, then pin `message`.
    #[instrument(skip(self, message), fields(message_id = %message.id))]
    pub async fn repin(&mut self, message: &Message) -> Result<(), DiscordError> {
        let bot_user = self.bot_user().await?;
        let pinned = self
            .channel_id
            .pins(&self.http)
            .await
            .map_err(serenity_error("list pinned messages"))?;

        for old in pinned.iter().filter(|m| m.author.id == bot_user) {
            debug!(message_id = %old.id, "Unpinning previous announcement");
            self.channel_id
                .unpin(&self.http, old.id)
                .await
                .map_err(serenity_error("unpin message"))?;
        }

        self.channel_id
            .pin(&self.http, message.id)
            .await
            .map_err(serenity_error("pin message"))?;
        info!("Announcement pinned");
        Ok(())
    }

    /// Schedule the drivers' briefing for `round` as a stage event.
    #[instrument(skip(self, round, start), fields(round = round.number))]
    pub async fn create_briefing_event<Tz: TimeZone>(
        &mut self,
        round: &Round,
        start: &DateTime<Tz>,
    ) -> Result<(), DiscordError> {
        let guild = self.guild().await?;
        let start = Timestamp::from_unix_timestamp(start.timestamp()).map_err(|e| {
            DiscordError::new(DiscordErrorKind::EventFailed(format!(
                "Invalid start time: {}",
                e
            )))
        })?;

        let name = briefing_event_name(&self.league_name, round);
        let builder = CreateScheduledEvent::new(ScheduledEventType::StageInstance, &name, start)
            .channel_id(self.briefing_channel_id);

        let event = guild
            .create_scheduled_event(&self.http, builder)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to create scheduled event");
                DiscordError::new(DiscordErrorKind::EventFailed(e.to_string()))
            })?;

        info!(event_id = %event.id, name = %name, "Briefing event scheduled");
        Ok(())
    }

    /// Guild the announcement channel belongs to.
    ///
    /// # Errors
    ///
    /// [`DiscordErrorKind::NotGuildChannel`] unless the channel is a guild text channel.
    #[instrument(skip(self))]
    pub async fn guild(&mut self) -> Result<GuildId, DiscordError> {
        if let Some(guild) = self.guild {
            return Ok(guild);
        }

        let channel = self
            .channel_id
            .to_channel(&self.http)
            .await
            .map_err(serenity_error("fetch channel"))?;

        let guild = match channel.guild() {
            Some(channel) if channel.kind == ChannelType::Text => channel.guild_id,
            _ => {
                error!(channel_id = %self.channel_id, "Channel is not a guild text channel");
                return Err(DiscordError::new(DiscordErrorKind::NotGuildChannel(
                    self.channel_id.get(),
                )));
            }
        };

        debug!(guild_id = %guild, "Resolved guild");
        self.guild = Some(guild);
        Ok(guild)
    }

    /// Role named exactly `name`.
    #[instrument(skip(self))]
    pub async fn lookup_role(&mut self, name: &str) -> Result<Role, DiscordError> {
        let guild = self.guild().await?;
        let roles = guild
            .roles(&self.http)
            .await
            .map_err(serenity_error("list roles"))?;

        roles
            .into_values()
            .find(|role| role.name == name)
            .ok_or_else(|| {
                error!(role = name, "Role not found");
                DiscordError::new(DiscordErrorKind::RoleNotFound(name.to_string()))
            })
    }

    /// Every guild member indexed by normalized username.
    #[instrument(skip(self))]
    pub async fn member_directory(&mut self) -> Result<&MemberDirectory, DiscordError> {
        if self.directory.is_none() {
            let guild = self.guild().await?;
            let mut directory = MemberDirectory::default();
            let mut after: Option<UserId> = None;
            loop {
                let members = guild
                    .members(&self.http, Some(MEMBER_PAGE_SIZE), after)
                    .await
                    .map_err(serenity_error("list members"))?;
                let Some(last) = members.last() else {
                    break;
                };
                after = Some(last.user.id);
                for member in &members {
                    directory.insert(&member.user.name, member.user.id);
                }
                debug!(page = members.len(), total = directory.len(), "Fetched member page");
            }
            info!(members = directory.len(), "Member directory ready");
            self.directory = Some(directory);
        }

        Ok(self.directory.get_or_insert_with(MemberDirectory::default))
    }

    /// User ID for a driver's Discord handle.
    pub async fn resolve(&mut self, handle: &str) -> Result<UserId, DiscordError> {
        self.member_directory().await?.resolve(handle)
    }

    async fn bot_user(&mut self) -> Result<UserId, DiscordError> {
        if let Some(id) = self.bot_user {
            return Ok(id);
        }
        let user = self
            .http
            .get_current_user()
            .await
            .map_err(serenity_error("fetch current user"))?;
        self.bot_user = Some(user.id);
        Ok(user.id)
    }
}
