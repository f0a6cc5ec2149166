//! Command orchestration.

use crate::cli::Commands;
use chrono::Utc;
use rookies_config::{Config, PenaltyNumbers, Round, RoundConfig};
use rookies_core::Penalties;
use rookies_discord::messages::{briefing_announcement, penalty_announcement, penalty_sections};
use rookies_discord::{DiscordClient, briefing_time};
use rookies_docs::GoogleClient;
use rookies_error::RookiesResult;
use rookies_simgrid::SimGridClient;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// State shared by every command: loaded configs, resolved penalties and
/// the API clients.
pub struct Session {
    config: Config,
    penalties: Penalties,
    simgrid: SimGridClient,
    discord: DiscordClient,
}

impl Session {
    /// Load both config files, fetch the roster and resolve the penalties.
    #[instrument(skip_all, fields(config = %config_path.display(), round = %round_path.display()))]
    pub async fn open(config_path: &Path, round_path: &Path) -> RookiesResult<Self> {
        let config = Config::load(config_path, round_path)?;

        let simgrid = SimGridClient::new(&config.bot.simgrid_api_token);
        let lookup = simgrid
            .build_driver_lookup(&config.bot.championship_id)
            .await?;
        let penalties = Penalties::build(
            &lookup,
            &config.round.penalties,
            &config.round.carried_over_penalties,
        )?;
        let discord = DiscordClient::new(&config.bot);

        Ok(Self {
            config,
            penalties,
            simgrid,
            discord,
        })
    }

    /// Loaded configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Post the penalties handed out at the previous round and pin the post.
    #[instrument(skip(self), fields(round = self.config.round.next_round.number))]
    pub async fn announce_penalties(&mut self) -> RookiesResult<()> {
        let sections = self.penalty_sections().await?;
        let content = penalty_announcement(
            &self.config.round.previous_round,
            &self.config.round.next_round,
            &sections,
        );

        let message = self.discord.send_message(&content).await?;
        self.discord.repin(&message).await?;
        info!("Penalties announced");
        Ok(())
    }

    /// Prepare race day and seed next week's round file in `out_dir`.
    ///
    /// Returns the path of the written round file, or `None` once the
    /// championship has no further rounds.
    #[instrument(skip(self, out_dir), fields(round = self.config.round.next_round.number))]
    pub async fn race_setup(&mut self, out_dir: &Path) -> RookiesResult<Option<PathBuf>> {
        let round = self.config.round.next_round.clone();
        let google = GoogleClient::new(&self.config.bot.google_access_token);

        let briefing_url = google
            .generate_briefing(&self.config.bot, &round, &self.penalties)
            .await?;

        let start = briefing_time(&self.config.bot.briefing, Utc::now())?;
        let role = self
            .discord
            .lookup_role(&self.config.bot.discord_role_name)
            .await?;
        let sections = self.penalty_sections().await?;
        let content = briefing_announcement(role.id, &start, &briefing_url, &round, &sections);

        let message = self.discord.send_message(&content).await?;
        self.discord.repin(&message).await?;
        self.discord.create_briefing_event(&round, &start).await?;

        let mut next = self
            .simgrid
            .next_round(&self.config.bot.championship_id, &round)
            .await?;
        if next.track.is_empty() {
            info!(round = round.number, "Season complete, no round file to seed");
            return Ok(None);
        }

        next.penalty_tracker_link = google
            .generate_penalty_tracker(&self.config.bot, &next)
            .await?;

        let next_config = next_round_config(&self.config.round, &self.penalties, next);
        let path = out_dir.join(RoundConfig::file_name(&self.config.bot.season, &round));
        next_config.save(&path)?;
        info!(path = %path.display(), "Next round file written");
        Ok(Some(path))
    }

    async fn penalty_sections(&mut self) -> RookiesResult<String> {
        let link = &self.config.round.previous_round.penalty_tracker_link;
        let directory = self.discord.member_directory().await?;
        Ok(penalty_sections(&self.penalties, directory, link)?)
    }
}

/// Round file for the week after `current`: this week's round becomes the
/// previous one, every outstanding penalty carries over, and the stewards
/// start from an empty list.
pub fn next_round_config(current: &RoundConfig, penalties: &Penalties, next: Round) -> RoundConfig {
    RoundConfig {
        penalties: PenaltyNumbers::default(),
        carried_over_penalties: penalties.consolidate(),
        next_round: next,
        previous_round: current.next_round.clone(),
    }
}

/// Run `command` against the given bot file.
pub async fn run(config_path: &Path, command: &Commands) -> RookiesResult<()> {
    let mut session = Session::open(config_path, command.round_path()).await?;
    match command {
        Commands::AnnouncePenalties { .. } => session.announce_penalties().await,
        Commands::RaceSetup { .. } => session.race_setup(Path::new(".")).await.map(|_| ()),
    }
}
