//! `/help` and its page navigation buttons.
//!
//! Pages are rebuilt for every click, so navigation state lives in the button
//! custom ids and the listed commands always match the clicking user's access.

use serenity::all::{ButtonStyle, CommandInteraction, CreateActionRow, CreateButton, GuildId};

use crate::bot::command::{commands_for, invoker, reply::Reply, BotCommand};
use crate::error::AppError;
use crate::model::audit::Notification;
use crate::model::module::FeatureModule;
use crate::model::permission::Invoker;
use crate::model::setting::DEFAULT_EMBED_COLOUR;
use crate::service::customisation::CustomisationService;
use crate::service::permission::PermissionService;
use crate::state::BotState;

const BUTTON_PREFIX: &str = "help:";

/// A click on one of the help page buttons, carrying the page it was clicked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpNavigation {
    Prev(usize),
    Home,
    Next(usize),
    Updates(usize),
}

impl HelpNavigation {
    pub fn custom_id(&self) -> String {
        match self {
            Self::Prev(page) => format!("{}prev:{}", BUTTON_PREFIX, page),
            Self::Home => format!("{}home", BUTTON_PREFIX),
            Self::Next(page) => format!("{}next:{}", BUTTON_PREFIX, page),
            Self::Updates(page) => format!("{}updates:{}", BUTTON_PREFIX, page),
        }
    }

    pub fn parse(custom_id: &str) -> Option<Self> {
        let rest = custom_id.strip_prefix(BUTTON_PREFIX)?;
        if rest == "home" {
            return Some(Self::Home);
        }

        let (action, page) = rest.split_once(':')?;
        let page = page.parse().ok()?;
        match action {
            "prev" => Some(Self::Prev(page)),
            "next" => Some(Self::Next(page)),
            "updates" => Some(Self::Updates(page)),
            _ => None,
        }
    }

    /// Page to show next, wrapping at both ends; `None` for the updates page.
    ///
    /// Out of range pages are clamped first, since the page count can shrink
    /// between clicks when modules or grants change.
    pub fn target(&self, page_count: usize) -> Option<usize> {
        let last = page_count.saturating_sub(1);
        match *self {
            Self::Prev(page) => match page.min(last) {
                0 => Some(last),
                page => Some(page - 1),
            },
            Self::Home => Some(0),
            Self::Next(page) => {
                if page >= last {
                    Some(0)
                } else {
                    Some(page + 1)
                }
            }
            Self::Updates(_) => None,
        }
    }

    /// Page the buttons of the resulting message should refer to.
    fn current_after(&self, page_count: usize) -> usize {
        match self.target(page_count) {
            Some(page) => page,
            None => match *self {
                Self::Updates(page) => page.min(page_count.saturating_sub(1)),
                _ => 0,
            },
        }
    }
}

/// Commands on loaded modules that the invoker passes the permission gate for.
///
/// Administration commands belong to no feature module and are not listed.
///
/// # Returns
/// - `Ok(Vec<BotCommand>)` - Commands to list, in registration order
/// - `Err(AppError::DbErr)` - Database error while reading grants
pub async fn visible_commands(
    permissions: &PermissionService<'_>,
    loaded: &[FeatureModule],
    invoker: &Invoker,
) -> Result<Vec<BotCommand>, AppError> {
    let mut visible = Vec::new();

    for command in commands_for(loaded) {
        if command.module().is_none() {
            continue;
        }

        match permissions.check_access(command.access(), invoker).await {
            Ok(()) => visible.push(command),
            Err(AppError::AuthErr(_)) => {}
            Err(e) => return Err(e),
        }
    }

    Ok(visible)
}

/// Builds the introduction page followed by one page per module with visible commands.
pub fn help_pages(visible: &[BotCommand], colour: u32) -> Vec<Notification> {
    let mut pages = vec![Notification::new(
        "guildlog reports server activity to a log channel of your choice \
         and keeps a record of how its commands are used.",
        colour,
    )
    .title("About guildlog")
    .field(
        "Getting Started",
        "Pick a log channel with `/logging_channel`, then choose the events \
         to report with `/logging_enable`.",
        false,
    )
    .field(
        "Need Support?",
        "*If something does not work as expected, send the details with `/suggest`.*",
        false,
    )];

    for module in FeatureModule::ALL {
        let commands: Vec<&BotCommand> = visible
            .iter()
            .filter(|command| command.module() == Some(module))
            .collect();
        if commands.is_empty() {
            continue;
        }

        let page = commands.into_iter().fold(
            Notification::new("Commands available to you.", colour)
                .title(format!("{} Commands", module.title())),
            |page, command| {
                page.field(
                    format!("/{}", command.name()),
                    format!("```{}```", command.description()),
                    false,
                )
            },
        );
        pages.push(page);
    }

    let total = pages.len();
    pages
        .into_iter()
        .enumerate()
        .map(|(index, page)| page.footer(format!("Page {}/{}", index + 1, total)))
        .collect()
}

pub fn updates_page(colour: u32) -> Notification {
    Notification::new(
        format!(
            "guildlog {}\n- Help pages only list the commands you can run",
            env!("CARGO_PKG_VERSION")
        ),
        colour,
    )
    .title("Latest Updates")
}

pub fn navigation_row(current: usize) -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        CreateButton::new(HelpNavigation::Prev(current).custom_id())
            .label("Prev")
            .style(ButtonStyle::Primary),
        CreateButton::new(HelpNavigation::Home.custom_id())
            .label("Home")
            .style(ButtonStyle::Success),
        CreateButton::new(HelpNavigation::Next(current).custom_id())
            .label("Next")
            .style(ButtonStyle::Primary),
        CreateButton::new(HelpNavigation::Updates(current).custom_id())
            .label("Updates")
            .style(ButtonStyle::Secondary),
    ])
}

async fn pages_for(
    state: &BotState,
    invoker: &Invoker,
    guild_id: Option<GuildId>,
) -> Result<(Vec<Notification>, u32), AppError> {
    let permissions = PermissionService::new(&state.db, state.config.owner_id);
    let loaded = state.modules.loaded().await;
    let visible = visible_commands(&permissions, &loaded, invoker).await?;

    let colour = match guild_id {
        Some(guild_id) => {
            CustomisationService::new(&state.db)
                .embed_colour(guild_id.get())
                .await
        }
        None => DEFAULT_EMBED_COLOUR,
    };

    Ok((help_pages(&visible, colour), colour))
}

fn page_reply(pages: &[Notification], page: usize) -> Reply {
    match pages.get(page) {
        Some(notification) => Reply::embed(notification).components(vec![navigation_row(page)]),
        None => Reply::text("Failed to fetch help information."),
    }
}

pub async fn help(state: &BotState, interaction: &CommandInteraction) -> Result<Reply, AppError> {
    let invoker = invoker(
        &interaction.user,
        interaction.guild_id,
        interaction.member.as_deref(),
    );

    let (pages, _) = pages_for(state, &invoker, interaction.guild_id).await?;

    Ok(page_reply(&pages, 0))
}

/// Handles a help button click by rebuilding the pages for the clicking user.
pub async fn navigate(
    state: &BotState,
    invoker: &Invoker,
    guild_id: Option<GuildId>,
    navigation: HelpNavigation,
) -> Result<Reply, AppError> {
    let (pages, colour) = pages_for(state, invoker, guild_id).await?;

    let reply = match navigation.target(pages.len()) {
        Some(page) => page_reply(&pages, page),
        None => Reply::embed(&updates_page(colour))
            .components(vec![navigation_row(navigation.current_after(pages.len()))]),
    };

    Ok(reply)
}
