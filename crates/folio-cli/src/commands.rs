use super::args::{
    Cli, ColorsCommand, Commands, DetailsCommand, ExperienceCommand, PagesCommand,
    ProjectCommand, SectionsCommand, SkillCommand, SocialCommand, StyleCommand,
};
use super::handlers::{self, HandlerContext};
use super::logging;
use anyhow::Result;
use folio_types::{Experience, Project};

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let data_dir = folio_core::resolve_workspace_path(cli.data_dir.as_deref())?;
    tracing::debug!(data_dir = %data_dir.display(), "resolved data dir");
    let ctx = HandlerContext::new(cli.format, data_dir);

    let Some(command) = cli.command else {
        return handlers::overview::handle(&ctx);
    };

    match command {
        Commands::Init { refresh } => handlers::init::handle(&ctx, refresh),

        Commands::Style { command } => match command {
            StyleCommand::List => handlers::builder::style_list(&ctx),
            StyleCommand::Set { style } => handlers::builder::style_set(&ctx, &style),
        },

        Commands::Colors { command } => match command {
            ColorsCommand::List { style } => handlers::builder::colors_list(&ctx, style.as_deref()),
            ColorsCommand::Set { primary, secondary } => {
                handlers::builder::colors_set(&ctx, &primary, &secondary)
            }
            ColorsCommand::Apply { combo } => handlers::builder::colors_apply(&ctx, &combo),
        },

        Commands::Details { command } => match command {
            DetailsCommand::Show => handlers::details::show(&ctx),
            DetailsCommand::Set {
                name,
                title,
                email,
                phone,
                bio,
                from,
            } => {
                let patch = handlers::details::DetailsPatch {
                    name,
                    title,
                    email,
                    phone,
                    bio,
                };
                handlers::details::set(&ctx, patch, from.as_deref())
            }
            DetailsCommand::Image { slot, path } => {
                handlers::details::set_image(&ctx, slot, &path)
            }
            DetailsCommand::ClearImage { slot } => handlers::details::clear_image(&ctx, slot),
        },

        Commands::Social { command } => match command {
            SocialCommand::Set { network, url } => {
                handlers::details::social_set(&ctx, network, url)
            }
        },

        Commands::Skill { command } => match command {
            SkillCommand::Add { skill } => handlers::details::skill_add(&ctx, &skill),
            SkillCommand::Remove { skill } => handlers::details::skill_remove(&ctx, &skill),
        },

        Commands::Experience { command } => match command {
            ExperienceCommand::Add {
                position,
                company,
                period,
                description,
            } => handlers::details::experience_add(
                &ctx,
                Experience {
                    position,
                    company,
                    period,
                    description,
                },
            ),
            ExperienceCommand::Remove { index } => {
                handlers::details::experience_remove(&ctx, index)
            }
        },

        Commands::Project { command } => match command {
            ProjectCommand::Add {
                title,
                description,
                tags,
            } => handlers::details::project_add(
                &ctx,
                Project {
                    title,
                    description,
                    tags,
                    image: String::new(),
                },
            ),
            ProjectCommand::Remove { index } => handlers::details::project_remove(&ctx, index),
            ProjectCommand::Image { index, path } => {
                handlers::details::project_image(&ctx, index, &path)
            }
        },

        Commands::Pages { command } => match command {
            PagesCommand::List => handlers::pages::list(&ctx),
            PagesCommand::Toggle { id } => handlers::pages::toggle(&ctx, &id),
            PagesCommand::Move { from, to } => handlers::pages::move_page(&ctx, from, to),
        },

        Commands::Sections { command } => match command {
            SectionsCommand::List { page } => handlers::pages::sections_list(&ctx, page.as_deref()),
            SectionsCommand::Toggle { id } => handlers::pages::sections_toggle(&ctx, &id),
        },

        Commands::Wizard {
            style,
            combo,
            primary,
            secondary,
            details,
        } => {
            let palette = match (combo, primary, secondary) {
                (Some(combo), _, _) => handlers::wizard::Palette::Combo(combo),
                (None, Some(primary), Some(secondary)) => {
                    handlers::wizard::Palette::Custom { primary, secondary }
                }
                _ => anyhow::bail!("Pass --combo, or both --primary and --secondary"),
            };
            handlers::wizard::handle(&ctx, &style, palette, details.as_deref())
        }

        Commands::Open { route, output } => handlers::open::handle(&ctx, route.as_deref(), output),

        Commands::Reset => handlers::reset::handle(&ctx),
    }
}
