use super::enums::{ImageSlot, SocialNetwork};
use clap::{ArgGroup, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Create the data directory and default config")]
    Init {
        /// Rewrite config.toml with defaults
        #[arg(long)]
        refresh: bool,
    },

    #[command(about = "Choose the portfolio template style")]
    Style {
        #[command(subcommand)]
        command: StyleCommand,
    },

    #[command(about = "Choose the primary and secondary colors")]
    Colors {
        #[command(subcommand)]
        command: ColorsCommand,
    },

    #[command(about = "View and edit personal details")]
    Details {
        #[command(subcommand)]
        command: DetailsCommand,
    },

    #[command(about = "Edit social links")]
    Social {
        #[command(subcommand)]
        command: SocialCommand,
    },

    #[command(about = "Edit the skills list")]
    Skill {
        #[command(subcommand)]
        command: SkillCommand,
    },

    #[command(about = "Edit work experience entries")]
    Experience {
        #[command(subcommand)]
        command: ExperienceCommand,
    },

    #[command(about = "Edit portfolio projects")]
    Project {
        #[command(subcommand)]
        command: ProjectCommand,
    },

    #[command(about = "Enable, disable and reorder pages")]
    Pages {
        #[command(subcommand)]
        command: PagesCommand,
    },

    #[command(about = "Enable and disable page sections")]
    Sections {
        #[command(subcommand)]
        command: SectionsCommand,
    },

    #[command(about = "Run the style, colors, details and generate steps in one go")]
    #[command(group(ArgGroup::new("palette").args(["combo", "primary"]).required(true)))]
    Wizard {
        #[arg(long)]
        style: String,

        /// Named color combo (see `folio colors list`)
        #[arg(long, conflicts_with_all = ["primary", "secondary"])]
        combo: Option<String>,

        #[arg(long, requires = "secondary")]
        primary: Option<String>,

        #[arg(long, requires = "primary")]
        secondary: Option<String>,

        /// JSON file with user details, merged over the current ones
        #[arg(long)]
        details: Option<PathBuf>,
    },

    #[command(about = "Render a route to HTML")]
    Open {
        /// `/`, `/portfolio/<page>` or a bare page id
        route: Option<String>,

        /// Write the HTML here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    #[command(about = "Remove every stored value")]
    Reset,
}

#[derive(Subcommand)]
pub enum StyleCommand {
    #[command(about = "List available styles")]
    List,

    #[command(about = "Set the style (minimal, creative, corporate)")]
    Set { style: String },
}

#[derive(Subcommand)]
pub enum ColorsCommand {
    #[command(about = "List color combos for a style")]
    List {
        /// Defaults to the stored style
        #[arg(long)]
        style: Option<String>,
    },

    #[command(about = "Set a custom primary and secondary color")]
    Set { primary: String, secondary: String },

    #[command(about = "Apply a named color combo")]
    Apply { combo: String },
}

#[derive(Subcommand)]
pub enum DetailsCommand {
    #[command(about = "Show current details")]
    Show,

    #[command(about = "Update identity fields")]
    Set {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        bio: Option<String>,

        /// JSON file merged over the current details before the flags apply
        #[arg(long)]
        from: Option<PathBuf>,
    },

    #[command(about = "Upload a profile or background image")]
    Image { slot: ImageSlot, path: PathBuf },

    #[command(about = "Remove a profile or background image")]
    ClearImage { slot: ImageSlot },
}

#[derive(Subcommand)]
pub enum SocialCommand {
    #[command(about = "Set a social link; omit the URL to clear it")]
    Set {
        network: SocialNetwork,
        url: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum SkillCommand {
    #[command(about = "Add a skill")]
    Add { skill: String },

    #[command(about = "Remove a skill")]
    Remove { skill: String },
}

#[derive(Subcommand)]
pub enum ExperienceCommand {
    #[command(about = "Append an experience entry")]
    Add {
        #[arg(long)]
        position: String,

        #[arg(long)]
        company: String,

        #[arg(long, default_value = "")]
        period: String,

        #[arg(long, default_value = "")]
        description: String,
    },

    #[command(about = "Remove an experience entry by its 1-based position")]
    Remove { index: usize },
}

#[derive(Subcommand)]
pub enum ProjectCommand {
    #[command(about = "Append a project")]
    Add {
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    #[command(about = "Remove a project by its 1-based position")]
    Remove { index: usize },

    #[command(about = "Upload an image for a project")]
    Image { index: usize, path: PathBuf },
}

#[derive(Subcommand)]
pub enum PagesCommand {
    #[command(about = "List pages in navigation order")]
    List,

    #[command(about = "Enable or disable a page (home cannot be disabled)")]
    Toggle { id: String },

    #[command(about = "Move a page from one 1-based position to another")]
    Move { from: usize, to: usize },
}

#[derive(Subcommand)]
pub enum SectionsCommand {
    #[command(about = "List sections")]
    List {
        #[arg(long)]
        page: Option<String>,
    },

    #[command(about = "Enable or disable a section")]
    Toggle { id: String },
}
