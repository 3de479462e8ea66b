use crate::args::{ImageSlot, SocialNetwork};
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Context, Result, anyhow, bail};
use folio_runtime::{ImageInput, Workspace, parse_user_details};
use folio_types::{Experience, Project, UserDetails};
use std::path::Path;

/// Identity fields from `details set`; `None` leaves a field unchanged.
#[derive(Debug, Default)]
pub struct DetailsPatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
}

impl DetailsPatch {
    fn apply(self, user: &mut UserDetails) {
        let fields = [
            (self.name, &mut user.name),
            (self.title, &mut user.title),
            (self.email, &mut user.email),
            (self.phone, &mut user.phone),
            (self.bio, &mut user.bio),
        ];
        for (value, field) in fields {
            if let Some(value) = value {
                *field = value;
            }
        }
    }

    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.title.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.bio.is_none()
    }
}

/// Read a JSON details file and merge it over `current`.
pub(crate) fn read_details_file(path: &Path, current: &UserDetails) -> Result<UserDetails> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read details file {}", path.display()))?;
    parse_user_details(&raw, current)
        .map_err(|e| anyhow!("Invalid details file {}: {}", path.display(), e))
}

fn save(ctx: &HandlerContext, mut workspace: Workspace, user: UserDetails, label: String) -> Result<()> {
    workspace.set_user(user);
    let view_model = presenters::present_details(workspace.user(), Some(label));
    ctx.render_saved(&workspace, view_model)
}

pub fn show(ctx: &HandlerContext) -> Result<()> {
    let workspace = ctx.workspace()?;
    ctx.render(presenters::present_details(workspace.user(), None))
}

pub fn set(ctx: &HandlerContext, patch: DetailsPatch, from: Option<&Path>) -> Result<()> {
    if patch.is_empty() && from.is_none() {
        bail!("Nothing to update. Pass at least one field flag or --from <FILE>");
    }

    let workspace = ctx.workspace()?;
    let mut user = match from {
        Some(path) => read_details_file(path, workspace.user())?,
        None => workspace.user().clone(),
    };
    patch.apply(&mut user);

    save(ctx, workspace, user, "Details updated".to_string())
}

pub fn set_image(ctx: &HandlerContext, slot: ImageSlot, path: &Path) -> Result<()> {
    let workspace = ctx.workspace()?;
    let input = ImageInput::new(workspace.config().images.max_bytes);

    // The field is only touched once the file passed validation.
    let uri = match input.read_file(path) {
        Ok(uri) => uri,
        Err(err) => bail!("{}", err),
    };

    let mut user = workspace.user().clone();
    match slot {
        ImageSlot::Profile => user.profile_image = uri,
        ImageSlot::Background => user.background_image = uri,
    }
    save(ctx, workspace, user, format!("Updated {} image", slot))
}

pub fn clear_image(ctx: &HandlerContext, slot: ImageSlot) -> Result<()> {
    let workspace = ctx.workspace()?;
    let mut user = workspace.user().clone();
    match slot {
        ImageSlot::Profile => user.profile_image.clear(),
        ImageSlot::Background => user.background_image.clear(),
    }
    save(ctx, workspace, user, format!("Removed {} image", slot))
}

pub fn social_set(ctx: &HandlerContext, network: SocialNetwork, url: Option<String>) -> Result<()> {
    let workspace = ctx.workspace()?;
    let mut user = workspace.user().clone();
    let url = url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty());
    let cleared = url.is_none();

    let slot = match network {
        SocialNetwork::Github => &mut user.social_links.github,
        SocialNetwork::Linkedin => &mut user.social_links.linkedin,
        SocialNetwork::Twitter => &mut user.social_links.twitter,
    };
    *slot = url;

    let label = if cleared {
        format!("Removed {} link", network)
    } else {
        format!("Updated {} link", network)
    };
    save(ctx, workspace, user, label)
}

pub fn skill_add(ctx: &HandlerContext, skill: &str) -> Result<()> {
    let workspace = ctx.workspace()?;
    let mut user = workspace.user().clone();
    if !user.add_skill(skill) {
        bail!("Skill '{}' is blank or already listed", skill.trim());
    }
    save(ctx, workspace, user, format!("Added skill {}", skill.trim()))
}

pub fn skill_remove(ctx: &HandlerContext, skill: &str) -> Result<()> {
    let workspace = ctx.workspace()?;
    let mut user = workspace.user().clone();
    if !user.remove_skill(skill) {
        bail!("Skill '{}' is not listed", skill.trim());
    }
    save(ctx, workspace, user, format!("Removed skill {}", skill.trim()))
}

pub fn experience_add(ctx: &HandlerContext, entry: Experience) -> Result<()> {
    let workspace = ctx.workspace()?;
    let mut user = workspace.user().clone();
    let label = format!("Added {} at {}", entry.position, entry.company);
    user.add_experience(entry);
    save(ctx, workspace, user, label)
}

pub fn experience_remove(ctx: &HandlerContext, position: usize) -> Result<()> {
    let workspace = ctx.workspace()?;
    let mut user = workspace.user().clone();
    let index = to_index(position)?;
    let Some(removed) = user.remove_experience(index) else {
        bail!(
            "No experience entry at position {} ({} listed)",
            position,
            user.experience.len()
        );
    };
    let label = format!("Removed {} at {}", removed.position, removed.company);
    save(ctx, workspace, user, label)
}

pub fn project_add(ctx: &HandlerContext, project: Project) -> Result<()> {
    let workspace = ctx.workspace()?;
    let mut user = workspace.user().clone();
    let label = format!("Added project {}", project.title);
    user.add_project(project);
    save(ctx, workspace, user, label)
}

pub fn project_remove(ctx: &HandlerContext, position: usize) -> Result<()> {
    let workspace = ctx.workspace()?;
    let mut user = workspace.user().clone();
    let index = to_index(position)?;
    let Some(removed) = user.remove_project(index) else {
        bail!(
            "No project at position {} ({} listed)",
            position,
            user.projects.len()
        );
    };
    save(ctx, workspace, user, format!("Removed project {}", removed.title))
}

pub fn project_image(ctx: &HandlerContext, position: usize, path: &Path) -> Result<()> {
    let workspace = ctx.workspace()?;
    let mut user = workspace.user().clone();
    let index = to_index(position)?;
    let count = user.projects.len();
    let Some(project) = user.projects.get_mut(index) else {
        bail!("No project at position {} ({} listed)", position, count);
    };

    let input = ImageInput::new(workspace.config().images.max_bytes);
    project.image = match input.read_file(path) {
        Ok(uri) => uri,
        Err(err) => bail!("{}", err),
    };
    let label = format!("Updated image for {}", project.title);
    save(ctx, workspace, user, label)
}

/// 1-based position from the command line to a 0-based index.
pub(crate) fn to_index(position: usize) -> Result<usize> {
    match position.checked_sub(1) {
        Some(index) => Ok(index),
        None => bail!("Positions start at 1"),
    }
}
