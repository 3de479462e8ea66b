use std::fmt;

use super::{bold, dim, yellow};
use crate::presentation::view_models::DetailsViewModel;

pub struct DetailsView<'a> {
    data: &'a DetailsViewModel,
    color: bool,
}

impl<'a> DetailsView<'a> {
    pub fn new(data: &'a DetailsViewModel, color: bool) -> Self {
        Self { data, color }
    }

    fn image_state(value: &str) -> String {
        if value.is_empty() {
            "none".to_string()
        } else {
            format!("set ({} bytes)", value.len())
        }
    }
}

impl<'a> fmt::Display for DetailsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let user = &self.data.details;
        let c = self.color;

        writeln!(f, "{}", bold(&user.name, c))?;
        writeln!(f, "{}", user.title)?;
        writeln!(f, "Email:      {}", user.email)?;
        writeln!(f, "Phone:      {}", user.phone)?;
        writeln!(f, "Bio:        {}", user.bio)?;
        writeln!(f, "Profile:    {}", Self::image_state(&user.profile_image))?;
        writeln!(f, "Background: {}", Self::image_state(&user.background_image))?;

        writeln!(f)?;
        writeln!(f, "{}", bold("Skills", c))?;
        if user.skills.is_empty() {
            writeln!(f, "  {}", dim("(none)", c))?;
        } else {
            writeln!(f, "  {}", user.skills.join(", "))?;
        }

        writeln!(f)?;
        writeln!(f, "{}", bold("Experience", c))?;
        for (i, entry) in user.experience.iter().enumerate() {
            writeln!(
                f,
                "  {}. {} at {} {}",
                i + 1,
                entry.position,
                entry.company,
                dim(&format!("({})", entry.period), c)
            )?;
        }

        writeln!(f)?;
        writeln!(f, "{}", bold("Projects", c))?;
        for (i, project) in user.projects.iter().enumerate() {
            let image = if project.image.is_empty() { "" } else { " [image]" };
            writeln!(f, "  {}. {}{}", i + 1, project.title, image)?;
            if !project.tags.is_empty() {
                writeln!(f, "     {}", dim(&project.tags.join(", "), c))?;
            }
        }

        let links = user.social_links.entries();
        if !links.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", bold("Social", c))?;
            for (label, url) in links {
                writeln!(f, "  {:<9} {}", label, url)?;
            }
        }

        if !self.data.complete {
            writeln!(f)?;
            writeln!(
                f,
                "{}",
                yellow(
                    &format!("Missing: {}", self.data.missing_fields.join(", ")),
                    c
                )
            )?;
        }
        Ok(())
    }
}
