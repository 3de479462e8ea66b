use std::fmt;

use crate::presentation::view_models::{OpenOutcome, OpenViewModel};

pub struct OpenView<'a> {
    data: &'a OpenViewModel,
}

impl<'a> OpenView<'a> {
    pub fn new(data: &'a OpenViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for OpenView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Raw HTML on stdout stays pipeable.
        if let Some(html) = &self.data.html {
            return write!(f, "{}", html);
        }

        writeln!(f, "Route:   {}", self.data.visited.join(" -> "))?;
        match self.data.outcome {
            OpenOutcome::Builder => writeln!(f, "Showing: builder")?,
            OpenOutcome::Rendered => writeln!(
                f,
                "Showing: {} ({})",
                self.data.page_id.as_deref().unwrap_or("-"),
                self.data.style.as_deref().unwrap_or("-")
            )?,
            OpenOutcome::TemplateNotFound => writeln!(
                f,
                "Showing: template not found ({})",
                self.data.style.as_deref().unwrap_or("-")
            )?,
        }
        if let Some(output) = &self.data.output {
            writeln!(f, "Written: {}", output.display())?;
        }
        Ok(())
    }
}
