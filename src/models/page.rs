use super::error::AppError;

/// The three views the shell can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Explorer,
    About,
}

impl Page {
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Explorer => "explorer",
            Self::About => "about",
        }
    }

    /// Navbar label.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Explorer => "Data Explorer",
            Self::About => "About",
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::Home, Self::Explorer, Self::About]
    }

    /// Like `parse`, but unknown slugs land on the home page.
    pub fn from_slug(slug: &str) -> Self {
        slug.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

impl std::str::FromStr for Page {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "explorer" => Ok(Self::Explorer),
            "about" => Ok(Self::About),
            _ => Err(AppError::Config(format!("Unknown page: {s}"))),
        }
    }
}
