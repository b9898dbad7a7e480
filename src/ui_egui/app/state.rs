/// The three screens reachable from the bottom navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationTab {
    Home,
    Discover,
    Profile,
}

impl NavigationTab {
    pub const ALL: [NavigationTab; 3] = [
        NavigationTab::Home,
        NavigationTab::Discover,
        NavigationTab::Profile,
    ];

    pub fn glyph(&self) -> &'static str {
        match self {
            NavigationTab::Home => "🏠",
            NavigationTab::Discover => "✨",
            NavigationTab::Profile => "👤",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavigationTab::Home => "Home",
            NavigationTab::Discover => "Discover",
            NavigationTab::Profile => "Profile",
        }
    }
}

/// Content filter on the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeTab {
    Rooms,
    Products,
}

impl HomeTab {
    pub const ALL: [HomeTab; 2] = [HomeTab::Rooms, HomeTab::Products];

    pub fn label(&self) -> &'static str {
        match self {
            HomeTab::Rooms => "Rooms",
            HomeTab::Products => "Products",
        }
    }
}
