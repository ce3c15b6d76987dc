//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowLeft as Back, LuBriefcase as Briefcase, LuGlobe as Website, LuMapPin as Location,
        LuTerminal as Terminal, LuUser as User,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowLeft as Back, BsBriefcase as Briefcase, BsGeoAltFill as Location,
        BsGlobe as Website, BsPerson as User, BsTerminal as Terminal,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(TERMINAL, Terminal);
themed_icon!(WEBSITE, Website);
themed_icon!(USER, User);
themed_icon!(LOCATION, Location);
themed_icon!(BRIEFCASE, Briefcase);
themed_icon!(BACK, Back);
