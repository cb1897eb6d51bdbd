//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use aquacloud_core::models::FileCategory;
use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuActivity as Activity, LuArchive as FileArchive, LuArrowLeft as ArrowLeft,
        LuArrowRight as ArrowRight, LuCheck as Completed, LuChevronDown as ChevronDown,
        LuChevronRight as ChevronRight, LuClock as Pending, LuCloud as Cloud,
        LuDollarSign as Dollar, LuEye as Eye, LuEyeOff as EyeOff, LuFile as File,
        LuFileText as FileText, LuFolder as Folder, LuGlobe as Google, LuHardDrive as Storage,
        LuHouse as Home, LuImage as FileImage, LuLayoutDashboard as Dashboard, LuLink as Link,
        LuLogOut as Logout, LuMail as Mail, LuMoon as Moon, LuMusic as FileAudio,
        LuPlay as Play, LuPlus as Plus, LuSearch as Search, LuShieldCheck as Shield,
        LuSun as Sun, LuTrendingUp as Analytics, LuUnlink as Unlink, LuUser as User,
        LuVideo as FileVideo, LuX as Close, LuX as Failed, LuZap as Speed,
    };
}

mod bootstrap {
    pub use icondata::{
        BsActivity as Activity, BsArrowLeft as ArrowLeft, BsArrowRight as ArrowRight,
        BsBarChartFill as Dashboard, BsBoxArrowRight as Logout, BsCheckCircleFill as Completed,
        BsChevronDown as ChevronDown, BsChevronRight as ChevronRight, BsClockFill as Pending,
        BsCloudFill as Cloud, BsCurrencyDollar as Dollar, BsEnvelope as Mail, BsEye as Eye,
        BsEyeSlash as EyeOff, BsFileEarmark as File, BsFileEarmarkImage as FileImage,
        BsFileEarmarkMusic as FileAudio, BsFileEarmarkPlay as FileVideo,
        BsFileEarmarkText as FileText, BsFileEarmarkZip as FileArchive, BsFolderFill as Folder,
        BsGoogle as Google, BsGraphUpArrow as Analytics, BsHddStack as Storage,
        BsHouseFill as Home, BsLightningChargeFill as Speed, BsLink45deg as Link,
        BsMoonFill as Moon, BsPerson as User, BsPlayFill as Play, BsPlusLg as Plus,
        BsSearch as Search, BsShieldCheck as Shield, BsSunFill as Sun,
        BsXCircleFill as Failed, BsXLg as Close, BsExclamationTriangleFill as Unlink,
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

// Navigation
themed_icon!(CLOUD, Cloud);
themed_icon!(DASHBOARD, Dashboard);
themed_icon!(PLUS, Plus);
themed_icon!(ACTIVITY, Activity);
themed_icon!(ANALYTICS, Analytics);
themed_icon!(LOGOUT, Logout);
themed_icon!(USER, User);
themed_icon!(HOME, Home);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(ARROW_RIGHT, ArrowRight);
themed_icon!(ARROW_LEFT, ArrowLeft);

// Files
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_ARCHIVE, FileArchive);
themed_icon!(FILE_AUDIO, FileAudio);
themed_icon!(FILE_VIDEO, FileVideo);
themed_icon!(SEARCH, Search);

// Status
themed_icon!(COMPLETED, Completed);
themed_icon!(FAILED, Failed);
themed_icon!(PENDING, Pending);
themed_icon!(LINK, Link);
themed_icon!(UNLINK, Unlink);

// Actions & misc
themed_icon!(PLAY, Play);
themed_icon!(DOLLAR, Dollar);
themed_icon!(STORAGE, Storage);
themed_icon!(SHIELD, Shield);
themed_icon!(SPEED, Speed);
themed_icon!(GOOGLE, Google);
themed_icon!(MAIL, Mail);
themed_icon!(EYE, Eye);
themed_icon!(EYE_OFF, EyeOff);
themed_icon!(SUN, Sun);
themed_icon!(MOON, Moon);
themed_icon!(CLOSE, Close);

/// Icon for a listing row.
pub fn for_category(category: FileCategory) -> Icon {
    match category {
        FileCategory::Folder => FOLDER,
        FileCategory::Archive => FILE_ARCHIVE,
        FileCategory::Audio => FILE_AUDIO,
        FileCategory::Image => FILE_IMAGE,
        FileCategory::Video => FILE_VIDEO,
        FileCategory::Document => FILE_TEXT,
    }
}

/// Icon for a sidebar navigation item id.
pub fn for_nav(id: &str) -> Icon {
    match id {
        "dashboard" => DASHBOARD,
        "new-transfer" => PLUS,
        "sessions" => ACTIVITY,
        "analytics" => ANALYTICS,
        _ => FILE,
    }
}
