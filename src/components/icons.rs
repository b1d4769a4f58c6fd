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
        LuArrowRight as ArrowRight, LuAward as Award, LuBookOpen as BookOpen,
        LuChevronDown as ChevronDown, LuCircleCheck as CheckCircle, LuClock as Clock,
        LuDownload as Download, LuExternalLink as ExternalLink, LuFacebook as Facebook,
        LuFileText as FileText, LuGlobe as Globe, LuGraduationCap as GraduationCap,
        LuHeart as Heart, LuInstagram as Instagram, LuMail as Mail, LuMapPin as MapPin,
        LuMenu as Menu, LuPhone as Phone, LuSearch as Search, LuSend as Send,
        LuTarget as Target, LuUser as User, LuUsers as Users, LuVideo as Video,
        LuX as Close, LuYoutube as Youtube,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRight as ArrowRight, BsAward as Award, BsBook as BookOpen,
        BsBullseye as Target, BsCameraVideo as Video, BsCheckCircle as CheckCircle,
        BsChevronDown as ChevronDown, BsClock as Clock, BsDownload as Download,
        BsEnvelope as Mail, BsFacebook as Facebook, BsFileEarmarkText as FileText,
        BsGeoAlt as MapPin, BsGlobe as Globe, BsHeart as Heart, BsInstagram as Instagram,
        BsList as Menu, BsBoxArrowUpRight as ExternalLink, BsMortarboard as GraduationCap,
        BsPeople as Users, BsPerson as User, BsSearch as Search, BsSend as Send,
        BsTelephone as Phone, BsXLg as Close, BsYoutube as Youtube,
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

themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(ARROW_RIGHT, ArrowRight);
themed_icon!(GLOBE, Globe);
themed_icon!(BOOK_OPEN, BookOpen);
themed_icon!(USERS, Users);
themed_icon!(AWARD, Award);
themed_icon!(TARGET, Target);
themed_icon!(HEART, Heart);
themed_icon!(SEARCH, Search);
themed_icon!(DOWNLOAD, Download);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(VIDEO, Video);
themed_icon!(SEND, Send);
themed_icon!(CHECK_CIRCLE, CheckCircle);
themed_icon!(GRADUATION_CAP, GraduationCap);
themed_icon!(USER, User);
themed_icon!(MAIL, Mail);
themed_icon!(PHONE, Phone);
themed_icon!(MAP_PIN, MapPin);
themed_icon!(CLOCK, Clock);
themed_icon!(FACEBOOK, Facebook);
themed_icon!(INSTAGRAM, Instagram);
themed_icon!(YOUTUBE, Youtube);
