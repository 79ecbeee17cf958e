//! Interface languages and themes.
//!
//! Only navigation, hero and pricing strings are translated. Every other
//! string on the site is English.

use std::{fmt, str::FromStr};

/// Translated interface strings.
#[derive(Debug)]
pub struct Strings {
    pub home: &'static str,
    pub about: &'static str,
    pub contact: &'static str,
    pub login: &'static str,
    pub register: &'static str,
    pub dashboard: &'static str,
    pub subscriptions: &'static str,
    pub orders: &'static str,
    pub profile: &'static str,
    pub favorites: &'static str,
    pub logout: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub get_started: &'static str,
    pub learn_more: &'static str,
    pub pricing_title: &'static str,
    pub pricing_subtitle: &'static str,
    pub most_popular: &'static str,
    pub best_value: &'static str,
    pub choose_plan: &'static str,
    pub welcome_back: &'static str,
    pub active_subscriptions: &'static str,
    pub days: &'static str,
    pub renew_now: &'static str,
    pub upgrade_now: &'static str,
}

const EN: Strings = Strings {
    home: "Home",
    about: "About",
    contact: "Contact",
    login: "Login",
    register: "Register",
    dashboard: "Dashboard",
    subscriptions: "Subscriptions",
    orders: "Orders",
    profile: "Profile",
    favorites: "Favorites",
    logout: "Logout",
    hero_title: "Premium IPTV Experience",
    hero_subtitle: "Stream thousands of channels in HD/4K quality with our reliable IPTV service",
    get_started: "Get Started",
    learn_more: "Learn More",
    pricing_title: "Choose Your Plan",
    pricing_subtitle: "Select the perfect subscription plan for your needs",
    most_popular: "Most Popular",
    best_value: "Best Value",
    choose_plan: "Choose Plan",
    welcome_back: "Welcome back",
    active_subscriptions: "Active Subscriptions",
    days: "days",
    renew_now: "Renew Now",
    upgrade_now: "Upgrade Now",
};

const FR: Strings = Strings {
    home: "Accueil",
    about: "À propos",
    contact: "Contact",
    login: "Connexion",
    register: "S'inscrire",
    dashboard: "Tableau de bord",
    subscriptions: "Abonnements",
    orders: "Commandes",
    profile: "Profil",
    favorites: "Favoris",
    logout: "Déconnexion",
    hero_title: "Expérience IPTV Premium",
    hero_subtitle: "Diffusez des milliers de chaînes en qualité HD/4K avec notre service IPTV fiable",
    get_started: "Commencer",
    learn_more: "En savoir plus",
    pricing_title: "Choisissez votre plan",
    pricing_subtitle: "Sélectionnez le plan d'abonnement parfait pour vos besoins",
    most_popular: "Le plus populaire",
    best_value: "Meilleure valeur",
    choose_plan: "Choisir le plan",
    ..EN
};

const AR: Strings = Strings {
    home: "الرئيسية",
    about: "حول",
    contact: "اتصال",
    login: "تسجيل دخول",
    register: "تسجيل",
    dashboard: "لوحة التحكم",
    subscriptions: "الاشتراكات",
    orders: "الطلبات",
    profile: "الملف الشخصي",
    favorites: "المفضلة",
    logout: "تسجيل خروج",
    hero_title: "تجربة IPTV متميزة",
    hero_subtitle: "شاهد آلاف القنوات بجودة HD/4K مع خدمة IPTV الموثوقة",
    get_started: "البدء",
    learn_more: "تعلم أكثر",
    pricing_title: "اختر خطتك",
    pricing_subtitle: "اختر خطة الاشتراك المثالية لاحتياجاتك",
    most_popular: "الأكثر شعبية",
    best_value: "أفضل قيمة",
    choose_plan: "اختر الخطة",
    ..EN
};

/// Interface language, stored in the `lang` cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Fr,
    Ar,
}

impl Lang {
    pub const ALL: [Lang; 3] = [Lang::En, Lang::Fr, Lang::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fr => "fr",
            Lang::Ar => "ar",
        }
    }

    /// Name of the language in itself, for the language switcher.
    pub fn native_name(self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Fr => "Français",
            Lang::Ar => "العربية",
        }
    }

    /// Text direction for the `dir` attribute.
    pub fn dir(self) -> &'static str {
        match self {
            Lang::Ar => "rtl",
            Lang::En | Lang::Fr => "ltr",
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Lang::En => &EN,
            Lang::Fr => &FR,
            Lang::Ar => &AR,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a language or theme code is not supported.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported preference: {0:?}")]
pub struct UnknownPreference(pub String);

impl FromStr for Lang {
    type Err = UnknownPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Lang::En),
            "fr" => Ok(Lang::Fr),
            "ar" => Ok(Lang::Ar),
            other => Err(UnknownPreference(other.to_string())),
        }
    }
}

/// Color scheme, stored in the `theme` cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = UnknownPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownPreference(other.to_string())),
        }
    }
}
