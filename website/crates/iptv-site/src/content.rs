//! Static marketing copy for the public pages.

use crate::i18n::Strings;

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [Faq; 8] = [
    Faq {
        question: "What is IPTV and how does it work?",
        answer: "IPTV (Internet Protocol Television) delivers television content over the internet instead of traditional cable or satellite. You simply need a stable internet connection and a compatible device to stream thousands of channels in HD/4K quality.",
    },
    Faq {
        question: "What devices are compatible with your service?",
        answer: "Our IPTV service works on Smart TVs, Android/iOS devices, computers, tablets, MAG boxes, Firestick, Apple TV, and most streaming devices. We provide easy setup guides for each platform.",
    },
    Faq {
        question: "Do you offer a free trial?",
        answer: "Yes! We offer a 7-day free trial for all new customers. No credit card required for the trial period. You can test our service and see the quality before committing to a subscription.",
    },
    Faq {
        question: "What channels and content do you provide?",
        answer: "We offer 12,000+ live channels including sports, movies, news, kids content, and international channels from around the world. Plus 25,000+ VOD movies and TV shows updated regularly.",
    },
    Faq {
        question: "How many devices can I use simultaneously?",
        answer: "This depends on your subscription plan. Our basic plan allows 2 devices, while our premium plans support up to 5 simultaneous connections. Perfect for families!",
    },
    Faq {
        question: "Is your service legal and safe?",
        answer: "Yes, we operate as a legitimate IPTV provider with proper licensing agreements. Your data is protected with bank-level security, and we maintain 99.9% uptime with reliable servers worldwide.",
    },
    Faq {
        question: "What internet speed do I need?",
        answer: "For HD streaming, we recommend at least 10 Mbps. For 4K content, 25 Mbps or higher is ideal. Our adaptive streaming technology adjusts quality based on your connection speed.",
    },
    Faq {
        question: "Do you provide customer support?",
        answer: "Absolutely! We offer 24/7 customer support via live chat, WhatsApp, and email. Our technical team is always ready to help with setup, troubleshooting, or any questions you may have.",
    },
];

/// A titled blurb: home page features, about page values, contact channels.
pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
}

pub const PREMIUM_FEATURES: [Card; 6] = [
    Card {
        title: "Premium Quality",
        body: "Ultra HD 4K streaming with Dolby Atmos sound for cinema-quality experience",
    },
    Card {
        title: "Lightning Fast",
        body: "Advanced CDN network ensures instant loading and zero buffering worldwide",
    },
    Card {
        title: "Bank-Level Security",
        body: "Military-grade encryption protects your data and streaming sessions",
    },
    Card {
        title: "Global Content",
        body: "Access content from 150+ countries with real-time translation support",
    },
    Card {
        title: "Universal Compatibility",
        body: "Works seamlessly on Smart TVs, phones, tablets, and streaming devices",
    },
    Card {
        title: "VIP Support",
        body: "24/7 premium support with dedicated account managers and priority assistance",
    },
];

pub const VALUES: [Card; 4] = [
    Card {
        title: "Reliability",
        body: "We provide stable, high-quality streaming with 99.9% uptime guarantee and advanced anti-freeze technology.",
    },
    Card {
        title: "Customer First",
        body: "24/7 support and customer satisfaction is our top priority. We listen to feedback and continuously improve.",
    },
    Card {
        title: "Global Reach",
        body: "Serving customers worldwide with content from every continent and in multiple languages.",
    },
    Card {
        title: "Quality Excellence",
        body: "Premium HD/4K streaming quality with carefully curated channel lineup and VOD content.",
    },
];

pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub const HOME_STATS: [Stat; 4] = [
    Stat { number: "12,000+", label: "Live Channels" },
    Stat { number: "25,000+", label: "VOD Movies" },
    Stat { number: "99.9%", label: "Uptime" },
    Stat { number: "50,000+", label: "Happy Users" },
];

pub const PREMIUM_STATS: [Stat; 4] = [
    Stat { number: "15,000+", label: "Live Channels" },
    Stat { number: "50,000+", label: "VOD Movies" },
    Stat { number: "99.9%", label: "Uptime" },
    Stat { number: "150+", label: "Countries" },
];

pub const ABOUT_STATS: [Stat; 4] = [
    Stat { number: "50,000+", label: "Happy Customers" },
    Stat { number: "12,000+", label: "Live Channels" },
    Stat { number: "25,000+", label: "VOD Content" },
    Stat { number: "99.9%", label: "Uptime" },
];

// ============================================================================
// Content showcase
// ============================================================================

/// Tab of the home page content showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShowcaseTab {
    #[default]
    Movies,
    Series,
    Sports,
}

impl ShowcaseTab {
    pub const ALL: [ShowcaseTab; 3] = [ShowcaseTab::Movies, ShowcaseTab::Series, ShowcaseTab::Sports];

    pub fn as_str(self) -> &'static str {
        match self {
            ShowcaseTab::Movies => "movies",
            ShowcaseTab::Series => "series",
            ShowcaseTab::Sports => "sports",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShowcaseTab::Movies => "Latest Movies",
            ShowcaseTab::Series => "Popular Series",
            ShowcaseTab::Sports => "Live Sports",
        }
    }

    /// Noun used by the "View All" button.
    pub fn noun(self) -> &'static str {
        match self {
            ShowcaseTab::Movies => "Movies",
            ShowcaseTab::Series => "Series",
            ShowcaseTab::Sports => "Sports",
        }
    }

    /// Unknown or missing values select the movies tab.
    pub fn from_query(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == value)
            .unwrap_or_default()
    }
}

pub struct Movie {
    pub title: &'static str,
    pub year: u16,
    pub rating: &'static str,
    pub genre: &'static str,
    pub duration: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

pub const MOVIES: [Movie; 4] = [
    Movie {
        title: "The Dark Knight",
        year: 2008,
        rating: "9.0",
        genre: "Action, Crime, Drama",
        duration: "152 min",
        image: "https://media.themoviedb.org/t/p/w600_and_h900_bestv2/pyNXnq8QBWoK3b37RS6C3axwUOy.jpg",
        description: "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham...",
    },
    Movie {
        title: "Inception",
        year: 2010,
        rating: "8.8",
        genre: "Action, Sci-Fi, Thriller",
        duration: "148 min",
        image: "https://media.themoviedb.org/t/p/w600_and_h900_bestv2/aej3LRUga5rhgkmRP6XMFw3ejbl.jpg",
        description: "A thief who steals corporate secrets through dream-sharing technology...",
    },
    Movie {
        title: "Interstellar",
        year: 2014,
        rating: "8.6",
        genre: "Adventure, Drama, Sci-Fi",
        duration: "169 min",
        image: "https://media.themoviedb.org/t/p/w600_and_h900_bestv2/1pnigkWWy8W032o9TKDneBa3eVK.jpg",
        description: "A team of explorers travel through a wormhole in space...",
    },
    Movie {
        title: "Avengers: Endgame",
        year: 2019,
        rating: "8.4",
        genre: "Action, Adventure, Drama",
        duration: "181 min",
        image: "https://images.pexels.com/photos/7991580/pexels-photo-7991580.jpeg?w=400&h=600&fit=crop",
        description: "After the devastating events of Infinity War, the universe is in ruins...",
    },
];

pub struct Show {
    pub title: &'static str,
    pub years: &'static str,
    pub rating: &'static str,
    pub genre: &'static str,
    pub seasons: u8,
    pub episodes: u16,
    pub image: &'static str,
    pub description: &'static str,
}

pub const SERIES: [Show; 4] = [
    Show {
        title: "Breaking Bad",
        years: "2008-2013",
        rating: "9.5",
        genre: "Crime, Drama, Thriller",
        seasons: 5,
        episodes: 62,
        image: "https://media.themoviedb.org/t/p/w600_and_h900_bestv2/tP2wgZfzkZxL18jImD2YXqEUXQA.jpg",
        description: "A high school chemistry teacher turned methamphetamine manufacturer...",
    },
    Show {
        title: "Game of Thrones",
        years: "2011-2019",
        rating: "9.2",
        genre: "Action, Adventure, Drama",
        seasons: 8,
        episodes: 73,
        image: "https://media.themoviedb.org/t/p/w600_and_h900_bestv2/3YSdxdhhdCDlMs88RhvjhDLX4CA.jpg",
        description: "Nine noble families fight for control over the lands of Westeros...",
    },
    Show {
        title: "Stranger Things",
        years: "2016-2025",
        rating: "8.7",
        genre: "Drama, Fantasy, Horror",
        seasons: 4,
        episodes: 42,
        image: "https://media.themoviedb.org/t/p/w600_and_h900_bestv2/uOOtwVbSr4QDjAGIifLDwpb2Pdl.jpg",
        description: "When a young boy disappears, his mother, a police chief and his friends...",
    },
    Show {
        title: "The Crown",
        years: "2016-2023",
        rating: "8.6",
        genre: "Biography, Drama, History",
        seasons: 6,
        episodes: 60,
        image: "https://th.bing.com/th/id/R.f263fe6abe92bf48e28ce8ae41dc7f13?rik=kgZuN9OWKxTHgw&pid=ImgRaw&r=0",
        description: "Follows the political rivalries and romance of Queen Elizabeth II...",
    },
];

pub struct Competition {
    pub title: &'static str,
    pub kind: &'static str,
    pub next_match: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

pub const COMPETITIONS: [Competition; 4] = [
    Competition {
        title: "UEFA Champions League",
        kind: "Live Tournament",
        next_match: "Real Madrid vs Manchester City",
        date: "Feb 15, 2025",
        time: "21:00 CET",
        image: "https://tse2.mm.bing.net/th/id/OIF.iRBcYsf3s433Kz1XyywCtw?r=0&pid=ImgDetMain",
        description: "The most prestigious club competition in European football",
    },
    Competition {
        title: "Premier League",
        kind: "Live Championship",
        next_match: "Arsenal vs Liverpool",
        date: "Feb 12, 2025",
        time: "17:30 GMT",
        image: "https://thvnext.bing.com/th/id/OIP.v8li19bv8lzrAl78bQZA-gHaFj?w=247&h=186&pid=1.7",
        description: "The top level of the English football league system",
    },
    Competition {
        title: "La Liga",
        kind: "Live Championship",
        next_match: "Barcelona vs Atletico Madrid",
        date: "Feb 14, 2025",
        time: "20:00 CET",
        image: "https://www.somosxbox.com/wp-content/uploads/2023/04/LaLiga.jpg",
        description: "Spain's premier football division featuring the world's best clubs",
    },
    Competition {
        title: "Serie A",
        kind: "Live Championship",
        next_match: "Juventus vs AC Milan",
        date: "Feb 16, 2025",
        time: "18:00 CET",
        image: "https://www.footitalia.com/wp-content/uploads/2023/06/Serie-A.png",
        description: "Italy's top professional football league",
    },
];

// ============================================================================
// Live sports
// ============================================================================

pub struct Fixture {
    pub league: &'static str,
    pub home_team: &'static str,
    pub away_team: &'static str,
    pub home_flag: &'static str,
    pub away_flag: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub venue: &'static str,
    pub image: &'static str,
    pub is_live: bool,
    pub viewers: &'static str,
}

pub const UPCOMING_MATCHES: [Fixture; 3] = [
    Fixture {
        league: "UEFA Champions League",
        home_team: "Real Madrid",
        away_team: "Manchester City",
        home_flag: "\u{1f1ea}\u{1f1f8}",
        away_flag: "\u{1f3f4}\u{e0067}\u{e0062}\u{e0065}\u{e006e}\u{e0067}\u{e007f}",
        date: "Feb 15, 2025",
        time: "21:00",
        venue: "Santiago Bernab\u{e9}u",
        image: "https://images.pexels.com/photos/274506/pexels-photo-274506.jpeg?w=800&h=400&fit=crop",
        is_live: false,
        viewers: "2.5M",
    },
    Fixture {
        league: "Premier League",
        home_team: "Arsenal",
        away_team: "Liverpool",
        home_flag: "\u{1f3f4}\u{e0067}\u{e0062}\u{e0065}\u{e006e}\u{e0067}\u{e007f}",
        away_flag: "\u{1f3f4}\u{e0067}\u{e0062}\u{e0065}\u{e006e}\u{e0067}\u{e007f}",
        date: "Feb 12, 2025",
        time: "17:30",
        venue: "Emirates Stadium",
        image: "https://images.pexels.com/photos/114296/pexels-photo-114296.jpeg?w=800&h=400&fit=crop",
        is_live: true,
        viewers: "1.8M",
    },
    Fixture {
        league: "La Liga",
        home_team: "Barcelona",
        away_team: "Atletico Madrid",
        home_flag: "\u{1f1ea}\u{1f1f8}",
        away_flag: "\u{1f1ea}\u{1f1f8}",
        date: "Feb 14, 2025",
        time: "20:00",
        venue: "Camp Nou",
        image: "https://images.pexels.com/photos/1884574/pexels-photo-1884574.jpeg?w=800&h=400&fit=crop",
        is_live: false,
        viewers: "1.2M",
    },
];

pub struct League {
    pub name: &'static str,
    pub logo: &'static str,
    pub description: &'static str,
    pub matches: u16,
}

pub const LEAGUES: [League; 4] = [
    League {
        name: "UEFA Champions League",
        logo: "\u{1f3c6}",
        description: "Europe's premier club competition",
        matches: 156,
    },
    League {
        name: "Premier League",
        logo: "\u{1f451}",
        description: "England's top football division",
        matches: 380,
    },
    League {
        name: "La Liga",
        logo: "\u{26bd}",
        description: "Spain's premier football league",
        matches: 380,
    },
    League {
        name: "Serie A",
        logo: "\u{1f1ee}\u{1f1f9}",
        description: "Italy's top professional league",
        matches: 380,
    },
];

pub struct Testimonial {
    pub name: &'static str,
    pub location: &'static str,
    pub rating: u8,
    pub comment: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        name: "Sarah Johnson",
        location: "New York, USA",
        rating: 5,
        comment: "The best IPTV service I've ever used. Crystal clear quality and amazing channel selection. Customer support is outstanding!",
    },
    Testimonial {
        name: "Ahmed Hassan",
        location: "Dubai, UAE",
        rating: 5,
        comment: "Excellent service with Arabic channels and international content. The app works perfectly on all my devices.",
    },
    Testimonial {
        name: "Maria Garcia",
        location: "Madrid, Spain",
        rating: 5,
        comment: "Perfect for our family! Kids love the cartoons, I enjoy Spanish shows, and my husband watches sports. Great value!",
    },
    Testimonial {
        name: "James Wilson",
        location: "London, UK",
        rating: 5,
        comment: "Switched from cable TV and couldn't be happier. Better quality, more channels, and much more affordable.",
    },
    Testimonial {
        name: "Lisa Chen",
        location: "Toronto, Canada",
        rating: 5,
        comment: "The anti-freeze technology really works! No more buffering during my favorite shows. Highly recommended!",
    },
    Testimonial {
        name: "Pierre Dubois",
        location: "Paris, France",
        rating: 5,
        comment: "Incredible selection of French and international channels. The VOD library is massive. Worth every penny!",
    },
];

pub struct ContactChannel {
    pub title: &'static str,
    pub details: &'static str,
    pub description: &'static str,
}

pub const CONTACT_CHANNELS: [ContactChannel; 4] = [
    ContactChannel {
        title: "Email Support",
        details: "support@iptvpro.com",
        description: "Send us an email anytime",
    },
    ContactChannel {
        title: "Phone Support",
        details: "+1 (555) 123-4567",
        description: "24/7 customer service",
    },
    ContactChannel {
        title: "WhatsApp",
        details: "+1 (555) 123-4567",
        description: "Quick chat support",
    },
    ContactChannel {
        title: "Support Hours",
        details: "24/7 Available",
        description: "We're always here to help",
    },
];

pub const WHATSAPP_URL: &str = "https://wa.me/1234567890?text=Hi, I need help with my IPTV service";

/// Billing countries offered at checkout: (code, name).
pub const COUNTRIES: [(&str, &str); 9] = [
    ("US", "United States"),
    ("CA", "Canada"),
    ("UK", "United Kingdom"),
    ("FR", "France"),
    ("DE", "Germany"),
    ("ES", "Spain"),
    ("IT", "Italy"),
    ("AE", "United Arab Emirates"),
    ("SA", "Saudi Arabia"),
];

/// Ribbon shown on a pricing card.
pub fn plan_badge(plan_id: &str, t: &Strings) -> Option<&'static str> {
    match plan_id {
        "quarterly" => Some(t.most_popular),
        "yearly" => Some(t.best_value),
        _ => None,
    }
}

/// Favorite categories offered by the dashboard filter.
pub const FAVORITE_CATEGORIES: [&str; 6] = ["Sports", "News", "Documentary", "Movies", "Series", "Kids"];
