//! Closed option sets offered by the registration and project forms.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! option_set {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|value| value.label() == s)
                    .ok_or_else(|| {
                        Error::BadRequest(format!("Unknown {}: {}", stringify!($name), s))
                    })
            }
        }
    };
}

pub const SAUDI_CITIES: &[&str] = &[
    "Riyadh",
    "Jeddah",
    "Dammam",
    "Khobar",
    "Mecca",
    "Medina",
    "Taif",
    "Tabuk",
    "Abha",
    "Najran",
    "Jizan",
    "Hail",
    "Al Kharj",
    "Buraidah",
    "Khamis Mushait",
    "Al-Ahsa",
    "Qatif",
    "Yanbu",
    "Dhahran",
];

pub const NATIONALITIES: &[&str] = &[
    "Saudi",
    "Syrian",
    "Egyptian",
    "Lebanese",
    "Jordanian",
    "Palestinian",
    "Emirati",
    "Kuwaiti",
    "Bahraini",
    "Omani",
    "Qatari",
    "Yemeni",
    "Iraqi",
    "Moroccan",
    "Algerian",
    "Tunisian",
    "Libyan",
    "Sudanese",
    "American",
    "British",
    "French",
    "German",
    "Italian",
    "Spanish",
    "Indian",
    "Pakistani",
    "Filipino",
    "Indonesian",
    "Turkish",
    "Other",
];

pub const USAGE_RIGHTS_DURATION: &[&str] = &["1 year", "2 years", "5 years", "Perpetuity"];

pub const USAGE_RIGHTS_GEOGRAPHY: &[&str] =
    &["Saudi Arabia only", "GCC", "MENA", "Worldwide"];

pub const USAGE_RIGHTS_MEDIA: &[&str] = &["TV", "Print", "Digital", "Social Media", "All Media"];

pub const SPECIAL_SKILLS: &[&str] = &[
    "Acting",
    "Singing",
    "Dancing",
    "Sports",
    "Martial Arts",
    "Swimming",
    "Horseback Riding",
    "Driving",
    "Musical Instruments",
    "Stand-up Comedy",
    "Acrobatics",
    "Yoga",
    "Languages",
    "Dialects",
];

pub const LANGUAGES: &[&str] = &[
    "Arabic", "English", "French", "Spanish", "German", "Italian", "Turkish", "Urdu", "Hindi",
    "Other",
];

pub const LANGUAGE_PROFICIENCY: &[&str] = &["Native", "Fluent", "Advanced", "Intermediate", "Basic"];

pub fn is_known_city(city: &str) -> bool {
    SAUDI_CITIES.contains(&city)
}

pub fn is_known_nationality(nationality: &str) -> bool {
    NATIONALITIES.contains(&nationality)
}

option_set!(Gender {
    Male => "Male",
    Female => "Female",
});

option_set!(
    /// Casting-call gender filter; `Any` leaves the call open to everyone.
    GenderPreference {
        Any => "Any",
        Male => "Male",
        Female => "Female",
    }
);

option_set!(ClothingSize {
    Xs => "XS",
    S => "S",
    M => "M",
    L => "L",
    Xl => "XL",
    Xxl => "XXL",
    Xxxl => "XXXL",
});

option_set!(HairColor {
    Black => "Black",
    Brown => "Brown",
    Blonde => "Blonde",
    Red => "Red",
    Gray => "Gray",
    White => "White",
    Other => "Other",
});

option_set!(EyeColor {
    Brown => "Brown",
    Black => "Black",
    Blue => "Blue",
    Green => "Green",
    Hazel => "Hazel",
    Gray => "Gray",
    Other => "Other",
});

option_set!(SkinTone {
    Fair => "Fair",
    Medium => "Medium",
    Olive => "Olive",
    Tan => "Tan",
    Dark => "Dark",
});

option_set!(ProjectType {
    AdvertisementCampaign => "Advertisement Campaign",
    FilmProduction => "Film Production",
    TvShow => "TV Show/Series",
    FashionShow => "Fashion Show/Runway",
    PhotoShoot => "Photo Shoot",
    MusicVideo => "Music Video",
    Documentary => "Documentary",
    CorporateVideo => "Corporate Video",
    Other => "Other",
});

impl ProjectType {
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            ProjectType::AdvertisementCampaign => {
                &["Commercial", "Print", "Digital", "Outdoor", "Radio"]
            }
            ProjectType::FilmProduction => &["Feature Film", "Short Film", "Documentary"],
            ProjectType::TvShow => &["Drama", "Comedy", "Reality", "Talk Show"],
            ProjectType::FashionShow => &["Runway", "Editorial", "Lookbook", "Campaign"],
            _ => &[],
        }
    }
}

option_set!(CompanyType {
    ProductionHouse => "Production House",
    AdvertisingAgency => "Advertising Agency",
    FashionBrand => "Fashion Brand",
    TvNetwork => "TV Network",
    CastingAgency => "Casting Agency",
    PhotographyStudio => "Photography Studio",
    EventManagement => "Event Management",
    Other => "Other",
});

option_set!(
    /// Week starts on Sunday, matching the availability picker.
    DayOfWeek {
        Sunday => "Sunday",
        Monday => "Monday",
        Tuesday => "Tuesday",
        Wednesday => "Wednesday",
        Thursday => "Thursday",
        Friday => "Friday",
        Saturday => "Saturday",
    }
);

option_set!(NoticePeriod {
    SameDay => "Same day",
    OneDay => "1 day",
    TwoToThreeDays => "2-3 days",
    OneWeek => "1 week",
});

option_set!(WorkPreference {
    FullTime => "Full-time",
    PartTime => "Part-time",
    ProjectBased => "Project-based",
});

option_set!(PaymentType {
    Paid => "Paid",
    Unpaid => "Unpaid/Portfolio building",
    Tfp => "TFP (Time for Prints)",
    Negotiable => "Negotiable",
});

/// Preset response windows in minutes, with their picker labels.
pub const RESPONSE_TIME_OPTIONS: &[(u32, &str)] = &[
    (30, "30 minutes"),
    (60, "1 hour"),
    (120, "2 hours"),
    (360, "6 hours"),
    (720, "12 hours"),
    (1440, "24 hours"),
    (2880, "48 hours"),
];

/// Minutes a talent has to answer a casting call. Only preset values exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ResponseTimeLimit(u32);

impl ResponseTimeLimit {
    pub const DEFAULT_MINUTES: u32 = 1440;

    pub fn minutes(&self) -> u32 {
        self.0
    }

    pub fn label(&self) -> &'static str {
        RESPONSE_TIME_OPTIONS
            .iter()
            .find(|(minutes, _)| *minutes == self.0)
            .map(|(_, label)| *label)
            .unwrap_or("24 hours")
    }

    pub fn duration(&self) -> chrono::Duration {
        chrono::Duration::minutes(i64::from(self.0))
    }

    pub fn from_label(label: &str) -> Result<Self> {
        RESPONSE_TIME_OPTIONS
            .iter()
            .find(|(_, candidate)| *candidate == label)
            .map(|(minutes, _)| ResponseTimeLimit(*minutes))
            .ok_or_else(|| Error::BadRequest(format!("Unknown response time: {}", label)))
    }
}

impl Default for ResponseTimeLimit {
    fn default() -> Self {
        ResponseTimeLimit(Self::DEFAULT_MINUTES)
    }
}

impl TryFrom<u32> for ResponseTimeLimit {
    type Error = Error;

    fn try_from(minutes: u32) -> Result<Self> {
        if RESPONSE_TIME_OPTIONS.iter().any(|(preset, _)| *preset == minutes) {
            Ok(ResponseTimeLimit(minutes))
        } else {
            Err(Error::BadRequest(format!(
                "Response time limit must be one of the preset values, got {} minutes",
                minutes
            )))
        }
    }
}

impl From<ResponseTimeLimit> for u32 {
    fn from(value: ResponseTimeLimit) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_labels_round_trip_through_serde() {
        let json = serde_json::to_string(&PaymentType::Tfp).unwrap();
        assert_eq!(json, "\"TFP (Time for Prints)\"");
        let back: PaymentType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PaymentType::Tfp);
        assert_eq!("TV Show/Series".parse::<ProjectType>().unwrap(), ProjectType::TvShow);
        assert!("Space Opera".parse::<ProjectType>().is_err());
    }

    #[test]
    fn response_time_limit_admits_presets_only() {
        assert_eq!(ResponseTimeLimit::default().minutes(), 1440);
        assert_eq!(ResponseTimeLimit::try_from(30).unwrap().label(), "30 minutes");
        assert!(ResponseTimeLimit::try_from(45).is_err());
        assert!(serde_json::from_str::<ResponseTimeLimit>("45").is_err());
        assert_eq!(
            serde_json::from_str::<ResponseTimeLimit>("2880").unwrap(),
            ResponseTimeLimit::from_label("48 hours").unwrap()
        );
    }

    #[test]
    fn lookup_tables() {
        assert_eq!(SAUDI_CITIES.len(), 19);
        assert!(is_known_city("Al-Ahsa"));
        assert!(!is_known_city("Dubai"));
        assert!(is_known_nationality("Other"));
        assert_eq!(DayOfWeek::ALL.first(), Some(&DayOfWeek::Sunday));
        assert!(ProjectType::PhotoShoot.categories().is_empty());
    }
}
