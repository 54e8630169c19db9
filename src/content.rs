//! Literal page content. Everything here is `'static` and read-only.

/// Percentage clamped to 0..=100.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Percent(u8);

impl Percent {
    pub const fn new(value: u8) -> Self {
        if value > 100 {
            Percent(100)
        } else {
            Percent(value)
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub title: &'static str,
    pub message: &'static str,
    pub time: &'static str,
    pub progress: Option<Percent>,
    pub image: Option<&'static str>,
}

pub const NOTIFICATIONS: &[Notification] = &[
    Notification {
        id: 1,
        title: "Villa Les Jardins d'Élégance",
        message: "Installation de l'éclairage paysager terminée ✨",
        time: "Il y a 5 min",
        progress: Some(Percent::new(100)),
        image: None,
    },
    Notification {
        id: 2,
        title: "Domaine du Lac",
        message: "Nouvelles photos du bassin aquatique 🌿",
        time: "Il y a 12 min",
        progress: None,
        image: Some(APP_SCREENSHOT),
    },
    Notification {
        id: 3,
        title: "Résidence Les Magnolias",
        message: "Validation du plan d'aménagement ⭐️",
        time: "Il y a 25 min",
        progress: Some(Percent::new(65)),
        image: None,
    },
];

/// Glyphs stand in for the icon set; each maps to a CSS class as well.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Users,
    Star,
    Award,
    Leaf,
    Clock,
    MapPin,
    Phone,
    CheckCircle,
    Euro,
    Shield,
    Heart,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Users => "👥",
            Icon::Star => "★",
            Icon::Award => "🏅",
            Icon::Leaf => "🌿",
            Icon::Clock => "🕒",
            Icon::MapPin => "📍",
            Icon::Phone => "📱",
            Icon::CheckCircle => "✔",
            Icon::Euro => "€",
            Icon::Shield => "🛡",
            Icon::Heart => "♥",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Icon::Users => "icon icon-users",
            Icon::Star => "icon icon-star",
            Icon::Award => "icon icon-award",
            Icon::Leaf => "icon icon-leaf",
            Icon::Clock => "icon icon-clock",
            Icon::MapPin => "icon icon-map-pin",
            Icon::Phone => "icon icon-phone",
            Icon::CheckCircle => "icon icon-check",
            Icon::Euro => "icon icon-euro",
            Icon::Shield => "icon icon-shield",
            Icon::Heart => "icon icon-heart",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub icon: Icon,
    pub value: u32,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { icon: Icon::Users, value: 500, label: "Clients Satisfaits" },
    Stat { icon: Icon::Star, value: 150, label: "Projets Réalisés" },
    Stat { icon: Icon::Award, value: 50, label: "Apprentis Formés" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub icon: Icon,
    pub title: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: Icon::Leaf,
        title: "Création Paysagère",
        price: "Sur devis",
        period: "personnalisé",
        description: "Conception et réalisation de jardins d'exception. Nous créons des espaces uniques qui reflètent votre personnalité et subliment votre propriété.",
    },
    Service {
        icon: Icon::Clock,
        title: "Entretien Premium",
        price: "À partir de 250€",
        period: "/mois",
        description: "Service d'entretien haute qualité avec suivi personnalisé. Nos experts prennent soin de votre jardin avec passion et précision.",
    },
    Service {
        icon: Icon::MapPin,
        title: "Aménagement Extérieur",
        price: "Sur devis",
        period: "personnalisé",
        description: "Création d'espaces de vie extérieurs luxueux. Terrasses, piscines, éclairages et mobilier haut de gamme pour sublimer votre extérieur.",
    },
];

/// Rows of the "Suivi en Temps Réel" section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub text: &'static str,
}

pub const APP_FEATURES: &[Feature] = &[
    Feature {
        icon: Icon::Phone,
        title: "Suivi Photo Quotidien",
        text: "Visualisez l'évolution de votre projet jour après jour",
    },
    Feature {
        icon: Icon::CheckCircle,
        title: "Validation des Étapes",
        text: "Gardez le contrôle sur chaque phase du projet",
    },
    Feature {
        icon: Icon::Euro,
        title: "Transparence Totale",
        text: "Suivez les coûts en temps réel",
    },
];

pub const COMMITMENTS: &[Feature] = &[
    Feature {
        icon: Icon::Shield,
        title: "Formation Certifiée",
        text: "Nos apprentis suivent un programme rigoureux sous la supervision constante de professionnels expérimentés, garantissant des prestations de haute qualité.",
    },
    Feature {
        icon: Icon::Star,
        title: "Excellence Garantie",
        text: "Notre engagement qualité est total. Nous offrons une garantie satisfait ou remboursé sur l'ensemble de nos prestations.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub author: &'static str,
    pub place: &'static str,
    pub quote: &'static str,
    /// Stars out of five.
    pub rating: u8,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        author: "Claire M.",
        place: "Valréas",
        quote: "Un suivi impeccable et une équipe très professionnelle. Je recommande vivement !",
        rating: 5,
    },
    Testimonial {
        author: "Jean-Luc R.",
        place: "Grignan",
        quote: "Les apprentis ont transformé notre terrasse. Travail soigné et photos envoyées chaque soir dans l'application.",
        rating: 5,
    },
    Testimonial {
        author: "Sophie et Marc D.",
        place: "Richerenches",
        quote: "Entretien régulier de notre parc, toujours à l'heure et de très bons conseils.",
        rating: 4,
    },
];

pub const MAX_RATING: u8 = 5;

/// Filled and empty stars for a rating, capped at [`MAX_RATING`].
pub fn stars(rating: u8) -> (u8, u8) {
    let filled = rating.min(MAX_RATING);
    (filled, MAX_RATING - filled)
}

/// Mean rating shown on the review badge, one decimal. `None` without reviews.
pub fn average_rating(testimonials: &[Testimonial]) -> Option<f32> {
    if testimonials.is_empty() {
        return None;
    }
    let total: u32 = testimonials
        .iter()
        .map(|t| u32::from(t.rating.min(MAX_RATING)))
        .sum();
    let mean = total as f32 / testimonials.len() as f32;
    Some((mean * 10.0).round() / 10.0)
}

pub const APP_SCREENSHOT: &str =
    "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?auto=format&fit=crop&q=80";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn percent_is_clamped() {
        assert_eq!(Percent::new(140).get(), 100);
        assert_eq!(Percent::new(65).get(), 65);
    }

    #[test]
    fn notification_ids_are_unique() {
        let ids: HashSet<u32> = NOTIFICATIONS.iter().map(|n| n.id).collect();
        assert_eq!(ids.len(), NOTIFICATIONS.len());
        assert!(!NOTIFICATIONS.is_empty());
    }

    #[test]
    fn star_split_always_totals_five() {
        assert_eq!(stars(4), (4, 1));
        assert_eq!(stars(9), (5, 0));
        for testimonial in TESTIMONIALS {
            let (filled, empty) = stars(testimonial.rating);
            assert_eq!(filled + empty, MAX_RATING);
        }
    }

    #[test]
    fn badge_average_rounds_to_one_decimal() {
        assert_eq!(average_rating(&[]), None);
        assert_eq!(average_rating(TESTIMONIALS), Some(4.7));
    }
}
