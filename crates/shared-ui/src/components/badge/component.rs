use dioxus::prelude::*;
use shared_types::{status_badge_label, status_tone, StatusTone};

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Outline => "outline",
        }
    }
}

/// Colour family, applied through the `data-tone` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeTone {
    Yellow,
    Blue,
    Orange,
    Green,
    Purple,
    Red,
    #[default]
    Neutral,
}

impl BadgeTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeTone::Yellow => "yellow",
            BadgeTone::Blue => "blue",
            BadgeTone::Orange => "orange",
            BadgeTone::Green => "green",
            BadgeTone::Purple => "purple",
            BadgeTone::Red => "red",
            BadgeTone::Neutral => "neutral",
        }
    }
}

impl From<StatusTone> for BadgeTone {
    fn from(tone: StatusTone) -> Self {
        match tone {
            StatusTone::Yellow => BadgeTone::Yellow,
            StatusTone::Blue => BadgeTone::Blue,
            StatusTone::Orange => BadgeTone::Orange,
            StatusTone::Green => BadgeTone::Green,
            StatusTone::Purple => BadgeTone::Purple,
            StatusTone::Red => BadgeTone::Red,
            StatusTone::Neutral => BadgeTone::Neutral,
        }
    }
}

/// Inline pill for labels and statuses.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(default)] tone: BadgeTone,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
        Attribute::new("data-tone", tone.as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

/// Badge for an order status key: tone from the status table, text
/// upper-cased with underscores turned into spaces.
#[component]
pub fn StatusBadge(status: String) -> Element {
    let tone = BadgeTone::from(status_tone(&status));
    let label = status_badge_label(&status);

    rsx! {
        Badge { tone: tone, "{label}" }
    }
}
