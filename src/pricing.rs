//! Static pricing tracks and the one fully worked quote.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackId {
    Machines,
    Ecommerce,
    Business,
    Custom,
}

impl TrackId {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackId::Machines => "machines",
            TrackId::Ecommerce => "ecommerce",
            TrackId::Business => "business",
            TrackId::Custom => "custom",
        }
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingTrack {
    pub id: TrackId,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub available: bool,
    pub highlight: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteModule {
    pub name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaintenancePlan {
    pub name: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteDetail {
    pub track: TrackId,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub total_price: &'static str,
    pub timeline: &'static str,
    pub modules: &'static [QuoteModule],
    pub maintenance: &'static [MaintenancePlan],
    pub payment_terms: &'static [&'static str],
}

pub const TRACKS: &[PricingTrack] = &[
    PricingTrack {
        id: TrackId::Machines,
        icon: "bx-cog",
        title: "⚙️ Machine Management System",
        description: "An MVP for tracking machine status, simple and easy to use",
        features: &[
            "Machine status tracking",
            "Moves between yard and branches",
            "Full activity log",
            "Accessible interface",
        ],
        available: true,
        highlight: true,
    },
    PricingTrack {
        id: TrackId::Ecommerce,
        icon: "bx-store",
        title: "🛒 Online Store",
        description: "A full-featured online sales platform",
        features: &[
            "Shopping cart",
            "Secure payments",
            "Inventory management",
            "CRM",
        ],
        available: false,
        highlight: false,
    },
    PricingTrack {
        id: TrackId::Business,
        icon: "bx-briefcase",
        title: "💼 Business Website",
        description: "A professional presence for your business",
        features: &[
            "Custom design",
            "Advanced SEO",
            "Admin panel",
            "Analytics",
        ],
        available: false,
        highlight: false,
    },
    PricingTrack {
        id: TrackId::Custom,
        icon: "bx-customize",
        title: "⚙️ Custom Solution",
        description: "A system built entirely around your needs",
        features: &[
            "Consulting and planning",
            "Custom development",
            "Integrations",
            "Full support",
        ],
        available: false,
        highlight: false,
    },
];

pub const MACHINES_QUOTE: QuoteDetail = QuoteDetail {
    track: TrackId::Machines,
    title: "Machine Management System (MVP)",
    subtitle: "One place that shows the state of every machine",
    total_price: "8,000",
    timeline: "100 hours of work",
    modules: &[
        QuoteModule {
            name: "Machine dashboard",
            description: "Main screen listing every machine by location",
            features: &[
                "Central view of all machines",
                "Grouped by yard / north branch / south branch",
                "Drag & drop between locations",
                "Colour statuses: green / blue / yellow / red",
                "Fast search and filtering",
            ],
        },
        QuoteModule {
            name: "Machine detail page",
            description: "A dedicated page with every detail and action",
            features: &[
                "Full machine details",
                "History of moves and changes",
                "Notes per user and date",
                "Backed-up notes table",
                "Recycle bin for restores",
            ],
        },
        QuoteModule {
            name: "Status management",
            description: "Intuitive colour coding for machine state",
            features: &[
                "🟢 Green: rented and working",
                "🔵 Blue: waiting",
                "🟡 Yellow: rental period ended",
                "🔴 Red: broken",
                "One-click status updates",
            ],
        },
        QuoteModule {
            name: "Secure sign-in",
            description: "Data protection and user permissions",
            features: &[
                "Secure user sign-in",
                "Permission management",
                "Full audit log",
                "Encryption of sensitive data",
                "Automatic database backups",
            ],
        },
        QuoteModule {
            name: "Responsive interface",
            description: "Full mobile and tablet support",
            features: &[
                "Clean, accessible interface",
                "Fits every screen size",
                "Tablet and mobile support",
                "Modern UI/UX",
                "Fast user experience",
            ],
        },
    ],
    maintenance: &[
        MaintenancePlan {
            name: "Monthly plan",
            features: &[
                "Ongoing updates",
                "Bug fixes",
                "Database backups",
                "Security upgrades",
                "Hosting, server and domain management included",
            ],
        },
        MaintenancePlan {
            name: "Yearly plan",
            features: &[
                "Everything in the monthly plan",
                "One month of maintenance free",
                "Priority support",
                "Yearly review meeting",
                "Planning of future upgrades",
            ],
        },
        MaintenancePlan {
            name: "Pay per task",
            features: &[
                "Pay only when something needs changing",
                "Hourly pricing",
                "Hosting and domain handled by the client",
                "No monthly commitment",
                "Maximum flexibility",
            ],
        },
    ],
    payment_terms: &[
        "25% deposit on signing",
        "Balance: up to 3 payments by milestone",
        "Final payment on delivery",
    ],
};

pub fn track(id: TrackId) -> Option<&'static PricingTrack> {
    TRACKS.iter().find(|t| t.id == id)
}
