//! Static marketing copy for the landing page.

use icondata::Icon;

use crate::components::icons as ic;

pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub points: &'static [&'static str],
}

pub struct Highlight {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Plan {
    pub icon: Icon,
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub popular: bool,
    pub points: &'static [&'static str],
}

impl Plan {
    /// Custom-priced plans go through sales instead of a trial.
    pub fn cta(&self) -> &'static str {
        if self.price == "Custom" {
            "Contact Sales"
        } else {
            "Start Free Trial"
        }
    }
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: ic::SHIELD,
        title: "Enterprise Security",
        description: "Bank-level encryption and compliance with industry standards",
        points: &[
            "AES-256 encryption",
            "SOC 2 compliance",
            "GDPR compliant",
            "End-to-end encryption",
        ],
    },
    Feature {
        icon: ic::DASHBOARD,
        title: "Real-time Tracking",
        description: "Monitor transfers with detailed progress and analytics",
        points: &[
            "Live monitoring",
            "Transfer analytics",
            "Performance metrics",
            "Complete history",
        ],
    },
    Feature {
        icon: ic::DOLLAR,
        title: "Cost Transparency",
        description: "Clear pricing with no hidden fees or surprises",
        points: &[
            "Upfront costs",
            "No hidden fees",
            "Detailed billing",
            "Cost optimization",
        ],
    },
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: ic::SPEED,
        title: "Lightning Fast",
        description: "Optimized transfer speeds",
    },
    Highlight {
        icon: ic::LINK,
        title: "Global Network",
        description: "Worldwide infrastructure",
    },
    Highlight {
        icon: ic::PENDING,
        title: "Scheduled Transfers",
        description: "Automated operations",
    },
    Highlight {
        icon: ic::USER,
        title: "Team Collaboration",
        description: "Share with your team",
    },
    Highlight {
        icon: ic::SHIELD,
        title: "Access Controls",
        description: "Granular permissions",
    },
    Highlight {
        icon: ic::CLOUD,
        title: "Multi-Cloud",
        description: "20+ cloud providers",
    },
];

pub const PLANS: &[Plan] = &[
    Plan {
        icon: ic::USER,
        name: "Starter",
        price: "$9",
        period: "/month",
        popular: false,
        points: &[
            "100GB transfers/month",
            "5 cloud connections",
            "Basic monitoring",
            "Email support",
        ],
    },
    Plan {
        icon: ic::SPEED,
        name: "Professional",
        price: "$29",
        period: "/month",
        popular: true,
        points: &[
            "1TB transfers/month",
            "Unlimited connections",
            "Real-time analytics",
            "Priority support",
            "Team collaboration",
            "API access",
        ],
    },
    Plan {
        icon: ic::STORAGE,
        name: "Enterprise",
        price: "Custom",
        period: "",
        popular: false,
        points: &[
            "Unlimited transfers",
            "All platforms",
            "Advanced analytics",
            "24/7 support",
            "SSO integration",
            "SLA guarantees",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_popular_plan() {
        assert_eq!(PLANS.iter().filter(|p| p.popular).count(), 1);
    }

    #[test]
    fn test_plan_cta() {
        let ctas: Vec<_> = PLANS.iter().map(|p| p.cta()).collect();
        assert_eq!(ctas, ["Start Free Trial", "Start Free Trial", "Contact Sales"]);
    }
}
