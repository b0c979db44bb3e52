//! The static competitor target list.
//!
//! Iteration order matches declaration order; artifact filenames depend on
//! the names only.

/// One site to capture: a short artifact name and the page URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    /// Short name, used as the artifact file stem.
    pub name: &'static str,
    /// Page URL to navigate to.
    pub url: &'static str,
}

/// The competitor sites captured on every run.
pub const TARGETS: &[Target] = &[
    Target {
        name: "ryval",
        url: "https://www.ryval.app/",
    },
    Target {
        name: "footyaddicts",
        url: "https://footyaddicts.com/",
    },
    Target {
        name: "ftplay",
        url: "https://www.ftplayapp.com/",
    },
    Target {
        name: "matchup",
        url: "https://www.matchupapp.co/",
    },
    Target {
        name: "squaded",
        url: "https://www.squaded.app/",
    },
    Target {
        name: "teamstats",
        url: "https://www.teamstats.net/",
    },
    Target {
        name: "findaplayer",
        url: "https://findaplayer.com/",
    },
    Target {
        name: "firstwhistle",
        url: "https://www.firstwhistle.app/",
    },
    Target {
        name: "mynextfootballteam",
        url: "https://www.mynextfootballteam.com/",
    },
];
