//! Keyword markers that announce and close report sections.

/// A named section announced by a line containing every keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionMarker {
    /// Section name, used as the category of its rows.
    pub name: &'static str,
    /// Lowercase keywords that must all appear on the header line.
    pub keywords: &'static [&'static str],
}

impl SectionMarker {
    /// `lower` must already be lowercased.
    pub fn matches(&self, lower: &str) -> bool {
        self.keywords.iter().all(|kw| lower.contains(kw))
    }
}

/// The single section a weekly report is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyTarget {
    pub section: SectionMarker,
    /// Any of these on a line ends the section and the scan.
    pub end_keywords: &'static [&'static str],
}

impl WeeklyTarget {
    pub fn ends_at(&self, lower: &str) -> bool {
        self.end_keywords.iter().any(|kw| lower.contains(kw))
    }
}

pub const BRANDED_BEEF: WeeklyTarget = WeeklyTarget {
    section: SectionMarker {
        name: "Upper 2/3 Choice",
        keywords: &["upper 2/3 choice", "items cuts"],
    },
    end_keywords: &["lower", "branded select"],
};

pub const UNGRADED_BEEF: WeeklyTarget = WeeklyTarget {
    section: SectionMarker {
        name: "Ungraded Cuts",
        keywords: &["ungraded cuts", "fat limitations"],
    },
    end_keywords: &["branded", "choice"],
};

/// Section whose rows carry no IMPS code.
pub const GROUND_BEEF_SECTION: &str = "Ground Beef";

/// Daily report sections, most specific first.
pub const DAILY_SECTIONS: &[SectionMarker] = &[
    SectionMarker {
        name: "Choice, Select & Ungraded",
        keywords: &["choice, select & ungraded", "fat limitations"],
    },
    SectionMarker {
        name: GROUND_BEEF_SECTION,
        keywords: &["gb - steer/heifer source", "10 pound chub"],
    },
    SectionMarker {
        name: "Choice Cuts",
        keywords: &["choice cuts", "fat limitations"],
    },
    SectionMarker {
        name: "Select Cuts",
        keywords: &["select cuts", "fat limitations"],
    },
];

/// Terms that together mark the pork column header row.
pub const PORK_DATA_START: &[&str] = &["pounds", "price"];
