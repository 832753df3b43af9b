//! Static content tables for the education hub.
//!
//! Blog posts and FAQ entries are compiled-in constants: they are defined at
//! process start and never mutated. In a full deployment this module would be
//! fed by a content API; the rest of the crate only sees the accessor
//! functions, so swapping the source later does not touch view code.
//!
//! Data records deliberately carry no presentation fields. Glyphs and colors
//! are resolved per category in the theme layer.

use chrono::NaiveDate;

// ============================================================================
// Category Domain
// ============================================================================

/// Closed set of blog post categories.
///
/// The filter value used by the view is `Option<Category>`, where `None`
/// stands for the "All" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Health,
    Nutrition,
    Wellness,
    History,
}

impl Category {
    /// All categories, in the order the filter cycles through them.
    pub const ALL: [Category; 4] = [
        Category::Health,
        Category::Nutrition,
        Category::Wellness,
        Category::History,
    ];

    /// Display name, also the value stored in `BlogPost.category`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Health => "Health",
            Self::Nutrition => "Nutrition",
            Self::Wellness => "Wellness",
            Self::History => "History",
        }
    }

    /// Parse a category name (case-insensitive). `"All"` is not a category;
    /// callers represent it as `None`.
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "health" => Some(Self::Health),
            "nutrition" => Some(Self::Nutrition),
            "wellness" => Some(Self::Wellness),
            "history" => Some(Self::History),
            _ => None,
        }
    }
}

// ============================================================================
// Blog Posts
// ============================================================================

/// A single education article card.
///
/// Immutable for the life of the process. `reading_time` is a display string
/// ("5 min"), not a duration the app computes with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub author: &'static str,
    pub date: NaiveDate,
    pub reading_time: &'static str,
    pub category: Category,
}

/// Construct a calendar date for the seeded tables.
///
/// All seeded dates are valid by construction; `from_ymd_opt` only returns
/// `None` for out-of-range input, which would be a typo in the table below.
const fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => d,
        None => panic!("invalid seed date in content table"),
    }
}

/// The seeded blog post table, in publication order (newest first).
static BLOG_POSTS: [BlogPost; 4] = [
    BlogPost {
        id: 1,
        title: "Understanding Your Menstrual Cycle",
        excerpt: "Learn about the phases of your menstrual cycle and how they affect your body.",
        author: "Dr. Emily Johnson",
        date: seed_date(2024, 3, 15),
        reading_time: "5 min",
        category: Category::Health,
    },
    BlogPost {
        id: 2,
        title: "Nutrition Tips for a Healthy Period",
        excerpt: "Discover the best foods to eat during your menstrual cycle for optimal health.",
        author: "Nutritionist Sarah Lee",
        date: seed_date(2024, 3, 10),
        reading_time: "4 min",
        category: Category::Nutrition,
    },
    BlogPost {
        id: 3,
        title: "Managing PMS Symptoms Naturally",
        excerpt: "Explore natural remedies and lifestyle changes to alleviate PMS symptoms.",
        author: "Holistic Health Coach Maria Garcia",
        date: seed_date(2024, 3, 5),
        reading_time: "6 min",
        category: Category::Wellness,
    },
    BlogPost {
        id: 4,
        title: "The History of Menstrual Products",
        excerpt: "A journey through time exploring the evolution of menstrual products.",
        author: "Historian Dr. Alex Thompson",
        date: seed_date(2024, 2, 28),
        reading_time: "7 min",
        category: Category::History,
    },
];

/// All blog posts in their original relative order.
pub fn blog_posts() -> &'static [BlogPost] {
    &BLOG_POSTS
}

// ============================================================================
// FAQ Entries
// ============================================================================

/// One expandable question/answer pair in the Period 101 section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub id: u32,
    pub question: &'static str,
    pub answer: &'static str,
}

static FAQ_ENTRIES: [FaqEntry; 3] = [
    FaqEntry {
        id: 1,
        question: "What is a period?",
        answer: "Your period or menstruation is part of your menstrual cycle. This cycle \
                 is ultimately your body's way of preparing itself for a possible pregnancy.",
    },
    FaqEntry {
        id: 2,
        question: "What are the signs that my period is coming?",
        answer: "Common signs include mood changes, breast tenderness, bloating, and mild \
                 cramping. These symptoms can vary from person to person.",
    },
    FaqEntry {
        id: 3,
        question: "How much blood do we lose during a period?",
        answer: "On average, women lose between 3-9 teaspoons of fluid a month during their \
                 period. About half of this is blood, while the rest is made up of tissue, \
                 nutrients, and cervical mucus.",
    },
];

/// All FAQ entries, in display order. `App::read_flags` is positionally
/// aligned to this slice.
pub fn faq_entries() -> &'static [FaqEntry] {
    &FAQ_ENTRIES
}

// ============================================================================
// Featured Article and Intro Copy
// ============================================================================

/// The highlighted article shown above the post grid.
pub struct FeaturedArticle {
    pub title: &'static str,
    pub blurb: &'static str,
}

pub static FEATURED: FeaturedArticle = FeaturedArticle {
    title: "Embracing Your Cycle: A Guide to Menstrual Wellness",
    blurb: "Discover how to work with your menstrual cycle for optimal health and well-being.",
};

/// Welcome paragraph for the Period 101 section.
pub static PERIOD_101_INTRO: &str =
    "Welcome to Period 101, your comprehensive guide to understanding menstruation. \
     Whether you're experiencing your first period or looking to deepen your knowledge, \
     we're here to help you navigate this important aspect of your health.";

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_ids_are_unique() {
        let mut ids: Vec<u32> = blog_posts().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), blog_posts().len());
    }

    #[test]
    fn faq_ids_are_unique() {
        let mut ids: Vec<u32> = faq_entries().iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), faq_entries().len());
    }

    #[test]
    fn every_category_appears_in_seed_data() {
        for cat in Category::ALL {
            assert!(
                blog_posts().iter().any(|p| p.category == cat),
                "no seeded post for category {}",
                cat.name()
            );
        }
    }

    #[test]
    fn category_name_round_trips() {
        for cat in Category::ALL {
            assert_eq!(Category::from_str_name(cat.name()), Some(cat));
        }
        assert_eq!(Category::from_str_name("NUTRITION"), Some(Category::Nutrition));
        assert_eq!(Category::from_str_name("All"), None);
        assert_eq!(Category::from_str_name("sports"), None);
    }

    #[test]
    fn posts_are_in_publication_order() {
        let dates: Vec<_> = blog_posts().iter().map(|p| p.date).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }
}
