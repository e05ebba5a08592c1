/// Topics offered as quick filters.
pub const TOPICS: [&str; 10] = [
    "Economy",
    "Elections",
    "Climate",
    "Healthcare",
    "Foreign Policy",
    "Immigration",
    "Technology",
    "Education",
    "Criminal Justice",
    "Social Issues",
];

/// Outlets users can mark as preferred.
pub const NEWS_SOURCES: [&str; 10] = [
    "BBC News",
    "CNN",
    "Fox News",
    "Reuters",
    "Associated Press",
    "The Guardian",
    "Wall Street Journal",
    "New York Times",
    "Washington Post",
    "NPR",
];
