//! Autocomplete over a fixed grocery vocabulary.

/// Maximum number of suggestions returned by default.
pub const DEFAULT_LIMIT: usize = 8;

/// Common grocery items offered as suggestions.
pub const COMMON_ITEMS: &[&str] = &[
    "Apples", "Avocado", "Bananas", "Basil", "Beef", "Bell Peppers", "Blueberries", "Bread",
    "Broccoli", "Butter", "Carrots", "Celery", "Cheddar Cheese", "Chicken", "Cilantro",
    "Cinnamon", "Coffee", "Corn", "Cottage Cheese", "Cucumber", "Eggs", "Flour", "Garlic",
    "Grapes", "Greek Yogurt", "Green Onions", "Ground Beef", "Ham", "Honey", "Hot Dogs", "Juice",
    "Ketchup", "Lemons", "Lettuce", "Limes", "Milk", "Mozzarella", "Mushrooms", "Mustard", "Oats",
    "Olive Oil", "Onions", "Oranges", "Pasta", "Peanut Butter", "Pork Chops", "Potatoes", "Rice",
    "Salmon", "Salt", "Sausage", "Spinach", "Strawberries", "Sugar", "Tomatoes", "Tortillas",
    "Turkey", "Vanilla", "Yogurt",
];

/// Items offered as one-tap pills next to the input.
pub const QUICK_ADD_ITEMS: &[&str] = &["Milk", "Bread", "Eggs", "Cheese", "Butter"];

/// Rank `vocabulary` entries against `query`.
///
/// Prefix matches come first, then entries that only contain the query;
/// both groups keep vocabulary order. Matching ignores case and surrounding
/// whitespace in the query. An empty query matches nothing.
pub fn suggest<S: AsRef<str>>(query: &str, vocabulary: &[S], limit: usize) -> Vec<String> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() || limit == 0 {
        return Vec::new();
    }

    let lowered: Vec<(usize, String)> = vocabulary
        .iter()
        .enumerate()
        .map(|(idx, entry)| (idx, entry.as_ref().to_lowercase()))
        .collect();

    let starts = lowered
        .iter()
        .filter(|(_, name)| name.starts_with(&needle))
        .map(|(idx, _)| *idx);
    let contains = lowered
        .iter()
        .filter(|(_, name)| !name.starts_with(&needle) && name.contains(&needle))
        .map(|(idx, _)| *idx);

    starts
        .chain(contains)
        .take(limit)
        .map(|idx| vocabulary[idx].as_ref().to_string())
        .collect()
}

/// Vocabulary plus result limit.
#[derive(Debug, Clone)]
pub struct SuggestionMatcher {
    vocabulary: Vec<String>,
    limit: usize,
}

impl Default for SuggestionMatcher {
    fn default() -> Self {
        Self::new(COMMON_ITEMS.iter().map(|s| s.to_string()).collect())
    }
}

impl SuggestionMatcher {
    pub fn new(vocabulary: Vec<String>) -> Self {
        Self {
            vocabulary,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn suggest(&self, query: &str) -> Vec<String> {
        suggest(query, &self.vocabulary, self.limit)
    }
}
