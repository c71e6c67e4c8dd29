//! English pluralization for resource names

/// Nouns whose plural is not derivable from the ending
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("goose", "geese"),
    ("mouse", "mice"),
    ("criterion", "criteria"),
    ("datum", "data"),
    ("index", "indices"),
    ("status", "statuses"),
];

/// Nouns with identical singular and plural forms
const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "media",
    "money",
    "news",
    "series",
    "sheep",
    "species",
    "fish",
];

/// Pluralize the final word of a lower-cased identifier.
///
/// Hyphenated and underscored compounds pluralize their last segment only,
/// so `article-comment` becomes `article-comments`.
pub fn plural(word: &str) -> String {
    if let Some(split) = word.rfind(['-', '_']) {
        let (head, tail) = word.split_at(split + 1);
        return format!("{}{}", head, plural_word(tail));
    }
    plural_word(word)
}

fn plural_word(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }
    if UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((_, p)) = IRREGULAR.iter().find(|(s, _)| *s == word) {
        return (*p).to_string();
    }

    if let Some(stem) = word.strip_suffix('y') {
        // consonant + y -> ies (company -> companies), vowel + y -> ys
        match stem.chars().last() {
            Some('a') | Some('e') | Some('i') | Some('o') | Some('u') => format!("{}s", word),
            Some(_) => format!("{}ies", stem),
            None => format!("{}s", word),
        }
    } else if word.ends_with('s')
        || word.ends_with('x')
        || word.ends_with('z')
        || word.ends_with("ch")
        || word.ends_with("sh")
    {
        format!("{}es", word)
    } else if let Some(stem) = word.strip_suffix("fe") {
        format!("{}ves", stem)
    } else if let Some(stem) = word.strip_suffix('f') {
        format!("{}ves", stem)
    } else {
        format!("{}s", word)
    }
}
