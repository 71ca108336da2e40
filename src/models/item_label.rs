// Conversions between user-typed item names and item identifiers

use crate::models::ItemId;

/// Normalizes a user-typed item name into an item identifier.
///
/// The name is lowercased and trimmed, then whitespace-separated words are
/// joined camel-style: `"Organic  chopped kale"` becomes `"organicChoppedKale"`.
/// Returns `None` for blank input.
pub fn normalize_item_label(raw: &str) -> Option<ItemId> {
    let lowered = raw.trim().to_lowercase();
    let mut words = lowered.split_whitespace();
    let mut id = ItemId::from(words.next()?);

    for word in words {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            id.extend(first.to_uppercase());
            id.push_str(chars.as_str());
        }
    }

    Some(id)
}

/// Renders an item identifier as a human-readable label.
///
/// A space is inserted before every uppercase letter and the first letter is
/// capitalized: `"organicChoppedKale"` becomes `"Organic Chopped Kale"`.
pub fn denormalize_item_label(id: &str) -> String {
    let mut label = String::with_capacity(id.len() + 4);

    for ch in id.chars() {
        if ch.is_uppercase() {
            label.push(' ');
        }
        if label.is_empty() {
            label.extend(ch.to_uppercase());
        } else {
            label.push(ch);
        }
    }

    label.trim().to_string()
}
