//! Person identity and derivation helpers.
//!
//! People are not a stored entity: the set of people "in play" is derived
//! from the union of all line items' assignees, so a person appears in or
//! disappears from computations solely by gaining or losing an
//! assignment. The derivation lives here, outside the engine functions,
//! so tests and callers can pass arbitrary people lists (including people
//! with zero assignments, for equal-split scenarios).

use super::LineItem;

/// An opaque person identifier, unique within a receipt's party.
///
/// In the current contract this is the person's display name.
pub type PersonId = String;

/// Derives the distinct set of people from line item assignments, in
/// first-appearance order.
///
/// # Examples
///
/// ```
/// use split_engine::models::{LineItem, people_from_line_items};
/// use rust_decimal::Decimal;
///
/// let item = LineItem {
///     id: "i1".to_string(),
///     name: "Shared plate".to_string(),
///     price_per_unit: Decimal::new(2000, 2),
///     quantity: Decimal::ONE,
///     total_price: Decimal::new(2000, 2),
///     assignees: vec!["Alice".to_string(), "Bob".to_string()],
/// };
/// assert_eq!(people_from_line_items(&[item]), vec!["Alice", "Bob"]);
/// ```
pub fn people_from_line_items(line_items: &[LineItem]) -> Vec<PersonId> {
    let mut people: Vec<PersonId> = Vec::new();

    for item in line_items {
        for person in &item.assignees {
            if !people.contains(person) {
                people.push(person.clone());
            }
        }
    }

    people
}

/// Filters people for an assignment picker: drops people already assigned
/// to the item and, when a search string is given, keeps only
/// case-insensitive substring matches.
///
/// An empty search string behaves the same as no search string.
pub fn filter_people(
    people: &[PersonId],
    assigned_people: &[PersonId],
    search_value: Option<&str>,
) -> Vec<PersonId> {
    let unassigned = people
        .iter()
        .filter(|person| !assigned_people.contains(person));

    match search_value.filter(|s| !s.is_empty()) {
        Some(search) => {
            let search = search.to_lowercase();
            unassigned
                .filter(|person| person.to_lowercase().contains(&search))
                .cloned()
                .collect()
        }
        None => unassigned.cloned().collect(),
    }
}
