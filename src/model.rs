use chrono::NaiveDate;
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};

pub type ItemId = String;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One tracked perishable. `date` is the expiration date, serialized as
/// `YYYY-MM-DD` in the store file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Expired,
    Soon,
    Normal,
}

impl Urgency {
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Urgency::Expired => Some("Expired"),
            Urgency::Soon => Some("Expiring soon"),
            Urgency::Normal => None,
        }
    }
}

/// Classifies an expiration date against `today` (both local midnights).
/// Past dates are expired; anything within the next two days counts as soon.
pub fn classify(date: NaiveDate, today: NaiveDate) -> Urgency {
    let days = date.signed_duration_since(today).num_days();
    if days < 0 {
        Urgency::Expired
    } else if days <= 2 {
        Urgency::Soon
    } else {
        Urgency::Normal
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ItemError {
    #[error("name is required")]
    NameRequired,
    #[error("date is required")]
    DateRequired,
    #[error("invalid date (use YYYY-MM-DD): {0}")]
    InvalidDate(String),
    #[error("item not found: {0}")]
    NotFound(String),
}

pub fn parse_date(input: &str) -> Result<NaiveDate, ItemError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ItemError::DateRequired);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| ItemError::InvalidDate(trimmed.to_string()))
}

/// The in-memory item collection. Owned by whichever surface is running
/// (CLI command or TUI app) and persisted through `storage` after every
/// successful mutation.
#[derive(Debug, Default, Clone)]
pub struct Pantry {
    items: Vec<Item>,
}

impl Pantry {
    pub fn new(items: Vec<Item>) -> Self {
        Pantry { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Adds an item with a fresh id. An empty name or an empty/unparseable
    /// date rejects the whole operation without touching the collection.
    pub fn add(&mut self, name: &str, date: &str) -> Result<Item, ItemError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ItemError::NameRequired);
        }
        let date = parse_date(date)?;
        let item = Item {
            id: self.fresh_id(),
            name: name.to_string(),
            date,
        };
        self.items.push(item.clone());
        Ok(item)
    }

    /// Removes the item with the given id. Returns whether anything was
    /// removed; an absent id is not an error.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Rewrites an existing item's name and date in place, keeping its id
    /// and position. Same field constraints as `add`.
    pub fn update(&mut self, id: &str, name: &str, date: &str) -> Result<(), ItemError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ItemError::NameRequired);
        }
        let date = parse_date(date)?;
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| ItemError::NotFound(id.to_string()))?;
        item.name = name.to_string();
        item.date = date;
        Ok(())
    }

    /// All items ordered ascending by expiration date. The sort is stable,
    /// so items sharing a date keep their insertion order.
    pub fn sorted(&self) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.items.iter().collect();
        items.sort_by_key(|item| item.date);
        items
    }

    fn fresh_id(&self) -> ItemId {
        loop {
            let id = generate_id();
            if !self.items.iter().any(|item| item.id == id) {
                return id;
            }
        }
    }
}

fn generate_id() -> ItemId {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn add_assigns_unique_ids_and_trims_name() {
        let mut pantry = Pantry::default();
        let a = pantry.add("  Milk  ", "2024-01-05").unwrap();
        let b = pantry.add("Eggs", "2024-01-02").unwrap();
        assert_eq!(a.name, "Milk");
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert_eq!(pantry.len(), 2);
    }

    #[test]
    fn add_rejects_empty_fields_without_mutating() {
        let mut pantry = Pantry::default();
        assert_eq!(pantry.add("   ", "2024-01-05"), Err(ItemError::NameRequired));
        assert_eq!(pantry.add("Milk", ""), Err(ItemError::DateRequired));
        assert_eq!(
            pantry.add("Milk", "tomorrow"),
            Err(ItemError::InvalidDate("tomorrow".into()))
        );
        assert!(pantry.is_empty());
    }

    #[test]
    fn remove_is_idempotent() {
        let mut pantry = Pantry::default();
        let item = pantry.add("Milk", "2024-01-05").unwrap();
        assert!(pantry.remove(&item.id));
        assert!(!pantry.remove(&item.id));
        assert!(pantry.sorted().iter().all(|i| i.id != item.id));
    }

    #[test]
    fn update_rewrites_in_place() {
        let mut pantry = Pantry::default();
        let item = pantry.add("Milk", "2024-01-05").unwrap();
        pantry.update(&item.id, "Oat milk", "2024-01-09").unwrap();
        let updated = pantry.get(&item.id).unwrap();
        assert_eq!(updated.name, "Oat milk");
        assert_eq!(updated.date, date("2024-01-09"));
    }

    #[test]
    fn update_rejects_invalid_fields_without_mutating() {
        let mut pantry = Pantry::default();
        let item = pantry.add("Milk", "2024-01-05").unwrap();
        assert_eq!(
            pantry.update(&item.id, "", "2024-01-09"),
            Err(ItemError::NameRequired)
        );
        assert_eq!(
            pantry.update("nosuch", "Milk", "2024-01-09"),
            Err(ItemError::NotFound("nosuch".into()))
        );
        let unchanged = pantry.get(&item.id).unwrap();
        assert_eq!(unchanged.name, "Milk");
        assert_eq!(unchanged.date, date("2024-01-05"));
    }

    #[test]
    fn sorted_is_ascending_and_stable() {
        let mut pantry = Pantry::default();
        let c = pantry.add("Cheese", "2024-02-01").unwrap();
        let a = pantry.add("Milk", "2024-01-05").unwrap();
        let b = pantry.add("Eggs", "2024-01-05").unwrap();
        let order: Vec<&str> = pantry.sorted().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(order, vec![a.id.as_str(), b.id.as_str(), c.id.as_str()]);
    }

    #[test]
    fn classify_thresholds() {
        let today = date("2024-01-03");
        assert_eq!(classify(date("2024-01-01"), today), Urgency::Expired);
        assert_eq!(classify(date("2024-01-02"), today), Urgency::Expired);
        assert_eq!(classify(today, today), Urgency::Soon);
        assert_eq!(classify(date("2024-01-05"), today), Urgency::Soon);
        assert_eq!(classify(date("2024-01-06"), today), Urgency::Normal);
    }

    #[test]
    fn end_to_end_sort_and_classify() {
        let today = date("2024-01-03");
        let mut pantry = Pantry::default();
        pantry.add("Milk", "2024-01-05").unwrap();
        pantry.add("Eggs", "2024-01-02").unwrap();
        let sorted = pantry.sorted();
        assert_eq!(sorted[0].name, "Eggs");
        assert_eq!(sorted[1].name, "Milk");
        assert_eq!(classify(sorted[0].date, today), Urgency::Expired);
        assert_eq!(classify(sorted[1].date, today), Urgency::Soon);
    }
}
