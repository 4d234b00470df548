//! Delimited-text table loaders
//!
//! Reads the three semicolon-delimited source tables (items, users,
//! ratings) in their Book-Crossing column layout and builds the
//! immutable [`Catalog`]. Malformed rows are quarantined at this
//! boundary - logged and counted, never handed to the core.

use crate::error::{IngestError, Result};
use csv::{ReaderBuilder, StringRecord};
use readnext_core::{Catalog, Item, RatingEvent, User};
use std::path::Path;
use tracing::{info, warn};

const ITEM_ID: &str = "ISBN";
const ITEM_TITLE: &str = "Book-Title";
const ITEM_AUTHOR: &str = "Book-Author";
const USER_ID: &str = "User-ID";
const RATING_VALUE: &str = "Book-Rating";

fn reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    Ok(ReaderBuilder::new()
        .delimiter(b';')
        .escape(Some(b'\\'))
        .flexible(true)
        .from_path(path)?)
}

fn field<'r>(record: &'r StringRecord, headers: &StringRecord, name: &str) -> Option<&'r str> {
    let index = headers.iter().position(|h| h == name)?;
    record.get(index)
}

/// Collect columns beyond the ones the core reads into a payload
fn extra_payload(
    record: &StringRecord,
    headers: &StringRecord,
    known: &[&str],
) -> Option<serde_json::Value> {
    let mut map = serde_json::Map::new();
    for (header, value) in headers.iter().zip(record.iter()) {
        if !known.contains(&header) {
            map.insert(header.to_string(), serde_json::Value::String(value.to_string()));
        }
    }
    if map.is_empty() {
        None
    } else {
        Some(serde_json::Value::Object(map))
    }
}

/// Load the item table
pub fn load_items(path: &Path) -> Result<Vec<Item>> {
    let mut reader = reader(path)?;
    let headers = reader.headers()?.clone();

    let mut items = Vec::new();
    let mut quarantined = 0usize;
    for row in reader.records() {
        let record = row?;
        let id = field(&record, &headers, ITEM_ID);
        let title = field(&record, &headers, ITEM_TITLE);
        let author = field(&record, &headers, ITEM_AUTHOR);
        match (id, title, author) {
            (Some(id), Some(title), Some(author)) if !id.is_empty() => {
                let mut item = Item::new(id, title, author);
                if let Some(payload) =
                    extra_payload(&record, &headers, &[ITEM_ID, ITEM_TITLE, ITEM_AUTHOR])
                {
                    item = item.with_payload(payload);
                }
                items.push(item);
            }
            _ => quarantined += 1,
        }
    }

    if quarantined > 0 {
        warn!("Quarantined {} malformed item rows from {:?}", quarantined, path);
    }
    Ok(items)
}

/// Load the user table
pub fn load_users(path: &Path) -> Result<Vec<User>> {
    let mut reader = reader(path)?;
    let headers = reader.headers()?.clone();

    let mut users = Vec::new();
    let mut quarantined = 0usize;
    for row in reader.records() {
        let record = row?;
        match field(&record, &headers, USER_ID) {
            Some(id) if !id.is_empty() => {
                let mut user = User::new(id);
                user.payload = extra_payload(&record, &headers, &[USER_ID]);
                users.push(user);
            }
            _ => quarantined += 1,
        }
    }

    if quarantined > 0 {
        warn!("Quarantined {} malformed user rows from {:?}", quarantined, path);
    }
    Ok(users)
}

/// Load the rating table
///
/// Rating values are parsed from text; rows with an unparseable
/// value are quarantined rather than defaulted.
pub fn load_ratings(path: &Path) -> Result<Vec<RatingEvent>> {
    let mut reader = reader(path)?;
    let headers = reader.headers()?.clone();

    let mut ratings = Vec::new();
    let mut quarantined = 0usize;
    for row in reader.records() {
        let record = row?;
        let user_id = field(&record, &headers, USER_ID);
        let item_id = field(&record, &headers, ITEM_ID);
        let value = field(&record, &headers, RATING_VALUE).and_then(|v| v.trim().parse::<f32>().ok());
        match (user_id, item_id, value) {
            (Some(user_id), Some(item_id), Some(rating))
                if !user_id.is_empty() && !item_id.is_empty() =>
            {
                ratings.push(RatingEvent::new(user_id, item_id, rating));
            }
            _ => quarantined += 1,
        }
    }

    if quarantined > 0 {
        warn!("Quarantined {} malformed rating rows from {:?}", quarantined, path);
    }
    Ok(ratings)
}

/// Load all three tables from a data directory
///
/// Expects `books.csv`, `users.csv` and `ratings.csv`. Completes
/// before any scoring call is made; the returned catalog is the only
/// state the core ever sees.
pub fn load_catalog(data_dir: &Path) -> Result<Catalog> {
    let items_path = data_dir.join("books.csv");
    let users_path = data_dir.join("users.csv");
    let ratings_path = data_dir.join("ratings.csv");

    for path in [&items_path, &users_path, &ratings_path] {
        if !path.exists() {
            return Err(IngestError::MissingTable(path.clone()));
        }
    }

    let items = load_items(&items_path)?;
    let users = load_users(&users_path)?;
    let ratings = load_ratings(&ratings_path)?;

    info!(
        "Loaded catalog: {} items, {} users, {} ratings",
        items.len(),
        users.len(),
        ratings.len()
    );

    Ok(Catalog::new(items, users, ratings))
}
