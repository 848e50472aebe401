//! Category lookup, free-text resolution, and seeding

use std::collections::HashMap;

use rusqlite::params;
use tracing::info;

use super::Database;
use crate::error::{Error, Result};
use crate::models::Category;

fn category_from_row(row: &rusqlite::Row) -> rusqlite::Result<Category> {
    let raw_aliases: String = row.get(3)?;
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        is_base_expenses: row.get(2)?,
        aliases: serde_json::from_str(&raw_aliases).unwrap_or_default(),
    })
}

impl Database {
    /// List all categories, ordered by id
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare("SELECT id, name, is_base_expenses, aliases FROM categories ORDER BY id")?;
        let rows = stmt.query_map([], category_from_row)?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }

    /// Batch lookup by id, used when rendering report labels
    pub fn lookup_categories_by_ids(&self, ids: &[String]) -> Result<HashMap<String, Category>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!(
            "SELECT id, name, is_base_expenses, aliases FROM categories WHERE id IN ({})",
            placeholders
        );

        let conn = self.conn()?;
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(rusqlite::params_from_iter(ids.iter()), category_from_row)?;

        let mut categories = HashMap::new();
        for category in rows {
            let category = category?;
            categories.insert(category.id.clone(), category);
        }
        Ok(categories)
    }

    /// Resolve already-lowercased free text to a category by canonical name
    /// or alias. The table is small, so matching happens in memory; id order
    /// makes the first match deterministic.
    pub fn resolve_category(&self, text: &str) -> Result<Category> {
        self.list_categories()?
            .into_iter()
            .find(|category| category.matches(text))
            .ok_or_else(|| Error::InvalidCategory(format!("Не знаю такой категории: {}", text)))
    }

    /// Seed the default category table. Idempotent: existing ids are left
    /// untouched.
    pub fn seed_default_categories(&self) -> Result<()> {
        let conn = self.conn()?;

        for category in default_categories() {
            let exists: bool = conn
                .query_row(
                    "SELECT 1 FROM categories WHERE id = ?",
                    params![category.id],
                    |_| Ok(true),
                )
                .unwrap_or(false);

            if !exists {
                conn.execute(
                    "INSERT INTO categories (id, name, is_base_expenses, aliases) VALUES (?, ?, ?, ?)",
                    params![
                        category.id,
                        category.name,
                        category.is_base_expenses,
                        serde_json::to_string(&category.aliases)?
                    ],
                )?;
            }
        }

        info!("Seeded default categories");
        Ok(())
    }
}

fn default_categories() -> Vec<Category> {
    fn category(id: &str, name: &str, is_base_expenses: bool, aliases: &[&str]) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            is_base_expenses,
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        }
    }

    vec![
        category("coffee", "Кофе", false, &["coffee", "кофе", "tea", "чай"]),
        category(
            "cafe",
            "Кафе и рестораны",
            false,
            &["cafe", "кафе", "ресторан", "рестик", "мак"],
        ),
        category(
            "base",
            "Базовые расходы",
            true,
            &["food", "еда", "продукты", "быт", "base"],
        ),
        category(
            "subs",
            "Подписки, телеком",
            true,
            &["subs", "phone", "телефон", "инет"],
        ),
        category(
            "house",
            "Дом, покупки",
            true,
            &["house", "ремонт", "дом", "покупки", "комуналка"],
        ),
        category(
            "transport",
            "Машина, транспорт",
            true,
            &["car", "машина", "сто", "то", "такси", "проезд"],
        ),
        category(
            "rest",
            "Отдых, поездки, путешествия",
            true,
            &["отдых", "поездки", "путешествия", "отпуск"],
        ),
        category(
            "beauty",
            "Красота, уход, здоровье",
            true,
            &["beauty", "красота", "маник", "ногти", "аптека"],
        ),
        category(
            "self-improvement",
            "Саморазвитие",
            true,
            &["англ", "курсы", "треша", "треня"],
        ),
        category("other", "Прочее", false, &["other", "прочее"]),
    ]
}
