//! SQLite-backed catalog store.
//!
//! One connection behind a mutex — requests are short single-statement
//! transactions, so contention is negligible at this service's scale.
//!
//! ## Schema
//! - `users` — account rows; a default local user is ensured on open so
//!   projects always have an owner.
//! - `brands` — seeded reference data, read-only after seeding.
//! - `projects` — in-progress rebranding work, optionally carrying a saved
//!   color scheme as JSON text.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::{SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};
use serde::Deserialize;
use tracing::info;

use crate::error::AppError;

use super::seed::SEED_BRANDS;
use super::types::{Brand, NewProject, Project};

/// Schema version stored in `PRAGMA user_version`.
/// Increment when the DDL changes; add a migration path in `open`.
const SCHEMA_VERSION: i64 = 1;

/// Username of the implicit owner assigned to projects.
const DEFAULT_USER: &str = "local";

// ── Store ─────────────────────────────────────────────────────────────────────

pub struct BrandStore {
    conn: Mutex<Connection>,
}

impl BrandStore {
    /// Open (or create) the database at `db_path`, apply pragmas, run the
    /// schema DDL if needed, and seed the brand catalog when empty.
    pub fn open(db_path: &Path) -> Result<Self, AppError> {
        let conn = Connection::open(db_path)
            .map_err(|e| AppError::Storage(format!("open {}: {e}", db_path.display())))?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| AppError::Storage(format!("set journal_mode WAL: {e}")))?;
        conn.pragma_update(None, "foreign_keys", "ON")
            .map_err(|e| AppError::Storage(format!("set foreign_keys ON: {e}")))?;
        conn.pragma_update(None, "busy_timeout", 5000)
            .map_err(|e| AppError::Storage(format!("set busy_timeout: {e}")))?;

        let version: i64 = conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .map_err(|e| AppError::Storage(format!("read user_version: {e}")))?;
        if version < SCHEMA_VERSION {
            init_schema(&conn)?;
        }

        let store = Self { conn: Mutex::new(conn) };
        store.ensure_default_user()?;
        store.seed_brands_if_empty()?;
        Ok(store)
    }

    // ── Brands ───────────────────────────────────────────────────────────────

    /// List brands ordered by name, optionally filtered by category.
    pub fn list_brands(&self, category: Option<&str>) -> Result<Vec<Brand>, AppError> {
        let conn = self.conn()?;
        let (sql, filter) = match category {
            Some(c) => (
                "SELECT id, name, industry, website, category, primary_color, background_color
                 FROM brands WHERE category = ?1 ORDER BY name",
                Some(c),
            ),
            None => (
                "SELECT id, name, industry, website, category, primary_color, background_color
                 FROM brands ORDER BY name",
                None,
            ),
        };
        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| AppError::Storage(format!("prepare brand list: {e}")))?;
        let rows = match filter {
            Some(c) => stmt.query_map(params![c], brand_from_row),
            None => stmt.query_map([], brand_from_row),
        }
        .map_err(|e| AppError::Storage(format!("query brands: {e}")))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| AppError::Storage(format!("read brand row: {e}")))
    }

    /// Fetch one brand. `Ok(None)` is the not-found outcome — never an error.
    pub fn get_brand(&self, id: i64) -> Result<Option<Brand>, AppError> {
        let conn = self.conn()?;
        conn.query_row(
            "SELECT id, name, industry, website, category, primary_color, background_color
             FROM brands WHERE id = ?1",
            params![id],
            brand_from_row,
        )
        .optional()
        .map_err(|e| AppError::Storage(format!("query brand {id}: {e}")))
    }

    // ── Projects ─────────────────────────────────────────────────────────────

    /// Create a rebranding project owned by the default user.
    pub fn create_project(&self, new: &NewProject) -> Result<Project, AppError> {
        let conn = self.conn()?;
        let id = uuid::Uuid::new_v4().to_string();
        let now = now_iso8601();
        let scheme_text = new
            .color_scheme
            .as_ref()
            .map(|v| serde_json::to_string(v))
            .transpose()
            .map_err(|e| AppError::Storage(format!("encode color scheme: {e}")))?;

        conn.execute(
            "INSERT INTO projects (id, user_id, brand_id, name, status, color_scheme, created_at, updated_at)
             VALUES (?1, (SELECT id FROM users WHERE username = ?2), ?3, ?4, 'draft', ?5, ?6, ?6)",
            params![id, DEFAULT_USER, new.brand_id, new.name, scheme_text, now],
        )
        .map_err(|e| AppError::Storage(format!("insert project: {e}")))?;

        Ok(Project {
            id,
            brand_id: new.brand_id,
            name: new.name.clone(),
            status: "draft".into(),
            color_scheme: new.color_scheme.clone(),
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// List projects, newest first.
    pub fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let conn = self.conn()?;
        let mut stmt = conn
            .prepare(
                "SELECT id, brand_id, name, status, color_scheme, created_at, updated_at
                 FROM projects ORDER BY created_at DESC",
            )
            .map_err(|e| AppError::Storage(format!("prepare project list: {e}")))?;
        let rows = stmt
            .query_map([], project_from_row)
            .map_err(|e| AppError::Storage(format!("query projects: {e}")))?;
        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| AppError::Storage(format!("read project row: {e}")))
    }

    /// Fetch one project. `Ok(None)` is the not-found outcome.
    pub fn get_project(&self, id: &str) -> Result<Option<Project>, AppError> {
        let conn = self.conn()?;
        conn.query_row(
            "SELECT id, brand_id, name, status, color_scheme, created_at, updated_at
             FROM projects WHERE id = ?1",
            params![id],
            project_from_row,
        )
        .optional()
        .map_err(|e| AppError::Storage(format!("query project {id}: {e}")))
    }

    // ── Internals ────────────────────────────────────────────────────────────

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, AppError> {
        self.conn
            .lock()
            .map_err(|_| AppError::Storage("connection mutex poisoned".into()))
    }

    fn ensure_default_user(&self) -> Result<(), AppError> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT OR IGNORE INTO users (username, created_at) VALUES (?1, ?2)",
            params![DEFAULT_USER, now_iso8601()],
        )
        .map_err(|e| AppError::Storage(format!("ensure default user: {e}")))?;
        Ok(())
    }

    fn seed_brands_if_empty(&self) -> Result<(), AppError> {
        let conn = self.conn()?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM brands", [], |row| row.get(0))
            .map_err(|e| AppError::Storage(format!("count brands: {e}")))?;
        if count > 0 {
            return Ok(());
        }

        let seed: Vec<SeedBrand> = serde_json::from_str(SEED_BRANDS)
            .map_err(|e| AppError::Storage(format!("parse brand seed: {e}")))?;
        let seeded = seed.len();
        for brand in seed {
            conn.execute(
                "INSERT INTO brands (name, industry, website, category, primary_color, background_color)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    brand.name,
                    brand.industry,
                    brand.website,
                    brand.category,
                    brand.primary_color,
                    brand.background_color
                ],
            )
            .map_err(|e| AppError::Storage(format!("seed brand '{}': {e}", brand.name)))?;
        }
        info!(brands = seeded, "seeded brand catalog");
        Ok(())
    }
}

// ── Schema ────────────────────────────────────────────────────────────────────

/// Execute the v1 schema DDL on a freshly-opened connection.
fn init_schema(conn: &Connection) -> Result<(), AppError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS brands (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            industry TEXT NOT NULL,
            website TEXT,
            category TEXT,
            primary_color TEXT,
            background_color TEXT
        );

        CREATE TABLE IF NOT EXISTS projects (
            id TEXT PRIMARY KEY,
            user_id INTEGER NOT NULL REFERENCES users(id),
            brand_id INTEGER NOT NULL REFERENCES brands(id),
            name TEXT NOT NULL,
            status TEXT NOT NULL,
            color_scheme TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        PRAGMA user_version = 1;
        ",
    )
    .map_err(|e| AppError::Storage(format!("initialize schema: {e}")))
}

// ── Row mapping ───────────────────────────────────────────────────────────────

fn brand_from_row(row: &Row<'_>) -> rusqlite::Result<Brand> {
    Ok(Brand {
        id: row.get(0)?,
        name: row.get(1)?,
        industry: row.get(2)?,
        website: row.get(3)?,
        category: row.get(4)?,
        primary_color: row.get(5)?,
        background_color: row.get(6)?,
    })
}

fn project_from_row(row: &Row<'_>) -> rusqlite::Result<Project> {
    let scheme_text: Option<String> = row.get(4)?;
    // A row written by this store always carries valid JSON; tolerate hand
    // edits by dropping anything unparseable.
    let color_scheme = scheme_text.and_then(|t| serde_json::from_str(&t).ok());
    Ok(Project {
        id: row.get(0)?,
        brand_id: row.get(1)?,
        name: row.get(2)?,
        status: row.get(3)?,
        color_scheme,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

/// Current UTC time as an RFC 3339 string with second precision.
fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Seed entries omit `id` — SQLite assigns them in array order.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedBrand {
    name: String,
    industry: String,
    #[serde(default)]
    website: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    primary_color: Option<String>,
    #[serde(default)]
    background_color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store() -> (TempDir, BrandStore) {
        let dir = TempDir::new().unwrap();
        let store = BrandStore::open(&dir.path().join("test.db")).unwrap();
        (dir, store)
    }

    #[test]
    fn open_seeds_brand_catalog() {
        let (_dir, store) = open_store();
        let brands = store.list_brands(None).unwrap();
        assert!(!brands.is_empty());
        // ordered by name
        let names: Vec<_> = brands.iter().map(|b| b.name.clone()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn reopen_does_not_reseed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.db");
        let count = {
            let store = BrandStore::open(&path).unwrap();
            store.list_brands(None).unwrap().len()
        };
        let store = BrandStore::open(&path).unwrap();
        assert_eq!(store.list_brands(None).unwrap().len(), count);
    }

    #[test]
    fn category_filter_narrows_results() {
        let (_dir, store) = open_store();
        let all = store.list_brands(None).unwrap();
        let retail = store.list_brands(Some("retail")).unwrap();
        assert!(!retail.is_empty());
        assert!(retail.len() < all.len());
        assert!(retail.iter().all(|b| b.category.as_deref() == Some("retail")));
    }

    #[test]
    fn unknown_category_yields_empty_list() {
        let (_dir, store) = open_store();
        assert!(store.list_brands(Some("submarines")).unwrap().is_empty());
    }

    #[test]
    fn get_brand_hit_and_miss() {
        let (_dir, store) = open_store();
        let first = &store.list_brands(None).unwrap()[0];
        let fetched = store.get_brand(first.id).unwrap();
        assert_eq!(fetched.as_ref(), Some(first));
        assert!(store.get_brand(999_999).unwrap().is_none());
    }

    #[test]
    fn project_round_trip() {
        let (_dir, store) = open_store();
        let brand = &store.list_brands(None).unwrap()[0];
        let scheme = serde_json::json!({ "primary": "#123456" });
        let created = store
            .create_project(&NewProject {
                brand_id: brand.id,
                name: "spring refresh".into(),
                color_scheme: Some(scheme.clone()),
            })
            .unwrap();
        assert_eq!(created.status, "draft");

        let fetched = store.get_project(&created.id).unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.color_scheme, Some(scheme));

        assert_eq!(store.list_projects().unwrap().len(), 1);
    }

    #[test]
    fn get_project_miss_is_none() {
        let (_dir, store) = open_store();
        assert!(store.get_project("no-such-id").unwrap().is_none());
    }

    #[test]
    fn project_without_scheme_persists_none() {
        let (_dir, store) = open_store();
        let brand = &store.list_brands(None).unwrap()[0];
        let created = store
            .create_project(&NewProject {
                brand_id: brand.id,
                name: "bare".into(),
                color_scheme: None,
            })
            .unwrap();
        let fetched = store.get_project(&created.id).unwrap().unwrap();
        assert!(fetched.color_scheme.is_none());
    }

    #[test]
    fn project_for_unknown_brand_is_storage_error() {
        let (_dir, store) = open_store();
        let err = store
            .create_project(&NewProject {
                brand_id: 999_999,
                name: "orphan".into(),
                color_scheme: None,
            })
            .unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }
}
