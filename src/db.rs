//! # PostgreSQL Persistence
//!
//! Schema setup and last-write-wins upserts for parsed ingredients. The
//! `ingredient_name` column is the stable key consumed downstream; the full
//! parsed record (quantity, unit, details) is persisted alongside it.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPool;
use sqlx::Row;
use tracing::{debug, info};

use crate::batch::IngredientIndex;
use crate::parser::ParsedIngredient;

/// Represents an ingredient row in the database
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientRow {
    pub id: i64,
    pub ingredient_name: String,
    pub quantity: f64,
    pub unit: String,
    pub details: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Initialize the database schema
pub async fn init_database_schema(pool: &PgPool) -> Result<()> {
    info!("Initializing database schema");

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS ingredients (
            id BIGSERIAL PRIMARY KEY,
            ingredient_name VARCHAR(255) UNIQUE NOT NULL,
            quantity DOUBLE PRECISION NOT NULL DEFAULT 0,
            unit VARCHAR(50) NOT NULL,
            details TEXT[] NOT NULL DEFAULT '{}',
            created_at TIMESTAMPTZ DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMPTZ DEFAULT CURRENT_TIMESTAMP
        )",
    )
    .execute(pool)
    .await
    .context("Failed to create ingredients table")?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS ingredients_name_idx ON ingredients(ingredient_name)",
    )
    .execute(pool)
    .await
    .context("Failed to create ingredients name index")?;

    info!("Database schema initialized successfully");
    Ok(())
}

/// Upsert one parsed ingredient keyed by name, last write wins
pub async fn upsert_ingredient(pool: &PgPool, ingredient: &ParsedIngredient) -> Result<i64> {
    debug!(ingredient_name = %ingredient.name, "Upserting ingredient");

    let row = sqlx::query(
        "INSERT INTO ingredients (ingredient_name, quantity, unit, details)
         VALUES ($1, $2, $3, $4)
         ON CONFLICT (ingredient_name) DO UPDATE SET
             quantity = EXCLUDED.quantity,
             unit = EXCLUDED.unit,
             details = EXCLUDED.details,
             updated_at = CURRENT_TIMESTAMP
         RETURNING id",
    )
    .bind(&ingredient.name)
    .bind(ingredient.quantity)
    .bind(&ingredient.unit)
    .bind(&ingredient.details)
    .fetch_one(pool)
    .await
    .context("Failed to upsert ingredient")?;

    let ingredient_id: i64 = row.get(0);
    debug!(ingredient_id = %ingredient_id, "Ingredient upserted");

    Ok(ingredient_id)
}

/// Persist a whole ingredient index; returns the number of rows written
pub async fn store_index(pool: &PgPool, index: &IngredientIndex) -> Result<usize> {
    for ingredient in index.values() {
        upsert_ingredient(pool, ingredient).await?;
    }

    info!(rows = index.len(), "Ingredient index stored");
    Ok(index.len())
}

/// Read an ingredient row by name
pub async fn read_ingredient(pool: &PgPool, name: &str) -> Result<Option<IngredientRow>> {
    debug!(ingredient_name = %name, "Reading ingredient");

    let row = sqlx::query(
        "SELECT id, ingredient_name, quantity, unit, details, created_at, updated_at
         FROM ingredients WHERE ingredient_name = $1",
    )
    .bind(name)
    .fetch_optional(pool)
    .await
    .context("Failed to read ingredient")?;

    match row {
        Some(row) => Ok(Some(IngredientRow {
            id: row.get(0),
            ingredient_name: row.get(1),
            quantity: row.get(2),
            unit: row.get(3),
            details: row.get(4),
            created_at: row.get(5),
            updated_at: row.get(6),
        })),
        None => Ok(None),
    }
}
