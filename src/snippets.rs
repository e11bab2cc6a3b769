//! Data access for snippets.
//!
//! Expired rows are never deleted; every read filters on `expires` so they
//! simply stop being visible.

use libsql::{Connection, Row};

use crate::error::StoreError;
use crate::model::{Snippet, parse_timestamp};

pub const LATEST_LIMIT: usize = 10;

pub struct SnippetModel<'a> {
    conn: &'a Connection,
}

impl<'a> SnippetModel<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Inserts a snippet that expires `expires_in_days` after the database's
    /// current time and returns its id.
    pub async fn insert(&self, title: &str, content: &str, expires_in_days: u32) -> Result<i64, StoreError> {
        let query = r#"
            INSERT INTO snippets (title, content, created, expires)
            VALUES (?, ?, DATETIME('now'), DATETIME('now', '+' || ? || ' days'))
            RETURNING id
        "#;

        let mut rows = self
            .conn
            .query(query, libsql::params![title, content, i64::from(expires_in_days)])
            .await?;

        match rows.next().await? {
            Some(row) => Ok(row.get::<i64>(0)?),
            None => Err(StoreError::MissingId),
        }
    }

    pub async fn get(&self, id: i64) -> Result<Snippet, StoreError> {
        let query = r#"
            SELECT id, title, content, created, expires FROM snippets
            WHERE expires > DATETIME('now') AND id = ?
        "#;

        let mut rows = self.conn.query(query, libsql::params![id]).await?;

        match rows.next().await? {
            Some(row) => Self::row_to_snippet(&row),
            None => Err(StoreError::NoRecord),
        }
    }

    /// Up to ten visible snippets, newest id first.
    pub async fn latest(&self) -> Result<Vec<Snippet>, StoreError> {
        let query = r#"
            SELECT id, title, content, created, expires FROM snippets
            WHERE expires > DATETIME('now')
            ORDER BY id DESC
            LIMIT ?
        "#;

        let mut rows = self
            .conn
            .query(query, libsql::params![LATEST_LIMIT as i64])
            .await?;

        let mut snippets = Vec::with_capacity(LATEST_LIMIT);
        while let Some(row) = rows.next().await? {
            snippets.push(Self::row_to_snippet(&row)?);
        }

        Ok(snippets)
    }

    fn row_to_snippet(row: &Row) -> Result<Snippet, StoreError> {
        let created: String = row.get(3)?;
        let expires: String = row.get(4)?;

        Ok(Snippet {
            id: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
            created: parse_timestamp("created", &created)?,
            expires: parse_timestamp("expires", &expires)?,
        })
    }
}
