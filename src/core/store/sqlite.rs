//! SQLite course store

use super::{CourseStore, StoreError};
use crate::core::models::{Course, Phase, PhaseScores, Track};
use async_trait::async_trait;
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS courses (
    id TEXT PRIMARY KEY,
    naam TEXT NOT NULL,
    jaar INTEGER NOT NULL,
    blok INTEGER NOT NULL,
    track TEXT NOT NULL,
    ects REAL NOT NULL,
    programmeertaal TEXT,
    analyse REAL NOT NULL DEFAULT 0,
    ontwerp REAL NOT NULL DEFAULT 0,
    implementatie REAL NOT NULL DEFAULT 0,
    evaluatie REAL NOT NULL DEFAULT 0
);
CREATE TABLE IF NOT EXISTS course_products (
    course_id TEXT NOT NULL REFERENCES courses(id) ON DELETE CASCADE,
    position INTEGER NOT NULL,
    product_id TEXT NOT NULL,
    PRIMARY KEY (course_id, position)
);
CREATE INDEX IF NOT EXISTS idx_course_products_product ON course_products(product_id);
";

const SELECT_COURSE: &str = "SELECT id, naam, jaar, blok, track, ects, programmeertaal, \
     analyse, ontwerp, implementatie, evaluatie FROM courses";

/// Course store persisted in a SQLite database
///
/// Rows come back in insertion order; an upsert of an existing id keeps its position.
/// Queries run on tokio's blocking pool, never on an executor thread.
pub struct SqliteCourseStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteCourseStore {
    /// Open (or create) a database file and ensure the schema exists
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or the schema cannot be created
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Self::init(Connection::open(path)?)
    }

    /// Open a private in-memory database
    ///
    /// # Errors
    /// Returns an error if the schema cannot be created
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn with_conn<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> Result<T, StoreError> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut conn = conn
                .lock()
                .map_err(|_| StoreError::Unavailable("connection lock poisoned".to_string()))?;
            f(&mut conn)
        })
        .await
        .map_err(|e| StoreError::Unavailable(format!("sqlite worker failed: {e}")))?
    }
}

fn course_from_row(row: &Row<'_>) -> rusqlite::Result<Course> {
    let track: String = row.get(4)?;
    let track = track
        .parse::<Track>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, e.into()))?;

    Ok(Course {
        id: Some(row.get(0)?),
        naam: row.get(1)?,
        jaar: row.get(2)?,
        blok: row.get(3)?,
        track,
        ects: row.get(5)?,
        programmeertaal: row.get(6)?,
        phase_scores: PhaseScores::new(row.get(7)?, row.get(8)?, row.get(9)?, row.get(10)?),
        producten: Vec::new(),
    })
}

/// Product lists keyed by course id, each in stored position order
fn load_products(conn: &Connection) -> Result<HashMap<String, Vec<String>>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT course_id, product_id FROM course_products ORDER BY course_id, position",
    )?;
    let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get(1)?)))?;

    let mut products: HashMap<String, Vec<String>> = HashMap::new();
    for row in rows {
        let (course_id, product_id) = row?;
        products.entry(course_id).or_default().push(product_id);
    }
    Ok(products)
}

fn query_courses(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
) -> Result<Vec<Course>, StoreError> {
    let mut stmt = conn.prepare(sql)?;
    let mut courses = stmt
        .query_map(params, course_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    let mut products = load_products(conn)?;
    for course in &mut courses {
        if let Some(list) = course.id.as_ref().and_then(|id| products.remove(id)) {
            course.producten = list;
        }
    }
    Ok(courses)
}

#[async_trait]
impl CourseStore for SqliteCourseStore {
    async fn find_all(&self) -> Result<Vec<Course>, StoreError> {
        self.with_conn(|conn| query_courses(conn, &format!("{SELECT_COURSE} ORDER BY rowid"), []))
            .await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Course>, StoreError> {
        let id = id.to_string();
        self.with_conn(move |conn| {
            let courses = query_courses(conn, &format!("{SELECT_COURSE} WHERE id = ?1"), [&id])?;
            Ok(courses.into_iter().next())
        })
        .await
    }

    async fn find_by_product(&self, product_id: &str) -> Result<Vec<Course>, StoreError> {
        let product_id = product_id.to_string();
        self.with_conn(move |conn| {
            query_courses(
                conn,
                &format!(
                    "{SELECT_COURSE} WHERE id IN \
                     (SELECT course_id FROM course_products WHERE product_id = ?1) \
                     ORDER BY rowid"
                ),
                [&product_id],
            )
        })
        .await
    }

    async fn find_product_lists(&self) -> Result<Vec<Vec<String>>, StoreError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT id FROM courses ORDER BY rowid")?;
            let ids = stmt
                .query_map([], |row| row.get::<_, String>(0))?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            let mut products = load_products(conn)?;
            Ok(ids
                .iter()
                .map(|id| products.remove(id).unwrap_or_default())
                .collect())
        })
        .await
    }

    async fn upsert(&self, course: Course) -> Result<(), StoreError> {
        let Some(id) = course.id.clone() else {
            return Err(StoreError::MissingId { naam: course.naam });
        };

        self.with_conn(move |conn| {
            let tx = conn.transaction()?;
            let scores = course.phase_scores;
            tx.execute(
                "INSERT INTO courses (id, naam, jaar, blok, track, ects, programmeertaal, \
                 analyse, ontwerp, implementatie, evaluatie) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11) \
                 ON CONFLICT(id) DO UPDATE SET naam = excluded.naam, jaar = excluded.jaar, \
                 blok = excluded.blok, track = excluded.track, ects = excluded.ects, \
                 programmeertaal = excluded.programmeertaal, analyse = excluded.analyse, \
                 ontwerp = excluded.ontwerp, implementatie = excluded.implementatie, \
                 evaluatie = excluded.evaluatie",
                params![
                    id,
                    course.naam,
                    course.jaar,
                    course.blok,
                    course.track.code(),
                    course.ects,
                    course.programmeertaal,
                    scores.get(Phase::Analyse),
                    scores.get(Phase::Ontwerp),
                    scores.get(Phase::Implementatie),
                    scores.get(Phase::Evaluatie),
                ],
            )?;

            tx.execute("DELETE FROM course_products WHERE course_id = ?1", [&id])?;
            {
                let mut stmt = tx.prepare(
                    "INSERT INTO course_products (course_id, position, product_id) \
                     VALUES (?1, ?2, ?3)",
                )?;
                for (position, product) in course.producten.iter().enumerate() {
                    stmt.execute(params![id, position, product])?;
                }
            }
            tx.commit()?;
            Ok(())
        })
        .await
    }
}
