//! Statement templates for the CRUD tables.
//!
//! Every insert/update/delete/select issued by `db` is generated here from a
//! `Table` descriptor, so the column list and the placeholder list can never
//! drift apart. Values are always bound, never spliced into the text.

/// How a table's primary key gets its value.
#[derive(Debug, Clone, Copy)]
pub enum Key {
    /// Assigned by the store on insert (`INTEGER PRIMARY KEY`).
    Generated(&'static str),
    /// Supplied by the client as part of the create payload.
    Natural(&'static str),
}

impl Key {
    pub fn column(&self) -> &'static str {
        match self {
            Key::Generated(column) | Key::Natural(column) => column,
        }
    }
}

/// Declarative description of a table: its name, key and mutable columns.
///
/// `columns` is also the bind order expected by every generated statement.
#[derive(Debug, Clone, Copy)]
pub struct Table {
    pub name: &'static str,
    pub key: Key,
    pub columns: &'static [&'static str],
}

/// Statement text for the five keyed operations of one table.
#[derive(Debug, Clone)]
pub struct Statements {
    pub select_all: String,
    pub select_by_key: String,
    pub insert: String,
    pub update: String,
    pub delete: String,
}

impl Table {
    /// `SELECT * FROM t`
    pub fn select_all(&self) -> String {
        format!("SELECT * FROM {}", self.name)
    }

    /// `SELECT * FROM t WHERE a = ? AND b = ?`
    pub fn select_where(&self, filters: &[&str]) -> String {
        let predicate = filters
            .iter()
            .map(|column| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(" AND ");
        format!("SELECT * FROM {} WHERE {}", self.name, predicate)
    }

    pub fn select_by_key(&self) -> String {
        self.select_where(&[self.key.column()])
    }

    /// Binds: the natural key first (if any), then `columns` in order.
    pub fn insert(&self) -> String {
        let mut columns: Vec<&str> = Vec::with_capacity(self.columns.len() + 1);
        if let Key::Natural(key) = self.key {
            columns.push(key);
        }
        columns.extend_from_slice(self.columns);

        let placeholders = vec!["?"; columns.len()].join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            self.name,
            columns.join(", "),
            placeholders,
            self.key.column()
        )
    }

    /// Binds: `columns` in order, then the key.
    pub fn update(&self) -> String {
        let assignments = self
            .columns
            .iter()
            .map(|column| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "UPDATE {} SET {} WHERE {} = ? RETURNING {}",
            self.name,
            assignments,
            self.key.column(),
            self.key.column()
        )
    }

    pub fn delete(&self) -> String {
        format!(
            "DELETE FROM {} WHERE {} = ? RETURNING {}",
            self.name,
            self.key.column(),
            self.key.column()
        )
    }

    pub fn statements(&self) -> Statements {
        Statements {
            select_all: self.select_all(),
            select_by_key: self.select_by_key(),
            insert: self.insert(),
            update: self.update(),
            delete: self.delete(),
        }
    }
}
