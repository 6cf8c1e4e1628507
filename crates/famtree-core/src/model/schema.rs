//! Schema descriptor for persisted entities
//!
//! The descriptor is the field contract the storage engine must honor. It is
//! kept apart from the data struct: `FamilyMember` is a plain struct, and
//! `FAMILY_MEMBERS` describes how it maps onto a relational table.

/// Column storage class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Integer,
    Text,
}

impl SqlType {
    /// SQL spelling of the type as reported by the storage engine
    pub fn as_sql(&self) -> &'static str {
        match self {
            SqlType::Integer => "INTEGER",
            SqlType::Text => "TEXT",
        }
    }
}

/// One column of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub sql_type: SqlType,
    pub nullable: bool,
    pub primary_key: bool,
}

impl ColumnDef {
    const fn new(name: &'static str, sql_type: SqlType, nullable: bool, primary_key: bool) -> Self {
        Self {
            name,
            sql_type,
            nullable,
            primary_key,
        }
    }
}

/// A table name and its ordered columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub table: &'static str,
    pub columns: &'static [ColumnDef],
}

impl TableSchema {
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Comma-separated column list in declaration order, for SELECT statements
    pub fn column_list(&self) -> String {
        self.columns
            .iter()
            .map(|c| c.name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// The `family_members` table
pub const FAMILY_MEMBERS: TableSchema = TableSchema {
    table: "family_members",
    columns: &[
        ColumnDef::new("id", SqlType::Integer, false, true),
        ColumnDef::new("name", SqlType::Text, false, false),
        ColumnDef::new("photo", SqlType::Text, true, false),
        ColumnDef::new("gender", SqlType::Text, false, false),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_members_columns() {
        assert_eq!(FAMILY_MEMBERS.table, "family_members");
        assert_eq!(FAMILY_MEMBERS.column_list(), "id, name, photo, gender");

        let id = FAMILY_MEMBERS.column("id").unwrap();
        assert!(id.primary_key);
        assert_eq!(id.sql_type, SqlType::Integer);

        assert!(FAMILY_MEMBERS.column("photo").unwrap().nullable);
        assert!(FAMILY_MEMBERS.column("missing").is_none());
    }
}
