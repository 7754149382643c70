use rusqlite::Connection;

pub mod tables {
    pub const MUSIC: &str = "music_tb";

    pub const ALL_TABLES: &[&str] = &[MUSIC];
}

pub mod columns {
    pub const ID: &str = "id";
    pub const TITLE: &str = "title";
    pub const COVER: &str = "cover";
    pub const ARTIST: &str = "artist";
    pub const URL: &str = "url";
}

pub use columns::*;
pub use tables::*;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS music_tb (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT,
    cover TEXT,
    artist TEXT,
    url TEXT
);
"#;

pub fn init(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA)
}
