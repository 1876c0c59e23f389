use std::path::PathBuf;

use clap::Parser;

use crate::store::FallbackStore;

#[derive(Parser, Debug)]
#[command(name = "bloco")]
#[command(version, about = "A notepad that remembers what you typed")]
pub struct Cli {
    /// SQLite file holding the note and preferences
    #[arg(long, env = "BLOCO_DB", default_value = "bloco.db")]
    pub db: PathBuf,

    /// Keep everything in memory, ignoring --db
    #[arg(long)]
    pub in_memory: bool,

    /// Where log output goes (the terminal is taken by the editor)
    #[arg(long, env = "BLOCO_LOG", default_value = "bloco.log")]
    pub log_file: PathBuf,
}

impl Cli {
    pub fn open_store(&self) -> FallbackStore {
        if self.in_memory {
            FallbackStore::in_memory()
        } else {
            FallbackStore::open(&self.db)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::KeyValueStore;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["bloco"]).unwrap();
        assert!(!cli.in_memory);
        assert_eq!(cli.log_file, PathBuf::from("bloco.log"));
    }

    #[test]
    fn test_in_memory_store_is_not_durable() {
        let cli = Cli::try_parse_from(["bloco", "--in-memory"]).unwrap();
        assert!(!cli.open_store().is_durable());
    }

    #[test]
    fn test_db_path_flag() {
        let cli = Cli::try_parse_from(["bloco", "--db", "/tmp/x/notes.db"]).unwrap();
        assert_eq!(cli.db, PathBuf::from("/tmp/x/notes.db"));
    }
}
