/// Library file used when neither `--file` nor `SHELF_FILE` is given.
pub const DEFAULT_LIBRARY_FILE: &str = "library.txt";

pub const DEFAULT_LOG_FILTER: &str = "warn";
