pub const APP_NAME: &str = "lumen";

/// File extension (including the dot) of module description files.
pub const BUILD_FILE_EXTENSION: &str = ".build";

/// Directory, relative to the root, holding intermediate build artifacts.
pub const INTERMEDIATE_DIR: &str = "Intermediate";

/// Directory, relative to the root, holding linked binaries.
pub const BINARIES_DIR: &str = "Binaries";

/// Environment variable overriding the default root directory.
pub const ROOT_ENV: &str = "LUMEN_ROOT";

/// Process exit code for a failed run.
pub const FAILURE_EXIT_CODE: u8 = 84;

/// Upper bound on files parsed concurrently by the loader.
pub const DEFAULT_LOAD_PARALLELISM: usize = 16;
