// src/config.rs
use crate::cli::CommandLineInput;
use crate::constants::{
    ENV_INGREDIENTS_DATABASE_ID, ENV_NOTION_API_BASE_URL, ENV_NOTION_TOKEN,
    ENV_RECIPES_DATABASE_ID, NOTION_API_BASE_URL,
};
use crate::error::AppError;
use crate::types::{ApiKey, DatabaseId, ValidatedUrl};

/// Loads `.env` from the working directory. Variables already present in
/// the process environment are left untouched.
pub fn load_dotenv() {
    match dotenv::dotenv() {
        Ok(path) => log::debug!("Loaded environment from {}", path.display()),
        Err(dotenv::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No .env file found; using process environment only");
        }
        Err(e) => log::warn!("Ignoring unreadable .env file: {}", e),
    }
}

/// Resolved configuration: validated and ready to build the client and stores.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: ApiKey,
    pub api_base_url: ValidatedUrl,
    pub ingredients_database: Option<DatabaseId>,
    pub recipes_database: Option<DatabaseId>,
    pub json: bool,
    pub verbose: bool,
}

impl AppConfig {
    /// Resolves configuration from CLI input and the process environment.
    pub fn resolve(cli: &CommandLineInput) -> Result<Self, AppError> {
        Self::resolve_with(cli, |name| std::env::var(name).ok())
    }

    /// Resolves configuration with an explicit environment lookup.
    ///
    /// Empty variables count as unset. CLI flags win over the environment.
    pub fn resolve_with<F>(cli: &CommandLineInput, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let token = env(ENV_NOTION_TOKEN).ok_or_else(|| {
            AppError::MissingConfiguration(format!(
                "{} environment variable not set (add it to .env or export it)",
                ENV_NOTION_TOKEN
            ))
        })?;
        let api_key = ApiKey::new(token)?;

        let api_base_url = match env(ENV_NOTION_API_BASE_URL) {
            Some(url) => {
                log::debug!("Using Notion API base URL override {}", url);
                ValidatedUrl::parse(url.trim())?
            }
            None => ValidatedUrl::parse(NOTION_API_BASE_URL)?,
        };

        let ingredients_database =
            resolve_database(cli.ingredients_db.clone(), env(ENV_INGREDIENTS_DATABASE_ID))?;
        let recipes_database =
            resolve_database(cli.recipes_db.clone(), env(ENV_RECIPES_DATABASE_ID))?;

        Ok(AppConfig {
            api_key,
            api_base_url,
            ingredients_database,
            recipes_database,
            json: cli.json,
            verbose: cli.verbose,
        })
    }

    /// The ingredients database, or an error naming the variable to set.
    pub fn ingredients_database(&self) -> Result<&DatabaseId, AppError> {
        self.ingredients_database.as_ref().ok_or_else(|| {
            AppError::MissingConfiguration(format!(
                "{} not set and --ingredients-db not given",
                ENV_INGREDIENTS_DATABASE_ID
            ))
        })
    }

    /// The recipes database, or an error naming the variable to set.
    pub fn recipes_database(&self) -> Result<&DatabaseId, AppError> {
        self.recipes_database.as_ref().ok_or_else(|| {
            AppError::MissingConfiguration(format!(
                "{} not set and --recipes-db not given",
                ENV_RECIPES_DATABASE_ID
            ))
        })
    }
}

fn resolve_database(
    flag: Option<String>,
    env: Option<String>,
) -> Result<Option<DatabaseId>, AppError> {
    flag.or(env)
        .map(|raw| DatabaseId::parse(&raw).map_err(AppError::from))
        .transpose()
}
