// src/main.rs

use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use recipe_buddy::cli::{Command, IngredientCommand, RecipeCommand};
use recipe_buddy::output::{self, RecipeDetail};
use recipe_buddy::{
    load_dotenv, AppConfig, AppError, CommandLineInput, IngredientCatalog, NotionHttpClient,
    NotionRepository, RecipeBook,
};
use std::fs;
use std::sync::Arc;

const LOG_PATTERN: &str = "[{d(%Y-%m-%d %H:%M:%S)}] [recipe_buddy] [{l}] - {m}{n}";

/// Sets up logging: stderr at info (debug with `-v`), plus a debug log file.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_file_path = std::env::temp_dir().join("recipe_buddy.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(log_level)))
                .build("stderr", Box::new(stderr_appender)),
        )
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(LevelFilter::Debug),
        )?;

    log4rs::init_config(config)?;
    log::debug!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Runs one CLI command against Notion and renders its result.
struct RecipeBuddy<'a> {
    config: &'a AppConfig,
    repository: Arc<dyn NotionRepository>,
}

impl<'a> RecipeBuddy<'a> {
    fn new(config: &'a AppConfig) -> Result<Self, AppError> {
        let client = NotionHttpClient::with_base_url(&config.api_key, config.api_base_url.clone())?;
        log::debug!("Notion client ready (token {})", config.api_key);
        Ok(Self {
            config,
            repository: Arc::new(client),
        })
    }

    fn ingredients(&self) -> Result<IngredientCatalog, AppError> {
        let database = self.config.ingredients_database()?.clone();
        Ok(IngredientCatalog::new(self.repository.clone(), database))
    }

    fn recipes(&self) -> Result<RecipeBook, AppError> {
        let database = self.config.recipes_database()?.clone();
        Ok(RecipeBook::new(self.repository.clone(), database))
    }

    async fn run(&self, command: &Command) -> Result<String, AppError> {
        match command {
            Command::Ingredients(command) => self.run_ingredients(command).await,
            Command::Recipes(command) => self.run_recipes(command).await,
        }
    }

    async fn run_ingredients(&self, command: &IngredientCommand) -> Result<String, AppError> {
        let catalog = self.ingredients()?;
        let json = self.config.json;

        match command {
            IngredientCommand::List => {
                let ingredients = catalog.list().await?;
                if json {
                    output::to_json(&ingredients)
                } else {
                    Ok(output::render_ingredients(&ingredients))
                }
            }
            IngredientCommand::Show { id } => {
                let ingredient = catalog.get(id).await?;
                if json {
                    output::to_json(&ingredient)
                } else {
                    Ok(output::ingredient_line(&ingredient))
                }
            }
            IngredientCommand::Add(fields) => {
                let created = catalog.create(&fields.build()?).await?;
                self.confirm("Created", &created, output::ingredient_line)
            }
            IngredientCommand::Update { id, fields } => {
                let current = catalog.get(id).await?;
                let updated = catalog.update(id, &fields.apply(current)?).await?;
                self.confirm("Updated", &updated, output::ingredient_line)
            }
            IngredientCommand::Archive { id } => {
                catalog.archive(id).await?;
                Ok(format!("Archived ingredient {}", id))
            }
        }
    }

    async fn run_recipes(&self, command: &RecipeCommand) -> Result<String, AppError> {
        let book = self.recipes()?;
        let json = self.config.json;

        match command {
            RecipeCommand::List => {
                let recipes = book.list().await?;
                if json {
                    output::to_json(&recipes)
                } else {
                    Ok(output::render_recipes(&recipes))
                }
            }
            RecipeCommand::Show { id } => {
                let recipe = book.get(id).await?;
                let ingredients = match self.ingredients() {
                    Ok(catalog) => book.ingredients_of(&recipe, &catalog).await?,
                    Err(err) => {
                        log::warn!("Not resolving ingredients: {}", err);
                        Vec::new()
                    }
                };
                if json {
                    output::to_json(&RecipeDetail {
                        recipe: &recipe,
                        resolved_ingredients: &ingredients,
                    })
                } else {
                    Ok(output::render_recipe_detail(&recipe, &ingredients))
                }
            }
            RecipeCommand::Add(fields) => {
                let created = book.create(&fields.build()?).await?;
                self.confirm("Created", &created, output::recipe_line)
            }
            RecipeCommand::Update { id, fields } => {
                let current = book.get(id).await?;
                let updated = book.update(id, &fields.apply(current)?).await?;
                self.confirm("Updated", &updated, output::recipe_line)
            }
            RecipeCommand::Archive { id } => {
                book.archive(id).await?;
                Ok(format!("Archived recipe {}", id))
            }
        }
    }

    fn confirm<T: serde::Serialize>(
        &self,
        verb: &str,
        record: &T,
        line: fn(&T) -> String,
    ) -> Result<String, AppError> {
        if self.config.json {
            output::to_json(record)
        } else {
            Ok(format!("{} {}", verb, line(record)))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;
    load_dotenv();

    let config = AppConfig::resolve(&cli)?;
    let buddy = RecipeBuddy::new(&config)?;
    let rendered = buddy.run(&cli.command).await?;
    println!("{}", rendered);

    Ok(())
}
