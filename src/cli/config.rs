//! Config CLI command
//!
//! Shows the resolved paths and settings, and persists changes to them.

use clap::Args;

use crate::config::{GastosPaths, Settings};
use crate::error::GastosResult;
use crate::models::Category;

/// Optional settings changes; with none given the configuration is shown
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Currency symbol used when displaying amounts
    #[arg(long)]
    pub currency: Option<String>,

    /// Category used when `add` gets no --category
    #[arg(long)]
    pub default_category: Option<Category>,

    /// strftime format for dates in listings
    #[arg(long)]
    pub date_format: Option<String>,

    /// tracing filter used when RUST_LOG is unset
    #[arg(long)]
    pub log_filter: Option<String>,
}

impl ConfigArgs {
    fn has_changes(&self) -> bool {
        self.currency.is_some()
            || self.default_category.is_some()
            || self.date_format.is_some()
            || self.log_filter.is_some()
    }

    fn apply_to(self, settings: &mut Settings) {
        if let Some(currency) = self.currency {
            settings.currency_symbol = currency;
        }
        if let Some(category) = self.default_category {
            settings.default_category = category;
        }
        if let Some(format) = self.date_format {
            settings.date_format = format;
        }
        if let Some(filter) = self.log_filter {
            settings.log_filter = filter;
        }
    }
}

/// Show the configuration, or update and save it when options are given
pub fn handle_config(
    paths: &GastosPaths,
    settings: &mut Settings,
    args: ConfigArgs,
) -> GastosResult<()> {
    if args.has_changes() {
        args.apply_to(settings);
        settings.save(paths)?;
        println!("Settings saved to: {}", paths.settings_file().display());
        println!();
    }

    println!("gastos Configuration");
    println!("====================");
    println!("Base directory:    {}", paths.base_dir().display());
    println!("Data directory:    {}", paths.data_dir().display());
    println!("Exports directory: {}", paths.exports_dir().display());
    println!("Settings file:     {}", paths.settings_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:  {}", settings.currency_symbol);
    println!("  Default category: {}", settings.default_category);
    println!("  Date format:      {}", settings.date_format);
    println!("  Log filter:       {}", settings.log_filter);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_changes_are_saved() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GastosPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        let args = ConfigArgs {
            currency: Some("ARS".into()),
            default_category: Some(Category::Ocio),
            ..Default::default()
        };
        handle_config(&paths, &mut settings, args).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "ARS");
        assert_eq!(loaded.default_category, Category::Ocio);
        assert_eq!(loaded.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_config_without_changes_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GastosPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        handle_config(&paths, &mut settings, ConfigArgs::default()).unwrap();
        assert!(!paths.settings_file().exists());
    }
}
