use crate::commands::Out;
use crate::{Config, Result};
use anyhow::Context;
use rust_decimal::Decimal;
use std::path::Path;

/// Creates the limits home directory and an initial `config.json` holding the given limits and
/// the default exchange rates.
///
/// # Errors
/// - Returns an error if the config file already exists or any file operation fails.
pub async fn init(
    limits_home: &Path,
    cash_limit: Decimal,
    calories_limit: Decimal,
) -> Result<Out<()>> {
    let config = Config::create(limits_home, cash_limit, calories_limit)
        .await
        .context("Unable to create the limits home directory and config")?;
    Ok(format!("Wrote {}", config.config_path().display()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("home");
        let out = init(&home, Decimal::from(900), Decimal::from(2100))
            .await
            .unwrap();
        assert!(out.message().contains("config.json"));
        assert!(out.structure().is_none());

        let config = Config::load(&home).await.unwrap();
        assert_eq!(config.cash_limit(), Decimal::from(900));
        assert_eq!(config.calories_limit(), Decimal::from(2100));
    }
}
