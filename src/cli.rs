use crate::navigation::Route;
use clap::Parser;

/// A terminal client for the Mind-Bloom mood journal
#[derive(Parser, Debug)]
#[command(name = "mindbloom", version, about, long_about = None)]
pub struct Cli {
    /// Root URL of the Mind-Bloom API (overrides the config file)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Screen to open first: login, register or home
    #[arg(long, value_name = "SCREEN", default_value = "login")]
    pub screen: Route,

    /// UI theme: dark, light or nocolor (overrides the config file)
    #[arg(long)]
    pub theme: Option<String>,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut crate::config::Config) {
        if let Some(url) = &self.api_url {
            config.api_base_url = url.clone();
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["mindbloom"]);
        assert_eq!(cli.screen, Route::Login);
        assert!(cli.api_url.is_none());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "mindbloom",
            "--api-url",
            "https://api.example/api",
            "--screen",
            "home",
            "--theme",
            "light",
        ]);
        assert_eq!(cli.screen, Route::Home);

        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.api_base_url, "https://api.example/api");
        assert_eq!(config.theme, "light");
    }
}
