//! Configuration record and help prose for the git-httpd proxy

use crate::render::HelpPage;
use serde::{Deserialize, Serialize};

/// Where the proxy looks for its config file when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/git-httpd/git-httpd.yml";

/// Connection settings for the upstream API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    #[serde(rename = "APIHost")]
    pub api_host: String,
    #[serde(rename = "AuthToken")]
    pub auth_token: String,
    #[serde(rename = "Insecure")]
    pub insecure: bool,
}

/// Top-level git-httpd configuration.
///
/// Field order matches the order keys are written in the example file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GitHttpdConfig {
    pub client: ClientConfig,
    pub git_command: String,
    pub listen: String,
    pub repo_root: String,
}

impl Default for GitHttpdConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            git_command: "/usr/bin/git".to_string(),
            listen: ":80".to_string(),
            repo_root: "/var/lib/git".to_string(),
        }
    }
}

/// Defaults plus a placeholder API host, for the example in the usage text.
pub fn example_config() -> GitHttpdConfig {
    let mut config = GitHttpdConfig::default();
    config.client.api_host = "zzzzz.example.com:443".to_string();
    config
}

const DESCRIPTION: &str = "\
git-httpd provides authenticated access to git repositories hosted
behind an API server.";

const INVOCATION: &str = "git-httpd-config [--config path/to/git-httpd.yml]";

const GLOSSARY: &[(&str, &str)] = &[
    ("Client.APIHost", "Address (or address:port) of the API endpoint."),
    ("Client.AuthToken", "Unused. Normally empty, or omitted entirely."),
    (
        "Client.Insecure",
        "True if your API endpoint uses an unverifiable SSL/TLS\ncertificate.",
    ),
    (
        "GitCommand",
        "Path to git or gitolite-shell executable. Each authenticated\n\
         request will execute this program with the single argument\n\
         \"http-backend\".",
    ),
    (
        "Listen",
        "Local port to listen on. Can be \"address:port\" or \":port\", where\n\
         \"address\" is a host IP address or name and \"port\" is a port number\n\
         or name.",
    ),
    ("RepoRoot", "Path to git repositories."),
];

/// Static usage prose for git-httpd.
pub fn help_page() -> HelpPage {
    HelpPage {
        description: DESCRIPTION,
        install: "the git-httpd installation guide",
        invocation: INVOCATION,
        glossary: GLOSSARY,
    }
}
