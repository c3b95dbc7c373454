//! git-httpd-config: check and print git-httpd configuration

use anyhow::Result;

fn main() -> Result<()> {
    git_httpd_config::cli::run()
}
