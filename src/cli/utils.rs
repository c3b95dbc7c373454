//! Shared CLI utilities.

use clap::Command;

/// List the named flags of `cmd` as `(syntax, description)` pairs, in
/// declaration order, with defaults appended to the description.
pub fn flag_descriptions(cmd: &Command) -> Vec<(String, String)> {
    cmd.get_arguments()
        .filter(|arg| !arg.is_positional())
        .map(|arg| {
            let mut syntax = match (arg.get_short(), arg.get_long()) {
                (Some(short), Some(long)) => format!("-{short}, --{long}"),
                (None, Some(long)) => format!("--{long}"),
                (Some(short), None) => format!("-{short}"),
                (None, None) => arg.get_id().to_string(),
            };
            if arg.get_action().takes_values() {
                if let Some(name) = arg.get_value_names().and_then(|names| names.first()) {
                    syntax.push_str(&format!(" <{name}>"));
                }
            }

            let mut description = arg.get_help().map(|help| help.to_string()).unwrap_or_default();
            if let Some(default) = arg.get_default_values().first() {
                description.push_str(&format!(" (default {:?})", default.to_string_lossy()));
            }
            (syntax, description)
        })
        .collect()
}
