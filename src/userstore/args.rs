use clap::Parser;
use std::ffi::OsString;
use userstore::config::Arguments;

/// Long flags that also accept the single-dash spelling (`-fileName users.json`).
const VALUE_FLAGS: &[&str] = &["operation", "id", "item", "fileName"];

/// Rewrite single-dash value flags to their double-dash form so clap can parse
/// them. Tokens that are the value of a preceding flag are left alone.
pub fn normalize_single_dash_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut normalized = Vec::new();
    let mut expect_value = false;

    for arg in args {
        if expect_value {
            expect_value = false;
            normalized.push(arg);
            continue;
        }

        let rewritten = arg.to_str().and_then(double_dash);
        let arg = match rewritten {
            Some(rewritten) => OsString::from(rewritten),
            None => arg,
        };
        if let Some(name) = arg.to_str().and_then(|s| s.strip_prefix("--")) {
            expect_value = VALUE_FLAGS.contains(&name);
        }
        normalized.push(arg);
    }

    normalized
}

fn double_dash(arg: &str) -> Option<String> {
    let rest = arg.strip_prefix('-')?;
    if rest.starts_with('-') {
        return None;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    VALUE_FLAGS.contains(&name).then(|| format!("-{}", arg))
}

#[derive(Parser, Debug)]
#[command(name = "userstore", version)]
#[command(about = "Add, list, find and remove user records kept in a JSON file", long_about = None)]
pub struct Cli {
    /// Name of the operation (add, list, findById, remove)
    #[arg(long)]
    pub operation: Option<String>,

    /// Id of the user to find or remove
    #[arg(long)]
    pub id: Option<String>,

    /// User payload for add, as a JSON object
    #[arg(long)]
    pub item: Option<String>,

    /// JSON file holding the users
    #[arg(long = "fileName", value_name = "FILE")]
    pub file_name: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn arguments(&self) -> Arguments {
        Arguments {
            operation: self.operation.clone(),
            id: self.id.clone(),
            item: self.item.clone(),
            file_name: self.file_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "userstore",
            "--operation",
            "add",
            "--item",
            r#"{"id":"1"}"#,
            "--fileName",
            "users.json",
        ])
        .unwrap();
        let args = cli.arguments();
        assert_eq!(args.operation.as_deref(), Some("add"));
        assert_eq!(args.item(), r#"{"id":"1"}"#);
        assert_eq!(args.file_name.as_deref(), Some("users.json"));
        assert!(!cli.verbose);
    }

    #[test]
    fn flags_are_optional_at_parse_time() {
        let cli = Cli::try_parse_from(["userstore"]).unwrap();
        assert_eq!(cli.arguments(), Arguments::default());
    }

    fn normalize(args: &[&str]) -> Vec<String> {
        normalize_single_dash_flags(args.iter().map(OsString::from))
            .into_iter()
            .map(|a| a.into_string().unwrap())
            .collect()
    }

    #[test]
    fn rewrites_single_dash_flags() {
        let args = normalize(&["userstore", "-operation", "list", "-fileName=users.json"]);
        assert_eq!(
            args,
            vec!["userstore", "--operation", "list", "--fileName=users.json"]
        );
    }

    #[test]
    fn leaves_flag_values_alone() {
        let args = normalize(&["userstore", "-id", "-item", "--item", "-id"]);
        assert_eq!(args, vec!["userstore", "--id", "-item", "--item", "-id"]);
    }

    #[test]
    fn leaves_short_and_unknown_flags_alone() {
        let args = normalize(&["userstore", "-v", "-x", "--verbose"]);
        assert_eq!(args, vec!["userstore", "-v", "-x", "--verbose"]);
    }

    #[test]
    fn single_dash_flags_parse() {
        let raw = ["userstore", "-operation", "findById", "-id", "3", "-fileName", "u.json"];
        let cli = Cli::try_parse_from(normalize_single_dash_flags(raw.iter().map(OsString::from)))
            .unwrap();
        let args = cli.arguments();
        assert_eq!(args.operation_name().unwrap(), "findById");
        assert_eq!(args.id(), "3");
        assert_eq!(args.file_name.as_deref(), Some("u.json"));
    }

    #[test]
    fn accepts_equals_syntax() {
        let cli = Cli::try_parse_from(["userstore", "--operation=findById", "--id=7", "-v"])
            .unwrap();
        assert_eq!(cli.arguments().id(), "7");
        assert!(cli.verbose);
    }
}
