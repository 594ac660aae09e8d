//! Project versions from `agvtool`.
//!
//! The marketing version is the bundle short version string from
//! `Info.plist`, only shown in the standard About panel. The build version is
//! `CURRENT_PROJECT_VERSION`. When `Info.plist` refers to a build setting,
//! agvtool prints the reference literally (`${CURRENT_PROJECT_VERSION}`), so
//! references are resolved against the environment Xcode passed in.

use crate::env::Environment;
use crate::error::Result;
use crate::runner::{CommandRunner, Invocation};
use crate::settings::Settings;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::path::Path;
use tracing::debug;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{(\w+)\}").expect("placeholder pattern is valid"));

const MARKETING_ARGS: [&str; 2] = ["mvers", "-terse1"];
const BUILD_ARGS: [&str; 2] = ["vers", "-terse"];

/// Replace every `${NAME}` with the value of `NAME`.
///
/// Unset variables resolve to the empty string.
pub fn resolve_placeholders(raw: &str, env: &Environment) -> String {
    PLACEHOLDER
        .replace_all(raw, |caps: &Captures<'_>| {
            env.get(&caps[1]).unwrap_or_default().to_string()
        })
        .into_owned()
}

/// Marketing and build version of the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Versions {
    pub marketing: String,
    pub build: String,
}

impl Versions {
    pub fn new(marketing: impl Into<String>, build: impl Into<String>) -> Self {
        Self {
            marketing: marketing.into(),
            build: build.into(),
        }
    }

    /// Doxygen's project number: `vMV` or `vMV (BV)`.
    ///
    /// The build version is left out when it equals the marketing version.
    pub fn project_number(&self, separator: &str) -> String {
        let mut number = format!("v{}", self.marketing);
        if self.build != self.marketing {
            number.push_str(separator);
            number.push('(');
            number.push_str(&self.build);
            number.push(')');
        }
        number
    }
}

/// Asks the version tool for the project's versions.
///
/// agvtool looks for the `.xcodeproj` in its working directory, so it always
/// runs in the project root.
pub struct VersionResolver<'a> {
    runner: &'a dyn CommandRunner,
    root: &'a Path,
    env: &'a Environment,
    settings: &'a Settings,
}

impl<'a> VersionResolver<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        root: &'a Path,
        env: &'a Environment,
        settings: &'a Settings,
    ) -> Self {
        Self {
            runner,
            root,
            env,
            settings,
        }
    }

    pub async fn marketing_version(&self) -> Result<String> {
        self.query(&MARKETING_ARGS).await
    }

    pub async fn build_version(&self) -> Result<String> {
        self.query(&BUILD_ARGS).await
    }

    pub async fn versions(&self) -> Result<Versions> {
        let marketing = self.marketing_version().await?;
        let build = self.build_version().await?;
        Ok(Versions { marketing, build })
    }

    pub async fn project_number(&self) -> Result<String> {
        Ok(self
            .versions()
            .await?
            .project_number(&self.settings.number_separator))
    }

    async fn query(&self, args: &[&str]) -> Result<String> {
        let program = &self.settings.version_tool;
        let completed = self
            .runner
            .run(
                &Invocation::new(program)
                    .args(args.iter().copied())
                    .current_dir(self.root),
            )
            .await?
            .check(program)?;

        let raw = completed.stdout.strip_suffix('\n').unwrap_or(&completed.stdout);
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        let resolved = resolve_placeholders(raw, self.env);
        debug!(args = ?args, raw, resolved = %resolved, "version");
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PagesError;
    use crate::runner::Completed;
    use async_trait::async_trait;

    struct Agvtool {
        marketing: &'static str,
        build: &'static str,
        code: i32,
    }

    #[async_trait]
    impl CommandRunner for Agvtool {
        async fn run(&self, invocation: &Invocation) -> Result<Completed> {
            assert_eq!(invocation.cwd.as_deref(), Some(Path::new("/projects/App")));
            let stdout = if invocation.args[0] == "mvers" {
                self.marketing
            } else {
                self.build
            };
            Ok(Completed {
                code: Some(self.code),
                stdout: stdout.to_string(),
                stderr: String::new(),
            })
        }
    }

    #[test]
    fn test_project_number_same_versions() {
        assert_eq!(Versions::new("1.2", "1.2").project_number(" "), "v1.2");
    }

    #[test]
    fn test_project_number_different_versions() {
        assert_eq!(Versions::new("1.2", "7").project_number(" "), "v1.2 (7)");
        assert_eq!(
            Versions::new("1.2", "7").project_number("&nbsp;"),
            "v1.2&nbsp;(7)"
        );
    }

    #[test]
    fn test_resolve_placeholder() {
        let env: Environment = [("CURRENT_PROJECT_VERSION", "42")].into_iter().collect();
        assert_eq!(resolve_placeholders("${CURRENT_PROJECT_VERSION}", &env), "42");
        assert_eq!(resolve_placeholders("1.${CURRENT_PROJECT_VERSION}b", &env), "1.42b");
    }

    #[test]
    fn test_resolve_without_placeholder() {
        let env = Environment::default();
        assert_eq!(resolve_placeholders("3.0", &env), "3.0");
        assert_eq!(resolve_placeholders("$HOME {x}", &env), "$HOME {x}");
    }

    #[test]
    fn test_resolve_unset_is_empty() {
        let env = Environment::default();
        assert_eq!(resolve_placeholders("${MISSING}", &env), "");
    }

    #[tokio::test]
    async fn test_resolver_strips_newline_and_resolves() {
        let runner = Agvtool {
            marketing: "1.2\n",
            build: "${CURRENT_PROJECT_VERSION}\n",
            code: 0,
        };
        let env: Environment = [("CURRENT_PROJECT_VERSION", "7")].into_iter().collect();
        let settings = Settings::default();
        let resolver = VersionResolver::new(&runner, Path::new("/projects/App"), &env, &settings);

        assert_eq!(resolver.marketing_version().await.unwrap(), "1.2");
        assert_eq!(resolver.build_version().await.unwrap(), "7");
        assert_eq!(resolver.project_number().await.unwrap(), "v1.2 (7)");
    }

    #[tokio::test]
    async fn test_resolver_surfaces_tool_failure() {
        let runner = Agvtool {
            marketing: "",
            build: "",
            code: 1,
        };
        let env = Environment::default();
        let settings = Settings::default();
        let resolver = VersionResolver::new(&runner, Path::new("/projects/App"), &env, &settings);

        let err = resolver.marketing_version().await.unwrap_err();
        assert!(matches!(err, PagesError::ToolFailed { ref program, .. } if program == "agvtool"));
    }
}
