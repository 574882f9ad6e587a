//! CLI argument parsing module for dview

use crate::domain::DependencyGroup;
use crate::filter::ReportFilter;
use crate::registry::DEFAULT_NPM_PROGRAM;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Report output type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputType {
    /// One boxed table per dependency group
    #[default]
    Table,
    /// A single JSON document
    Json,
}

/// Compare declared, installed and published versions of package.json dependencies
#[derive(Parser, Debug, Clone)]
#[command(name = "dview", version, disable_version_flag = true)]
pub struct CliArgs {
    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub print_version: Option<bool>,

    // Group selection
    /// Show regular dependencies
    #[arg(long)]
    pub dep: bool,

    /// Show development dependencies
    #[arg(long)]
    pub dev: bool,

    /// Show peer dependencies
    #[arg(long)]
    pub peer: bool,

    /// Show only regular dependencies
    #[arg(long, conflicts_with = "dev_only")]
    pub dep_only: bool,

    /// Show only development dependencies
    #[arg(long)]
    pub dev_only: bool,

    // Report options
    /// Update the package.json file with remote version numbers
    #[arg(long)]
    pub update: bool,

    /// Hide the local version column
    #[arg(long = "hideLocal", visible_alias = "hide-local")]
    pub hide_local: bool,

    /// Exclude dependencies that are already current
    #[arg(long = "excludeCurrent", visible_alias = "exclude-current")]
    pub exclude_current: bool,

    // Output options
    /// Specify the output type
    #[arg(long, value_enum, ignore_case = true, default_value_t = OutputType::Table)]
    pub output: OutputType,

    /// Write the report to this file instead of stdout
    #[arg(long = "outputFile", visible_alias = "output-file", value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// The location of the package.json file
    #[arg(long, value_name = "FILE", default_value = "package.json")]
    pub file: PathBuf,

    // Environment
    /// Registry CLI used to look up published versions
    #[arg(long, env = "DVIEW_NPM", default_value = DEFAULT_NPM_PROGRAM)]
    pub npm: String,

    /// Enable verbose logging on stderr
    #[arg(long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Check if any group selection flag is specified
    pub fn has_group_filter(&self) -> bool {
        self.dep || self.dev || self.peer || self.dep_only || self.dev_only
    }

    /// Check if a specific group should be shown
    pub fn should_process_group(&self, group: DependencyGroup) -> bool {
        if self.dep_only {
            return group == DependencyGroup::Regular;
        }
        if self.dev_only {
            return group == DependencyGroup::Dev;
        }
        if !self.has_group_filter() {
            return true;
        }
        match group {
            DependencyGroup::Regular => self.dep,
            DependencyGroup::Dev => self.dev,
            DependencyGroup::Peer => self.peer,
        }
    }

    /// Groups to process, in processing order
    pub fn selected_groups(&self) -> Vec<DependencyGroup> {
        DependencyGroup::all()
            .iter()
            .copied()
            .filter(|g| self.should_process_group(*g))
            .collect()
    }

    /// Build the report filter from the display options
    pub fn report_filter(&self) -> ReportFilter {
        ReportFilter::new()
            .with_hide_local(self.hide_local)
            .with_exclude_current(self.exclude_current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(["dview"]);
        assert!(!args.dep);
        assert!(!args.dev);
        assert!(!args.peer);
        assert!(!args.dep_only);
        assert!(!args.dev_only);
        assert!(!args.update);
        assert!(!args.hide_local);
        assert!(!args.exclude_current);
        assert_eq!(args.output, OutputType::Table);
        assert!(args.output_file.is_none());
        assert_eq!(args.file, PathBuf::from("package.json"));
        assert!(!args.verbose);
    }

    #[test]
    fn test_all_groups_by_default() {
        let args = CliArgs::parse_from(["dview"]);
        assert!(!args.has_group_filter());
        assert_eq!(
            args.selected_groups(),
            vec![
                DependencyGroup::Regular,
                DependencyGroup::Dev,
                DependencyGroup::Peer
            ]
        );
    }

    #[test]
    fn test_group_flags_combine() {
        let args = CliArgs::parse_from(["dview", "--dep", "--peer"]);
        assert_eq!(
            args.selected_groups(),
            vec![DependencyGroup::Regular, DependencyGroup::Peer]
        );

        let args = CliArgs::parse_from(["dview", "--dev"]);
        assert_eq!(args.selected_groups(), vec![DependencyGroup::Dev]);
    }

    #[test]
    fn test_only_flags() {
        let args = CliArgs::parse_from(["dview", "--dep-only", "--peer"]);
        assert_eq!(args.selected_groups(), vec![DependencyGroup::Regular]);

        let args = CliArgs::parse_from(["dview", "--dev-only"]);
        assert_eq!(args.selected_groups(), vec![DependencyGroup::Dev]);
    }

    #[test]
    fn test_only_flags_conflict() {
        let result = CliArgs::try_parse_from(["dview", "--dep-only", "--dev-only"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_camel_case_flags_and_aliases() {
        let args = CliArgs::parse_from(["dview", "--hideLocal", "--excludeCurrent"]);
        assert!(args.hide_local);
        assert!(args.exclude_current);

        let args = CliArgs::parse_from(["dview", "--hide-local", "--exclude-current"]);
        assert!(args.hide_local);
        assert!(args.exclude_current);
    }

    #[test]
    fn test_output_type() {
        let args = CliArgs::parse_from(["dview", "--output", "json"]);
        assert_eq!(args.output, OutputType::Json);

        let args = CliArgs::parse_from(["dview", "--output", "JSON"]);
        assert_eq!(args.output, OutputType::Json);

        let result = CliArgs::try_parse_from(["dview", "--output", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_file() {
        let args = CliArgs::parse_from(["dview", "--outputFile", "report.txt"]);
        assert_eq!(args.output_file, Some(PathBuf::from("report.txt")));

        let args = CliArgs::parse_from(["dview", "--output-file", "report.json"]);
        assert_eq!(args.output_file, Some(PathBuf::from("report.json")));
    }

    #[test]
    fn test_file_requires_value() {
        let result = CliArgs::try_parse_from(["dview", "--file"]);
        assert!(result.is_err());

        let args = CliArgs::parse_from(["dview", "--file", "/work/app/package.json"]);
        assert_eq!(args.file, PathBuf::from("/work/app/package.json"));
    }

    #[test]
    fn test_npm_program_flag() {
        let args = CliArgs::parse_from(["dview", "--npm", "/usr/local/bin/npm"]);
        assert_eq!(args.npm, "/usr/local/bin/npm");
    }

    #[test]
    fn test_version_flag() {
        let err = CliArgs::try_parse_from(["dview", "-v"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_report_filter() {
        let args = CliArgs::parse_from(["dview", "--hideLocal", "--excludeCurrent"]);
        let filter = args.report_filter();
        assert!(filter.hide_local);
        assert!(filter.exclude_current);
    }
}
