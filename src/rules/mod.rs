mod md007_ul_indent;
mod md010_no_hard_tabs;
mod md022_blanks_around_headings;
mod md041_first_line_heading;
mod md047_single_trailing_newline;
mod md058_blanks_around_tables;

pub use md007_ul_indent::MD007ULIndent;
pub use md010_no_hard_tabs::MD010NoHardTabs;
pub use md022_blanks_around_headings::MD022BlanksAroundHeadings;
pub use md041_first_line_heading::MD041FirstLineHeading;
pub use md047_single_trailing_newline::MD047SingleTrailingNewline;
pub use md058_blanks_around_tables::MD058BlanksAroundTables;

use crate::rule::Rule;

/// All rules, in reporting order: per file, warnings are grouped by rule in this order.
pub fn all_rules(config: &crate::config::Config) -> Vec<Box<dyn Rule>> {
    macro_rules! rule {
        ($ctor:ident) => {
            $ctor::from_config(config)
        };
    }
    vec![
        rule!(MD041FirstLineHeading),
        rule!(MD010NoHardTabs),
        rule!(MD047SingleTrailingNewline),
        rule!(MD022BlanksAroundHeadings),
        rule!(MD058BlanksAroundTables),
        rule!(MD007ULIndent),
    ]
}

/// Rules left after removing those disabled in config or on the command line
pub fn enabled_rules(config: &crate::config::Config, cli_disable: &[String]) -> Vec<Box<dyn Rule>> {
    all_rules(config)
        .into_iter()
        .filter(|rule| !config.is_rule_disabled(rule.name()))
        .filter(|rule| !cli_disable.iter().any(|d| d.trim().eq_ignore_ascii_case(rule.name())))
        .collect()
}
