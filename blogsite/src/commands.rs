use serde::Serialize;
use siteconf::{
    CATEGORY_ICONS, USER_INFORMATIONS, icons::CategoryIconTable, identity::SiteIdentity,
};

use crate::{
    config::{Args, Command, OutputFormat},
    error::CliError,
};

/// Both statics under the keys the front-end imports them by
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SiteExport<'a> {
    user_informations: &'a SiteIdentity,
    category_icons: &'a CategoryIconTable,
}

/// Execute the parsed command and return the text to print
pub fn run(args: &Args) -> Result<String, CliError> {
    log::debug!("Running {:?} as {:?}", args.command, args.format);
    match &args.command {
        Command::Identity => render(&USER_INFORMATIONS, args.format),
        Command::Icons => render(&CATEGORY_ICONS, args.format),
        Command::Export => render(
            &SiteExport {
                user_informations: &USER_INFORMATIONS,
                category_icons: &CATEGORY_ICONS,
            },
            args.format,
        ),
        Command::Icon { category, fallback } => icon_command(category, fallback.as_deref()),
    }
}

fn icon_command(category: &str, fallback: Option<&str>) -> Result<String, CliError> {
    if let Some(fallback) = fallback {
        return Ok(CATEGORY_ICONS.get_or(category, fallback).to_string());
    }
    CATEGORY_ICONS
        .get(category)
        .map(str::to_string)
        .ok_or_else(|| CliError::UnknownCategory {
            category: category.to_string(),
            known: CATEGORY_ICONS.keys().collect::<Vec<_>>().join(", "),
        })
}

fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String, CliError> {
    let output = match format {
        // serde_yaml terminates documents with a newline, println adds its own
        OutputFormat::Yaml => serde_yaml::to_string(value)?.trim_end().to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
    };
    Ok(output)
}
